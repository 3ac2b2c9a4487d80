//! Command-line arguments for the server binaries

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "unimind")]
#[command(about = "Unimind mental-wellbeing web app server")]
pub struct ServerArgs {
    /// TOML configuration file
    #[arg(short, long, env = "UNIMIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port for the standalone API server
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_config_path() {
        let args = ServerArgs::parse_from(["unimind", "--config", "/etc/unimind.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/unimind.toml")));
    }

    #[test]
    fn test_port_flag() {
        let args = ServerArgs::parse_from(["unimind", "-p", "4000"]);
        assert_eq!(args.port, 4000);
    }
}
