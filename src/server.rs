//! Startup shared by the fullstack server and the standalone API server

use std::time::Duration;

use anyhow::Context;

use crate::cli::ServerArgs;
use crate::config::AppConfig;
use crate::handlers::TherapyProxyState;
use crate::infrastructure::therapy::HttpTherapyClient;
use crate::server_fns::context;
use crate::shared::logging::log_config_loaded;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

/// Print the full backtrace on panic
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));
}

/// Load configuration, install the server-function context and build the
/// therapy proxy state
pub fn bootstrap(args: &ServerArgs) -> anyhow::Result<TherapyProxyState> {
    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    log_config_loaded(&config.supabase_url, &config.therapy_api_url);

    let therapy = HttpTherapyClient::new(
        &config.therapy_api_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to build therapy client")?;

    context::init(config).context("Failed to initialise Supabase client")?;
    Ok(TherapyProxyState::new(therapy))
}
