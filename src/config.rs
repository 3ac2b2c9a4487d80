//! Server configuration.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! a `.env` file, then process environment variables.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::shared::errors::{AppError, Result};

pub const DEFAULT_THERAPY_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub therapy_api_url: String,
    pub hcaptcha_site_key: String,
    /// Base URL OAuth providers redirect back to
    pub public_site_url: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            therapy_api_url: DEFAULT_THERAPY_API_URL.to_string(),
            hcaptcha_site_key: String::new(),
            public_site_url: "http://localhost:8080".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Subset of the configuration that is safe to hand to the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PublicConfig {
    pub supabase_url: String,
    pub hcaptcha_site_key: String,
    pub public_site_url: String,
}

impl AppConfig {
    /// Load from every source, using `config_path` or the default file location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = config_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("UNIMIND_CONFIG").map(PathBuf::from))
            .or_else(default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Override fields from environment lookups; `VITE_` names are accepted too
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| {
            lookup(name)
                .or_else(|| lookup(&format!("VITE_{}", name)))
                .filter(|v| !v.trim().is_empty())
        };

        if let Some(v) = get("SUPABASE_URL") {
            self.supabase_url = v;
        }
        if let Some(v) = get("SUPABASE_ANON_KEY") {
            self.supabase_anon_key = v;
        }
        if let Some(v) = get("THERAPY_API_URL") {
            self.therapy_api_url = v;
        }
        if let Some(v) = get("HCAPTCHA_SITE_KEY") {
            self.hcaptcha_site_key = v;
        }
        if let Some(v) = get("PUBLIC_SITE_URL") {
            self.public_site_url = v;
        }
        if let Some(secs) = get("REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = secs;
        }

        self.supabase_url = self.supabase_url.trim_end_matches('/').to_string();
        self.therapy_api_url = self.therapy_api_url.trim_end_matches('/').to_string();
        self.public_site_url = self.public_site_url.trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.supabase_url.is_empty() {
            return Err(AppError::Config("SUPABASE_URL is not set".to_string()));
        }
        if self.supabase_anon_key.is_empty() {
            return Err(AppError::Config("SUPABASE_ANON_KEY is not set".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("REQUEST_TIMEOUT_SECS must be positive".to_string()));
        }
        Ok(())
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            supabase_url: self.supabase_url.clone(),
            hcaptcha_site_key: self.hcaptcha_site_key.clone(),
            public_site_url: self.public_site_url.clone(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("unimind").join("config.toml"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.therapy_api_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            supabase_url = "https://abc.supabase.co"
            supabase_anon_key = "anon"
            "#,
        )
        .unwrap();
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        assert_eq!(config.therapy_api_url, DEFAULT_THERAPY_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_file_and_accepts_vite_prefix() {
        let mut config = AppConfig::from_toml(r#"supabase_url = "https://file.supabase.co""#).unwrap();
        let env = make_env(&[
            ("VITE_SUPABASE_URL", "https://env.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("THERAPY_API_URL", "http://therapy:9000/"),
            ("REQUEST_TIMEOUT_SECS", "12"),
        ]);
        config.apply_env(|k| env.get(k).cloned());
        assert_eq!(config.supabase_url, "https://env.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(config.therapy_api_url, "http://therapy:9000");
        assert_eq!(config.request_timeout_secs, 12);
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        let env = make_env(&[("THERAPY_API_URL", "  ")]);
        config.apply_env(|k| env.get(k).cloned());
        assert_eq!(config.therapy_api_url, DEFAULT_THERAPY_API_URL);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("supabase_url = [").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_public_config_hides_keys() {
        let mut config = AppConfig::default();
        config.supabase_anon_key = "secret".into();
        config.hcaptcha_site_key = "site".into();
        let public = config.public();
        assert_eq!(public.hcaptcha_site_key, "site");
        assert!(!format!("{:?}", public).contains("secret"));
    }
}
