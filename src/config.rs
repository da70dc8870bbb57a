// src/config.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::services::gemini::DEFAULT_API_BASE;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: Option<String>,
    pub static_dir: PathBuf,
    pub api_base: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("static_dir", &self.static_dir)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            api_key: lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()),
            static_dir: lookup("STATIC_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            api_base: lookup("GEMINI_API_BASE")
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, 3000);
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.static_dir, PathBuf::from("."));
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn reads_port_and_key() {
        let cfg = config(&[("PORT", "8080"), ("GEMINI_API_KEY", "abc")]).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_key_counts_as_unset() {
        let cfg = config(&[("GEMINI_API_KEY", "")]).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn bad_port_is_rejected() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort(p)) if p == "eighty"
        ));
    }

    #[test]
    fn debug_hides_key() {
        let cfg = config(&[("GEMINI_API_KEY", "top-secret")]).unwrap();
        assert!(!format!("{cfg:?}").contains("top-secret"));
    }
}
