//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "comanda=info,warn";
pub const LOG_FILE_NAME: &str = "comanda.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (daily files `comanda.log.YYYY-MM-DD`)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "comanda=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `COMANDA_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter (default `comanda=info,warn`)
    /// - `COMANDA_LOG_STDERR`: `0` turns the stderr copy off
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_dir: non_empty("COMANDA_LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: non_empty("COMANDA_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs/comanda.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = [
            ("COMANDA_LOG_DIR", "/var/log/comanda"),
            ("RUST_LOG", "comanda=debug"),
            ("COMANDA_LOG_STDERR", "0"),
        ]
        .into_iter()
        .collect();

        let config = DebugConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_dir, PathBuf::from("/var/log/comanda"));
        assert!(config.is_debug_enabled());
        assert!(!config.log_to_stderr);
    }
}
