//! # Client Configuration
//!
//! Endpoint and filesystem settings, read from environment variables after
//! `dotenvy` has loaded an optional `.env` file.
//!
//! | Variable                    | Default                          |
//! |-----------------------------|----------------------------------|
//! | `COMANDA_GRAPHQL_URL`       | `http://localhost:3000/graphql`  |
//! | `COMANDA_REST_BASE`         | derived from the GraphQL URL     |
//! | `COMANDA_DATA_DIR`          | `./.comanda`                     |
//! | `COMANDA_DOCUMENTS_DIR`     | `<data dir>/documentos`          |
//! | `COMANDA_FONTS_DIR`         | unset (PDF export disabled)      |
//! | `COMANDA_HTTP_TIMEOUT_SECS` | `10`                             |

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:3000/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// GraphQL root, e.g. `http://host:3000/graphql`
    pub graphql_url: String,
    /// Explicit REST base; wins over the derived one
    pub rest_base_override: Option<String>,
    /// Directory holding `storage.json`
    pub data_dir: PathBuf,
    /// Target directory for exported invoices
    pub documents_dir: PathBuf,
    /// TTF family directory (`LiberationSans-*.ttf`) for PDF rendering
    pub fonts_dir: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from(".comanda");
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            rest_base_override: None,
            documents_dir: data_dir.join("documentos"),
            data_dir,
            fonts_dir: None,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_dir = get("COMANDA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".comanda"));

        let http_timeout = match get("COMANDA_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!("COMANDA_HTTP_TIMEOUT_SECS no es un número: {}", raw))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            graphql_url: get("COMANDA_GRAPHQL_URL").unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            rest_base_override: get("COMANDA_REST_BASE"),
            documents_dir: get("COMANDA_DOCUMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("documentos")),
            data_dir,
            fonts_dir: get("COMANDA_FONTS_DIR").map(PathBuf::from),
            http_timeout,
        };

        config.validate()?;
        Ok(config)
    }

    /// Base URL for the REST endpoints.
    pub fn rest_base(&self) -> String {
        match &self.rest_base_override {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => derive_rest_base(&self.graphql_url),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.graphql_url.trim().is_empty() {
            return Err(AppError::Config("La URL de GraphQL está vacía".to_string()));
        }
        if self.http_timeout.is_zero() {
            return Err(AppError::Config("El timeout HTTP debe ser mayor que cero".to_string()));
        }
        Ok(())
    }
}

/// REST base from a GraphQL URL: a trailing `/graphql` (or `/graphql/`) becomes
/// `/api`; anything else gets `/api` appended after one trailing slash is dropped.
pub fn derive_rest_base(graphql_url: &str) -> String {
    let url = graphql_url.trim();
    let without_slash = url.strip_suffix('/').unwrap_or(url);

    match without_slash.strip_suffix("/graphql") {
        Some(root) => format!("{}/api", root),
        None => format!("{}/api", without_slash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_rest_base_derivation() {
        assert_eq!(derive_rest_base("http://localhost:3000/graphql"), "http://localhost:3000/api");
        assert_eq!(derive_rest_base("http://localhost:3000/graphql/"), "http://localhost:3000/api");
        assert_eq!(derive_rest_base("http://localhost:3000"), "http://localhost:3000/api");
        assert_eq!(derive_rest_base("http://localhost:3000/"), "http://localhost:3000/api");
        assert_eq!(derive_rest_base("https://api.example.com/v2"), "https://api.example.com/v2/api");
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.rest_base(), "http://localhost:3000/api");
        assert_eq!(config.documents_dir, PathBuf::from(".comanda").join("documentos"));
    }

    #[test]
    fn test_explicit_rest_base_wins() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("COMANDA_GRAPHQL_URL", "http://10.0.0.5:4000/graphql"),
            ("COMANDA_REST_BASE", "http://10.0.0.5:4001/rest/"),
        ]))
        .expect("valid config");

        assert_eq!(config.rest_base(), "http://10.0.0.5:4001/rest");
    }

    #[test]
    fn test_documents_dir_follows_data_dir() {
        let config = ClientConfig::from_lookup(lookup(&[("COMANDA_DATA_DIR", "/tmp/comanda")]))
            .expect("valid config");

        assert_eq!(config.documents_dir, PathBuf::from("/tmp/comanda/documentos"));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let not_a_number = ClientConfig::from_lookup(lookup(&[("COMANDA_HTTP_TIMEOUT_SECS", "ten")]));
        assert!(matches!(not_a_number, Err(AppError::Config(_))));

        let zero = ClientConfig::from_lookup(lookup(&[("COMANDA_HTTP_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero, Err(AppError::Config(_))));
    }
}
