//! Configuration structures.
//!
//! Configuration is loaded from a JSON config file and environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Result;

/// Environment override for the display namespace.
pub const ENV_NAMESPACE: &str = "TOOL_CATALOG_NAMESPACE";

/// Environment override for the default log level.
pub const ENV_LOG_LEVEL: &str = "TOOL_CATALOG_LOG_LEVEL";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Catalog source configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from a JSON file. Missing sections take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment variable overrides in place.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_NAMESPACE).ok(),
            std::env::var(ENV_LOG_LEVEL).ok(),
        );
    }

    fn apply_overrides(&mut self, namespace: Option<String>, log_level: Option<String>) {
        if let Some(ns) = namespace.filter(|v| !v.trim().is_empty()) {
            self.catalog.namespace = ns;
        }
        if let Some(level) = log_level.filter(|v| !v.trim().is_empty()) {
            self.observability.log_level = level;
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Server/namespace identifier used only for display references.
    pub namespace: String,

    /// Optional JSON catalog definition replacing the built-in registry.
    pub definition: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            namespace: "databricks-mcp".to_string(),
            definition: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.namespace, "databricks-mcp");
        assert!(config.catalog.definition.is_none());
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"catalog": {{"namespace": "staging"}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.catalog.namespace, "staging");
        assert_eq!(config.observability, ObservabilityConfig::default());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/tool-catalog.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".to_string()), Some("debug".to_string()));
        assert_eq!(config.catalog.namespace, "databricks-mcp");
        assert_eq!(config.observability.log_level, "debug");

        config.apply_overrides(Some("prod".to_string()), None);
        assert_eq!(config.catalog.namespace, "prod");
        assert_eq!(config.observability.log_level, "debug");
    }
}
