//! Dashboard configuration shared by the server, the CLI and the front-end.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExpboardError, Result};
use crate::urls::{ApiRoutes, AppRoutes};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path prefix every dashboard page lives under (default: "/app")
    pub app_prefix: String,
    /// Base URL of the tracking API (default: "/api/v1")
    pub api_url: String,
    /// Polling interval for live panels such as logs, in seconds (default: 5)
    pub refresh_interval_secs: u64,
    /// Tracking CLI named in the Instructions tab (default: "polyaxon")
    pub cli_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_prefix: "/app".to_string(),
            api_url: "/api/v1".to_string(),
            refresh_interval_secs: 5,
            cli_name: "polyaxon".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from a YAML or JSON file (JSON is valid YAML).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.app_prefix.starts_with('/') {
            return Err(ExpboardError::Config(format!(
                "app_prefix must start with '/', got '{}'",
                self.app_prefix
            )));
        }
        if self.app_prefix.len() > 1 && self.app_prefix.ends_with('/') {
            return Err(ExpboardError::Config(format!(
                "app_prefix must not end with '/', got '{}'",
                self.app_prefix
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(ExpboardError::Config(
                "refresh_interval_secs must be at least 1".to_string(),
            ));
        }
        if self.api_url.is_empty() {
            return Err(ExpboardError::Config("api_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn app_routes(&self) -> AppRoutes {
        AppRoutes::new(self.app_prefix.as_str())
    }

    pub fn api_routes(&self) -> ApiRoutes {
        ApiRoutes::new(self.api_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = DashboardConfig::from_yaml_str("api_url: http://tracker:8000/api/v1\n").unwrap();
        assert_eq!(config.api_url, "http://tracker:8000/api/v1");
        assert_eq!(config.app_prefix, "/app");
        assert_eq!(config.refresh_interval_secs, 5);
    }

    #[test]
    fn test_load_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dashboard.json");
        std::fs::write(&path, r#"{"app_prefix": "/ui", "refresh_interval_secs": 2}"#).unwrap();
        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.app_routes().user_url("alice"), "/ui/alice");
        assert_eq!(config.refresh_interval_secs, 2);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        assert!(DashboardConfig::from_yaml_str("app_prefix: app\n").is_err());
        assert!(DashboardConfig::from_yaml_str("app_prefix: /app/\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = DashboardConfig::load(&tmp.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ExpboardError::Io(_)));
    }
}
