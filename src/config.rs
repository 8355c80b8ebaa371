// src/config.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, time::Duration};
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.data.gov.in/resource";
/// Daily mandi prices dataset.
pub const DEFAULT_RESOURCE_ID: &str = "9ef84268-d588-465a-a308-a864a43d0070";

pub const ENV_API_KEY: &str = "MANDIPRICE_API_KEY";
pub const ENV_RESOURCE_ID: &str = "MANDIPRICE_RESOURCE_ID";
pub const ENV_API_BASE: &str = "MANDIPRICE_API_BASE";

/// Settings for talking to the open-data market API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub resource_id: String,
    pub api_key: String,
    /// Records requested per price fetch.
    pub price_limit: u32,
    /// Records requested when collecting the district list.
    pub district_limit: u32,
    pub max_retries: usize,
    pub retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            resource_id: DEFAULT_RESOURCE_ID.to_string(),
            api_key: String::new(),
            price_limit: 100,
            district_limit: 1000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Config {
    /// Defaults, then the optional YAML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        cfg.apply_overrides(|k| env::var(k).ok());
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(cfg)
    }

    /// Overwrite fields from a key lookup (the process environment in practice).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        if let Some(v) = non_empty(ENV_API_KEY) {
            self.api_key = v;
        }
        if let Some(v) = non_empty(ENV_RESOURCE_ID) {
            self.resource_id = v;
        }
        if let Some(v) = non_empty(ENV_API_BASE) {
            self.api_base = v;
        }
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.resource_id.trim().is_empty() {
            bail!("missing dataset resource id");
        }
        if self.api_key.trim().is_empty() {
            bail!("missing API key (set {} or api_key in the config file)", ENV_API_KEY);
        }
        if self.max_retries == 0 {
            bail!("max_retries must be at least 1");
        }
        Ok(())
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "api_key: abc123\nprice_limit: 25").unwrap();

        let cfg = Config::from_yaml_file(f.path()).unwrap();
        assert_eq!(cfg.api_key, "abc123");
        assert_eq!(cfg.price_limit, 25);
        assert_eq!(cfg.resource_id, DEFAULT_RESOURCE_ID);
        assert_eq!(cfg.district_limit, 1000);
        cfg.validate().unwrap();
    }

    #[test]
    fn overrides_beat_file_values() {
        let mut cfg = Config {
            api_key: "from-file".into(),
            ..Config::default()
        };
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, "from-env"),
            (ENV_RESOURCE_ID, "  "),
            (ENV_API_BASE, "http://localhost:9000/resource"),
        ]
        .into_iter()
        .collect();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.api_key, "from-env");
        assert_eq!(cfg.resource_id, DEFAULT_RESOURCE_ID);
        assert_eq!(cfg.api_base, "http://localhost:9000/resource");
    }

    #[test]
    fn validate_rejects_blank_ids() {
        let cfg = Config {
            api_key: "k".into(),
            resource_id: " ".into(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("resource id"));

        assert!(Config::default().validate().is_err());
    }

    #[test]
    fn bad_yaml_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "price_limit: [not, a, number]").unwrap();
        assert!(Config::from_yaml_file(f.path()).is_err());
    }
}
