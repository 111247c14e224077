//! Collector configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Base URL of the configuration API serving test runs and suites.
    pub api_url: String,
    /// Timeout for configuration API requests, in seconds.
    pub timeout_secs: u64,
    /// JSON file holding recorded transactions in capture order.
    pub transactions_path: PathBuf,
    /// Directory holding one JSON document per persisted test run.
    pub runs_dir: PathBuf,
    /// Persist matched runs.
    pub persist: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/dstestapi".to_string(),
            timeout_secs: 30,
            transactions_path: PathBuf::from("transactions.json"),
            runs_dir: PathBuf::from("testruns"),
            persist: true,
        }
    }
}

impl CollectorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: CollectorConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than 0");
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            anyhow::bail!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            );
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
