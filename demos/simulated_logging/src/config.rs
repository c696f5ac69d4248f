use crate::errors::DemoError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use templog::types::Reading;

/// Settings for the demo run, read from a TOML file.
///
/// Every field is optional in the file; missing fields take the default value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Readings replayed one by one with periodic reports.
    pub readings: Vec<i64>,
    /// Number of random readings fed in the throughput run.
    pub random_readings: usize,
    /// Seed for the random feed, so runs are reproducible.
    pub seed: u64,
    /// Report after every `report_every` replayed readings.
    pub report_every: usize,
    /// Window lengths to report on.
    pub windows: Vec<usize>,
    /// Query the logger after every `query_every` random readings.
    pub query_every: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            readings: vec![3, -1, 5, 2, -4, 8, 0, 6, -2, 7, 1, -3, 9, 4, -1],
            random_readings: 10_000,
            seed: 42,
            report_every: 5,
            windows: vec![5, 10],
            query_every: 1_000,
        }
    }
}

impl DemoConfig {
    /// Loads the config from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        let config = match path {
            Some(path) => {
                let content =
                    fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
                        path: path.to_path_buf(),
                        source,
                    })?;
                toml::from_str::<DemoConfig>(&content)?
            }
            None => DemoConfig::default(),
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.report_every == 0 {
            return Err(invalid("report_every must be greater than zero"));
        }
        if self.query_every == 0 {
            return Err(invalid("query_every must be greater than zero"));
        }
        if self.windows.is_empty() {
            return Err(invalid("at least one window length is required"));
        }
        if self.windows.contains(&0) {
            return Err(invalid("window lengths must be greater than zero"));
        }

        for reading in &self.readings {
            Reading::try_from(*reading)?;
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> DemoError {
    DemoError::InvalidConfig {
        reason: reason.to_string(),
    }
}
