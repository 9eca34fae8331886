//! Input and output locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding the three systematization CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory the generated artifacts are written into. Created if absent.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl PathsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, path) in [
            ("paths.data_dir", &self.data_dir),
            ("paths.output_dir", &self.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
