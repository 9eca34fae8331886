//! # sok-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOK_*` prefix, `__` as separator)
//! 2. Project-level `sok.toml`
//! 3. Built-in defaults
//!
//! Figment maps `SOK_PATHS__OUTPUT_DIR` -> `paths.output_dir`.
//!
//! # Usage
//!
//! ```no_run
//! use sok_config::SokConfig;
//!
//! let config = SokConfig::load_with_dotenv().expect("config");
//! println!("reading from {}", config.paths.data_dir.display());
//! ```

mod error;
mod paths;

pub use error::ConfigError;
pub use paths::PathsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const CONFIG_FILE: &str = "sok.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SokConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

impl SokConfig {
    /// Load configuration from `sok.toml` and `SOK_*` environment variables.
    ///
    /// Does NOT call `dotenvy`; see [`load_with_dotenv`](Self::load_with_dotenv).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.paths.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory, if any.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = PathBuf::from(CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SOK_").split("__"))
    }
}
