use std::path::PathBuf;

use confy::ConfyError;
use sarvodaya_lib::InterestPolicy;
use serde::{Deserialize, Serialize};

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

const LEDGER_FILE: &str = "ledger.yaml";

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the ledger is kept. Defaults to a file next to the config file
    pub store: Option<PathBuf>,

    /// ISO 4217 code used when printing amounts
    pub currency: String,

    pub interest: InterestPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: None,
            currency: "INR".to_string(),
            interest: InterestPolicy::default(),
        }
    }
}

impl Config {
    pub fn store_path(&self) -> Result<PathBuf, ConfyError> {
        if let Some(path) = &self.store {
            return Ok(path.clone());
        }

        let config_file = confy::get_configuration_file_path(BIN_NAME, "config")?;
        Ok(config_file.with_file_name(LEDGER_FILE))
    }
}

pub fn load() -> Result<Config, ConfyError> {
    confy::load(BIN_NAME, "config")
}
