use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::TraderConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No instruments in config")]
    NoInstruments,
    #[error("Instrument configured twice: {0}")]
    DuplicateInstrument(String),
    #[error("Negative {field} for {symbol}: {value}")]
    NegativeWidth {
        symbol: String,
        field: &'static str,
        value: Decimal,
    },
}

/// Load trader configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TraderConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<TraderConfig, ConfigError> {
    let config: TraderConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<TraderConfig, ConfigError> {
    let default_config = include_str!("trader_config.json");
    load_config_from_str(default_config)
}

impl TraderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instruments.is_empty() {
            return Err(ConfigError::NoInstruments);
        }

        let mut seen = HashSet::new();
        for instrument in &self.instruments {
            if !seen.insert(instrument.symbol.as_str()) {
                return Err(ConfigError::DuplicateInstrument(instrument.symbol.clone()));
            }
            for (field, value) in [
                ("taking_width", instrument.taking_width),
                ("making_width", instrument.making_width),
            ] {
                if value.is_sign_negative() && !value.is_zero() {
                    return Err(ConfigError::NegativeWidth {
                        symbol: instrument.symbol.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
