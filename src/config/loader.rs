//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `rpc.url`.
pub const RPC_URL_ENV_VAR: &str = "TOKENBANK_RPC_URL";

/// Environment variable overriding `contract.address`.
pub const CONTRACT_ADDRESS_ENV_VAR: &str = "TOKENBANK_CONTRACT_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides (`TOKENBANK_RPC_URL`, `TOKENBANK_CONTRACT_ADDRESS`)
/// are applied after parsing and before validation.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: ClientConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Built-in defaults plus environment overrides, for running without a
/// config file against a stock local node.
pub fn default_config() -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut ClientConfig) {
    if let Ok(url) = std::env::var(RPC_URL_ENV_VAR) {
        config.rpc.url = url;
    }
    if let Ok(address) = std::env::var(CONTRACT_ADDRESS_ENV_VAR) {
        config.contract.address = address;
    }
}
