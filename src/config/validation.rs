//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0, sane gas policy)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::ClientConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "rpc.url").
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.rpc.url.parse::<url::Url>() {
        errors.push(ValidationError {
            field: "rpc.url",
            message: format!("invalid URL '{}': {}", config.rpc.url, e),
        });
    }
    if config.rpc.chain_id == 0 {
        errors.push(ValidationError {
            field: "rpc.chain_id",
            message: "must be nonzero".to_string(),
        });
    }
    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "rpc.timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if let Err(e) = config.contract.address.parse::<Address>() {
        errors.push(ValidationError {
            field: "contract.address",
            message: format!("invalid address '{}': {}", config.contract.address, e),
        });
    }
    if config.contract.artifact_path.is_empty() {
        errors.push(ValidationError {
            field: "contract.artifact_path",
            message: "must not be empty".to_string(),
        });
    }

    if let Some(limit) = config.gas.limit {
        // 21000 is the intrinsic cost of any transaction.
        if limit < 21_000 {
            errors.push(ValidationError {
                field: "gas.limit",
                message: format!("{} is below the intrinsic transaction cost", limit),
            });
        }
    }
    if !(config.gas.price_multiplier > 0.0) {
        errors.push(ValidationError {
            field: "gas.price_multiplier",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.gas.max_price_gwei == 0 {
        errors.push(ValidationError {
            field: "gas.max_price_gwei",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.confirmation.blocks == 0 {
        errors.push(ValidationError {
            field: "confirmation.blocks",
            message: "must be at least 1".to_string(),
        });
    }
    if config.confirmation.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "confirmation.timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default();
        config.rpc.url = "not a url".to_string();
        config.rpc.timeout_secs = 0;
        config.contract.address = "0x1234".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"rpc.url"));
        assert!(fields.contains(&"rpc.timeout_secs"));
        assert!(fields.contains(&"contract.address"));
    }

    #[test]
    fn test_gas_limit_below_intrinsic_cost() {
        let mut config = ClientConfig::default();
        config.gas.limit = Some(20_000);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "gas.limit");
    }

    #[test]
    fn test_historical_fixed_limit_is_valid() {
        let mut config = ClientConfig::default();
        config.gas.limit = Some(2_000_000);
        assert!(validate_config(&config).is_ok());
    }
}
