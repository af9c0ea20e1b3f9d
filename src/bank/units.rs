//! Ether / wei conversion for display and CLI input.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Parse a decimal ether amount ("1", "0.5") into wei.
pub fn eth_to_wei(amount: &str) -> BlockchainResult<U256> {
    // Wei amounts are unsigned; reject a sign before unit parsing.
    if amount.starts_with('-') {
        return Err(BlockchainError::Codec(format!(
            "Invalid ether amount '{}': negative amounts are not allowed",
            amount
        )));
    }
    parse_ether(amount)
        .map_err(|e| BlockchainError::Codec(format!("Invalid ether amount '{}': {}", amount, e)))
}

/// Format a wei amount as a decimal ether string.
pub fn wei_to_eth(amount: U256) -> String {
    format_ether(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_amounts() {
        assert_eq!(
            eth_to_wei("1").unwrap(),
            U256::from(1_000_000_000_000_000_000u128)
        );
        assert_eq!(
            eth_to_wei("0.5").unwrap(),
            U256::from(500_000_000_000_000_000u128)
        );
        assert_eq!(eth_to_wei("0").unwrap(), U256::ZERO);
    }

    #[test]
    fn test_round_trip_is_exact() {
        // Formatting then re-parsing must reproduce the raw wei value.
        for raw in [
            U256::ZERO,
            U256::from(1u64),
            U256::from(1_000_000_000_000_000_000u128),
            U256::from(1_234_567_890_123_456_789u128),
        ] {
            assert_eq!(eth_to_wei(&wei_to_eth(raw)).unwrap(), raw);
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(eth_to_wei("abc").is_err());
        assert!(eth_to_wei("").is_err());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(eth_to_wei("-1").is_err());
    }
}
