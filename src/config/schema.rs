//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the TokenBank client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Deployed contract binding.
    pub contract: ContractConfig,

    /// Gas policy for mutating transactions.
    pub gas: GasConfig,

    /// Confirmation polling settings.
    pub confirmation: ConfirmationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Expected chain ID (31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            timeout_secs: 10,
        }
    }
}

/// Deployed contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Deployed contract address (hex, 0x-prefixed).
    pub address: String,

    /// Path to the compiled contract artifact (Foundry output JSON
    /// containing an `abi` field).
    pub artifact_path: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            // First CREATE address of Anvil's default deployer account.
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            artifact_path: "out/TokenBank.sol/TokenBank.json".to_string(),
        }
    }
}

/// Gas policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Fixed gas limit. When unset, the limit is estimated against the
    /// node per transaction. The historical client pinned this to
    /// 2,000,000.
    pub limit: Option<u64>,

    /// Gas price multiplier (1.0 = node-quoted, 1.2 = 20% buffer).
    pub price_multiplier: f64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_price_gwei: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            limit: None,
            price_multiplier: 1.2,
            max_price_gwei: 500,
        }
    }
}

/// Confirmation polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfirmationConfig {
    /// Number of block confirmations required for finality. A mined
    /// transaction counts as one confirmation, so 1 suffices for a
    /// local auto-mining node.
    pub blocks: u32,

    /// Maximum time to wait for confirmation in seconds.
    pub timeout_secs: u64,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            blocks: 1,
            timeout_secs: 60,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
