//! TokenBank call definitions and compiled-artifact handling.

use std::fs;
use std::path::Path;

use alloy::json_abi::JsonAbi;
use alloy::sol;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

sol! {
    /// Read the caller's ledger balance.
    function getBalance() external view returns (uint256);

    /// Credit the attached value to the caller's ledger balance.
    function deposit() external payable;

    /// Debit `amount` from the caller's ledger balance and pay it out.
    function withdraw(uint256 amount) external;
}

/// Functions the loaded artifact must declare.
const REQUIRED_FUNCTIONS: [&str; 3] = ["getBalance", "deposit", "withdraw"];

/// Compiled contract artifact (Foundry output JSON).
///
/// Only the `abi` field is read; the artifact is checked for presence of
/// the three TokenBank entry points and otherwise left unvalidated.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    abi: JsonAbi,
}

impl ContractArtifact {
    /// Load an artifact from disk.
    pub fn load(path: &Path) -> BlockchainResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BlockchainError::Artifact(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse an artifact from its JSON text.
    pub fn from_json(content: &str) -> BlockchainResult<Self> {
        let document: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| BlockchainError::Artifact(format!("Malformed artifact JSON: {}", e)))?;

        let abi_value = document
            .get("abi")
            .ok_or_else(|| BlockchainError::Artifact("Artifact has no `abi` field".to_string()))?;

        let abi: JsonAbi = serde_json::from_value(abi_value.clone())
            .map_err(|e| BlockchainError::Artifact(format!("Malformed `abi` field: {}", e)))?;

        for name in REQUIRED_FUNCTIONS {
            if !abi.functions.contains_key(name) {
                return Err(BlockchainError::Artifact(format!(
                    "ABI does not declare `{}`",
                    name
                )));
            }
        }

        Ok(Self { abi })
    }

    /// The parsed contract interface.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    const ARTIFACT: &str = r#"{
        "abi": [
            {"type": "function", "name": "getBalance", "inputs": [], "outputs": [{"name": "", "type": "uint256", "internalType": "uint256"}], "stateMutability": "view"},
            {"type": "function", "name": "deposit", "inputs": [], "outputs": [], "stateMutability": "payable"},
            {"type": "function", "name": "withdraw", "inputs": [{"name": "amount", "type": "uint256", "internalType": "uint256"}], "outputs": [], "stateMutability": "nonpayable"}
        ],
        "bytecode": {"object": "0x"}
    }"#;

    #[test]
    fn test_selectors_match_canonical_signatures() {
        // keccak256 prefixes of "getBalance()", "deposit()", "withdraw(uint256)"
        assert_eq!(getBalanceCall::SELECTOR, [0x12, 0x06, 0x5f, 0xe0]);
        assert_eq!(depositCall::SELECTOR, [0xd0, 0xe3, 0x0d, 0xb0]);
        assert_eq!(withdrawCall::SELECTOR, [0x2e, 0x1a, 0x7d, 0x4d]);
    }

    #[test]
    fn test_withdraw_calldata_layout() {
        use alloy::primitives::U256;

        let data = withdrawCall {
            amount: U256::from(500u64),
        }
        .abi_encode();
        // 4-byte selector plus one 32-byte word
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &withdrawCall::SELECTOR);
    }

    #[test]
    fn test_artifact_parses() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.abi().functions.len(), 3);
    }

    #[test]
    fn test_artifact_missing_abi_field() {
        let result = ContractArtifact::from_json(r#"{"bytecode": {"object": "0x"}}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no `abi` field"));
    }

    #[test]
    fn test_artifact_missing_function() {
        let stripped = r#"{
            "abi": [
                {"type": "function", "name": "deposit", "inputs": [], "outputs": [], "stateMutability": "payable"}
            ]
        }"#;
        let err = ContractArtifact::from_json(stripped).unwrap_err();
        assert!(err.to_string().contains("getBalance"));
    }

    #[test]
    fn test_artifact_malformed_json() {
        let result = ContractArtifact::from_json("{not json");
        assert!(matches!(result, Err(BlockchainError::Artifact(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ContractArtifact::load(Path::new("/nonexistent/TokenBank.json"));
        assert!(matches!(result, Err(BlockchainError::Artifact(_))));
    }
}
