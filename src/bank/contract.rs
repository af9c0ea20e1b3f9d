//! TokenBank contract operations.
//!
//! # Responsibilities
//! - Bind the deployed address and its compiled artifact
//! - `balance`: read-only `getBalance()` call for the signing account
//! - `deposit`: one transaction carrying the amount as attached value
//! - `withdraw`: one transaction carrying the amount as an argument
//!
//! Node rejections (insufficient balance, reverts, out-of-gas) propagate
//! unchanged; there is no retry.

use std::path::Path;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::bank::abi::{depositCall, getBalanceCall, withdrawCall, ContractArtifact};
use crate::blockchain::client::RpcClient;
use crate::blockchain::transaction::TxBuilder;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;
use crate::config::ClientConfig;

/// Client for a deployed TokenBank contract.
pub struct TokenBank {
    client: RpcClient,
    tx: TxBuilder,
    address: Address,
    artifact: ContractArtifact,
}

impl TokenBank {
    /// Bind a deployed contract.
    ///
    /// Reads the compiled artifact from `contract.artifact_path` and
    /// parses the configured address. Fails if the artifact is missing,
    /// lacks an `abi` field, or does not declare the TokenBank entry
    /// points.
    pub fn load(config: &ClientConfig, client: RpcClient, wallet: Wallet) -> BlockchainResult<Self> {
        let address: Address = config.contract.address.parse().map_err(|e| {
            BlockchainError::Artifact(format!(
                "Invalid contract address '{}': {}",
                config.contract.address, e
            ))
        })?;

        let artifact = ContractArtifact::load(Path::new(&config.contract.artifact_path))?;

        let tx = TxBuilder::new(
            client.clone(),
            wallet,
            config.gas.clone(),
            config.confirmation.clone(),
        );

        tracing::info!(address = %address, "Contract bound");

        Ok(Self {
            client,
            tx,
            address,
            artifact,
        })
    }

    /// Query the signing account's bank balance in wei.
    pub async fn balance(&self) -> BlockchainResult<U256> {
        // getBalance() reads msg.sender's ledger entry, so the call must
        // carry the wallet address as `from`.
        let request = TransactionRequest::default()
            .with_from(self.tx.sender())
            .with_to(self.address)
            .with_input(Bytes::from(getBalanceCall {}.abi_encode()));

        let raw = self.client.call(request).await?;
        getBalanceCall::abi_decode_returns(&raw)
            .map_err(|e| BlockchainError::Codec(format!("getBalance return: {}", e)))
    }

    /// Deposit `amount_wei` into the bank.
    ///
    /// Builds one transaction with the amount as attached value and
    /// `deposit()` calldata, then blocks until the confirmation receipt.
    pub async fn deposit(&self, amount_wei: U256) -> BlockchainResult<TransactionReceipt> {
        let data = Bytes::from(depositCall {}.abi_encode());
        self.tx.execute(self.address, amount_wei, data).await
    }

    /// Withdraw `amount_wei` from the bank.
    ///
    /// Same shape as `deposit`, but the amount travels as the
    /// `withdraw(uint256)` argument and no value is attached.
    pub async fn withdraw(&self, amount_wei: U256) -> BlockchainResult<TransactionReceipt> {
        let data = Bytes::from(
            withdrawCall {
                amount: amount_wei,
            }
            .abi_encode(),
        );
        self.tx.execute(self.address, U256::ZERO, data).await
    }

    /// The deployed contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The signing account's address.
    pub fn sender(&self) -> Address {
        self.tx.sender()
    }

    /// The loaded contract interface.
    pub fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }
}
