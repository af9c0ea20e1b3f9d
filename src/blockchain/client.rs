//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoint and assert connectivity up front
//! - Query chain state (chain id, block number, nonces, receipts)
//! - Execute read-only contract calls and broadcast raw transactions
//! - Bound every network call with the configured timeout

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::config::ClientConfig;

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct RpcClient {
    provider: Arc<dyn Provider + Send + Sync>,
    /// Endpoint URL, kept for logging only.
    rpc_url: String,
    /// Chain ID the endpoint is expected to serve.
    expected_chain_id: u64,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl RpcClient {
    /// Connect to the configured endpoint.
    ///
    /// Connectivity is asserted immediately: the node must answer
    /// `eth_chainId` with the configured chain ID before any contract
    /// call is attempted.
    pub async fn connect(config: &ClientConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc.url, e))
        })?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        let client = Self {
            provider,
            rpc_url: config.rpc.url.clone(),
            expected_chain_id: config.rpc.chain_id,
            timeout_duration: Duration::from_secs(config.rpc.timeout_secs),
        };

        client.verify_connectivity().await?;

        tracing::info!(
            rpc_url = %client.rpc_url,
            chain_id = client.expected_chain_id,
            "Connected to node"
        );

        Ok(client)
    }

    /// Query `eth_chainId` and check it against the configured value.
    pub async fn verify_connectivity(&self) -> BlockchainResult<()> {
        let actual = self.chain_id().await?;
        if actual.0 != self.expected_chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.expected_chain_id,
                actual: actual.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the node.
    pub async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.bounded(self.provider.get_chain_id()).await.map(ChainId)
    }

    /// Get the latest block number.
    pub async fn block_number(&self) -> BlockchainResult<u64> {
        self.bounded(self.provider.get_block_number()).await
    }

    /// Get the transaction count (next nonce) for an address.
    pub async fn transaction_count(&self, address: Address) -> BlockchainResult<u64> {
        self.bounded(self.provider.get_transaction_count(address))
            .await
    }

    /// Get current gas price in wei.
    pub async fn gas_price(&self) -> BlockchainResult<u128> {
        self.bounded(self.provider.get_gas_price()).await
    }

    /// Get a transaction receipt by hash, `None` while pending.
    pub async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.bounded(self.provider.get_transaction_receipt(tx_hash))
            .await
    }

    /// Execute a read-only `eth_call`.
    pub async fn call(&self, request: TransactionRequest) -> BlockchainResult<Bytes> {
        self.bounded(self.provider.call(request)).await
    }

    /// Estimate gas for a transaction against the node.
    pub async fn estimate_gas(&self, request: TransactionRequest) -> BlockchainResult<u64> {
        self.bounded(self.provider.estimate_gas(request)).await
    }

    /// Broadcast a signed, EIP-2718-encoded transaction.
    pub async fn send_raw_transaction(&self, encoded: &[u8]) -> BlockchainResult<TxHash> {
        let pending = self
            .bounded(self.provider.send_raw_transaction(encoded))
            .await?;
        Ok(*pending.tx_hash())
    }

    /// The configured request timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }

    async fn bounded<T, E>(
        &self,
        fut: impl IntoFuture<Output = Result<T, E>>,
    ) -> BlockchainResult<T>
    where
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut.into_future()).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.expected_chain_id)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
