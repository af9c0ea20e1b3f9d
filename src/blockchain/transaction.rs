//! Transaction building, signing, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with the configured gas policy
//! - Sign and broadcast transactions
//! - Poll for the confirmation receipt
//!
//! Each transaction is one-shot: built, submitted, confirmed, discarded.
//! There is no retry and no pending-transaction tracking. The nonce is
//! fetched from the node immediately before each submission, so a single
//! sequential caller per account is assumed.

use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tokio::time::{interval, timeout};

use crate::blockchain::client::RpcClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::{ConfirmationConfig, GasConfig};

/// Receipt poll interval.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Transaction builder for contract operations.
pub struct TxBuilder {
    client: RpcClient,
    wallet: Wallet,
    gas: GasConfig,
    confirmation: ConfirmationConfig,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(
        client: RpcClient,
        wallet: Wallet,
        gas: GasConfig,
        confirmation: ConfirmationConfig,
    ) -> Self {
        Self {
            client,
            wallet,
            gas,
            confirmation,
        }
    }

    /// Build a transaction request against the current chain state.
    ///
    /// Fetches the sender nonce and gas price from the node, rejects gas
    /// prices above the configured cap, and sets the gas limit from config
    /// or, when unset, from `eth_estimateGas`.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native token to attach
    /// * `data` - Call data
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> BlockchainResult<TransactionRequest> {
        let nonce = self.client.transaction_count(self.wallet.address()).await?;

        let gas_price = self.client.gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;
        if gas_price_gwei > self.gas.max_price_gwei as u128 {
            return Err(BlockchainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: self.gas.max_price_gwei,
            });
        }
        let adjusted_gas_price = apply_multiplier(gas_price, self.gas.price_multiplier);

        let request = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(to)
            .with_value(value)
            .with_input(data)
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(self.wallet.chain_id());

        let gas_limit = match self.gas.limit {
            Some(limit) => limit,
            None => self.client.estimate_gas(request.clone()).await?,
        };

        tracing::debug!(
            to = %to,
            nonce = nonce,
            gas_limit = gas_limit,
            gas_price = adjusted_gas_price,
            "Transaction built"
        );

        Ok(request.with_gas_limit(gas_limit))
    }

    /// Sign a built request and broadcast it, returning the hash.
    pub async fn submit(&self, request: TransactionRequest) -> BlockchainResult<TxHash> {
        let raw = self.wallet.sign_transaction(request).await?;
        let tx_hash = self.client.send_raw_transaction(&raw).await?;
        tracing::info!(tx_hash = %tx_hash, "Transaction submitted");
        Ok(tx_hash)
    }

    /// Wait for a transaction to be confirmed.
    ///
    /// Polls the node for the receipt until the configured confirmation
    /// depth is reached (a mined transaction counts as one confirmation).
    /// A reverted receipt is terminal; node errors propagate unchanged.
    pub async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<TransactionReceipt> {
        let required = self.confirmation.blocks as u64;
        let timeout_duration = Duration::from_secs(self.confirmation.timeout_secs);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(POLL_INTERVAL);

            loop {
                ticker.tick().await;

                let receipt = match self.client.transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Err(BlockchainError::Reverted(tx_hash));
                }

                let current_block = self.client.block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block).saturating_add(1);

                if confirmations >= required {
                    tracing::info!(
                        tx_hash = %tx_hash,
                        block_number = tx_block,
                        "Transaction confirmed"
                    );
                    return Ok(receipt);
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(receipt) => receipt,
            Err(_) => Err(BlockchainError::ConfirmationTimeout(
                tx_hash,
                self.confirmation.timeout_secs,
            )),
        }
    }

    /// Build, submit, and confirm in one step.
    pub async fn execute(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> BlockchainResult<TransactionReceipt> {
        let request = self.build(to, value, data).await?;
        let tx_hash = self.submit(request).await?;
        self.wait_for_confirmation(tx_hash).await
    }

    /// The sender address.
    pub fn sender(&self) -> Address {
        self.wallet.address()
    }
}

fn apply_multiplier(gas_price: u128, multiplier: f64) -> u128 {
    (gas_price as f64 * multiplier) as u128
}
