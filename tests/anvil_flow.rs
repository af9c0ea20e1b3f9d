//! End-to-end tests against a live local node.
//!
//! These are ignored by default. To run them, start Anvil, deploy the
//! TokenBank contract with its default deployer (so it lands at the
//! address in `ClientConfig::default()`), then:
//!
//! ```text
//! cargo test -- --ignored
//! ```

use alloy::primitives::U256;

use tokenbank_client::bank::units::eth_to_wei;
use tokenbank_client::bank::TokenBank;
use tokenbank_client::blockchain::{RpcClient, Wallet};
use tokenbank_client::config::ClientConfig;

// Anvil's first default account.
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn live_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    config.contract.artifact_path = "tests/fixtures/TokenBank.json".to_string();
    config
}

async fn live_bank(config: &ClientConfig) -> (TokenBank, RpcClient) {
    let client = RpcClient::connect(config).await.expect("Anvil not reachable");
    let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, config.rpc.chain_id).unwrap();
    let bank = TokenBank::load(config, client.clone(), wallet).unwrap();
    (bank, client)
}

#[tokio::test]
#[ignore = "requires a local Anvil node with a deployed TokenBank contract"]
async fn deposit_and_withdraw_move_the_ledger_exactly() {
    let config = live_config();
    let (bank, _client) = live_bank(&config).await;

    let one = eth_to_wei("1").unwrap();
    let half = eth_to_wei("0.5").unwrap();

    let before = bank.balance().await.unwrap();

    bank.deposit(one).await.unwrap();
    let after_deposit = bank.balance().await.unwrap();
    assert_eq!(after_deposit, before + one);

    bank.withdraw(half).await.unwrap();
    let after_withdraw = bank.balance().await.unwrap();
    assert_eq!(after_withdraw, before + half);
}

#[tokio::test]
#[ignore = "requires a local Anvil node with a deployed TokenBank contract"]
async fn overdraw_is_rejected_and_leaves_balance_unchanged() {
    let config = live_config();
    let (bank, _client) = live_bank(&config).await;

    let before = bank.balance().await.unwrap();
    let over = before + eth_to_wei("1").unwrap();

    let result = bank.withdraw(over).await;
    assert!(result.is_err());

    let after = bank.balance().await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
#[ignore = "requires a local Anvil node with a deployed TokenBank contract"]
async fn sequential_deposits_confirm_with_increasing_nonces() {
    let config = live_config();
    let (bank, client) = live_bank(&config).await;

    let amount = eth_to_wei("0.1").unwrap();
    let sender = bank.sender();

    let nonce_start = client.transaction_count(sender).await.unwrap();
    let first = bank.deposit(amount).await.unwrap();

    let nonce_mid = client.transaction_count(sender).await.unwrap();
    let second = bank.deposit(amount).await.unwrap();

    let nonce_end = client.transaction_count(sender).await.unwrap();

    assert!(nonce_mid > nonce_start);
    assert!(nonce_end > nonce_mid);
    assert!(second.block_number.unwrap() >= first.block_number.unwrap());

    let balance = bank.balance().await.unwrap();
    assert!(balance >= amount + amount);
}

#[tokio::test]
#[ignore = "requires a local Anvil node with a deployed TokenBank contract"]
async fn fixed_gas_limit_matches_historical_policy() {
    // The original client pinned every transaction to 2,000,000 gas.
    let mut config = live_config();
    config.gas.limit = Some(2_000_000);

    let (bank, _client) = live_bank(&config).await;
    let before = bank.balance().await.unwrap();

    bank.deposit(U256::from(1u64)).await.unwrap();
    assert_eq!(bank.balance().await.unwrap(), before + U256::from(1u64));
}
