//! TokenBank contract client.
//!
//! Connects to a local EVM development node, binds a deployed TokenBank
//! contract via its compiled artifact, and exposes three operations:
//! balance query, deposit, and withdraw. Each mutating operation builds,
//! signs, submits, and confirms exactly one transaction.
//!
//! ```text
//! config (TOML + env)          artifact (Foundry JSON)
//!     │                            │
//!     ▼                            ▼
//! blockchain::RpcClient ──▶ bank::TokenBank ──▶ blockchain::TxBuilder
//!     (connect, query)      (balance, deposit,   (nonce, gas, sign,
//!                            withdraw)            submit, confirm)
//! ```

pub mod bank;
pub mod blockchain;
pub mod config;
pub mod observability;

pub use bank::TokenBank;
pub use blockchain::{BlockchainError, RpcClient, Wallet};
pub use config::ClientConfig;
