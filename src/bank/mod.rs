//! TokenBank contract surface.
//!
//! # Data Flow
//! ```text
//! compiled artifact (Foundry out/ JSON)
//!     → abi.rs (`abi` field extraction, function presence check)
//! CLI amount strings
//!     → units.rs (ether ↔ wei)
//! contract.rs
//!     → blockchain::TxBuilder (build, sign, submit, confirm)
//! ```

pub mod abi;
pub mod contract;
pub mod units;

pub use abi::ContractArtifact;
pub use contract::TokenBank;
