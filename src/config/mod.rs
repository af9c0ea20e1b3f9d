//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → passed explicitly to each subsystem at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no ambient global state
//! - All fields have defaults so a minimal (or absent) config file works
//!   against a stock local Anvil node
//! - Validation separates syntactic (serde) from semantic checks
//! - The private key is never part of the config file; it comes from the
//!   environment only (see `blockchain::wallet`)

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, ConfigError};
pub use schema::ClientConfig;
