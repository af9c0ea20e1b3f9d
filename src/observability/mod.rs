//! Observability subsystem.
//!
//! Structured logging only; the client is a short-lived CLI, so there is
//! no metrics endpoint.

pub mod logging;
