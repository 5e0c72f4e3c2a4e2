//! services/trivia/src/error.rs
//!
//! Defines the primary error type for the trivia game.

use crate::config::ConfigError;
use trivia_core::{domain::BankError, ports::PortError};

/// The primary error type for the `trivia` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// The bundled questions could not be turned into a valid bank.
    #[error("Question bank error: {0}")]
    Bank(#[from] BankError),

    /// The embedded question asset is not valid JSON for a bank.
    #[error("Question asset error: {0}")]
    Asset(#[from] serde_json::Error),

    /// Represents a standard Input/Output error (e.g., building the runtime).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
