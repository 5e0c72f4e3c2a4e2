//! crates/trivia_core/src/ports.rs
//!
//! Defines the service contracts (traits) the game logic depends on.
//! These traits keep the core independent of the terminal, so the game can be
//! driven by stdin in production and by scripted channels in tests.

use async_trait::async_trait;

use crate::events::GameEvent;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Input was closed before the game finished")]
    InputClosed,
    #[error("Failed to read input: {0}")]
    Input(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A source of raw lines typed by the player.
#[async_trait]
pub trait LineSource: Send {
    /// Waits for the next line. `Ok(None)` means the input has ended.
    ///
    /// Implementations must be cancel-safe: dropping the returned future before
    /// it completes must not lose a line.
    async fn next_line(&mut self) -> PortResult<Option<String>>;

    /// Drops every line that has already arrived but was not read.
    /// Returns how many were dropped.
    fn discard_pending(&mut self) -> usize;
}

/// Receives everything the game wants to show the player.
pub trait GameNotifier: Send + Sync {
    fn notify(&self, event: GameEvent);
}
