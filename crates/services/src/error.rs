//! Shared error types for the services crate.

use thiserror::Error;

use daile_core::model::BoardError;

/// Errors emitted by a `ClipboardSink`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Errors emitted by `GameService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
}
