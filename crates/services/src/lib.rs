#![forbid(unsafe_code)]

pub mod clipboard;
pub mod error;
pub mod game_service;

pub use daile_core::Clock;

pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use error::{ClipboardError, GameError};
pub use game_service::{GameService, ShareOutcome, TICK_PERIOD};
