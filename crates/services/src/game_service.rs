use std::sync::Arc;
use std::time::Duration;

use daile_core::model::{AnswerKey, CommitOutcome, DisplayMode, GuessBoard, SHARE_ACK};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::clipboard::ClipboardSink;
use crate::error::GameError;

/// Cadence of the stopwatch tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Result of the share action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    pub message: String,
    /// False when the clipboard write failed. The player is acknowledged anyway.
    pub copied: bool,
    pub acknowledgment: &'static str,
}

/// Drives a `GuessBoard` with an injected clock, answer key and clipboard.
#[derive(Clone)]
pub struct GameService {
    clock: Clock,
    key: AnswerKey,
    initial_mode: DisplayMode,
    clipboard: Arc<dyn ClipboardSink>,
}

impl GameService {
    #[must_use]
    pub fn new(clock: Clock, key: AnswerKey, clipboard: Arc<dyn ClipboardSink>) -> Self {
        Self {
            clock,
            key,
            initial_mode: DisplayMode::default(),
            clipboard,
        }
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Start a fresh board; the stopwatch starts now.
    #[must_use]
    pub fn start_board(&self) -> GuessBoard {
        let started_at = self.clock.now();
        info!(%started_at, mode = ?self.initial_mode, "board started");
        GuessBoard::new(self.key, started_at).with_display_mode(self.initial_mode)
    }

    /// # Errors
    ///
    /// Returns `GameError::Board` for an out-of-range slot.
    pub fn set_input(
        &self,
        board: &mut GuessBoard,
        index: usize,
        raw: &str,
    ) -> Result<bool, GameError> {
        Ok(board.set_input(index, raw)?)
    }

    /// # Errors
    ///
    /// Returns `GameError::Board` for an out-of-range slot.
    pub fn commit_guess(
        &self,
        board: &mut GuessBoard,
        index: usize,
    ) -> Result<CommitOutcome, GameError> {
        let outcome = board.commit_guess(index, self.clock.now())?;
        match outcome {
            CommitOutcome::Ignored => debug!(index, "commit ignored"),
            CommitOutcome::Feedback(feedback) => debug!(index, ?feedback, "guess judged"),
            CommitOutcome::Solved => debug!(index, "slot solved"),
            CommitOutcome::Completed => {
                info!(index, elapsed = %board.elapsed(), "board complete");
            }
        }
        Ok(outcome)
    }

    /// Returns false once the board is complete and the timer should stop.
    pub fn tick(&self, board: &mut GuessBoard) -> bool {
        board.tick(self.clock.now())
    }

    /// Copy the result text to the clipboard.
    ///
    /// A failed write is logged, never surfaced.
    pub fn share(&self, board: &GuessBoard) -> ShareOutcome {
        let message = board.share_message();
        let copied = match self.clipboard.write_text(&message) {
            Ok(()) => {
                info!(complete = board.is_complete(), "result copied to clipboard");
                true
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                false
            }
        };

        ShareOutcome {
            message,
            copied,
            acknowledgment: SHARE_ACK,
        }
    }
}
