use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{
    AnswerKey, DisplayMode, Elapsed, Feedback, SLOT_COUNT, Slot, share_message,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("slot index {index} is out of range (0..6)")]
    SlotOutOfRange { index: usize },
}

/// What a commit did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Locked slot, finished board, or unparsable input.
    Ignored,
    /// Wrong guess; the slot stays editable.
    Feedback(Feedback),
    /// Slot locked, other slots still open.
    Solved,
    /// The last open slot locked; the stopwatch is frozen.
    Completed,
}

/// Six guess slots plus the stopwatch for one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessBoard {
    key: AnswerKey,
    slots: [Slot; SLOT_COUNT],
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    elapsed: Elapsed,
    display_mode: DisplayMode,
}

impl GuessBoard {
    #[must_use]
    pub fn new(key: AnswerKey, started_at: DateTime<Utc>) -> Self {
        let answers = key.as_array();
        Self {
            key,
            slots: std::array::from_fn(|index| Slot::new(answers[index])),
            started_at,
            ended_at: None,
            elapsed: Elapsed::default(),
            display_mode: DisplayMode::default(),
        }
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    #[must_use]
    pub fn key(&self) -> AnswerKey {
        self.key
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Last value computed by `tick`, or the frozen total once complete.
    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Store a sanitized input for the slot.
    ///
    /// Returns `Ok(false)` when the slot is locked or the board is complete.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::SlotOutOfRange` for an index past the last slot.
    pub fn set_input(&mut self, index: usize, raw: &str) -> Result<bool, BoardError> {
        let complete = self.is_complete();
        let slot = self.slot_mut(index)?;
        if complete {
            return Ok(false);
        }
        Ok(slot.set_input(raw))
    }

    /// Judge the slot's current input against its answer.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::SlotOutOfRange` for an index past the last slot.
    pub fn commit_guess(
        &mut self,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<CommitOutcome, BoardError> {
        let complete = self.is_complete();
        let slot = self.slot_mut(index)?;
        if complete {
            return Ok(CommitOutcome::Ignored);
        }

        let outcome = match slot.commit() {
            None => CommitOutcome::Ignored,
            Some(Feedback::Correct) => CommitOutcome::Solved,
            Some(feedback) => CommitOutcome::Feedback(feedback),
        };

        if outcome == CommitOutcome::Solved && self.slots.iter().all(Slot::is_locked) {
            self.ended_at = Some(now);
            self.elapsed = Elapsed::between(self.started_at, now);
            return Ok(CommitOutcome::Completed);
        }

        Ok(outcome)
    }

    /// Recompute the live stopwatch.
    ///
    /// Returns false once the board is complete; the caller stops ticking then.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_complete() {
            return false;
        }
        self.elapsed = Elapsed::between(self.started_at, now);
        true
    }

    /// Clipboard text for the result.
    #[must_use]
    pub fn share_message(&self) -> String {
        share_message(self.ended_at.map(|_| self.elapsed), self.elapsed)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot, BoardError> {
        self.slots
            .get_mut(index)
            .ok_or(BoardError::SlotOutOfRange { index })
    }
}
