use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of guess slots on a board.
pub const SLOT_COUNT: usize = 6;

/// Largest answer that still fits the two-digit input field.
pub const MAX_ANSWER: u8 = 99;

const DEFAULT_ANSWERS: [u8; SLOT_COUNT] = [42, 12, 1, 3, 6, 2];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerKeyError {
    #[error("answer {value} at slot {index} exceeds 99")]
    OutOfRange { index: usize, value: u32 },

    #[error("expected 6 answers, got {len}")]
    WrongCount { len: usize },

    #[error("invalid answer at slot {index}: {raw:?}")]
    NotANumber { index: usize, raw: String },
}

/// The hidden sequence a board is played against.
///
/// Immutable once built; every board receives its own copy at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnswerKey([u8; SLOT_COUNT]);

impl AnswerKey {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_array(&self) -> [u8; SLOT_COUNT] {
        self.0
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self(DEFAULT_ANSWERS)
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for AnswerKey {
    type Err = AnswerKeyError;

    /// Parses `"42,12,1,3,6,2"`; whitespace around items is ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let items: Vec<&str> = raw.split(',').map(str::trim).collect();
        if items.len() != SLOT_COUNT {
            return Err(AnswerKeyError::WrongCount { len: items.len() });
        }

        let mut answers = [0_u8; SLOT_COUNT];
        for (index, item) in items.into_iter().enumerate() {
            let value: u32 = item.parse().map_err(|_| AnswerKeyError::NotANumber {
                index,
                raw: item.to_string(),
            })?;
            answers[index] = u8::try_from(value)
                .ok()
                .filter(|value| *value <= MAX_ANSWER)
                .ok_or(AnswerKeyError::OutOfRange { index, value })?;
        }

        Ok(Self(answers))
    }
}
