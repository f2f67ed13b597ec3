mod answer;
mod board;
mod display;
mod elapsed;
mod share;
mod slot;

pub use answer::{AnswerKey, AnswerKeyError, MAX_ANSWER, SLOT_COUNT};
pub use board::{BoardError, CommitOutcome, GuessBoard};
pub use display::DisplayMode;
pub use elapsed::Elapsed;
pub use share::{APP_NAME, SHARE_ACK, share_message};
pub use slot::{Feedback, MAX_INPUT_LEN, Slot, sanitize_input};
