/// Maximum number of characters a slot accepts.
pub const MAX_INPUT_LEN: usize = 2;

/// Signal shown after a committed guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Feedback {
    #[default]
    None,
    /// The answer is higher than the guess.
    Higher,
    /// The answer is lower than the guess.
    Lower,
    Correct,
}

/// Strip everything but ASCII digits and keep at most `MAX_INPUT_LEN` of them.
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_INPUT_LEN)
        .collect()
}

/// One guess position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    answer: u8,
    input: String,
    feedback: Feedback,
}

impl Slot {
    #[must_use]
    pub fn new(answer: u8) -> Self {
        Self {
            answer,
            input: String::new(),
            feedback: Feedback::None,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// A slot locks the moment it is solved and never unlocks.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.feedback == Feedback::Correct
    }

    /// Replace the input with its sanitized form. Returns false when locked.
    pub(crate) fn set_input(&mut self, raw: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        self.input = sanitize_input(raw);
        true
    }

    /// Judge the current input. `None` means nothing was committed.
    pub(crate) fn commit(&mut self) -> Option<Feedback> {
        if self.is_locked() {
            return None;
        }
        let guess: u32 = self.input.parse().ok()?;
        let answer = u32::from(self.answer);

        self.feedback = if guess == answer {
            Feedback::Correct
        } else if guess < answer {
            Feedback::Higher
        } else {
            Feedback::Lower
        };
        Some(self.feedback)
    }
}
