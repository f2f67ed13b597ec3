mod faq;
mod game;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use faq::{FaqSection, IntroStats};
pub use game::{GameIntent, GameView};
