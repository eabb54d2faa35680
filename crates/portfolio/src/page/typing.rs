//! Typewriter effect for the hero headline

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

/// One rendered step: the visible text and how long to wait before the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

/// Types a phrase out, holds it, deletes it, then moves to the next one
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypingAnimation {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance one step; `None` when there are no phrases
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let current = self.phrases.get(self.phrase)?;
        let len = current.len();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current[..self.chars].iter().collect();

        let delay = if !self.deleting && self.chars == len {
            self.deleting = true;
            HOLD_DELAY
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            NEXT_PHRASE_DELAY
        } else if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        };

        Some(TypingFrame { text, delay })
    }
}
