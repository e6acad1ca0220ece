//! Typewriter state machine.
//!
//! `Typewriter::tick` yields the text to display and how long to wait before
//! the next tick. The host owns the timer.

use std::time::Duration;

use crate::config::TypingConfig;

/// One rendered step of the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type
    pub fn new(config: &TypingConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            type_delay: Duration::from_millis(config.type_delay_ms.into()),
            delete_delay: Duration::from_millis(config.delete_delay_ms.into()),
            hold_delay: Duration::from_millis(config.hold_delay_ms.into()),
        })
    }

    pub fn tick(&mut self) -> Frame {
        let phrase = &self.phrases[self.phrase_index];

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            }
        } else {
            self.char_index += 1;
            if self.char_index > phrase.len() {
                self.deleting = true;
                return Frame {
                    text: phrase.iter().collect(),
                    delay: self.hold_delay,
                };
            }
        }

        let text = phrase[..self.char_index.min(phrase.len())].iter().collect();
        let delay = if self.deleting {
            self.delete_delay
        } else {
            self.type_delay
        };
        Frame { text, delay }
    }
}
