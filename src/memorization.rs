//! The digit-memorization trainer.
//!
//! The trainer holds the text the user has typed so far and checks it against
//! the canonical digit string ([`crate::constants::PI_DIGITS`]), decimal point
//! included. Practice mode is free-form; challenge mode pays out at every
//! 5-character milestone and charges for hints.

use crate::constants::PI_DIGITS;
use crate::scoring::{memorization_award, memorization_hint_penalty};
use crate::types::ScoreEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Practice,
    Challenge,
}

/// What one input submission produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input contained a character other than a digit or a first decimal
    /// point. Trainer state is unchanged.
    Rejected,
    Accepted {
        /// Whether the text is an exact prefix of the canonical string.
        correct: bool,
        /// Milestone award (challenge mode, correct, length a positive
        /// multiple of 5).
        award: Option<ScoreEvent>,
    },
}

/// A revealed next digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    /// The next canonical character, or `None` when the full string has
    /// been typed.
    pub digit: Option<char>,
    /// −1 in challenge mode, regardless of streaks or completeness.
    pub penalty: Option<ScoreEvent>,
}

#[derive(Debug)]
pub struct Trainer {
    mode: Mode,
    input: String,
    correct: bool,
    highest_reached: usize,
}

impl Trainer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            input: String::new(),
            correct: true,
            highest_reached: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the current input is an exact prefix of the canonical string.
    /// Empty input counts as correct.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Longest correct prefix ever typed this session. Survives resets and
    /// mode switches.
    pub fn highest_reached(&self) -> usize {
        self.highest_reached
    }

    /// Replace the typed text, as an input field does on every keystroke.
    ///
    /// Only digits and a single decimal point are accepted; anything else
    /// leaves the trainer untouched. Awards fire only in challenge mode,
    /// only for correct prefixes, at 5-character milestones.
    pub fn set_input(&mut self, value: &str) -> InputOutcome {
        if !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return InputOutcome::Rejected;
        }
        if value.matches('.').count() > 1 {
            return InputOutcome::Rejected;
        }

        self.input = value.to_string();
        self.correct = PI_DIGITS.starts_with(value);
        if self.correct && self.input.len() > self.highest_reached {
            self.highest_reached = self.input.len();
        }

        let award = match self.mode {
            Mode::Challenge if self.correct => memorization_award(self.input.len()),
            _ => None,
        };
        InputOutcome::Accepted {
            correct: self.correct,
            award,
        }
    }

    /// Append one character to the typed text.
    pub fn type_char(&mut self, c: char) -> InputOutcome {
        let mut next = self.input.clone();
        next.push(c);
        self.set_input(&next)
    }

    /// Reveal the next canonical character. Challenge mode charges −1 even
    /// when there is nothing left to reveal.
    pub fn hint(&self) -> Hint {
        Hint {
            digit: PI_DIGITS[self.input.len().min(PI_DIGITS.len())..].chars().next(),
            penalty: (self.mode == Mode::Challenge).then(memorization_hint_penalty),
        }
    }

    /// Clear the typed text. The session record stays.
    pub fn reset(&mut self) {
        self.input.clear();
        self.correct = true;
    }

    /// Toggle practice/challenge and clear the typed text.
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Practice => Mode::Challenge,
            Mode::Challenge => Mode::Practice,
        };
        self.reset();
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(Mode::Practice)
    }
}
