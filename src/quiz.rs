//! The Pi quiz: canonical question bank and session state machine.
//!
//! Questions, options, and explanations are product content; the order and
//! wording here are canonical. A session walks the bank once, front to back,
//! and hands out a [`ScoreEvent`] for each correct pick via
//! [`crate::scoring::quiz_answer_award`].

use crate::scoring::quiz_answer_award;
use crate::types::ScoreEvent;

/// One quiz question. `answer` indexes into `options`.
#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
    pub explanation: &'static str,
}

impl Question {
    pub fn correct_option(&self) -> &'static str {
        self.options[self.answer]
    }
}

/// The canonical question bank, in presentation order.
pub static QUESTIONS: [Question; 10] = [
    Question {
        prompt: "What is Pi (π) approximately equal to?",
        options: ["3.14159", "2.71828", "1.61803", "4.66920"],
        answer: 0,
        explanation: "Pi (π) is approximately equal to 3.14159 and represents the ratio of a circle's circumference to its diameter.",
    },
    Question {
        prompt: "Pi is classified as what type of number?",
        options: ["Natural number", "Rational number", "Irrational number", "Complex number"],
        answer: 2,
        explanation: "Pi is an irrational number, which means it cannot be expressed as a fraction and its decimal representation never ends or repeats.",
    },
    Question {
        prompt: "Who first used the Greek letter π to represent the constant?",
        options: ["Archimedes", "Euler", "William Jones", "Isaac Newton"],
        answer: 2,
        explanation: "Welsh mathematician William Jones was the first to use the Greek letter π to denote the constant in 1706.",
    },
    Question {
        prompt: "Which civilization calculated π as (16/9)² ≈ 3.16?",
        options: ["Ancient Greece", "Ancient Egypt", "Ancient China", "Ancient Babylonia"],
        answer: 1,
        explanation: "The Ancient Egyptians used a value of (16/9)² ≈ 3.16 for π in calculations, as documented in the Rhind Papyrus.",
    },
    Question {
        prompt: "In what year did Emma Haruka Iwao and Google calculate π to 100 trillion digits?",
        options: ["2010", "2015", "2020", "2022"],
        answer: 3,
        explanation: "In 2022, Emma Haruka Iwao and Google calculated π to 100 trillion digits, setting a new world record.",
    },
    Question {
        prompt: "Which formula correctly represents the area of a circle?",
        options: ["A = πr", "A = 2πr", "A = πr²", "A = 2πr²"],
        answer: 2,
        explanation: "The area of a circle is calculated using the formula A = πr², where r is the radius.",
    },
    Question {
        prompt: "Which day is celebrated as 'Pi Day'?",
        options: ["March 14", "April 13", "July 22", "January 31"],
        answer: 0,
        explanation: "March 14 (3/14) is celebrated as Pi Day, as the date resembles the first three digits of Pi (3.14).",
    },
    Question {
        prompt: "Who proved that π is transcendental?",
        options: ["Archimedes", "Ferdinand von Lindemann", "Johann Lambert", "Leonhard Euler"],
        answer: 1,
        explanation: "Ferdinand von Lindemann proved that π is transcendental in 1882, meaning it is not the root of any non-zero polynomial equation with rational coefficients.",
    },
    Question {
        prompt: "Which of the following mathematical constants is related to Pi in Euler's Identity?",
        options: ["The golden ratio", "Euler's number (e)", "Avogadro's number", "The Fibonacci sequence"],
        answer: 1,
        explanation: "Euler's Identity (e^(iπ) + 1 = 0) connects five fundamental mathematical constants, including Pi and Euler's number e.",
    },
    Question {
        prompt: "Which method involves dropping needles on lined paper to estimate π?",
        options: ["Monte Carlo method", "Buffon's Needle", "Gauss-Legendre algorithm", "Ramanujan's infinite series"],
        answer: 1,
        explanation: "Buffon's Needle is a method for estimating π by dropping needles on a lined paper and calculating the probability of the needles crossing a line.",
    },
];

/// What one answered question produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// +10 to "Pi Quiz" for a correct pick; `None` for a wrong one.
    pub award: Option<ScoreEvent>,
}

/// One pass through the question bank.
///
/// The session tracks position and the running correct count only; applying
/// awards to a ledger is the caller's step, as everywhere else.
#[derive(Debug, Default)]
pub struct QuizSession {
    current: usize,
    correct_count: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question awaiting an answer, or `None` once the bank is exhausted.
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current)
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    /// Fraction of the bank already answered, 0–100 (progress-bar value).
    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / QUESTIONS.len() as f64 * 100.0
    }

    /// Answer the current question by option index and advance exactly once.
    ///
    /// Returns `None` when the quiz is already complete or `choice` does not
    /// name an option; neither case advances the session.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let question = QUESTIONS.get(self.current)?;
        if choice >= question.options.len() {
            return None;
        }
        let correct = choice == question.answer;
        if correct {
            self.correct_count += 1;
        }
        self.current += 1;
        Some(AnswerOutcome {
            correct,
            award: quiz_answer_award(correct),
        })
    }

    /// Completion message, graded by correct count.
    pub fn summary(&self) -> &'static str {
        let total = QUESTIONS.len();
        if self.correct_count == total {
            "Perfect score! You're a Pi expert!"
        } else if self.correct_count as f64 >= total as f64 * 0.7 {
            "Great job! You know Pi very well!"
        } else {
            "Good effort! Keep learning about Pi!"
        }
    }

    /// Start over from the first question.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
