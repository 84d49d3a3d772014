use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz question cannot be empty")]
    EmptyQuestion,

    #[error("quiz needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct answer index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },

    #[error("quiz attempt cap must be > 0")]
    InvalidAttemptCap,
}

/// A single multiple-choice question shown once every objective in the
/// module has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    narration_on_correct: String,
    narration_on_incorrect: String,
}

impl Quiz {
    /// Creates a validated quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the question is blank, fewer than two
    /// options are given, or the correct index does not address an option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        narration_on_correct: impl Into<String>,
        narration_on_incorrect: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions(options.len()));
        }
        if correct_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }

        Ok(Self {
            question: question.trim().to_owned(),
            options,
            correct_index,
            narration_on_correct: narration_on_correct.into(),
            narration_on_incorrect: narration_on_incorrect.into(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Returns true if the selected option index is the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    #[must_use]
    pub fn narration_on_correct(&self) -> &str {
        &self.narration_on_correct
    }

    #[must_use]
    pub fn narration_on_incorrect(&self) -> &str {
        &self.narration_on_incorrect
    }
}

/// Retry policy for quiz answers.
///
/// The observed product behavior is unlimited retries; whether that is
/// intended is undecided upstream, so the cap is configuration rather
/// than a hardcoded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizPolicy {
    max_attempts: Option<u32>,
}

impl QuizPolicy {
    /// Unlimited retries, the default.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_attempts: None }
    }

    /// Cap the number of answer attempts.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidAttemptCap` if `max_attempts` is zero.
    pub fn capped(max_attempts: u32) -> Result<Self, QuizError> {
        if max_attempts == 0 {
            return Err(QuizError::InvalidAttemptCap);
        }
        Ok(Self {
            max_attempts: Some(max_attempts),
        })
    }

    #[must_use]
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Returns true if another attempt is allowed after `used` attempts.
    #[must_use]
    pub fn allows_attempt(&self, used: u32) -> bool {
        match self.max_attempts {
            None => true,
            Some(cap) => used < cap,
        }
    }
}
