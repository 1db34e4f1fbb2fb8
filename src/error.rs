//! Error types for quiz parsing, authoring and generation

use std::fmt;
use thiserror::Error;

/// Result type alias for quizcraft operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Reason a CSV row was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Row had fewer than two fields (question + one option)
    TooFewFields,
    /// First field was empty after trimming
    EmptyQuestionText,
    /// Every option field was empty after trimming
    NoOptions,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseErrorKind::TooFewFields => {
                "Each row must have at least a question and one option."
            }
            ParseErrorKind::EmptyQuestionText => "Question text cannot be empty.",
            ParseErrorKind::NoOptions => "At least one option must be provided.",
        };
        f.write_str(msg)
    }
}

/// Errors that can occur while building or generating a quiz
#[derive(Error, Debug)]
pub enum QuizError {
    /// A CSV row failed validation; `row` is 1-based among non-blank lines
    #[error(
        "Error parsing line {row}: \"{line}\". Format: question,option1,option2,... Error: {kind}"
    )]
    Parse {
        row: usize,
        line: String,
        kind: ParseErrorKind,
    },

    #[error("Cannot generate quiz with no questions.")]
    NoQuestions,

    #[error("Please select a correct answer for every question before generating the quiz (question {question_id} has none).")]
    MissingCorrectAnswer { question_id: u32 },

    #[error("Unknown question id: {0}")]
    UnknownQuestion(u32),

    #[error("Invalid file type: {0}. Please upload a CSV file.")]
    InvalidFileType(String),

    #[error("Read error: {0}")]
    ReadError(String),

    #[error("Write error: {0}")]
    WriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuizError {
    /// True for errors caused by user input that can be fixed by editing
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            QuizError::Parse { .. }
                | QuizError::NoQuestions
                | QuizError::MissingCorrectAnswer { .. }
                | QuizError::InvalidFileType(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = QuizError::Parse {
            row: 1,
            line: "Bad Row".to_string(),
            kind: ParseErrorKind::TooFewFields,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Error parsing line 1: \"Bad Row\""));
        assert!(msg.ends_with("at least a question and one option."));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let err: QuizError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(!err.is_user_error());
    }
}
