//! CSV utilities for turning question rows into [`Question`](crate::types::Question)s

mod parser;

pub use parser::{parse_questions, QuestionParser};
