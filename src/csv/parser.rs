//! Line-based question parsing with plain delimiter splitting
//!
//! Rows look like `question,option1,option2,...`. There is no quoting: a
//! delimiter inside an option always starts a new field.

use crate::error::{ParseErrorKind, QuizError, Result};
use crate::types::Question;
use log::{debug, warn};

/// Parser for CSV question lists
pub struct QuestionParser {
    delimiter: u8,
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl QuestionParser {
    /// Create a new parser with a custom delimiter
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Split a line into trimmed fields
    pub fn split_line(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter as char)
            .map(|field| field.trim().to_string())
            .collect()
    }

    /// Parse a whole document into questions
    ///
    /// Blank lines are skipped and do not consume an id. Parsing stops at the
    /// first invalid row; the caller gets either every question or the error
    /// for that row, never a partial list.
    pub fn parse(&self, text: &str) -> Result<Vec<Question>> {
        let mut questions = Vec::new();

        let rows = text.split('\n').filter(|line| !line.trim().is_empty());
        for (index, line) in rows.enumerate() {
            let row = index + 1;
            let question = self.parse_row(row, line).map_err(|kind| {
                let line = line.trim_end_matches('\r').to_string();
                warn!("rejecting CSV row {}: {}", row, kind);
                QuizError::Parse { row, line, kind }
            })?;
            questions.push(question);
        }

        debug!("parsed {} questions from CSV", questions.len());
        Ok(questions)
    }

    fn parse_row(&self, row: usize, line: &str) -> std::result::Result<Question, ParseErrorKind> {
        let mut fields = self.split_line(line).into_iter();

        let text = fields.next().unwrap_or_default();
        let options: Vec<String> = fields.filter(|opt| !opt.is_empty()).collect();
        // Count fields, not options: "q," has two fields but no options
        let field_count = line.split(self.delimiter as char).count();

        if field_count < 2 {
            return Err(ParseErrorKind::TooFewFields);
        }
        if text.is_empty() {
            return Err(ParseErrorKind::EmptyQuestionText);
        }
        if options.is_empty() {
            return Err(ParseErrorKind::NoOptions);
        }

        Ok(Question::new(row as u32, text, options))
    }
}

/// Parse comma-separated questions with the default parser
pub fn parse_questions(text: &str) -> Result<Vec<Question>> {
    QuestionParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionType;

    fn expect_parse_error(text: &str) -> (usize, String, ParseErrorKind) {
        match parse_questions(text) {
            Err(QuizError::Parse { row, line, kind }) => (row, line, kind),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_row() {
        let questions = parse_questions("Capital of France?,Paris,Berlin,Rome").unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id, 1);
        assert_eq!(q.text, "Capital of France?");
        assert_eq!(q.options, vec!["Paris", "Berlin", "Rome"]);
        assert_eq!(q.question_type, QuestionType::Single);
        assert!(q.correct_answers.is_empty());
        assert!(q.explanation.is_none());
    }

    #[test]
    fn test_single_field_row() {
        let (row, line, kind) = expect_parse_error("Bad Row");
        assert_eq!(row, 1);
        assert_eq!(line, "Bad Row");
        assert_eq!(kind, ParseErrorKind::TooFewFields);
    }

    #[test]
    fn test_trims_fields() {
        let parser = QuestionParser::default();
        assert_eq!(parser.split_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "\nQ1,a,b\n   \n\r\nQ2,c\n\n";
        let questions = parse_questions(text).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
        assert_eq!(questions[1].text, "Q2");
    }

    #[test]
    fn test_crlf_line_endings() {
        let questions = parse_questions("Q1,a,b\r\nQ2,c,d\r\n").unwrap();
        assert_eq!(questions[0].options, vec!["a", "b"]);
        assert_eq!(questions[1].options, vec!["c", "d"]);
    }

    #[test]
    fn test_trailing_delimiters_dropped() {
        let questions = parse_questions("Q,a,b,,").unwrap();
        assert_eq!(questions[0].options, vec!["a", "b"]);
    }

    #[test]
    fn test_inner_empty_option_dropped() {
        let questions = parse_questions("Q,a,,b").unwrap();
        assert_eq!(questions[0].options, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_question_text() {
        let (row, _, kind) = expect_parse_error(" ,a,b");
        assert_eq!(row, 1);
        assert_eq!(kind, ParseErrorKind::EmptyQuestionText);
    }

    #[test]
    fn test_no_options_after_trim() {
        let (_, line, kind) = expect_parse_error("Question, , ,");
        assert_eq!(line, "Question, , ,");
        assert_eq!(kind, ParseErrorKind::NoOptions);
    }

    #[test]
    fn test_first_bad_row_reported() {
        let text = "Q1,a\n\nbad\nQ3,b\nalso bad";
        let (row, line, _) = expect_parse_error(text);
        // Blank line is not counted
        assert_eq!(row, 2);
        assert_eq!(line, "bad");
    }

    #[test]
    fn test_quoted_comma_is_a_separator() {
        let questions = parse_questions("Q,\"a,b\"").unwrap();
        assert_eq!(questions[0].options, vec!["\"a", "b\""]);
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = QuestionParser::new(b';');
        let questions = parser.parse("Q;a, b;c").unwrap();
        assert_eq!(questions[0].options, vec!["a, b", "c"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Q1,a,b\nQ2,c,d,e\nQ3,f";
        assert_eq!(parse_questions(text).unwrap(), parse_questions(text).unwrap());
    }

    #[test]
    fn test_row_count_and_ids() {
        let text: String = (0..25).map(|i| format!("Question {},x,y\n", i)).collect();
        let questions = parse_questions(&text).unwrap();
        assert_eq!(questions.len(), 25);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert_eq!(q.text, format!("Question {}", i));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_questions("").unwrap().is_empty());
        assert!(parse_questions("\n  \n").unwrap().is_empty());
    }
}
