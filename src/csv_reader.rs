//! Reading question lists from CSV files on disk

use crate::csv::QuestionParser;
use crate::error::{QuizError, Result};
use crate::types::Question;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// CSV question file reader
///
/// Only files with a `.csv` extension are accepted. The whole file is read
/// and parsed at once since parsing is all-or-nothing.
///
/// # Examples
///
/// ```no_run
/// use quizcraft::csv_reader::QuestionReader;
///
/// let questions = QuestionReader::open("questions.csv")
///     .unwrap()
///     .read_questions()
///     .unwrap();
///
/// for q in &questions {
///     println!("{}", q);
/// }
/// ```
pub struct QuestionReader {
    path: PathBuf,
    contents: String,
    delimiter: u8,
}

impl QuestionReader {
    /// Open a CSV file
    ///
    /// Fails with [`QuizError::InvalidFileType`] if the extension is not
    /// `.csv` (case-insensitive).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let is_csv = path_ref
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(QuizError::InvalidFileType(path_ref.display().to_string()));
        }

        let contents = fs::read_to_string(path_ref)
            .map_err(|e| QuizError::ReadError(format!("Failed to read CSV file: {}", e)))?;

        Ok(QuestionReader {
            path: path_ref.to_path_buf(),
            contents,
            delimiter: b',',
        })
    }

    /// Set custom delimiter (builder pattern)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quizcraft::csv_reader::QuestionReader;
    ///
    /// let reader = QuestionReader::open("questions.csv")
    ///     .unwrap()
    ///     .delimiter(b';');
    /// ```
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Raw file contents
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every row into a question
    pub fn read_questions(&self) -> Result<Vec<Question>> {
        let questions = QuestionParser::new(self.delimiter).parse(&self.contents)?;
        info!(
            "loaded {} questions from {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions)
    }
}
