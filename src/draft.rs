//! Editable quiz state owned by the authoring side
//!
//! A [`QuizDraft`] holds everything the authoring form edits. Generation
//! only ever sees the independent [`Quiz`] value returned by
//! [`QuizDraft::build`].

use crate::csv::QuestionParser;
use crate::error::{QuizError, Result};
use crate::types::{Question, QuestionType, Quiz, QuizSettings};
use log::{debug, info};

/// Title used for a fresh draft
pub const DEFAULT_TITLE: &str = "My New Quiz";

/// Quiz under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub title: String,
    pub settings: QuizSettings,
    questions: Vec<Question>,
}

impl Default for QuizDraft {
    fn default() -> Self {
        QuizDraft {
            title: DEFAULT_TITLE.to_string(),
            settings: QuizSettings::default(),
            questions: Vec::new(),
        }
    }
}

impl QuizDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set title (builder pattern)
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set settings (builder pattern)
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace all questions
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Replace the question list from CSV text
    ///
    /// On a parse error the question list is cleared and the error returned.
    pub fn load_csv(&mut self, text: &str) -> Result<usize> {
        self.load_csv_with(&QuestionParser::default(), text)
    }

    pub fn load_csv_with(&mut self, parser: &QuestionParser, text: &str) -> Result<usize> {
        match parser.parse(text) {
            Ok(questions) => {
                info!("draft loaded {} questions", questions.len());
                self.questions = questions;
                Ok(self.questions.len())
            }
            Err(e) => {
                self.questions.clear();
                Err(e)
            }
        }
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn question_mut(&mut self, id: u32) -> Result<&mut Question> {
        self.questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuizError::UnknownQuestion(id))
    }

    pub fn update_text<S: Into<String>>(&mut self, id: u32, text: S) -> Result<()> {
        self.question_mut(id)?.text = text.into();
        Ok(())
    }

    /// Rename an option; indices past the end are ignored
    pub fn update_option<S: Into<String>>(&mut self, id: u32, index: usize, value: S) -> Result<()> {
        let question = self.question_mut(id)?;
        if let Some(option) = question.options.get_mut(index) {
            *option = value.into();
        }
        Ok(())
    }

    /// Change a question's type, see [`Question::set_type`]
    pub fn set_type(&mut self, id: u32, question_type: QuestionType) -> Result<()> {
        self.question_mut(id)?.set_type(question_type);
        Ok(())
    }

    /// Mark or unmark a correct option, see [`Question::toggle_correct`]
    pub fn set_correct_answer(&mut self, id: u32, index: usize, checked: bool) -> Result<()> {
        self.question_mut(id)?.toggle_correct(index, checked);
        Ok(())
    }

    pub fn set_explanation(&mut self, id: u32, explanation: Option<String>) -> Result<()> {
        self.question_mut(id)?.explanation = explanation.filter(|e| !e.trim().is_empty());
        Ok(())
    }

    /// Check the draft can be generated
    ///
    /// Requires at least one question and a correct answer on every question.
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if let Some(q) = self.questions.iter().find(|q| !q.is_complete()) {
            debug!("question {} has no correct answer", q.id);
            return Err(QuizError::MissingCorrectAnswer { question_id: q.id });
        }
        Ok(())
    }

    /// Validate and snapshot into a [`Quiz`]
    pub fn build(&self) -> Result<Quiz> {
        self.validate()?;
        Ok(Quiz::new(
            self.title.clone(),
            self.questions.clone(),
            self.settings,
        ))
    }
}
