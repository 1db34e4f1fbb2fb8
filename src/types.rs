//! Type definitions for quiz documents

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer-selection mode of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Exactly one option
    #[default]
    Single,
    /// One or more options
    Multiple,
    /// Fixed "True" / "False" options
    TrueFalse,
}

impl QuestionType {
    /// Whether selecting an option replaces the previous selection
    pub fn is_single_choice(&self) -> bool {
        !matches!(self, QuestionType::Multiple)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Single => "SINGLE",
            QuestionType::Multiple => "MULTIPLE",
            QuestionType::TrueFalse => "TRUE_FALSE",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options forced onto every TRUE_FALSE question
pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// A single quiz question
///
/// `correct_answers` holds option indices. It keeps insertion order so the
/// authoring form can display choices as they were made, but grading only
/// looks at membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answers: IndexSet<usize>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Create a SINGLE question with no correct answer selected yet
    pub fn new<S: Into<String>>(id: u32, text: S, options: Vec<String>) -> Self {
        Question {
            id,
            text: text.into(),
            options,
            correct_answers: IndexSet::new(),
            question_type: QuestionType::Single,
            explanation: None,
        }
    }

    /// Set correct answers (builder pattern)
    pub fn with_correct<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.correct_answers = indices.into_iter().collect();
        self
    }

    /// Set the question type (builder pattern), see [`Question::set_type`]
    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.set_type(question_type);
        self
    }

    /// Set explanation (builder pattern)
    pub fn with_explanation<S: Into<String>>(mut self, explanation: S) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Change the question type
    ///
    /// Always clears the correct answers. Switching to TRUE_FALSE replaces
    /// the options with `["True", "False"]`.
    pub fn set_type(&mut self, question_type: QuestionType) {
        self.question_type = question_type;
        if question_type == QuestionType::TrueFalse {
            self.options = TRUE_FALSE_OPTIONS.iter().map(|s| s.to_string()).collect();
        }
        self.correct_answers.clear();
    }

    /// Mark or unmark an option as correct
    ///
    /// SINGLE and TRUE_FALSE questions keep at most one correct answer, so
    /// `checked` is ignored for them and the index replaces any prior one.
    /// Out-of-range indices are ignored.
    pub fn toggle_correct(&mut self, index: usize, checked: bool) {
        if index >= self.options.len() {
            return;
        }
        if self.question_type.is_single_choice() {
            self.correct_answers.clear();
            self.correct_answers.insert(index);
        } else if checked {
            self.correct_answers.insert(index);
        } else {
            self.correct_answers.shift_remove(&index);
        }
    }

    pub fn is_correct_option(&self, index: usize) -> bool {
        self.correct_answers.contains(&index)
    }

    /// A question is complete once at least one correct answer is recorded
    pub fn is_complete(&self) -> bool {
        !self.correct_answers.is_empty()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {} [{}]", self.id, self.text, self.question_type)?;
        for (i, option) in self.options.iter().enumerate() {
            let mark = if self.is_correct_option(i) { '*' } else { ' ' };
            writeln!(f, "  {} {}) {}", mark, i + 1, option)?;
        }
        Ok(())
    }
}

/// Player settings embedded in the generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    /// Time limit in seconds, 0 for no limit
    pub time_limit: u32,
    pub points_per_question: u32,
    /// Shuffle question order once when the player starts
    pub shuffle_questions: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            time_limit: 300,
            points_per_question: 10,
            shuffle_questions: true,
        }
    }
}

impl QuizSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set time limit in seconds (builder pattern)
    pub fn time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = seconds;
        self
    }

    /// Set points awarded per correct answer (builder pattern)
    pub fn points_per_question(mut self, points: u32) -> Self {
        self.points_per_question = points;
        self
    }

    /// Enable or disable question shuffling (builder pattern)
    pub fn shuffle_questions(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }

    pub fn is_timed(&self) -> bool {
        self.time_limit > 0
    }
}

/// A complete quiz document, as handed to the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
    pub settings: QuizSettings,
}

impl Quiz {
    pub fn new<S: Into<String>>(title: S, questions: Vec<Question>, settings: QuizSettings) -> Self {
        Quiz {
            title: title.into(),
            questions,
            settings,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Maximum points reachable with every answer correct
    pub fn max_points(&self) -> u64 {
        self.questions.len() as u64 * u64::from(self.settings.points_per_question)
    }

    /// Serialize to the JSON interchange format embedded in artifacts
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
