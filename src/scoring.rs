//! Grading rules shared by the native session and mirrored by the player script

use crate::types::Question;
use indexmap::{IndexMap, IndexSet};

/// Exact set equality between the correct set and a selection
///
/// Partial overlap is wrong; an empty selection is wrong unless the correct
/// set is also empty.
pub fn is_answer_correct(correct: &IndexSet<usize>, selected: &IndexSet<usize>) -> bool {
    correct.len() == selected.len() && correct.iter().all(|i| selected.contains(i))
}

/// `round(100 * correct / total)`, 0 for an empty quiz
pub fn score_percent(correct_count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct_count as f64 / total as f64 * 100.0).round() as u32
}

/// Review line for a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionReview {
    pub label: String,
    pub is_correct: bool,
    pub was_selected: bool,
}

impl OptionReview {
    /// Selected but not part of the correct set
    pub fn is_wrong_selection(&self) -> bool {
        self.was_selected && !self.is_correct
    }
}

/// Per-question review shown after finishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question_id: u32,
    pub text: String,
    pub is_correct: bool,
    pub options: Vec<OptionReview>,
    pub explanation: Option<String>,
}

/// Final outcome of a play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
    pub score_percent: u32,
    pub points: u64,
    pub reviews: Vec<QuestionReview>,
}

/// Grade questions (in play order) against recorded selections
///
/// Questions without a recorded selection count as incorrect.
pub fn grade(
    questions: &[Question],
    answers: &IndexMap<u32, IndexSet<usize>>,
    points_per_question: u32,
) -> QuizResult {
    let empty = IndexSet::new();

    let reviews: Vec<QuestionReview> = questions
        .iter()
        .map(|question| {
            let selected = answers.get(&question.id).unwrap_or(&empty);
            QuestionReview {
                question_id: question.id,
                text: question.text.clone(),
                is_correct: is_answer_correct(&question.correct_answers, selected),
                options: question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, label)| OptionReview {
                        label: label.clone(),
                        is_correct: question.is_correct_option(i),
                        was_selected: selected.contains(&i),
                    })
                    .collect(),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = reviews.iter().filter(|r| r.is_correct).count();
    let total = questions.len();

    QuizResult {
        correct_count,
        total,
        score_percent: score_percent(correct_count, total),
        points: correct_count as u64 * u64::from(points_per_question),
        reviews,
    }
}
