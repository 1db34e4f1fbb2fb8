//! Native model of the quiz player state machine
//!
//! The generated artifact runs this same flow in the browser. Modeling it
//! here keeps navigation, timing and grading testable without a DOM: timer
//! ticks and the deferred auto-advance become explicit method calls.

use crate::scoring::{self, QuizResult};
use crate::types::{Question, Quiz, QuizSettings};
use indexmap::{IndexMap, IndexSet};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Showing the question at `index` (in play order)
    Playing { index: usize },
    /// Terminal: results are available
    Finished,
}

/// Pending auto-advance scheduled by a single-choice selection
///
/// Only honoured if nothing has navigated since it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    generation: u64,
}

/// One play-through of a quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    settings: QuizSettings,
    answers: IndexMap<u32, IndexSet<usize>>,
    state: PlayerState,
    time_remaining: u32,
    timer_running: bool,
    // bumped on every navigation so stale auto-advances can be detected
    generation: u64,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Start a session, shuffling with the thread-local RNG if enabled
    pub fn start(quiz: &Quiz) -> Self {
        Self::start_with_rng(quiz, &mut rand::thread_rng())
    }

    /// Start a session with an explicit RNG
    ///
    /// The quiz is copied; option order inside each question is kept.
    pub fn start_with_rng<R: Rng + ?Sized>(quiz: &Quiz, rng: &mut R) -> Self {
        let mut questions = quiz.questions.clone();
        if quiz.settings.shuffle_questions {
            questions.shuffle(rng);
        }

        let timer_running = quiz.settings.is_timed();
        debug!(
            "starting session: {} questions, time limit {}s",
            questions.len(),
            quiz.settings.time_limit
        );

        QuizSession {
            questions,
            settings: quiz.settings,
            answers: IndexMap::new(),
            state: PlayerState::Playing { index: 0 },
            time_remaining: quiz.settings.time_limit,
            timer_running,
            generation: 0,
            result: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayerState::Finished
    }

    /// Questions in play order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            PlayerState::Playing { index } => self.questions.get(index),
            PlayerState::Finished => None,
        }
    }

    /// Recorded selection for a question, if the user has interacted with it
    pub fn selection(&self, question_id: u32) -> Option<&IndexSet<usize>> {
        self.answers.get(&question_id)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Whether the countdown is active
    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.state, PlayerState::Playing { index } if index > 0)
    }

    /// Select an option on the current question
    ///
    /// Single-choice questions replace the selection and return an
    /// [`AutoAdvance`] to fire later. Multiple-choice questions toggle the
    /// option and never auto-advance.
    pub fn select_option(&mut self, option_index: usize) -> Option<AutoAdvance> {
        let question = self.current_question()?;
        if option_index >= question.options.len() {
            return None;
        }
        let id = question.id;
        let single = question.question_type.is_single_choice();

        let selection = self.answers.entry(id).or_default();
        if single {
            selection.clear();
            selection.insert(option_index);
            Some(AutoAdvance {
                generation: self.generation,
            })
        } else {
            if !selection.shift_remove(&option_index) {
                selection.insert(option_index);
            }
            None
        }
    }

    /// Apply a pending auto-advance; returns false if it went stale
    pub fn fire_auto_advance(&mut self, pending: AutoAdvance) -> bool {
        if self.is_finished() || pending.generation != self.generation {
            return false;
        }
        self.next();
        true
    }

    /// Move to the next question, finishing after the last one
    pub fn next(&mut self) -> PlayerState {
        if let PlayerState::Playing { index } = self.state {
            self.generation += 1;
            if index + 1 < self.questions.len() {
                self.state = PlayerState::Playing { index: index + 1 };
            } else {
                self.finish();
            }
        }
        self.state
    }

    /// Move back one question; answers are untouched
    pub fn previous(&mut self) -> PlayerState {
        if let PlayerState::Playing { index } = self.state {
            if index > 0 {
                self.generation += 1;
                self.state = PlayerState::Playing { index: index - 1 };
            }
        }
        self.state
    }

    /// One second of countdown
    ///
    /// Reaching zero forces the session to finish. No-op when untimed or
    /// already finished.
    pub fn tick(&mut self) -> PlayerState {
        if !self.timer_running {
            return self.state;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            debug!("time limit reached");
            self.finish();
        }
        self.state
    }

    /// Advance the clock by several seconds
    pub fn elapse(&mut self, seconds: u32) -> PlayerState {
        for _ in 0..seconds {
            if !self.timer_running {
                break;
            }
            self.tick();
        }
        self.state
    }

    /// Stop the timer and grade; repeated calls keep the first result
    pub fn finish(&mut self) -> &QuizResult {
        if self.result.is_none() {
            self.generation += 1;
            self.timer_running = false;
            self.state = PlayerState::Finished;
        }
        let questions = &self.questions;
        let answers = &self.answers;
        let points = self.settings.points_per_question;
        self.result
            .get_or_insert_with(|| scoring::grade(questions, answers, points))
    }

    /// Final result once finished
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn opts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("opt{}", i)).collect()
    }

    fn two_question_quiz(settings: QuizSettings) -> Quiz {
        Quiz::new(
            "Two",
            vec![
                Question::new(1, "Q1", opts(3)).with_correct([1]),
                Question::new(2, "Q2", opts(2)).with_correct([0]),
            ],
            settings,
        )
    }

    fn unshuffled(time_limit: u32, points: u32) -> QuizSettings {
        QuizSettings::new()
            .time_limit(time_limit)
            .points_per_question(points)
            .shuffle_questions(false)
    }

    #[test]
    fn test_answer_both_correctly() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 10)));

        let pending = session.select_option(1).unwrap();
        assert!(session.fire_auto_advance(pending));
        assert_eq!(session.state(), PlayerState::Playing { index: 1 });

        let pending = session.select_option(0).unwrap();
        assert!(session.fire_auto_advance(pending));
        assert!(session.is_finished());

        let result = session.result().unwrap();
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.score_percent, 100);
        assert_eq!(result.points, 20);
    }

    #[test]
    fn test_single_choice_replaces_selection() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 1)));
        session.select_option(0);
        session.select_option(2);
        assert_eq!(
            session.selection(1).unwrap().iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_multiple_toggles_without_advance() {
        let question = Question::new(1, "Pick", opts(3))
            .with_type(QuestionType::Multiple)
            .with_correct([0, 1, 2]);
        let quiz = Quiz::new("M", vec![question], unshuffled(0, 1));
        let mut session = QuizSession::start(&quiz);

        assert!(session.select_option(0).is_none());
        assert!(session.select_option(1).is_none());
        assert!(session.select_option(2).is_none());
        assert!(session.select_option(2).is_none());
        assert_eq!(session.state(), PlayerState::Playing { index: 0 });

        let result = session.finish();
        assert_eq!(result.correct_count, 0);
    }

    #[test]
    fn test_multiple_empty_selection_is_incorrect() {
        let question = Question::new(1, "Pick", opts(2))
            .with_type(QuestionType::Multiple)
            .with_correct([0]);
        let quiz = Quiz::new("M", vec![question], unshuffled(0, 1));
        let mut session = QuizSession::start(&quiz);
        session.select_option(0);
        session.select_option(0);
        assert!(session.selection(1).unwrap().is_empty());
        assert_eq!(session.finish().correct_count, 0);
    }

    #[test]
    fn test_previous_preserves_answers() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 1)));
        assert!(!session.can_go_previous());
        session.select_option(1);
        session.next();
        assert!(session.can_go_previous());
        session.previous();
        assert_eq!(session.state(), PlayerState::Playing { index: 0 });
        assert!(session.selection(1).unwrap().contains(&1));

        // Previous at the first question does nothing
        session.previous();
        assert_eq!(session.state(), PlayerState::Playing { index: 0 });
    }

    #[test]
    fn test_stale_auto_advance_ignored() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 1)));
        let pending = session.select_option(1).unwrap();
        // User clicks Next before the delay elapses
        session.next();
        assert!(!session.fire_auto_advance(pending));
        assert_eq!(session.state(), PlayerState::Playing { index: 1 });
    }

    #[test]
    fn test_auto_advance_after_finish_ignored() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 1)));
        let pending = session.select_option(1).unwrap();
        session.finish();
        assert!(!session.fire_auto_advance(pending));
        assert!(session.is_finished());
    }

    #[test]
    fn test_timeout_forces_finish() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(5, 10)));
        assert!(session.timer_running());

        assert_eq!(session.elapse(4), PlayerState::Playing { index: 0 });
        assert_eq!(session.time_remaining(), 1);
        assert_eq!(session.tick(), PlayerState::Finished);
        assert!(!session.timer_running());

        let result = session.result().unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.points, 0);
    }

    #[test]
    fn test_timeout_keeps_recorded_answers() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(3, 10)));
        session.select_option(1);
        session.elapse(3);
        let result = session.result().unwrap();
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.score_percent, 50);
    }

    #[test]
    fn test_untimed_never_finishes_from_clock() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 10)));
        assert!(!session.timer_running());
        for _ in 0..10_000 {
            session.tick();
        }
        assert_eq!(session.state(), PlayerState::Playing { index: 0 });
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_manual_finish_stops_timer() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(60, 10)));
        session.next();
        session.next();
        assert!(session.is_finished());
        assert!(!session.timer_running());
        let before = session.time_remaining();
        session.tick();
        assert_eq!(session.time_remaining(), before);
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut session = QuizSession::start(&two_question_quiz(unshuffled(0, 10)));
        session.finish();
        assert!(session.select_option(0).is_none());
        assert_eq!(session.next(), PlayerState::Finished);
        assert_eq!(session.previous(), PlayerState::Finished);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let questions: Vec<Question> = (1..=20)
            .map(|id| Question::new(id, format!("Q{}", id), opts(4)).with_correct([0]))
            .collect();
        let quiz = Quiz::new("S", questions, QuizSettings::new().shuffle_questions(true));
        let mut rng = StdRng::seed_from_u64(7);
        let session = QuizSession::start_with_rng(&quiz, &mut rng);

        let mut ids: Vec<u32> = session.questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
        for q in session.questions() {
            assert_eq!(q.options, opts(4));
        }
        // Source quiz order is untouched
        assert_eq!(quiz.questions[0].id, 1);
    }
}
