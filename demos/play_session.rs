//! Play Session Example
//!
//! Runs the player state machine natively: answers a few questions, lets the
//! clock run out, and prints the review.

use quizcraft::session::PlayerState;
use quizcraft::{demo_quiz, QuizSession};

fn main() {
    pretty_env_logger::init();
    println!("=== Play Session ===\n");

    let quiz = demo_quiz();
    let mut session = QuizSession::start(&quiz);

    // Answer the first two questions with the first option
    for _ in 0..2 {
        if let Some(question) = session.current_question() {
            println!("Q: {}", question.text);
            println!("   -> {}", question.options[0]);
        }
        if let Some(pending) = session.select_option(0) {
            session.fire_auto_advance(pending);
        } else {
            session.next();
        }
    }

    let remaining = session.time_remaining();
    println!("\nWaiting out the clock ({}s left)...", remaining);
    let state = session.elapse(remaining);
    assert_eq!(state, PlayerState::Finished);

    if let Some(result) = session.result() {
        println!(
            "\nScore: {}% ({} / {}), {} points\n",
            result.score_percent, result.correct_count, result.total, result.points
        );
        for review in &result.reviews {
            let verdict = if review.is_correct { "Correct" } else { "Incorrect" };
            println!("[{}] {}", verdict, review.text);
            for option in &review.options {
                let mark = if option.is_correct {
                    "+"
                } else if option.is_wrong_selection() {
                    "x"
                } else {
                    " "
                };
                println!("   {} {}", mark, option.label);
            }
            if let Some(explanation) = &review.explanation {
                println!("   {}", explanation);
            }
        }
    }
}
