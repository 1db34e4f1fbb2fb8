//! Built-in demo quiz

use crate::types::{Question, QuestionType, Quiz, QuizSettings};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A five-question general knowledge quiz covering every question type
pub fn demo_quiz() -> Quiz {
    let questions = vec![
        Question::new(
            1,
            "What is the capital of France?",
            labels(&["Berlin", "Madrid", "Paris", "Rome"]),
        )
        .with_correct([2])
        .with_explanation("Paris is the capital and most populous city of France."),
        Question::new(
            2,
            "Which of the following are primary colors (in the additive color model)?",
            labels(&["Red", "Green", "Blue", "Yellow"]),
        )
        .with_type(QuestionType::Multiple)
        .with_correct([0, 1, 2])
        .with_explanation("The additive primary colors are Red, Green, and Blue (RGB)."),
        Question::new(3, "The Earth is the center of the universe.", Vec::new())
            .with_type(QuestionType::TrueFalse)
            .with_correct([1])
            .with_explanation(
                "The Earth revolves around the Sun, which is not the center of the universe.",
            ),
        Question::new(
            4,
            "Who wrote 'Hamlet'?",
            labels(&["Charles Dickens", "William Shakespeare", "Leo Tolstoy", "Mark Twain"]),
        )
        .with_correct([1])
        .with_explanation(
            "'Hamlet' is a tragedy written by William Shakespeare sometime between 1599 and 1601.",
        ),
        Question::new(
            5,
            "Which planets are gas giants?",
            labels(&["Mars", "Jupiter", "Saturn", "Venus"]),
        )
        .with_type(QuestionType::Multiple)
        .with_correct([1, 2])
        .with_explanation(
            "Jupiter and Saturn are the two largest planets and are known as gas giants.",
        ),
    ];

    Quiz::new(
        "General Knowledge Demo",
        questions,
        QuizSettings::new()
            .time_limit(300)
            .points_per_question(10)
            .shuffle_questions(true),
    )
}
