//! CSV to Quiz Example
//!
//! Reads a question CSV, marks answers, and writes a playable HTML quiz.
//!
//! Usage: cargo run --example csv_to_quiz -- [questions.csv] [title]
//!
//! The CSV format carries no answer key, so this demo marks the first option
//! of every question as correct. A real front end lets the author pick.

use quizcraft::{QuestionReader, QuizArtifact, QuizDraft, QuizHtmlGenerator, QuizSettings};
use std::env;
use std::error::Error;

const SAMPLE: &str = "\
What is 2 + 2?,4,3,5
Largest ocean?,Pacific,Atlantic,Indian
Fastest land animal?,Cheetah,Horse,Greyhound
";

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    println!("=== CSV to Quiz ===\n");

    let args: Vec<String> = env::args().skip(1).collect();
    let title = args.get(1).cloned().unwrap_or_else(|| "CSV Quiz".to_string());

    let mut draft = QuizDraft::new()
        .with_title(title)
        .with_settings(QuizSettings::new().time_limit(120).points_per_question(5));

    // 1. Load questions
    match args.first() {
        Some(path) => {
            println!("1. Reading {}...", path);
            let questions = QuestionReader::open(path)?.read_questions()?;
            draft = draft.with_questions(questions);
        }
        None => {
            println!("1. No file given, using built-in sample...");
            draft.load_csv(SAMPLE)?;
        }
    }
    println!("   {} questions loaded", draft.questions().len());

    // 2. Mark answers
    println!("\n2. Marking first option as correct...");
    let ids: Vec<u32> = draft.questions().iter().map(|q| q.id).collect();
    for id in ids {
        draft.set_correct_answer(id, 0, true)?;
    }

    // 3. Validate and generate
    println!("\n3. Generating player...");
    let quiz = draft.build()?;
    let artifact = QuizArtifact::from_quiz(&quiz, &QuizHtmlGenerator::default())?;
    let path = artifact.save_in_dir(".")?;

    println!("   Wrote {} ({} bytes)", path.display(), artifact.html().len());
    println!("\nOpen the file in a browser to play.");
    Ok(())
}
