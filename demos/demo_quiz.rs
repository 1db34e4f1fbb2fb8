//! Demo Quiz Example
//!
//! Writes the built-in general knowledge quiz, once with the CDN stylesheet
//! and once fully offline.

use quizcraft::{demo_quiz, GeneratorOptions, QuizArtifact, QuizHtmlGenerator};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    println!("=== Demo Quiz ===\n");

    let quiz = demo_quiz();
    for q in &quiz.questions {
        print!("{}", q);
    }

    println!("\n1. Default styling...");
    let styled = QuizArtifact::from_quiz(&quiz, &QuizHtmlGenerator::default())?;
    let path = styled.save_in_dir(".")?;
    println!("   Wrote {}", path.display());

    println!("\n2. Offline, light theme, instant advance...");
    let offline = QuizHtmlGenerator::new(
        GeneratorOptions::new()
            .stylesheet_url(None)
            .dark_mode(false)
            .auto_advance_delay_ms(0),
    );
    let artifact = QuizArtifact::from_quiz(&quiz, &offline)?;
    artifact.save("demo-offline.html")?;
    println!("   Wrote demo-offline.html ({} bytes)", artifact.html().len());

    Ok(())
}
