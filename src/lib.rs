//! # quizcraft
//!
//! Turn a CSV list of questions into a single, self-contained HTML file that
//! plays the quiz in any browser with no server.
//!
//! # Features
//!
//! - All-or-nothing CSV question parsing with row-level error reports
//! - Authoring draft with question editing and completeness checks
//! - Player generation: timer, navigation, auto-advance, scoring and review
//! - Native session model of the player for testing grading and timing
//!
//! # Quick Start
//!
//! ```
//! use quizcraft::{generate_quiz_html, QuizDraft};
//!
//! let mut draft = QuizDraft::new().with_title("Capitals");
//! draft.load_csv("Capital of France?,Paris,Berlin,Rome").unwrap();
//! draft.set_correct_answer(1, 0, true).unwrap();
//!
//! let quiz = draft.build().unwrap();
//! let html = generate_quiz_html(&quiz).unwrap();
//! assert!(html.contains("<title>Capitals</title>"));
//! ```

pub mod artifact;
pub mod csv;
pub mod csv_reader;
pub mod demo;
pub mod draft;
pub mod error;
pub mod html;
pub mod scoring;
pub mod session;
pub mod types;

pub use artifact::QuizArtifact;
pub use csv::{parse_questions, QuestionParser};
pub use csv_reader::QuestionReader;
pub use demo::demo_quiz;
pub use draft::QuizDraft;
pub use error::{ParseErrorKind, QuizError, Result};
pub use html::{generate_quiz_html, GeneratorOptions, QuizHtmlGenerator};
pub use scoring::QuizResult;
pub use session::{PlayerState, QuizSession};
pub use types::{Question, QuestionType, Quiz, QuizSettings};
