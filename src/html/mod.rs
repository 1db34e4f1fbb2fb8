//! HTML artifact generation

mod generator;
mod template;
mod writer;

pub use generator::{embeddable_json, generate_quiz_html, GeneratorOptions, QuizHtmlGenerator};
pub use template::TAILWIND_CDN;
pub use writer::HtmlWriter;
