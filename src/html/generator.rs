//! Standalone quiz player generation

use super::template::{
    BODY_CLASS, MAIN_CLASS, PLAYER_SCRIPT, STYLE, TAILWIND_CDN, TAILWIND_CONFIG,
};
use super::writer::HtmlWriter;
use crate::error::{QuizError, Result};
use crate::types::Quiz;
use log::debug;
use std::io::Write;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Delay before a single-choice selection advances, 0 = next tick
    pub auto_advance_delay_ms: u32,
    /// Optional stylesheet script; the player still works if it fails to load
    pub stylesheet_url: Option<String>,
    /// Render with the dark palette
    pub dark_mode: bool,
    pub lang: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            auto_advance_delay_ms: 300,
            stylesheet_url: Some(TAILWIND_CDN.to_string()),
            dark_mode: true,
            lang: "en".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set auto-advance delay (builder pattern)
    pub fn auto_advance_delay_ms(mut self, ms: u32) -> Self {
        self.auto_advance_delay_ms = ms;
        self
    }

    /// Set or clear the CDN stylesheet (builder pattern)
    pub fn stylesheet_url(mut self, url: Option<String>) -> Self {
        self.stylesheet_url = url;
        self
    }

    /// Choose dark or light palette (builder pattern)
    pub fn dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    /// Set the document language (builder pattern)
    pub fn lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = lang.into();
        self
    }
}

/// Renders a [`Quiz`] into a single self-contained HTML document
///
/// The document embeds the quiz as JSON plus a script that plays it:
/// optional shuffle, countdown, navigation, grading and review. The
/// generator does not validate its input; run
/// [`QuizDraft::validate`](crate::draft::QuizDraft::validate) first.
///
/// # Examples
///
/// ```
/// use quizcraft::demo::demo_quiz;
/// use quizcraft::html::QuizHtmlGenerator;
///
/// let html = QuizHtmlGenerator::default().generate(&demo_quiz()).unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuizHtmlGenerator {
    options: GeneratorOptions,
}

impl QuizHtmlGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        QuizHtmlGenerator { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the artifact as a string
    ///
    /// Only fails if the quiz cannot be serialized, which does not happen
    /// for values built through this crate's types.
    pub fn generate(&self, quiz: &Quiz) -> Result<String> {
        let mut out = Vec::with_capacity(16 * 1024 + quiz.len() * 512);
        self.write_to(quiz, &mut out)?;
        String::from_utf8(out).map_err(|e| QuizError::WriteError(e.to_string()))
    }

    /// Stream the artifact into any writer
    pub fn write_to<W: Write>(&self, quiz: &Quiz, output: W) -> Result<()> {
        let payload = embeddable_json(quiz)?;
        let mut w = HtmlWriter::new(output);

        w.doctype()?;
        w.start_element("html")?;
        w.attribute("lang", &self.options.lang)?;
        if self.options.dark_mode {
            w.attribute("class", "dark")?;
        }
        w.close_start_tag()?;

        self.write_head(&mut w, quiz)?;

        w.write_str("\n")?;
        w.start_element("body")?;
        w.attribute("class", BODY_CLASS)?;
        w.close_start_tag()?;
        w.write_str("\n  ")?;

        w.start_element("main")?;
        w.attribute("id", "quiz-container")?;
        w.attribute("class", MAIN_CLASS)?;
        w.close_start_tag()?;
        w.write_str("\n    <div id=\"player-view\"></div>\n    ")?;
        w.write_str("<div id=\"results-view\" class=\"hidden\"></div>\n  ")?;
        w.end_element("main")?;
        w.write_str("\n\n  ")?;

        w.start_element("script")?;
        w.attribute("id", "quiz-data")?;
        w.attribute("type", "application/json")?;
        w.close_start_tag()?;
        w.write_str(&payload)?;
        w.end_element("script")?;
        w.write_str("\n\n  <script>\n")?;
        w.write_str("const AUTO_ADVANCE_DELAY_MS = ")?;
        w.write_int(u64::from(self.options.auto_advance_delay_ms))?;
        w.write_str(";")?;
        w.write_str(PLAYER_SCRIPT)?;
        w.write_str("  </script>\n")?;

        w.end_element("body")?;
        w.write_str("\n")?;
        w.end_element("html")?;
        w.write_str("\n")?;
        w.flush()?;

        debug!(
            "generated player for \"{}\" ({} questions)",
            quiz.title,
            quiz.len()
        );
        Ok(())
    }

    fn write_head<W: Write>(&self, w: &mut HtmlWriter<W>, quiz: &Quiz) -> Result<()> {
        w.write_str("\n<head>\n  <meta charset=\"UTF-8\">\n  ")?;
        w.write_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  ",
        )?;
        w.start_element("meta")?;
        w.attribute("name", "generator")?;
        w.attribute("content", concat!("quizcraft ", env!("CARGO_PKG_VERSION")))?;
        w.close_start_tag()?;
        w.write_str("\n  ")?;
        w.text_element("title", &quiz.title)?;
        w.write_str("\n")?;

        if let Some(url) = &self.options.stylesheet_url {
            w.write_str("  ")?;
            w.start_element("script")?;
            w.attribute("src", url)?;
            w.close_start_tag()?;
            w.end_element("script")?;
            w.write_str("\n  <script>")?;
            w.write_str(TAILWIND_CONFIG)?;
            w.write_str("</script>\n")?;
        }

        w.write_str("  <style>")?;
        w.write_str(STYLE)?;
        w.write_str("  </style>\n")?;
        w.end_element("head")
    }
}

/// Serialize the quiz for a `<script type="application/json">` block
///
/// `<`, `>` and `&` are emitted as JSON unicode escapes so user text such as
/// `</script>` cannot terminate the element. `JSON.parse` restores them.
pub fn embeddable_json(quiz: &Quiz) -> Result<String> {
    let json = quiz.to_json()?;
    let mut escaped = String::with_capacity(json.len() + 16);
    for ch in json.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            c => escaped.push(c),
        }
    }
    Ok(escaped)
}

/// Generate with default options
pub fn generate_quiz_html(quiz: &Quiz) -> Result<String> {
    QuizHtmlGenerator::default().generate(quiz)
}
