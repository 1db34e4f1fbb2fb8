//! Generated artifacts and how they leave the library

use crate::error::{QuizError, Result};
use crate::html::QuizHtmlGenerator;
use crate::types::Quiz;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// A generated, playable quiz document
///
/// Owns its own copy of the markup; editing the source quiz afterwards has
/// no effect on it.
///
/// # Examples
///
/// ```no_run
/// use quizcraft::artifact::QuizArtifact;
/// use quizcraft::demo::demo_quiz;
/// use quizcraft::html::QuizHtmlGenerator;
///
/// let artifact = QuizArtifact::from_quiz(&demo_quiz(), &QuizHtmlGenerator::default()).unwrap();
/// let path = artifact.save_in_dir(".").unwrap();
/// println!("open {} in a browser", path.display());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizArtifact {
    title: String,
    html: String,
}

impl QuizArtifact {
    pub fn from_quiz(quiz: &Quiz, generator: &QuizHtmlGenerator) -> Result<Self> {
        Ok(QuizArtifact {
            title: quiz.title.clone(),
            html: generator.generate(quiz)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// File name derived from the quiz title, e.g. `general-knowledge-demo.html`
    pub fn file_name(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                slug.extend(ch.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "quiz.html".to_string()
        } else {
            format!("{}.html", slug)
        }
    }

    /// Write the document to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.html.as_bytes())
            .map_err(|e| QuizError::WriteError(format!("Failed to write {}: {}", path.display(), e)))?;
        info!("saved quiz \"{}\" to {}", self.title, path.display());
        Ok(())
    }

    /// Write into `dir` using [`QuizArtifact::file_name`]
    pub fn save_in_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        self.save(&path)?;
        Ok(path)
    }

    /// `data:` URL suitable for an iframe `src` or a new browser tab
    pub fn data_url(&self) -> String {
        let mut url = String::with_capacity(self.html.len() * 2 + 32);
        url.push_str("data:text/html;charset=utf-8,");
        for byte in self.html.bytes() {
            if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
                url.push(byte as char);
            } else {
                url.push('%');
                url.push(char::from(HEX[(byte >> 4) as usize]));
                url.push(char::from(HEX[(byte & 0x0f) as usize]));
            }
        }
        url
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_quiz;

    fn artifact_titled(title: &str) -> QuizArtifact {
        QuizArtifact {
            title: title.to_string(),
            html: "<p>é ok</p>".to_string(),
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            artifact_titled("General Knowledge Demo").file_name(),
            "general-knowledge-demo.html"
        );
        assert_eq!(artifact_titled("  C++ / Rust?! ").file_name(), "c-rust.html");
        assert_eq!(artifact_titled("***").file_name(), "quiz.html");
        assert_eq!(artifact_titled("").file_name(), "quiz.html");
    }

    #[test]
    fn test_data_url() {
        let url = artifact_titled("x").data_url();
        assert_eq!(url, "data:text/html;charset=utf-8,%3Cp%3E%C3%A9%20ok%3C%2Fp%3E");
    }

    #[test]
    fn test_save_in_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let artifact = QuizArtifact::from_quiz(&demo_quiz(), &QuizHtmlGenerator::default())?;
        let path = artifact.save_in_dir(dir.path())?;

        assert_eq!(path.file_name().unwrap(), "general-knowledge-demo.html");
        assert_eq!(fs::read_to_string(&path)?, artifact.html());
        Ok(())
    }

    #[test]
    fn test_save_to_missing_dir_fails() {
        let artifact = artifact_titled("x");
        assert!(matches!(
            artifact.save("no/such/dir/quiz.html"),
            Err(QuizError::WriteError(_))
        ));
    }
}
