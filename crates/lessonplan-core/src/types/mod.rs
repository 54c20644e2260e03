//! # Core Type Definitions
//!
//! This module contains the input and error types for the renderer:
//! - Subject selection (`Subject`)
//! - The form record (`LessonRequest`)
//! - Error types (`PlanError`)
//!
//! ## Lifecycle
//!
//! A `LessonRequest` lives for exactly one render call. It has no identity,
//! is never stored, and rendering never mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SUBJECT
// =============================================================================

/// The subject a lesson is planned for.
///
/// The subject decides two things: the default program and which prose
/// bundle fills the document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String")]
pub enum Subject {
    /// Reading / language arts.
    #[default]
    Reading,
    /// Mathematics.
    Math,
}

impl Subject {
    /// Every subject, in form order.
    pub const ALL: [Subject; 2] = [Subject::Reading, Subject::Math];

    /// Display name, also used as the form value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Math => "Math",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive and trimmed. Blank text selects the default subject.
impl FromStr for Subject {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Self::ALL
            .into_iter()
            .find(|subject| subject.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PlanError::UnknownSubject(trimmed.to_string()))
    }
}

impl TryFrom<String> for Subject {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// LESSON REQUEST
// =============================================================================

/// One submission of the lesson plan form.
///
/// Every text field is free text and may be blank. Blank fields are not an
/// error: the renderer substitutes the subject default (program) or a
/// placeholder (everything else).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonRequest {
    /// Grade level, e.g. "3" or "Kindergarten".
    pub grade: String,
    /// Subject; selects the prose bundle.
    pub subject: Subject,
    /// Curriculum program. Blank means the subject default.
    pub program: String,
    /// Unit, e.g. "2/Module 4".
    pub unit: String,
    /// Lesson number or title.
    pub lesson: String,
    /// Standard code and text, e.g. a TEKS reference.
    pub standard: String,
}

impl LessonRequest {
    /// Create a request for a subject with every text field blank.
    #[must_use]
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lesson = lesson.into();
        self
    }

    #[must_use]
    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = standard.into();
        self
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised at the boundaries around the renderer.
///
/// Rendering itself is infallible; these cover parsing input, loading
/// configuration and writing output.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The subject text is neither Reading nor Math.
    #[error("Unknown subject '{0}' (expected Reading or Math)")]
    UnknownSubject(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn subject_parses_case_insensitively() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("READING".parse::<Subject>().unwrap(), Subject::Reading);
        assert_eq!("  Math ".parse::<Subject>().unwrap(), Subject::Math);
    }

    #[test]
    fn unknown_subject_rejected() {
        let result = "Science".parse::<Subject>();
        assert!(matches!(result, Err(PlanError::UnknownSubject(s)) if s == "Science"));
    }

    #[test]
    fn blank_subject_parses_to_default() {
        assert_eq!("".parse::<Subject>().unwrap(), Subject::Reading);
        assert_eq!(" \t ".parse::<Subject>().unwrap(), Subject::Reading);

        let request: LessonRequest = serde_json::from_str(r#"{"subject":"","grade":"1"}"#).unwrap();
        assert_eq!(request, LessonRequest::new(Subject::Reading).with_grade("1"));
    }

    #[test]
    fn subject_defaults_to_reading() {
        assert_eq!(Subject::default(), Subject::Reading);
        assert_eq!(LessonRequest::default().subject, Subject::Reading);
    }

    #[test]
    fn subject_deserializes_through_parser() {
        let subject: Subject = serde_json::from_str("\"math\"").unwrap();
        assert_eq!(subject, Subject::Math);

        let bad: Result<Subject, _> = serde_json::from_str("\"Art\"");
        assert!(bad.is_err());
    }

    #[test]
    fn request_missing_fields_default_to_blank() {
        let request: LessonRequest = serde_json::from_str(r#"{"subject":"Math"}"#).unwrap();
        assert_eq!(request, LessonRequest::new(Subject::Math));
    }

    #[test]
    fn builder_sets_fields() {
        let request = LessonRequest::new(Subject::Reading)
            .with_grade("2")
            .with_unit("3")
            .with_lesson("7");
        assert_eq!(request.grade, "2");
        assert_eq!(request.unit, "3");
        assert_eq!(request.lesson, "7");
        assert!(request.program.is_empty());
    }
}
