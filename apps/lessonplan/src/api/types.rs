//! # API Request/Response Types
//!
//! This module defines the JSON and form structures for the HTTP API.

use lessonplan_core::{LessonRequest, PlanError, ProgramDefaults, RenderedPlan, Subject};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// PLAN REQUEST
// =============================================================================

/// Lesson plan form fields, shared by the HTML form and the JSON API.
///
/// Every field is plain text as submitted; the subject is checked in
/// [`PlanRequest::to_lesson_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub grade: String,
    pub subject: String,
    pub program: String,
    pub unit: String,
    pub lesson: String,
    pub standard: String,
}

impl PlanRequest {
    /// Convert to a `LessonRequest`, parsing the subject.
    ///
    /// A blank subject selects the default subject; any other unknown
    /// text is rejected with `PlanError::UnknownSubject`.
    pub fn to_lesson_request(&self) -> Result<LessonRequest, PlanError> {
        Ok(LessonRequest {
            grade: self.grade.clone(),
            subject: self.subject.parse()?,
            program: self.program.clone(),
            unit: self.unit.clone(),
            lesson: self.lesson.clone(),
            standard: self.standard.clone(),
        })
    }

    /// Subject to preselect when echoing the form back.
    #[must_use]
    pub fn selected_subject(&self) -> Subject {
        self.subject.parse().unwrap_or_default()
    }
}

// =============================================================================
// PLAN RESPONSE
// =============================================================================

/// Rendered plan response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    pub subject: Option<String>,
    pub program: Option<String>,
    pub title: Option<String>,
    /// Fragment for the display container.
    pub html: Option<String>,
    /// Whether the print action should be shown.
    pub printable: bool,
    pub error: Option<String>,
}

impl PlanResponse {
    pub fn success(plan: RenderedPlan) -> Self {
        Self {
            success: true,
            subject: Some(plan.subject.name().to_string()),
            program: Some(plan.program),
            title: Some(plan.title),
            html: Some(plan.html),
            printable: true,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            subject: None,
            program: None,
            title: None,
            html: None,
            printable: false,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// SUBJECTS RESPONSE
// =============================================================================

/// A subject and the program used when the program field is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub name: String,
    pub default_program: String,
}

/// Subject listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<SubjectInfo>,
}

impl SubjectsResponse {
    /// List every subject with its configured default program.
    pub fn from_defaults(defaults: &ProgramDefaults) -> Self {
        Self {
            subjects: Subject::ALL
                .into_iter()
                .map(|subject| SubjectInfo {
                    name: subject.name().to_string(),
                    default_program: defaults.for_subject(subject).to_string(),
                })
                .collect(),
        }
    }
}
