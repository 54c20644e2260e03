//! # Field Resolution and Token Fill
//!
//! Turns a `LessonRequest` into the values printed in the plan, then
//! substitutes them into prose templates.
//!
//! Fill is a single left-to-right pass: substituted values are never scanned
//! again, so a teacher typing `{unit}` into a field gets the literal text.

use crate::primitives::{
    GRADE_PLACEHOLDER, LESSON_PLACEHOLDER, STANDARD_PLACEHOLDER, UNIT_PLACEHOLDER, WRITE_IN_LINE,
};
use crate::render::ProgramDefaults;
use crate::{LessonRequest, Subject};

/// Field values after defaults and placeholders are applied.
///
/// Borrowed from the request and the program defaults; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFields<'a> {
    pub subject: Subject,
    pub grade: &'a str,
    pub program: &'a str,
    pub unit: &'a str,
    pub lesson: &'a str,
    pub standard: &'a str,
}

impl<'a> ResolvedFields<'a> {
    /// Resolve a request against the configured program defaults.
    #[must_use]
    pub fn resolve(request: &'a LessonRequest, defaults: &'a ProgramDefaults) -> Self {
        Self {
            subject: request.subject,
            grade: or_placeholder(&request.grade, GRADE_PLACEHOLDER),
            program: or_placeholder(&request.program, defaults.for_subject(request.subject)),
            unit: or_placeholder(&request.unit, UNIT_PLACEHOLDER),
            lesson: or_placeholder(&request.lesson, LESSON_PLACEHOLDER),
            standard: or_placeholder(&request.standard, STANDARD_PLACEHOLDER),
        }
    }

    /// Value for a template token name, or `None` if the name is unknown.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&'a str> {
        match token {
            "grade" => Some(self.grade),
            "subject" => Some(self.subject.name()),
            "program" => Some(self.program),
            "unit" => Some(self.unit),
            "lesson" => Some(self.lesson),
            "standard" => Some(self.standard),
            "write_in" => Some(WRITE_IN_LINE),
            _ => None,
        }
    }
}

/// Trimmed value, or the fallback when the value is blank.
fn or_placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

/// Replace every known `{token}` in `template`.
///
/// Unknown tokens and unmatched braces are copied unchanged.
#[must_use]
pub fn fill(template: &str, fields: &ResolvedFields<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        match fields.lookup(&after[..close]) {
            Some(value) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            // Keep the brace and rescan what follows it.
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// =============================================================================
// TESTS
// =============================================================================
