//! # Plan Renderer
//!
//! Composes the lesson plan fragment: a header with the field table, then
//! every [`Section`] in document order with its T-TESS label and filled
//! prose lines.
//!
//! The renderer holds only the program defaults. It never fails and never
//! looks at anything but the request, so the same request always renders to
//! the same bytes.

use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};

use crate::fill::{ResolvedFields, fill};
use crate::primitives::{
    DEFAULT_MATH_PROGRAM, DEFAULT_READING_PROGRAM, FRAMEWORK_NAME, WRITE_IN_LINE,
};
use crate::prose::{ProseBundle, Section};
use crate::{LessonRequest, Subject};

// =============================================================================
// PROGRAM DEFAULTS
// =============================================================================

/// Program printed when the program field is left blank, per subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramDefaults {
    pub reading: String,
    pub math: String,
}

impl Default for ProgramDefaults {
    fn default() -> Self {
        Self {
            reading: DEFAULT_READING_PROGRAM.to_string(),
            math: DEFAULT_MATH_PROGRAM.to_string(),
        }
    }
}

impl ProgramDefaults {
    /// Default program for a subject.
    #[must_use]
    pub fn for_subject(&self, subject: Subject) -> &str {
        match subject {
            Subject::Reading => &self.reading,
            Subject::Math => &self.math,
        }
    }
}

// =============================================================================
// RENDERED PLAN
// =============================================================================

/// Output of one render call: the fragment for the display container plus
/// the resolved values callers commonly need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPlan {
    pub subject: Subject,
    /// Program actually printed (explicit or subject default).
    pub program: String,
    pub title: String,
    /// HTML fragment, already escaped.
    pub html: String,
}

impl Render for RenderedPlan {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.html);
    }
}

// =============================================================================
// RENDERER
// =============================================================================

/// Stateless lesson plan renderer.
#[derive(Debug, Clone, Default)]
pub struct PlanRenderer {
    defaults: ProgramDefaults,
}

impl PlanRenderer {
    /// Create a renderer with custom program defaults.
    #[must_use]
    pub fn new(defaults: ProgramDefaults) -> Self {
        Self { defaults }
    }

    /// The program defaults in use.
    #[must_use]
    pub fn defaults(&self) -> &ProgramDefaults {
        &self.defaults
    }

    /// Render a request into a plan fragment.
    #[must_use]
    pub fn render(&self, request: &LessonRequest) -> RenderedPlan {
        let fields = ResolvedFields::resolve(request, &self.defaults);
        let bundle = request.subject.prose();
        let title = plan_title(&fields);

        let markup = html! {
            article.lesson-plan data-subject=(fields.subject.name()) {
                (render_header(&title, &fields))
                @for section in Section::ALL {
                    (render_section(section, bundle, &fields))
                }
            }
        };

        RenderedPlan {
            subject: fields.subject,
            program: fields.program.to_string(),
            title,
            html: markup.into_string(),
        }
    }
}

fn plan_title(fields: &ResolvedFields<'_>) -> String {
    format!("Grade {} {} Lesson Plan", fields.grade, fields.subject.name())
}

fn render_header(title: &str, fields: &ResolvedFields<'_>) -> Markup {
    html! {
        header.plan-header {
            h1 { (title) }
            p.plan-framework {
                "Sections are labeled with the " (FRAMEWORK_NAME) " dimension they support."
            }
            table.plan-fields {
                tbody {
                    (field_row("Grade", fields.grade))
                    (field_row("Subject", fields.subject.name()))
                    (field_row("Program", fields.program))
                    (field_row("Unit", fields.unit))
                    (field_row("Lesson", fields.lesson))
                    (field_row("Standard", fields.standard))
                    (field_row("Date", WRITE_IN_LINE))
                }
            }
        }
    }
}

fn field_row(label: &str, value: &str) -> Markup {
    html! {
        tr {
            th scope="row" { (label) }
            td { (value) }
        }
    }
}

fn render_section(section: Section, bundle: &ProseBundle, fields: &ResolvedFields<'_>) -> Markup {
    html! {
        section.plan-section id=(section.anchor()) {
            h2 { (section.heading()) }
            p.ttess-dimension { (FRAMEWORK_NAME) " " (section.dimension()) }
            ul {
                @for line in bundle.lines(section) {
                    li { (fill(line, fields)) }
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
