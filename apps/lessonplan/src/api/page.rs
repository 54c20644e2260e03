//! # Form Page
//!
//! The HTML page served at `/`: the lesson plan form, the display container
//! the rendered plan is injected into, and the print action.
//!
//! The print action is present on every page but carries the `hidden`
//! attribute until a plan has been rendered into the container.

use lessonplan_core::{PLAN_STYLES, ProgramDefaults, RenderedPlan, Subject};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::types::PlanRequest;

/// Everything the form page shows for one response.
#[derive(Debug, Clone, Copy)]
pub struct FormPage<'a> {
    /// Values echoed back into the form inputs.
    pub values: &'a PlanRequest,
    /// Plan to inject into `#plan-output`, if one was rendered.
    pub plan: Option<&'a RenderedPlan>,
    /// Message shown above the form when the submission was rejected.
    pub error: Option<&'a str>,
    pub defaults: &'a ProgramDefaults,
}

/// Render the form page.
#[must_use]
pub fn render_form_page(page: &FormPage<'_>) -> String {
    let selected = page.values.selected_subject();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Lesson Plan Generator" }
                style { (PreEscaped(PLAN_STYLES)) }
            }
            body {
                h1.page-title { "Lesson Plan Generator" }
                @if let Some(message) = page.error {
                    p.form-error role="alert" { (message) }
                }
                form.plan-form method="post" action="/plan" {
                    (text_field("grade", "Grade", &page.values.grade, "e.g. 3"))
                    label for="subject" { "Subject" }
                    select #subject name="subject" {
                        @for subject in Subject::ALL {
                            option value=(subject.name()) selected[subject == selected] {
                                (subject.name())
                            }
                        }
                    }
                    (text_field("program", "Program", &page.values.program, &program_hint(page.defaults)))
                    (text_field("unit", "Unit", &page.values.unit, "Leave blank to write in later"))
                    (text_field("lesson", "Lesson", &page.values.lesson, "Leave blank to write in later"))
                    (text_field("standard", "Standard", &page.values.standard, "e.g. 3.4K"))
                    div.actions {
                        button type="submit" { "Generate Lesson Plan" }
                    }
                }
                button id="print-plan" type="button" onclick="window.print()" hidden[page.plan.is_none()] {
                    "Print Lesson Plan"
                }
                div id="plan-output" {
                    @if let Some(plan) = page.plan {
                        (plan)
                    }
                }
            }
        }
    }
    .into_string()
}

fn text_field(name: &str, label: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        label for=(name) { (label) }
        input id=(name) type="text" name=(name) value=(value) placeholder=(placeholder);
    }
}

fn program_hint(defaults: &ProgramDefaults) -> String {
    format!(
        "Blank uses {} (Reading) or {} (Math)",
        defaults.reading, defaults.math
    )
}

// =============================================================================
// TESTS
// =============================================================================
