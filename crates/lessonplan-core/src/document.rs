//! # Standalone Document
//!
//! Wraps a rendered fragment in a complete HTML page so a plan can be saved
//! to disk and opened or printed without the form server.

use maud::{DOCTYPE, PreEscaped, html};

use crate::render::RenderedPlan;

/// Stylesheet shared by the standalone document and the form page.
///
/// The print rules hide everything that is not part of the plan.
pub const PLAN_STYLES: &str = r#"
body { font-family: Georgia, "Times New Roman", serif; margin: 0 auto; max-width: 52rem; padding: 1.5rem; color: #1b1b1b; }
.lesson-plan h1 { font-size: 1.6rem; border-bottom: 2px solid #1b1b1b; padding-bottom: 0.3rem; }
.plan-framework { font-style: italic; color: #444; }
.plan-fields { border-collapse: collapse; margin: 1rem 0; width: 100%; }
.plan-fields th { text-align: left; width: 9rem; padding: 0.25rem 0.5rem; background: #f1f1f1; }
.plan-fields td { padding: 0.25rem 0.5rem; border-bottom: 1px solid #ddd; }
.plan-section { margin-top: 1.25rem; page-break-inside: avoid; }
.plan-section h2 { font-size: 1.15rem; margin-bottom: 0.1rem; }
.ttess-dimension { font-size: 0.85rem; color: #555; margin-top: 0; }
.plan-form { display: grid; grid-template-columns: 9rem 1fr; gap: 0.5rem 1rem; margin-bottom: 1.5rem; }
.plan-form .actions { grid-column: 2; }
.form-error { color: #a40000; font-weight: bold; }
@media print {
  .plan-form, .form-error, #print-plan { display: none !important; }
  body { max-width: none; padding: 0; }
}
"#;

/// Render a plan as a complete, self-contained HTML page.
#[must_use]
pub fn render_document(plan: &RenderedPlan) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (plan.title) }
                style { (PreEscaped(PLAN_STYLES)) }
            }
            body {
                main.plan-document {
                    (plan)
                }
            }
        }
    }
    .into_string()
}
