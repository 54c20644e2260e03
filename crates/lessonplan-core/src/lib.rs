//! # lessonplan-core
//!
//! The deterministic lesson plan renderer - THE TEMPLATES.
//!
//! Given a [`LessonRequest`] (grade, subject, program, unit, lesson,
//! standard), the renderer selects the prose bundle for the subject,
//! substitutes field values (or placeholders for blank fields) into the
//! fixed prose, and concatenates the sections in a fixed order.
//!
//! ```
//! use lessonplan_core::{LessonRequest, PlanRenderer, Subject};
//!
//! let plan = PlanRenderer::default().render(&LessonRequest::new(Subject::Math).with_grade("3"));
//! assert!(plan.html.contains("Bluebonnet"));
//! assert!(plan.html.contains("___/___"));
//! ```
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network, NO filesystem access
//! - Rendering is infallible; blank fields degrade to placeholders
//! - The same request always renders to the same bytes

// =============================================================================
// MODULES
// =============================================================================

pub mod document;
pub mod fill;
pub mod primitives;
pub mod prose;
pub mod render;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use document::{PLAN_STYLES, render_document};
pub use fill::{ResolvedFields, fill};
pub use prose::{ProseBundle, Section};
pub use render::{PlanRenderer, ProgramDefaults, RenderedPlan};
pub use types::{LessonRequest, PlanError, Subject};
