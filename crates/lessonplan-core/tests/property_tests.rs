//! # Property-Based Tests
//!
//! Determinism and safety invariants of the renderer, checked with proptest.

use lessonplan_core::{
    LessonRequest, PlanRenderer, Section, Subject,
    primitives::{UNIT_PLACEHOLDER, WRITE_IN_LINE},
};
use proptest::prelude::*;

fn subject_strategy() -> impl Strategy<Value = Subject> {
    prop_oneof![Just(Subject::Reading), Just(Subject::Math)]
}

fn request_strategy() -> impl Strategy<Value = LessonRequest> {
    (
        subject_strategy(),
        ".{0,24}",
        ".{0,24}",
        ".{0,24}",
        ".{0,24}",
        ".{0,48}",
    )
        .prop_map(|(subject, grade, program, unit, lesson, standard)| {
            LessonRequest::new(subject)
                .with_grade(grade)
                .with_program(program)
                .with_unit(unit)
                .with_lesson(lesson)
                .with_standard(standard)
        })
}

proptest! {
    /// Same request renders to identical bytes.
    #[test]
    fn identical_input_produces_identical_output(request in request_strategy()) {
        let renderer = PlanRenderer::default();
        let first = renderer.render(&request);
        let second = renderer.render(&request.clone());
        prop_assert_eq!(first, second);
    }

    /// User text can never open an element in the output.
    #[test]
    fn field_text_never_injects_markup(unit in "[<>a-z/ ]{0,20}") {
        let request = LessonRequest::new(Subject::Reading).with_unit(format!("<b>{}</b>", unit));
        let plan = PlanRenderer::default().render(&request);
        prop_assert!(!plan.html.contains("<b>"));
    }

    /// Every section is present regardless of input.
    #[test]
    fn all_sections_always_present(request in request_strategy()) {
        let plan = PlanRenderer::default().render(&request);
        for section in Section::ALL {
            let id = format!("id=\"{}\"", section.anchor());
            prop_assert!(plan.html.contains(&id));
        }
    }

    /// Whitespace-only fields render exactly like empty fields.
    #[test]
    fn whitespace_is_blank(subject in subject_strategy(), pad in "[ \t]{1,6}") {
        let renderer = PlanRenderer::default();
        let blank = renderer.render(&LessonRequest::new(subject));
        let padded = renderer.render(
            &LessonRequest::new(subject)
                .with_grade(pad.clone())
                .with_program(pad.clone())
                .with_unit(pad.clone())
                .with_lesson(pad.clone())
                .with_standard(pad),
        );
        prop_assert_eq!(blank, padded);
    }

    /// A blank unit always prints the unit placeholder.
    #[test]
    fn blank_unit_always_placeholder(subject in subject_strategy(), lesson in "[0-9]{1,3}") {
        let plan = PlanRenderer::default().render(&LessonRequest::new(subject).with_lesson(lesson));
        prop_assert!(plan.html.contains(UNIT_PLACEHOLDER));
        prop_assert!(plan.html.contains(WRITE_IN_LINE));
    }
}
