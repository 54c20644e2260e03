//! # Fixed Primitives
//!
//! Placeholder text and defaults compiled into the renderer.
//!
//! A blank field is never an error. It renders as one of these literal
//! write-in lines so the printed plan can be completed by hand.

/// Placeholder for a blank grade.
pub const GRADE_PLACEHOLDER: &str = "___";

/// Placeholder for a blank unit (unit and module/week written by hand).
pub const UNIT_PLACEHOLDER: &str = "___/___";

/// Placeholder for a blank lesson.
pub const LESSON_PLACEHOLDER: &str = "___";

/// Placeholder for a blank standard.
pub const STANDARD_PLACEHOLDER: &str = "________________";

/// Write-in line for values the form never collects (date, reflection notes).
pub const WRITE_IN_LINE: &str = "____________________";

/// Evaluation framework the section labels refer to.
pub const FRAMEWORK_NAME: &str = "T-TESS";

/// Program used for Reading when the program field is blank.
pub const DEFAULT_READING_PROGRAM: &str = "HMH Into Reading";

/// Program used for Math when the program field is blank.
pub const DEFAULT_MATH_PROGRAM: &str = "Bluebonnet Learning Math";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_placeholder_has_two_blanks() {
        assert_eq!(UNIT_PLACEHOLDER, "___/___");
    }

    #[test]
    fn math_default_program_is_bluebonnet() {
        assert!(DEFAULT_MATH_PROGRAM.contains("Bluebonnet"));
    }
}
