//! # Prose Bundles
//!
//! The fixed text of the lesson plan, one bundle per subject.
//!
//! Lines may contain `{token}` markers that the fill pass replaces with
//! resolved field values:
//!
//! | Token | Value |
//! |-------|-------|
//! | `{grade}` | grade or placeholder |
//! | `{subject}` | subject name |
//! | `{program}` | program or subject default |
//! | `{unit}` | unit or `___/___` |
//! | `{lesson}` | lesson or placeholder |
//! | `{standard}` | standard or placeholder |
//! | `{write_in}` | a blank write-in line |

use crate::Subject;

// =============================================================================
// SECTIONS
// =============================================================================

/// A section of the rendered plan. `Section::ALL` is the document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Standards,
    Objective,
    Materials,
    WarmUp,
    DirectInstruction,
    GuidedPractice,
    IndependentPractice,
    Differentiation,
    ChecksForUnderstanding,
    Closure,
    Reflection,
}

impl Section {
    /// Sections in the order they are rendered.
    pub const ALL: [Section; 11] = [
        Section::Standards,
        Section::Objective,
        Section::Materials,
        Section::WarmUp,
        Section::DirectInstruction,
        Section::GuidedPractice,
        Section::IndependentPractice,
        Section::Differentiation,
        Section::ChecksForUnderstanding,
        Section::Closure,
        Section::Reflection,
    ];

    /// Section heading as printed.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Standards => "Standards",
            Self::Objective => "Learning Objective",
            Self::Materials => "Materials",
            Self::WarmUp => "Warm-Up",
            Self::DirectInstruction => "Direct Instruction (I Do)",
            Self::GuidedPractice => "Guided Practice (We Do)",
            Self::IndependentPractice => "Independent Practice (You Do)",
            Self::Differentiation => "Differentiation",
            Self::ChecksForUnderstanding => "Checks for Understanding",
            Self::Closure => "Closure",
            Self::Reflection => "Reflection",
        }
    }

    /// HTML id of the section element.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Standards => "standards",
            Self::Objective => "objective",
            Self::Materials => "materials",
            Self::WarmUp => "warm-up",
            Self::DirectInstruction => "direct-instruction",
            Self::GuidedPractice => "guided-practice",
            Self::IndependentPractice => "independent-practice",
            Self::Differentiation => "differentiation",
            Self::ChecksForUnderstanding => "checks-for-understanding",
            Self::Closure => "closure",
            Self::Reflection => "reflection",
        }
    }

    /// T-TESS dimension the section is labeled with. Label text only.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            Self::Standards => "1.1 Standards and Alignment",
            Self::Objective => "2.1 Achieving Expectations",
            Self::Materials => "1.4 Activities",
            Self::WarmUp => "1.3 Knowledge of Students",
            Self::DirectInstruction => "2.2 Content Knowledge and Expertise",
            Self::GuidedPractice => "2.3 Communication",
            Self::IndependentPractice => "3.1 Classroom Environment, Routines and Procedures",
            Self::Differentiation => "2.4 Differentiation",
            Self::ChecksForUnderstanding => "2.5 Monitor and Adjust",
            Self::Closure => "1.2 Data and Assessment",
            Self::Reflection => "4.2 Goal Setting",
        }
    }
}

// =============================================================================
// PROSE BUNDLE
// =============================================================================

/// Fixed prose for one subject, one list of lines per section.
#[derive(Debug)]
pub struct ProseBundle {
    pub subject: Subject,
    pub standards: &'static [&'static str],
    pub objective: &'static [&'static str],
    pub materials: &'static [&'static str],
    pub warm_up: &'static [&'static str],
    pub direct_instruction: &'static [&'static str],
    pub guided_practice: &'static [&'static str],
    pub independent_practice: &'static [&'static str],
    pub differentiation: &'static [&'static str],
    pub checks_for_understanding: &'static [&'static str],
    pub closure: &'static [&'static str],
    pub reflection: &'static [&'static str],
}

impl ProseBundle {
    /// Template lines for a section.
    #[must_use]
    pub const fn lines(&self, section: Section) -> &'static [&'static str] {
        match section {
            Section::Standards => self.standards,
            Section::Objective => self.objective,
            Section::Materials => self.materials,
            Section::WarmUp => self.warm_up,
            Section::DirectInstruction => self.direct_instruction,
            Section::GuidedPractice => self.guided_practice,
            Section::IndependentPractice => self.independent_practice,
            Section::Differentiation => self.differentiation,
            Section::ChecksForUnderstanding => self.checks_for_understanding,
            Section::Closure => self.closure,
            Section::Reflection => self.reflection,
        }
    }
}

impl Subject {
    /// The prose bundle for this subject.
    #[must_use]
    pub fn prose(self) -> &'static ProseBundle {
        match self {
            Self::Reading => &READING,
            Self::Math => &MATH,
        }
    }
}

/// Reflection prompts are the same for every subject.
const REFLECTION: &[&str] = &[
    "What went well in this lesson: {write_in}",
    "What I will change next time: {write_in}",
    "Students who need follow-up: {write_in}",
    "Next step toward my professional goal: {write_in}",
];

// =============================================================================
// READING
// =============================================================================

pub static READING: ProseBundle = ProseBundle {
    subject: Subject::Reading,
    standards: &[
        "Standard: {standard}",
        "Students practice this standard with the {program} Unit {unit}, Lesson {lesson} text.",
    ],
    objective: &[
        "Students will read the Unit {unit}, Lesson {lesson} text and explain the central idea using details from the text.",
        "Language objective: students will discuss the text with a partner using sentence stems and academic vocabulary.",
        "Success criteria: I can find evidence in the text and use it to answer questions about what I read.",
    ],
    materials: &[
        "{program} Teacher Guide, Unit {unit}, Lesson {lesson}",
        "Anchor text and student copies of the lesson passage",
        "Reader response notebooks and pencils",
        "Sticky notes for marking text evidence",
        "Chart paper for the shared anchor chart",
    ],
    warm_up: &[
        "Activate prior knowledge: students turn and talk about what they already know about the topic of Unit {unit}.",
        "Preview two or three key vocabulary words with student-friendly definitions and pictures.",
        "Set the purpose for reading by sharing the objective and success criteria.",
    ],
    direct_instruction: &[
        "Read aloud the opening of the text and model the target skill with a think-aloud.",
        "Show how to mark evidence with a sticky note and record it on the anchor chart.",
        "Name the strategy and explain when good readers use it.",
    ],
    guided_practice: &[
        "Read the next section together using choral or partner reading.",
        "Partners find one piece of evidence while the teacher prompts with questions.",
        "Record student responses on the anchor chart and correct misconceptions in the moment.",
    ],
    independent_practice: &[
        "Students read the remaining section independently or with a partner.",
        "Students write a response in the reader response notebook using at least two pieces of evidence.",
        "Early finishers reread and add a new vocabulary word to their word wall page.",
    ],
    differentiation: &[
        "English learners: sentence stems, a picture glossary and partner reading with a strong model.",
        "Students with IEP or 504 accommodations: audio version of the text, chunked passages and extended time as documented.",
        "Advanced learners: compare the lesson text with another text from Unit {unit} and explain how the ideas connect.",
        "Small group: reteach the skill with a shorter passage for students who need more support.",
    ],
    checks_for_understanding: &[
        "Listen in on partner talk and note students who cite evidence accurately.",
        "Thumbs up, sideways or down after the modeled example.",
        "Cold call three students to share evidence; revisit guided practice if fewer than 80 percent are successful.",
    ],
    closure: &[
        "Exit ticket: answer one text-dependent question about Lesson {lesson} and cite one piece of evidence.",
        "Students restate the objective in their own words with a partner.",
        "Preview the next lesson in Unit {unit}.",
    ],
    reflection: REFLECTION,
};

// =============================================================================
// MATH
// =============================================================================

pub static MATH: ProseBundle = ProseBundle {
    subject: Subject::Math,
    standards: &[
        "Standard: {standard}",
        "Students practice this standard with {program} Unit {unit}, Lesson {lesson}.",
    ],
    objective: &[
        "Students will solve Unit {unit}, Lesson {lesson} problems and explain their strategy using models and math vocabulary.",
        "Language objective: students will explain their reasoning to a partner using the stem \"I know this because...\"",
        "Success criteria: I can solve the problem, show my work with a model and check that my answer makes sense.",
    ],
    materials: &[
        "{program} Teacher Guide, Unit {unit}, Lesson {lesson}",
        "Bluebonnet Learning student activity book pages for the lesson",
        "Math manipulatives (base-ten blocks, counters or fraction tiles as the lesson requires)",
        "Individual whiteboards and dry-erase markers",
        "Anchor chart with lesson vocabulary and a worked example",
    ],
    warm_up: &[
        "Number talk: present a mental math problem and collect two or three different strategies.",
        "Grade {grade} fluency practice: two minutes of facts or skills from earlier units.",
        "Share the objective and success criteria for Lesson {lesson}.",
    ],
    direct_instruction: &[
        "Model the lesson problem with manipulatives and a drawn representation, thinking aloud at each step.",
        "Connect the concrete model to the pictorial representation and the equation.",
        "Highlight key vocabulary and the common errors to watch for.",
    ],
    guided_practice: &[
        "Solve a similar problem together; students work on whiteboards and show them after each step.",
        "Partners explain their strategy to each other using the sentence stem.",
        "Compare two student strategies and discuss how they are alike and different.",
    ],
    independent_practice: &[
        "Students complete the Lesson {lesson} practice problems in the student activity book.",
        "Students show each solution with a model, a number sentence and a written explanation.",
        "Early finishers solve a challenge problem and write their own word problem for a partner.",
    ],
    differentiation: &[
        "English learners: vocabulary cards with visuals, sentence stems and a language partner when possible.",
        "Students with IEP or 504 accommodations: manipulatives at all times, reduced problem sets and extended time as documented.",
        "Advanced learners: solve a multi-step extension problem and justify the solution in writing.",
        "Small group: reteach with concrete manipulatives before moving to pictures and numbers.",
    ],
    checks_for_understanding: &[
        "Scan whiteboards after each guided problem and note students who need reteaching.",
        "Ask students to explain why their answer is reasonable, not only what it is.",
        "Pull a small group during independent practice if fewer than 80 percent solve the guided problems correctly.",
    ],
    closure: &[
        "Exit ticket: two problems matching the Lesson {lesson} objective, one solved with a model and one explained in writing.",
        "Students share one strategy that helped them today.",
        "Preview how this lesson connects to the rest of Unit {unit}.",
    ],
    reflection: REFLECTION,
};

// =============================================================================
// TESTS
// =============================================================================
