use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::{AnswerKind, AnswerValue};
use crate::model::ids::{CourseId, QuestionId, UnitId};

/// Marker for a blank segment inside a fill-blank prompt.
pub const BLANK_MARKER: &str = "___";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised when constructing a question record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("multiple-choice question has no options")]
    NoOptions,

    #[error("correct option `{0}` is not among the offered options")]
    UnknownOption(String),

    #[error("matching question has no pairs")]
    NoPairs,

    #[error("prompt has {blanks} blank segment(s) but {expected} expected value(s)")]
    BlankCountMismatch { blanks: usize, expected: usize },
}

//
// ─── QUESTION TYPE ─────────────────────────────────────────────────────────────
//

/// Closed set of assessable question types.
///
/// Every variant constrains the shape of the correct-answer payload and of
/// any learner-supplied answer; the grader matches exhaustively over this
/// enum so a new type cannot be added without a grading rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Mcq,
    TrueFalse,
    FillBlank,
    Matching,
    ShortAnswer,
    Coding,
    Debugging,
}

impl QuestionType {
    /// All question types, in catalog order.
    pub const ALL: [QuestionType; 7] = [
        QuestionType::Mcq,
        QuestionType::TrueFalse,
        QuestionType::FillBlank,
        QuestionType::Matching,
        QuestionType::ShortAnswer,
        QuestionType::Coding,
        QuestionType::Debugging,
    ];

    /// The answer shape this question type expects.
    #[must_use]
    pub fn answer_kind(self) -> AnswerKind {
        match self {
            QuestionType::Mcq
            | QuestionType::TrueFalse
            | QuestionType::ShortAnswer
            | QuestionType::Coding
            | QuestionType::Debugging => AnswerKind::Text,
            QuestionType::FillBlank | QuestionType::Matching => AnswerKind::Sequence,
        }
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-level difficulty rating for questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

//
// ─── MATCHING PAIR ─────────────────────────────────────────────────────────────
//

/// One left/right pair of a matching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

impl MatchingPair {
    #[must_use]
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// One assessable item of the catalog.
///
/// Records are created by the catalog collaborator before a session starts
/// and are immutable afterward; the engine only reads them. Per-type
/// invariants (options for mcq, pair/key alignment for matching, blank
/// counts for fill-blank) are enforced at construction so no malformed
/// record can reach the grader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    id: QuestionId,
    course_id: CourseId,
    unit_id: UnitId,
    question_type: QuestionType,
    difficulty: Difficulty,
    prompt: String,
    options: Vec<String>,
    pairs: Vec<MatchingPair>,
    key: AnswerValue,
    explanation: Option<String>,
}

impl QuestionRecord {
    /// Builds a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` when `options` is empty and
    /// `QuestionError::UnknownOption` when `correct` is not one of them.
    pub fn multiple_choice(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let correct = correct.into();
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !options.iter().any(|o| *o == correct) {
            return Err(QuestionError::UnknownOption(correct));
        }

        Ok(Self {
            id,
            course_id,
            unit_id,
            question_type: QuestionType::Mcq,
            difficulty,
            prompt: prompt.into(),
            options,
            pairs: Vec::new(),
            key: AnswerValue::Text(correct),
            explanation: None,
        })
    }

    /// Builds a true/false question.
    #[must_use]
    pub fn true_false(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        correct: bool,
    ) -> Self {
        let key = if correct { "true" } else { "false" };
        Self::single_key(
            id,
            course_id,
            unit_id,
            QuestionType::TrueFalse,
            difficulty,
            prompt.into(),
            key.to_string(),
        )
    }

    /// Builds a fill-in-the-blank question.
    ///
    /// The prompt marks each blank with `___`; `expected` carries one value
    /// per blank, in document order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::BlankCountMismatch` when the number of
    /// expected values differs from the number of markers in the prompt.
    pub fn fill_blank(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        expected: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let blanks = prompt.matches(BLANK_MARKER).count();
        if blanks != expected.len() {
            return Err(QuestionError::BlankCountMismatch {
                blanks,
                expected: expected.len(),
            });
        }

        Ok(Self {
            id,
            course_id,
            unit_id,
            question_type: QuestionType::FillBlank,
            difficulty,
            prompt,
            options: Vec::new(),
            pairs: Vec::new(),
            key: AnswerValue::Sequence(expected),
            explanation: None,
        })
    }

    /// Builds a matching question.
    ///
    /// The correct sequence is the pairs' right-hand values in order, so the
    /// key always has exactly one entry per pair.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoPairs` when `pairs` is empty.
    pub fn matching(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        pairs: Vec<MatchingPair>,
    ) -> Result<Self, QuestionError> {
        if pairs.is_empty() {
            return Err(QuestionError::NoPairs);
        }
        let key = pairs.iter().map(|p| p.right.clone()).collect();

        Ok(Self {
            id,
            course_id,
            unit_id,
            question_type: QuestionType::Matching,
            difficulty,
            prompt: prompt.into(),
            options: Vec::new(),
            pairs,
            key: AnswerValue::Sequence(key),
            explanation: None,
        })
    }

    /// Builds a short-answer question.
    #[must_use]
    pub fn short_answer(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        correct: impl Into<String>,
    ) -> Self {
        Self::single_key(
            id,
            course_id,
            unit_id,
            QuestionType::ShortAnswer,
            difficulty,
            prompt.into(),
            correct.into(),
        )
    }

    /// Builds a coding question graded against a reference solution.
    #[must_use]
    pub fn coding(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self::single_key(
            id,
            course_id,
            unit_id,
            QuestionType::Coding,
            difficulty,
            prompt.into(),
            solution.into(),
        )
    }

    /// Builds a debugging question (spot the fix).
    #[must_use]
    pub fn debugging(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        correct: impl Into<String>,
    ) -> Self {
        Self::single_key(
            id,
            course_id,
            unit_id,
            QuestionType::Debugging,
            difficulty,
            prompt.into(),
            correct.into(),
        )
    }

    fn single_key(
        id: QuestionId,
        course_id: CourseId,
        unit_id: UnitId,
        question_type: QuestionType,
        difficulty: Difficulty,
        prompt: String,
        key: String,
    ) -> Self {
        Self {
            id,
            course_id,
            unit_id,
            question_type,
            difficulty,
            prompt,
            options: Vec::new(),
            pairs: Vec::new(),
            key: AnswerValue::Text(key),
            explanation: None,
        }
    }

    /// Attach an explanation shown when reviewing results.
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    #[must_use]
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Offered options. Empty unless this is an mcq question.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Left/right pairs. Empty unless this is a matching question.
    #[must_use]
    pub fn pairs(&self) -> &[MatchingPair] {
        &self.pairs
    }

    /// The reference answer this question is graded against.
    #[must_use]
    pub fn correct_answer(&self) -> &AnswerValue {
        &self.key
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
