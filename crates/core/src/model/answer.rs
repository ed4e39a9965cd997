use serde::{Deserialize, Serialize};

use crate::model::question::QuestionType;

//
// ─── ANSWER SHAPE ──────────────────────────────────────────────────────────────
//

/// The shape an answer payload can take.
///
/// Single-string question types (`Mcq`, `TrueFalse`, `ShortAnswer`, `Coding`,
/// `Debugging`) expect `Text`; `FillBlank` and `Matching` expect `Sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKind {
    Text,
    Sequence,
}

//
// ─── ANSWER VALUE ──────────────────────────────────────────────────────────────
//

/// A learner-supplied (or reference) answer payload.
///
/// This is a closed union over the two shapes answers can take, keyed by the
/// question type. Content is not validated here: an empty string or a
/// sequence of the wrong length is a legitimate in-progress answer and is
/// resolved to a verdict at grading time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Sequence(Vec<String>),
}

impl AnswerValue {
    /// Builds a single-string answer.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Builds an ordered multi-part answer (one entry per blank or pair).
    #[must_use]
    pub fn sequence<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        match self {
            AnswerValue::Text(_) => AnswerKind::Text,
            AnswerValue::Sequence(_) => AnswerKind::Sequence,
        }
    }

    /// Returns true when this value has the shape the question type expects.
    #[must_use]
    pub fn fits(&self, question_type: QuestionType) -> bool {
        self.kind() == question_type.answer_kind()
    }

    /// The single string payload, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Sequence(_) => None,
        }
    }

    /// The ordered payload, if this is a `Sequence` value.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Text(_) => None,
            AnswerValue::Sequence(parts) => Some(parts),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
