//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::{AnswerKind, QuestionId};

use crate::sessions::Phase;

/// Structural configuration problems detected at session start.
///
/// A missing course is distinct from a course that matches no questions:
/// the latter is a valid (empty) session, the former never starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("no course selected for this session")]
    MissingCourse,
}

/// An operation was attempted in a phase that forbids it.
///
/// This signals a caller mistake, not a user-facing failure; the session
/// state is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{operation}` is not allowed while the session is {phase}")]
pub struct InvalidStateError {
    pub operation: &'static str,
    pub phase: Phase,
}

/// A stored answer's shape does not fit the question type.
///
/// Raised at the answer-store boundary so grading only ever sees values of
/// the right variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("question `{question}` expects a {expected:?} answer, got {got:?}")]
pub struct AnswerShapeError {
    pub question: QuestionId,
    pub expected: AnswerKind,
    pub got: AnswerKind,
}

/// Errors emitted by exam sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question `{0}` is not part of this session")]
    UnknownQuestion(QuestionId),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error(transparent)]
    AnswerShape(#[from] AnswerShapeError),
}
