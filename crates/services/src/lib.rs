#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use exam_core::Clock;

pub use error::{AnswerShapeError, ConfigurationError, InvalidStateError, SessionError};

pub use sessions::{
    AnswerStore, Countdown, ExamLoopService, ExamSession, Phase, SessionBuilder, SessionPlan,
    SessionProgress, TickOutcome, aggregate, grade,
};
