mod answers;
mod countdown;
mod grader;
mod plan;
mod progress;
mod report;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use answers::AnswerStore;
pub use countdown::{Countdown, TickOutcome};
pub use grader::grade;
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::SessionProgress;
pub use report::aggregate;
pub use service::{ExamSession, Phase};
pub use workflow::ExamLoopService;
