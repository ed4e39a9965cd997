mod answer;
mod catalog;
mod config;
mod ids;
mod question;
mod result;

pub use answer::{AnswerKind, AnswerValue};
pub use catalog::{Catalog, CatalogError};
pub use config::{DifficultyFilter, Filter, SessionConfig};
pub use ids::{CourseId, QuestionId, UnitId};
pub use question::{
    BLANK_MARKER, Difficulty, MatchingPair, QuestionError, QuestionRecord, QuestionType,
};
pub use result::{ExamResult, QuestionOutcome};
