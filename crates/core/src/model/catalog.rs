use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::QuestionRecord;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised when assembling a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate question id `{0}` in catalog")]
    DuplicateId(QuestionId),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable, ordered collection of question records.
///
/// Supplied by the course-material collaborator before any session starts.
/// The engine only ever reads it; one catalog can back any number of
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    questions: Vec<QuestionRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate question ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` for the first repeated id.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(CatalogError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self { questions })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Looks a question up by id.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
