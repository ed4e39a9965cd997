use rand::Rng;
use rand::seq::SliceRandom;

use exam_core::model::{Catalog, QuestionRecord, SessionConfig};

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    /// The frozen, already-shuffled question list for the session.
    pub questions: Vec<QuestionRecord>,
    /// Size of the filtered pool before truncation to the requested count.
    pub pool_size: usize,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected for this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn empty() -> Self {
        Self {
            questions: Vec::new(),
            pool_size: 0,
        }
    }
}

/// Builds a session question list by filtering and sampling the catalog.
pub struct SessionBuilder<'a> {
    config: &'a SessionConfig,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Build a plan from the catalog.
    ///
    /// Filtering is conjunctive: exact course match, unit membership, type
    /// membership, and difficulty (pass-through when mixed). The filtered
    /// pool is uniformly shuffled with the supplied generator and truncated
    /// to the configured count; a pool smaller than the count is returned
    /// whole and an empty pool yields an empty plan. A config without a
    /// course also yields an empty plan — rejecting that case up front is
    /// the session controller's job.
    pub fn build<R: Rng + ?Sized>(self, catalog: &Catalog, rng: &mut R) -> SessionPlan {
        let Some(course) = self.config.course_id() else {
            return SessionPlan::empty();
        };

        let mut pool: Vec<QuestionRecord> = catalog
            .iter()
            .filter(|q| {
                q.course_id() == course
                    && self.config.units().matches(q.unit_id())
                    && self.config.question_types().matches(&q.question_type())
                    && self.config.difficulty().matches(q.difficulty())
            })
            .cloned()
            .collect();

        let pool_size = pool.len();
        pool.as_mut_slice().shuffle(rng);
        pool.truncate(self.config.count());

        SessionPlan {
            questions: pool,
            pool_size,
        }
    }
}
