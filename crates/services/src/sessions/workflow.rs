use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use exam_core::Clock;
use exam_core::model::{Catalog, ExamResult, SessionConfig};

use crate::error::SessionError;

use super::countdown::TickOutcome;
use super::service::ExamSession;

/// Orchestrates exam sessions against a shared catalog.
///
/// Owns the clock and the catalog so callers (a UI, a periodic tick source)
/// never handle timestamps themselves. An optional seed makes question
/// selection reproducible, which session-history features rely on to replay
/// a session's exact question list.
#[derive(Clone)]
pub struct ExamLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    seed: Option<u64>,
}

impl ExamLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self {
            clock,
            catalog,
            seed: None,
        }
    }

    /// Use a fixed seed for question selection.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start a new session for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the configuration has no course.
    pub fn start_session(&self, config: SessionConfig) -> Result<ExamSession, SessionError> {
        let mut session = ExamSession::new(config);
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                session.start_with_rng(&self.catalog, &mut rng, self.clock.now())?;
            }
            None => session.start(&self.catalog, self.clock.now())?,
        }
        Ok(session)
    }

    /// Forward one tick of the external one-second timer to the session.
    pub fn tick(&self, session: &mut ExamSession) -> TickOutcome {
        session.tick(self.clock.now())
    }

    /// Finish the session and return its report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the session never started.
    pub fn finish(&self, session: &mut ExamSession) -> Result<ExamResult, SessionError> {
        session.finish(self.clock.now()).cloned()
    }
}
