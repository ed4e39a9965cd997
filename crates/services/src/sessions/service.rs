use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

use exam_core::model::{
    AnswerValue, Catalog, ExamResult, QuestionId, QuestionRecord, SessionConfig,
};

use crate::error::{ConfigurationError, InvalidStateError, SessionError};

use super::answers::AnswerStore;
use super::countdown::{Countdown, TickOutcome};
use super::plan::SessionBuilder;
use super::progress::SessionProgress;
use super::report;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of an exam session. `Finished` is terminal; starting over
/// means constructing a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configuring,
    Active,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Configuring => write!(f, "configuring"),
            Phase::Active => write!(f, "active"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory exam session.
///
/// Owns the `Configuring → Active → Finished` state machine: starting
/// selects and freezes the question list and arms the countdown; answer and
/// flag mutations are accepted only while active; finishing — whether user
/// initiated or via countdown expiry — grades everything exactly once and
/// latches the result. All timestamps come from the caller so behavior is
/// deterministic under a fixed clock.
pub struct ExamSession {
    config: SessionConfig,
    phase: Phase,
    questions: Vec<QuestionRecord>,
    answers: AnswerStore,
    flags: HashSet<QuestionId>,
    countdown: Option<Countdown>,
    started_at: Option<DateTime<Utc>>,
    result: Option<ExamResult>,
}

impl ExamSession {
    /// Creates a session in the `Configuring` phase.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            phase: Phase::Configuring,
            questions: Vec::new(),
            answers: AnswerStore::new(),
            flags: HashSet::new(),
            countdown: None,
            started_at: None,
            result: None,
        }
    }

    /// Starts the session with the ambient random generator.
    ///
    /// # Errors
    ///
    /// See [`ExamSession::start_with_rng`].
    pub fn start(&mut self, catalog: &Catalog, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.start_with_rng(catalog, &mut rand::rng(), now)
    }

    /// Selects the question list, arms the countdown, and enters `Active`.
    ///
    /// A selection that matches nothing is a valid empty session, but a
    /// configuration with no course never starts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingCourse` when no course was
    /// chosen, and `InvalidStateError` when the session is not in
    /// `Configuring`.
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Configuring {
            return Err(self.invalid_state("start").into());
        }
        if self.config.course_id().is_none() {
            return Err(ConfigurationError::MissingCourse.into());
        }

        let plan = SessionBuilder::new(&self.config).build(catalog, rng);
        self.questions = plan.questions;
        self.countdown = Some(Countdown::new(self.config.time_limit_seconds()));
        self.started_at = Some(now);
        self.phase = Phase::Active;
        Ok(())
    }

    /// Stores the learner's answer for a question, overwriting any prior
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` outside `Active`, `UnknownQuestion` for
    /// an id outside the frozen list, and `AnswerShapeError` when the
    /// value's variant does not fit the question type. State is unchanged
    /// on every error.
    pub fn set_answer(
        &mut self,
        id: &QuestionId,
        value: AnswerValue,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("set_answer").into());
        }
        let Some(question) = self.questions.iter().find(|q| q.id() == id) else {
            return Err(SessionError::UnknownQuestion(id.clone()));
        };

        self.answers.set(question, value)?;
        Ok(())
    }

    /// Toggles the review flag on a question, returning the new flagged
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` outside `Active` and `UnknownQuestion`
    /// for an id outside the frozen list.
    pub fn toggle_flag(&mut self, id: &QuestionId) -> Result<bool, SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("toggle_flag").into());
        }
        if !self.questions.iter().any(|q| q.id() == id) {
            return Err(SessionError::UnknownQuestion(id.clone()));
        }

        if self.flags.remove(id) {
            Ok(false)
        } else {
            self.flags.insert(id.clone());
            Ok(true)
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Driven by the external tick source at a one-second cadence. Expiry
    /// finishes the session at `now`, exactly as a manual finish would;
    /// ticks outside `Active` (including after a finish raced ahead of the
    /// tick source) are no-ops.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Idle;
        }
        let outcome = match self.countdown.as_mut() {
            Some(countdown) => countdown.tick(),
            None => TickOutcome::Idle,
        };
        if outcome == TickOutcome::Expired {
            self.finalize(now);
        }
        outcome
    }

    /// Suspends the countdown. Wall-clock elapsed time keeps running.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` outside `Active`.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("pause").into());
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.pause();
        }
        Ok(())
    }

    /// Resumes a paused countdown.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` outside `Active`.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("resume").into());
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.resume();
        }
        Ok(())
    }

    /// Finishes the session and returns the final report.
    ///
    /// From `Active` this grades everything once and latches the result;
    /// calling it again returns the already-computed report without
    /// re-grading, so a manual finish racing a concurrent expiry tick can
    /// never double-count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` when the session never started.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Result<&ExamResult, SessionError> {
        match self.phase {
            Phase::Configuring => Err(self.invalid_state("finish").into()),
            Phase::Active => Ok(self.finalize(now)),
            Phase::Finished => self
                .result
                .as_ref()
                .ok_or_else(|| self.invalid_state("finish").into()),
        }
    }

    fn finalize(&mut self, now: DateTime<Utc>) -> &ExamResult {
        let started = self.started_at.unwrap_or(now);
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
        let result = report::aggregate(&self.questions, &self.answers, started, now);
        self.phase = Phase::Finished;
        self.result.insert(result)
    }

    fn invalid_state(&self, operation: &'static str) -> InvalidStateError {
        InvalidStateError {
            operation,
            phase: self.phase,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The frozen question list. Empty until the session starts.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// The learner's current answer for a question, if any.
    #[must_use]
    pub fn answer(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn is_flagged(&self, id: &QuestionId) -> bool {
        self.flags.contains(id)
    }

    /// Seconds left on the countdown. Frozen once the session finishes.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        match &self.countdown {
            Some(countdown) => countdown.remaining(),
            None => self.config.time_limit_seconds(),
        }
    }

    /// The final report, present once the session is finished.
    #[must_use]
    pub fn result(&self) -> Option<&ExamResult> {
        self.result.as_ref()
    }

    /// Aggregated snapshot for a UI.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            flagged: self.flags.len(),
            remaining_seconds: self.remaining_seconds(),
            is_complete: self.phase == Phase::Finished,
        }
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.len())
            .field("flagged", &self.flags.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
