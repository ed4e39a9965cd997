use serde::{Deserialize, Serialize};

use crate::model::answer::AnswerValue;
use crate::model::ids::QuestionId;

//
// ─── QUESTION OUTCOME ──────────────────────────────────────────────────────────
//

/// Verdict for one question of a finished session.
///
/// `answer` is `None` when the learner never answered the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub is_correct: bool,
    pub answer: Option<AnswerValue>,
}

//
// ─── EXAM RESULT ───────────────────────────────────────────────────────────────
//

/// Final report for a finished session.
///
/// Computed exactly once at the moment the session finishes and immutable
/// afterward. `details` preserves the session's question order so a review
/// screen can walk it alongside the frozen question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    score: u8,
    correct_count: usize,
    total_count: usize,
    details: Vec<QuestionOutcome>,
    time_taken_seconds: i64,
}

impl ExamResult {
    /// Builds a result from per-question outcomes and elapsed wall-clock
    /// seconds.
    ///
    /// The score is an integer percentage, rounded to the nearest whole
    /// number with ties away from zero, and is 0 for an empty session.
    /// Negative elapsed time is clamped to zero.
    #[must_use]
    pub fn from_details(details: Vec<QuestionOutcome>, time_taken_seconds: i64) -> Self {
        let total_count = details.len();
        let correct_count = details.iter().filter(|d| d.is_correct).count();

        let score = if total_count == 0 {
            0
        } else {
            let ratio = correct_count as f64 / total_count as f64;
            (ratio * 100.0).round() as u8
        };

        Self {
            score,
            correct_count,
            total_count,
            details,
            time_taken_seconds: time_taken_seconds.max(0),
        }
    }

    /// Integer percentage in `[0, 100]`.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Per-question verdicts, in session question order.
    #[must_use]
    pub fn details(&self) -> &[QuestionOutcome] {
        &self.details
    }

    /// Wall-clock elapsed seconds from session start to finish.
    #[must_use]
    pub fn time_taken_seconds(&self) -> i64 {
        self.time_taken_seconds
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
