use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

use crate::model::ids::{CourseId, UnitId};
use crate::model::question::{Difficulty, QuestionType};

//
// ─── FILTERS ───────────────────────────────────────────────────────────────────
//

/// Membership filter over a set of values.
///
/// `Only` with an empty set passes everything, matching the "empty means
/// all" sentinel the configuration forms use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<T: Eq + Hash> {
    All,
    Only(HashSet<T>),
}

impl<T: Eq + Hash> Filter<T> {
    /// Builds a filter from listed values.
    #[must_use]
    pub fn only<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::Only(values.into_iter().collect())
    }

    /// Returns true when the value passes this filter.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(set) => set.is_empty() || set.contains(value),
        }
    }
}

impl<T: Eq + Hash> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

/// Difficulty selection; `Mixed` disables difficulty filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    Mixed,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Returns true when the difficulty passes this filter.
    #[must_use]
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::Mixed => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }
}

//
// ─── SESSION CONFIG ────────────────────────────────────────────────────────────
//

/// Input contract for one exam session.
///
/// Assembled incrementally by the caller (a settings form fills it in piece
/// by piece), then handed to the session once; changing configuration means
/// starting a new session. The course may still be unset here — that case
/// is rejected at session start, keeping "no course chosen" distinct from
/// "course chosen but nothing matched".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    course_id: Option<CourseId>,
    units: Filter<UnitId>,
    question_types: Filter<QuestionType>,
    difficulty: DifficultyFilter,
    count: usize,
    time_limit_minutes: Option<u32>,
}

impl SessionConfig {
    /// Creates a configuration requesting `count` questions, with no course
    /// selected and no filters applied.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            course_id: None,
            units: Filter::All,
            question_types: Filter::All,
            difficulty: DifficultyFilter::Mixed,
            count,
            time_limit_minutes: None,
        }
    }

    /// Select the course to draw questions from.
    #[must_use]
    pub fn with_course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Restrict the session to the given units.
    #[must_use]
    pub fn with_units<I: IntoIterator<Item = UnitId>>(mut self, units: I) -> Self {
        self.units = Filter::only(units);
        self
    }

    /// Restrict the session to the given question types.
    #[must_use]
    pub fn with_question_types<I: IntoIterator<Item = QuestionType>>(mut self, types: I) -> Self {
        self.question_types = Filter::only(types);
        self
    }

    /// Restrict the session to one difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = DifficultyFilter::Only(difficulty);
        self
    }

    /// Set the countdown limit in minutes.
    #[must_use]
    pub fn with_time_limit_minutes(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn course_id(&self) -> Option<&CourseId> {
        self.course_id.as_ref()
    }

    #[must_use]
    pub fn units(&self) -> &Filter<UnitId> {
        &self.units
    }

    #[must_use]
    pub fn question_types(&self) -> &Filter<QuestionType> {
        &self.question_types
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyFilter {
        self.difficulty
    }

    /// Requested number of questions. The session draws
    /// `min(count, pool size)` — shortfall is not an error.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    /// Countdown budget in seconds: the configured limit, or one minute per
    /// requested question when no limit is set.
    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        match self.time_limit_minutes {
            Some(minutes) => minutes.saturating_mul(60),
            None => u32::try_from(self.count).unwrap_or(u32::MAX).saturating_mul(60),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_only_filter_passes_everything() {
        let filter: Filter<UnitId> = Filter::only([]);
        assert!(filter.matches(&UnitId::new("u1")));
    }

    #[test]
    fn only_filter_checks_membership() {
        let filter = Filter::only([UnitId::new("u1"), UnitId::new("u2")]);
        assert!(filter.matches(&UnitId::new("u2")));
        assert!(!filter.matches(&UnitId::new("u3")));
    }

    #[test]
    fn mixed_difficulty_disables_filtering() {
        assert!(DifficultyFilter::Mixed.matches(Difficulty::Hard));
        assert!(DifficultyFilter::Only(Difficulty::Easy).matches(Difficulty::Easy));
        assert!(!DifficultyFilter::Only(Difficulty::Easy).matches(Difficulty::Hard));
    }

    #[test]
    fn time_limit_defaults_to_a_minute_per_question() {
        let config = SessionConfig::new(10);
        assert_eq!(config.time_limit_seconds(), 600);

        let config = SessionConfig::new(10).with_time_limit_minutes(25);
        assert_eq!(config.time_limit_seconds(), 1500);
    }

    #[test]
    fn course_is_unset_until_chosen() {
        let config = SessionConfig::new(5);
        assert!(config.course_id().is_none());

        let config = config.with_course(CourseId::new("cs101"));
        assert_eq!(config.course_id(), Some(&CourseId::new("cs101")));
    }
}
