use std::collections::HashMap;

use exam_core::model::{AnswerValue, QuestionId, QuestionRecord};

use crate::error::AnswerShapeError;

/// Mapping from question id to the learner's current answer value.
///
/// Setting an answer overwrites any prior value. Only the value's shape is
/// checked here — a `Text` answer cannot be stored against a matching
/// question — while content (lengths, emptiness, case) is deliberately left
/// alone so partial in-progress answers never block the editor; the grader
/// resolves those at scoring time. Phase gating lives in the session
/// controller, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    values: HashMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for the question, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `AnswerShapeError` when the value's variant does not fit the
    /// question type; the store is left unchanged.
    pub fn set(
        &mut self,
        question: &QuestionRecord,
        value: AnswerValue,
    ) -> Result<(), AnswerShapeError> {
        if !value.fits(question.question_type()) {
            return Err(AnswerShapeError {
                question: question.id().clone(),
                expected: question.question_type().answer_kind(),
                got: value.kind(),
            });
        }

        self.values.insert(question.id().clone(), value);
        Ok(())
    }

    /// The last stored value, or `None` if the question was never answered.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    #[must_use]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Number of questions with a stored answer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{AnswerKind, CourseId, Difficulty, MatchingPair, UnitId};

    fn short_answer(id: &str) -> QuestionRecord {
        QuestionRecord::short_answer(
            QuestionId::new(id),
            CourseId::new("cs101"),
            UnitId::new("u1"),
            Difficulty::Easy,
            "prompt",
            "answer",
        )
    }

    fn matching(id: &str) -> QuestionRecord {
        QuestionRecord::matching(
            QuestionId::new(id),
            CourseId::new("cs101"),
            UnitId::new("u1"),
            Difficulty::Easy,
            "match",
            vec![MatchingPair::new("l", "r")],
        )
        .unwrap()
    }

    #[test]
    fn set_overwrites_previous_value() {
        let question = short_answer("q1");
        let mut store = AnswerStore::new();

        store.set(&question, AnswerValue::text("first")).unwrap();
        store.set(&question, AnswerValue::text("second")).unwrap();

        assert_eq!(store.get(question.id()), Some(&AnswerValue::text("second")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unanswered_question_reads_none() {
        let store = AnswerStore::new();
        assert_eq!(store.get(&QuestionId::new("q1")), None);
        assert!(!store.is_answered(&QuestionId::new("q1")));
    }

    #[test]
    fn wrong_shape_is_rejected_and_store_unchanged() {
        let question = matching("q1");
        let mut store = AnswerStore::new();

        let err = store.set(&question, AnswerValue::text("r")).unwrap_err();
        assert_eq!(err.expected, AnswerKind::Sequence);
        assert_eq!(err.got, AnswerKind::Text);
        assert!(store.is_empty());
    }

    #[test]
    fn partial_sequence_is_accepted() {
        // Wrong length is an in-progress answer; it grades false later.
        let question = matching("q1");
        let mut store = AnswerStore::new();

        store
            .set(&question, AnswerValue::sequence(Vec::<String>::new()))
            .unwrap();
        assert!(store.is_answered(question.id()));
    }
}
