use chrono::{DateTime, Utc};

use exam_core::model::{ExamResult, QuestionOutcome, QuestionRecord};
use exam_core::time::seconds_between;

use super::answers::AnswerStore;
use super::grader::grade;

/// Combines the frozen question list, the answer store, and the session's
/// timestamps into the final report.
///
/// Walks the questions once, in session order, so `details` lines up with
/// the list a review screen iterates. `finished_at` is the instant the
/// session ended — for a timed-out session that is the expiry tick, not a
/// later wall-clock read.
#[must_use]
pub fn aggregate(
    questions: &[QuestionRecord],
    answers: &AnswerStore,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
) -> ExamResult {
    let details: Vec<QuestionOutcome> = questions
        .iter()
        .map(|question| {
            let answer = answers.get(question.id()).cloned();
            QuestionOutcome {
                question_id: question.id().clone(),
                is_correct: grade(question, answer.as_ref()),
                answer,
            }
        })
        .collect();

    ExamResult::from_details(details, seconds_between(started_at, finished_at))
}
