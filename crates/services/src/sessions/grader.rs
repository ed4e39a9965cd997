use exam_core::model::{AnswerValue, QuestionRecord, QuestionType};

/// Grades one question against the learner's stored answer.
///
/// Total over every reachable state: a missing answer, a wrong variant, or
/// a wrong-length sequence grades `false` rather than failing, so a result
/// can always be produced. Pure — the verdict depends only on the question
/// and the answer, never on session phase or clock state.
///
/// Per-type rules:
/// - `Mcq`, `TrueFalse`, `ShortAnswer`, `Debugging`: exact string equality,
///   no trimming or case-folding.
/// - `Coding`: both sides trimmed, then exact equality. No execution.
/// - `FillBlank`: one entry per blank, each compared after trimming and
///   case-folding.
/// - `Matching`: right-hand values compared positionally and exactly —
///   they are identifiers, so order and case are significant.
#[must_use]
pub fn grade(question: &QuestionRecord, answer: Option<&AnswerValue>) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    let key = question.correct_answer();

    match question.question_type() {
        QuestionType::Mcq
        | QuestionType::TrueFalse
        | QuestionType::ShortAnswer
        | QuestionType::Debugging => text_eq(key, answer),
        QuestionType::Coding => trimmed_eq(key, answer),
        QuestionType::FillBlank => blanks_eq(key, answer),
        QuestionType::Matching => pairs_eq(key, answer),
    }
}

fn text_eq(key: &AnswerValue, answer: &AnswerValue) -> bool {
    match (key.as_text(), answer.as_text()) {
        (Some(expected), Some(got)) => expected == got,
        _ => false,
    }
}

fn trimmed_eq(key: &AnswerValue, answer: &AnswerValue) -> bool {
    match (key.as_text(), answer.as_text()) {
        (Some(expected), Some(got)) => expected.trim() == got.trim(),
        _ => false,
    }
}

fn blanks_eq(key: &AnswerValue, answer: &AnswerValue) -> bool {
    match (key.as_sequence(), answer.as_sequence()) {
        (Some(expected), Some(got)) => {
            expected.len() == got.len()
                && expected
                    .iter()
                    .zip(got)
                    .all(|(e, g)| e.trim().to_lowercase() == g.trim().to_lowercase())
        }
        _ => false,
    }
}

fn pairs_eq(key: &AnswerValue, answer: &AnswerValue) -> bool {
    match (key.as_sequence(), answer.as_sequence()) {
        (Some(expected), Some(got)) => expected == got,
        _ => false,
    }
}
