use std::sync::Arc;

use exam_core::model::{
    AnswerValue, Catalog, CourseId, Difficulty, MatchingPair, QuestionId, QuestionRecord,
    QuestionType, SessionConfig, UnitId,
};
use exam_core::time::{fixed_clock, fixed_now};
use services::{ExamLoopService, Phase, SessionError, TickOutcome};

fn cs101() -> CourseId {
    CourseId::new("cs101")
}

fn unit(id: &str) -> UnitId {
    UnitId::new(id)
}

fn catalog() -> Arc<Catalog> {
    let questions = vec![
        QuestionRecord::multiple_choice(
            QuestionId::new("mcq-1"),
            cs101(),
            unit("u1"),
            Difficulty::Easy,
            "Which structure is LIFO?",
            vec!["stack".into(), "queue".into(), "heap".into()],
            "stack",
        )
        .unwrap(),
        QuestionRecord::true_false(
            QuestionId::new("tf-1"),
            cs101(),
            unit("u1"),
            Difficulty::Easy,
            "A queue is FIFO",
            true,
        ),
        QuestionRecord::fill_blank(
            QuestionId::new("fb-1"),
            cs101(),
            unit("u2"),
            Difficulty::Medium,
            "A ___ maps keys to ___",
            vec!["hash table".into(), "values".into()],
        )
        .unwrap(),
        QuestionRecord::matching(
            QuestionId::new("m-1"),
            cs101(),
            unit("u2"),
            Difficulty::Hard,
            "Match structure to behavior",
            vec![
                MatchingPair::new("stack", "LIFO operations"),
                MatchingPair::new("queue", "FIFO operations"),
            ],
        )
        .unwrap(),
        QuestionRecord::coding(
            QuestionId::new("c-1"),
            cs101(),
            unit("u3"),
            Difficulty::Hard,
            "Print hello",
            "println!(\"hello\");",
        ),
    ];
    Arc::new(Catalog::new(questions).unwrap())
}

#[test]
fn full_session_grades_every_answer_type() {
    let service = ExamLoopService::new(fixed_clock(), catalog()).with_seed(3);
    let config = SessionConfig::new(10).with_course(cs101());

    let mut session = service.start_session(config).unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.questions().len(), 5);

    // Answer everything; fill-blank sloppily (case/whitespace), matching
    // exactly, mcq wrong.
    session
        .set_answer(&QuestionId::new("mcq-1"), AnswerValue::text("queue"))
        .unwrap();
    session
        .set_answer(&QuestionId::new("tf-1"), AnswerValue::text("true"))
        .unwrap();
    session
        .set_answer(
            &QuestionId::new("fb-1"),
            AnswerValue::sequence([" Hash Table ", "VALUES"]),
        )
        .unwrap();
    session
        .set_answer(
            &QuestionId::new("m-1"),
            AnswerValue::sequence(["LIFO operations", "FIFO operations"]),
        )
        .unwrap();
    session
        .set_answer(
            &QuestionId::new("c-1"),
            AnswerValue::text("  println!(\"hello\");\n"),
        )
        .unwrap();

    let result = service.finish(&mut session).unwrap();
    assert_eq!(result.total_count(), 5);
    assert_eq!(result.correct_count(), 4);
    assert_eq!(result.score(), 80);

    let mcq = result
        .details()
        .iter()
        .find(|d| d.question_id == QuestionId::new("mcq-1"))
        .unwrap();
    assert!(!mcq.is_correct);
    assert_eq!(mcq.answer, Some(AnswerValue::text("queue")));
}

#[test]
fn shortfall_session_draws_the_whole_pool() {
    // 2 easy questions in the pool, 10 requested: exactly 2, no padding.
    let service = ExamLoopService::new(fixed_clock(), catalog());
    let config = SessionConfig::new(10)
        .with_course(cs101())
        .with_difficulty(Difficulty::Easy);

    let session = service.start_session(config).unwrap();
    assert_eq!(session.questions().len(), 2);
    for q in session.questions() {
        assert_eq!(q.difficulty(), Difficulty::Easy);
    }
}

#[test]
fn expiry_produces_a_report_from_captured_answers() {
    let service = ExamLoopService::new(fixed_clock(), catalog()).with_seed(5);
    let config = SessionConfig::new(2)
        .with_course(cs101())
        .with_question_types([QuestionType::TrueFalse, QuestionType::Mcq])
        .with_time_limit_minutes(0);

    let mut session = service.start_session(config).unwrap();
    session
        .set_answer(&QuestionId::new("tf-1"), AnswerValue::text("true"))
        .unwrap();

    // Zero-minute budget: the first tick expires the countdown.
    assert_eq!(service.tick(&mut session), TickOutcome::Expired);
    assert_eq!(session.phase(), Phase::Finished);

    let result = session.result().unwrap().clone();
    assert_eq!(result.total_count(), 2);
    assert_eq!(result.correct_count(), 1);

    // Answers captured before expiry are in the report; later mutation is
    // rejected and the report is unchanged.
    let err = session
        .set_answer(&QuestionId::new("mcq-1"), AnswerValue::text("stack"))
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidState(_)));
    assert_eq!(session.result(), Some(&result));

    // A manual finish after expiry returns the same report.
    assert_eq!(service.finish(&mut session).unwrap(), result);
}

#[test]
fn no_matching_course_is_a_valid_empty_session() {
    let service = ExamLoopService::new(fixed_clock(), catalog());
    let config = SessionConfig::new(5).with_course(CourseId::new("bio200"));

    let mut session = service.start_session(config).unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert!(session.questions().is_empty());

    let result = service.finish(&mut session).unwrap();
    assert_eq!(result.score(), 0);
    assert_eq!(result.total_count(), 0);
}

#[test]
fn missing_course_never_starts() {
    let service = ExamLoopService::new(fixed_clock(), catalog());
    let err = service.start_session(SessionConfig::new(5)).unwrap_err();
    assert!(matches!(err, SessionError::Configuration(_)));
}

#[test]
fn result_serializes_for_downstream_consumers() {
    let service = ExamLoopService::new(fixed_clock(), catalog()).with_seed(1);
    let config = SessionConfig::new(1)
        .with_course(cs101())
        .with_question_types([QuestionType::TrueFalse]);

    let mut session = service.start_session(config).unwrap();
    session
        .set_answer(&QuestionId::new("tf-1"), AnswerValue::text("true"))
        .unwrap();
    let result = service.finish(&mut session).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["score"], 100);
    assert_eq!(json["total_count"], 1);
    assert_eq!(json["details"][0]["question_id"], "tf-1");
    assert_eq!(json["details"][0]["answer"], "true");
}

#[test]
fn elapsed_time_is_wall_clock_not_budget() {
    // Drive the session directly with explicit timestamps: started at the
    // fixed instant, finished 95 seconds later, budget untouched.
    let mut session = services::ExamSession::new(
        SessionConfig::new(2)
            .with_course(cs101())
            .with_time_limit_minutes(30),
    );
    session.start(&catalog(), fixed_now()).unwrap();

    let finish_at = fixed_now() + chrono::Duration::seconds(95);
    let result = session.finish(finish_at).unwrap();
    assert_eq!(result.time_taken_seconds(), 95);
}
