use std::collections::BTreeSet;

use hospital_dojo::{
    is_correct, Answer, Dataset, LoadError, Phase, QuizError, QuizSession, Scenario, ScenarioId,
    SessionKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scenario(id: ScenarioId, category: &str, function_type: &str, ward: &str) -> Scenario {
    Scenario {
        id,
        question_text: format!("scenario {id}"),
        correct_answer: Answer::new(category, function_type, ward),
        explanation: format!("explanation {id}"),
        tags: vec!["tag".to_string()],
        key_point: String::new(),
    }
}

fn four_scenarios() -> Dataset {
    Dataset::new(vec![
        scenario(1, "特定機能病院", "高度急性期", "ICU"),
        scenario(2, "一般病院", "急性期", "一般病棟"),
        scenario(3, "一般病院", "回復期", "回復期リハビリテーション病棟"),
        scenario(4, "療養型病院", "慢性期", "療養病棟"),
    ])
    .unwrap()
}

fn pick(session: &QuizSession, correct: bool) -> usize {
    let answer = &session.current_scenario().correct_answer;
    session
        .options()
        .iter()
        .position(|option| is_correct(option, answer) == correct)
        .unwrap()
}

#[test]
fn wrong_first_then_review_only_the_miss() {
    let mut session = QuizSession::start_full(four_scenarios(), StdRng::seed_from_u64(1)).unwrap();

    let index = pick(&session, false);
    assert_eq!(session.select_option(index), Ok(false));
    assert_eq!(session.wrong_ids(), &BTreeSet::from([1]));
    assert_eq!(session.score(), 0);
    session.advance().unwrap();

    for _ in 2..=4 {
        let index = pick(&session, true);
        assert_eq!(session.select_option(index), Ok(true));
        session.advance().unwrap();
    }

    assert_eq!(session.phase(), Phase::Finished);
    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 3);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.wrong_ids, vec![1]);
    assert_eq!(summary.kind, SessionKind::Full);

    session.restart_wrong().unwrap();
    let ids: Vec<_> = session.question_pool().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(session.position(), 0);
    assert_eq!(session.score(), 0);
    assert!(session.wrong_ids().is_empty());
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.kind(), SessionKind::Review);
}

#[test]
fn review_session_still_draws_distractors_from_whole_dataset() {
    let dataset = four_scenarios();
    let pool = vec![dataset.scenarios()[2].clone()];
    let session = QuizSession::start(dataset.clone(), pool, StdRng::seed_from_u64(8)).unwrap();

    let options: BTreeSet<_> = session
        .options()
        .iter()
        .map(|o| o.ward.clone())
        .collect();
    let every_answer: BTreeSet<_> = dataset
        .scenarios()
        .iter()
        .map(|s| s.correct_answer.ward.clone())
        .collect();
    assert_eq!(options, every_answer);
}

#[test]
fn finished_session_rejects_answers_until_restarted() {
    let mut session = QuizSession::start_full(four_scenarios(), StdRng::seed_from_u64(2)).unwrap();
    while session.phase() == Phase::InProgress {
        let index = pick(&session, true);
        session.select_option(index).unwrap();
        session.advance().unwrap();
    }

    let before = session.snapshot();
    assert!(matches!(
        session.select_option(0),
        Err(QuizError::InvalidState { .. })
    ));
    assert!(matches!(
        session.advance(),
        Err(QuizError::InvalidState { .. })
    ));
    assert!(matches!(
        session.restart_wrong(),
        Err(QuizError::InvalidState { .. })
    ));
    assert_eq!(session.snapshot(), before);

    session.restart_all().unwrap();
    assert_eq!(session.question_pool(), four_scenarios().scenarios());
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn every_dataset_answer_is_correct_against_itself() {
    let dataset = Dataset::builtin().unwrap();
    for scenario in dataset.scenarios() {
        assert!(is_correct(&scenario.correct_answer, &scenario.correct_answer));
    }
}

#[test]
fn loads_dataset_from_json() {
    let json = r#"[
        {"id": 1, "questionText": "q1", "correctAnswer": {"category": "a", "functionType": "x", "ward": "1"}, "explanation": "e", "tags": [], "keyPoint": "k"},
        {"id": 2, "questionText": "q2", "correctAnswer": {"category": "b", "functionType": "x", "ward": "2"}, "explanation": "e", "tags": [], "keyPoint": "k"},
        {"id": 3, "questionText": "q3", "correctAnswer": {"category": "c", "functionType": "x", "ward": "3"}, "explanation": "e", "tags": [], "keyPoint": "k"},
        {"id": 4, "questionText": "q4", "correctAnswer": {"category": "d", "functionType": "x", "ward": "4"}, "explanation": "e"}
    ]"#;

    let dataset = Dataset::from_json_str(json).unwrap();
    assert_eq!(dataset.len(), 4);
    assert!(dataset.get(4).unwrap().tags.is_empty());

    let empty = Dataset::from_json_str("[]");
    assert!(matches!(empty, Err(LoadError::Empty)));
}

#[test]
fn snapshot_serializes_for_front_ends() {
    let session = QuizSession::start_full(four_scenarios(), StdRng::seed_from_u64(4)).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["position"], 0);
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["current_options"].as_array().unwrap().len(), 4);
    assert_eq!(json["question_pool"][0]["questionText"], "scenario 1");
}
