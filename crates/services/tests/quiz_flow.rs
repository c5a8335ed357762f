mod common;

use std::sync::Arc;

use pathway_core::normalize::raw::RawQuiz;
use pathway_core::{QuizError, QuizPhase};
use services::{ApiError, PathService, QuizService, QuizServiceError};

use common::{FakeApi, four_week_response, quiz_response, saas_profile};

#[tokio::test]
async fn quiz_for_generated_week_scores_answers() {
    let api = Arc::new(
        FakeApi::new()
            .with_path(Ok(four_week_response()))
            .with_quiz(Ok(quiz_response(3))),
    );
    let path = PathService::new(api.clone())
        .fetch(&saas_profile())
        .await
        .unwrap();
    let week = &path.weeks[1];

    let mut session = QuizService::new(api.clone()).start_quiz(week).await.unwrap();

    assert_eq!(session.week().id, week.id);
    assert_eq!(session.quiz().week_number, Some(2));
    let ids: Vec<_> = session
        .quiz()
        .questions
        .iter()
        .map(|question| question.id.clone())
        .collect();
    session.select_answer(&ids[0], 0).unwrap();
    session.select_answer(&ids[1], 1).unwrap();
    assert_eq!(session.score(), 1);
    assert!(session.submit().unwrap_err().is_invalid_transition());

    session.select_answer(&ids[2], 0).unwrap();
    let result = session.submit().unwrap();
    assert_eq!((result.score, result.total), (2, 3));
    assert_eq!(session.phase(), QuizPhase::Submitted);

    let requests = api.quiz_requests.lock().unwrap();
    assert_eq!(requests[0].week_number, 2);
    assert_eq!(requests[0].topics, week.topics);
}

#[tokio::test]
async fn empty_quiz_cannot_be_started() {
    let api = Arc::new(FakeApi::new().with_quiz(Ok(RawQuiz::default())));
    let path = pathway_core::PathNormalizer::new()
        .normalize(&four_week_response())
        .unwrap();

    let err = QuizService::new(api)
        .start_quiz(&path.weeks[0])
        .await
        .unwrap_err();
    assert!(matches!(err, QuizServiceError::Quiz(QuizError::Empty)));
}

#[tokio::test]
async fn quiz_transport_failure_surfaces_request_failed() {
    let api = Arc::new(FakeApi::new().with_quiz(Err(ApiError::request_failed("timeout"))));
    let path = pathway_core::PathNormalizer::new()
        .normalize(&four_week_response())
        .unwrap();

    let err = QuizService::new(api)
        .start_quiz(&path.weeks[0])
        .await
        .unwrap_err();
    match err {
        QuizServiceError::Api(api_err) => assert_eq!(api_err.message(), "timeout"),
        other => panic!("unexpected error: {other}"),
    }
}
