use mockito::{Matcher, Server, ServerGuard};

use validation_followup_notifier::{
    ApiError, CardEvent, GraphQlClient, Ineligibility, Inputs, ResolveError, RunConfig,
    RunOutcome, Runner, RunnerError,
};

const ISSUE_CONTENT_URL: &str = "https://api.github.com/repos/octo/widgets/issues/7";

fn test_config() -> RunConfig {
    RunConfig::from_inputs(Inputs {
        repository: "octo/widgets".to_string(),
        github_token: "test-token".to_string(),
        target_board: "9".to_string(),
        validation_board: "3".to_string(),
        title_suffix: "(validated)".to_string(),
        assignees: "alice".to_string(),
        labels: "qa-verified".to_string(),
    })
    .unwrap()
}

fn card_event(content_url: &str) -> CardEvent {
    CardEvent::from_payload(&format!(
        r#"{{"action":"moved","project_card":{{"content_url":"{content_url}"}}}}"#
    ))
    .unwrap()
}

fn test_runner(server: &ServerGuard) -> Runner {
    let client = GraphQlClient::with_base_uri("test-token", &server.url()).unwrap();
    Runner::with_client(test_config(), client)
}

fn issue_response(state: &str, board_numbers: &[u64]) -> String {
    let nodes: Vec<serde_json::Value> = board_numbers
        .iter()
        .map(|number| serde_json::json!({"project": {"number": number}}))
        .collect();
    serde_json::json!({
        "data": {
            "repository": {
                "issue": {
                    "id": "I_1",
                    "state": state,
                    "title": "Fix parser",
                    "projectCards": {"nodes": nodes}
                }
            }
        }
    })
    .to_string()
}

/// Registers a mock answering the named GraphQL operation.
async fn mock_operation(server: &mut ServerGuard, operation: &str, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex(operation.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn creates_followup_issue_for_validated_closed_issue() {
    let mut server = Server::new_async().await;

    let issue_mock = server
        .mock("POST", "/graphql")
        .match_header("authorization", Matcher::Regex("(?i)bearer test-token".to_string()))
        .match_body(Matcher::Regex("IssueWithBoards".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(issue_response("CLOSED", &[3]))
        .create_async()
        .await;

    let board_mock = mock_operation(
        &mut server,
        "BoardId",
        r#"{"data":{"repository":{"project":{"id":"P_9"}}}}"#,
    )
    .await;
    let assignee_mock = mock_operation(
        &mut server,
        "AssigneeId",
        r#"{"data":{"user":{"id":"U_alice"}}}"#,
    )
    .await;
    let label_mock = mock_operation(
        &mut server,
        "LabelId",
        r#"{"data":{"repository":{"label":{"id":"L_qa"}}}}"#,
    )
    .await;
    let repository_mock = mock_operation(
        &mut server,
        "RepositoryId",
        r#"{"data":{"repository":{"id":"R_1"}}}"#,
    )
    .await;

    // Exactly one creation request, carrying the composed payload.
    let create_mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("CreateFollowupIssue".to_string()),
            Matcher::PartialJsonString(
                r#"{
                    "variables": {
                        "createIssue": {
                            "title": "Fix parser (validated)",
                            "body": "A new issue has been completed, #7. Please test it.",
                            "assigneeIds": ["U_alice"],
                            "labelIds": ["L_qa"],
                            "projectIds": ["P_9"],
                            "repositoryId": "R_1",
                            "milestoneId": null,
                            "clientMutationId": null
                        }
                    }
                }"#
                .to_string(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"createIssue":{"issue":{"id":"I_2","number":101}}}}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = test_runner(&server)
        .run(&card_event(ISSUE_CONTENT_URL))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Created {
            original_issue: 7,
            title: "Fix parser (validated)".to_string()
        }
    );

    issue_mock.assert_async().await;
    board_mock.assert_async().await;
    assignee_mock.assert_async().await;
    label_mock.assert_async().await;
    repository_mock.assert_async().await;
    create_mock.assert_async().await;
}

#[tokio::test]
async fn open_issue_is_skipped_without_mutation() {
    let mut server = Server::new_async().await;

    let issue_mock = mock_operation(
        &mut server,
        "IssueWithBoards",
        &issue_response("OPEN", &[3]),
    )
    .await;
    let create_mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("CreateFollowupIssue".to_string()))
        .expect(0)
        .create_async()
        .await;

    let outcome = test_runner(&server)
        .run(&card_event(ISSUE_CONTENT_URL))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::SkippedIneligible {
            reason: Ineligibility::NotClosed {
                state: "OPEN".to_string()
            }
        }
    );

    issue_mock.assert_async().await;
    create_mock.assert_async().await;
}

#[tokio::test]
async fn issue_off_validation_board_is_skipped_without_mutation() {
    let mut server = Server::new_async().await;

    mock_operation(
        &mut server,
        "IssueWithBoards",
        &issue_response("CLOSED", &[5]),
    )
    .await;
    let create_mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("CreateFollowupIssue".to_string()))
        .expect(0)
        .create_async()
        .await;

    let outcome = test_runner(&server)
        .run(&card_event(ISSUE_CONTENT_URL))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::SkippedIneligible {
            reason: Ineligibility::NotOnValidationBoard { board: 3 }
        }
    );
    create_mock.assert_async().await;
}

#[tokio::test]
async fn pull_request_card_is_skipped_without_any_api_call() {
    let mut server = Server::new_async().await;

    let any_call = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let outcome = test_runner(&server)
        .run(&card_event(
            "https://api.github.com/repos/octo/widgets/pulls/7",
        ))
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::SkippedNotIssueCard);
    any_call.assert_async().await;
}

#[tokio::test]
async fn note_card_is_skipped_without_any_api_call() {
    let mut server = Server::new_async().await;

    let any_call = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let event = CardEvent::from_payload(r#"{"project_card":{"note":"check this"}}"#).unwrap();
    let outcome = test_runner(&server).run(&event).await.unwrap();

    assert_eq!(outcome, RunOutcome::SkippedNotIssueCard);
    any_call.assert_async().await;
}

#[tokio::test]
async fn unresolved_label_aborts_before_creation() {
    let mut server = Server::new_async().await;

    mock_operation(
        &mut server,
        "IssueWithBoards",
        &issue_response("CLOSED", &[3]),
    )
    .await;
    mock_operation(
        &mut server,
        "BoardId",
        r#"{"data":{"repository":{"project":{"id":"P_9"}}}}"#,
    )
    .await;
    mock_operation(
        &mut server,
        "AssigneeId",
        r#"{"data":{"user":{"id":"U_alice"}}}"#,
    )
    .await;
    mock_operation(
        &mut server,
        "LabelId",
        r#"{"data":{"repository":{"label":null}}}"#,
    )
    .await;

    // Fail-fast: the repository lookup and the mutation never happen.
    let repository_mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("RepositoryId".to_string()))
        .expect(0)
        .create_async()
        .await;
    let create_mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("CreateFollowupIssue".to_string()))
        .expect(0)
        .create_async()
        .await;

    let result = test_runner(&server).run(&card_event(ISSUE_CONTENT_URL)).await;

    match result {
        Err(RunnerError::Resolve(ResolveError::LabelNotFound { name })) => {
            assert_eq!(name, "qa-verified");
        }
        other => panic!("expected label resolution failure, got {other:?}"),
    }

    repository_mock.assert_async().await;
    create_mock.assert_async().await;
}

#[tokio::test]
async fn missing_issue_is_fatal() {
    let mut server = Server::new_async().await;

    mock_operation(
        &mut server,
        "IssueWithBoards",
        r#"{"data":{"repository":{"issue":null}}}"#,
    )
    .await;

    let result = test_runner(&server).run(&card_event(ISSUE_CONTENT_URL)).await;

    assert!(matches!(
        result,
        Err(RunnerError::IssueNotFound { number: 7 })
    ));
}

#[tokio::test]
async fn graphql_errors_envelope_is_fatal() {
    let mut server = Server::new_async().await;

    mock_operation(
        &mut server,
        "IssueWithBoards",
        r#"{"data":null,"errors":[{"message":"Something went wrong"}]}"#,
    )
    .await;

    let result = test_runner(&server).run(&card_event(ISSUE_CONTENT_URL)).await;

    match result {
        Err(RunnerError::Api(ApiError::Graphql { messages, .. })) => {
            assert_eq!(messages, ["Something went wrong"]);
        }
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_numeric_issue_segment_is_fatal() {
    let server = Server::new_async().await;

    let result = test_runner(&server)
        .run(&card_event(
            "https://api.github.com/repos/octo/widgets/issues/latest",
        ))
        .await;

    assert!(matches!(
        result,
        Err(RunnerError::InvalidIssueNumber { .. })
    ));
}
