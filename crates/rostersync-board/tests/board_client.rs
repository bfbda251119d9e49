//! Integration tests for the board client using wiremock.
//!
//! Cover bearer authentication on both endpoints and the two independently
//! assertable listing failure kinds: non-2xx status vs malformed JSON.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rostersync_board::{BoardClient, BoardError, NewUser};

#[tokio::test]
async fn list_users_parses_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(header("Authorization", "Bearer board-key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Alice", "role": "member", "status": "active" },
            { "id": 2, "name": "Bob", "role": "administrator", "status": "blocked" },
        ])))
        .mount(&server)
        .await;

    let client = BoardClient::new(server.uri(), "board-key").unwrap();
    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice");
    // Blocked users are still listed; the caller does not filter on status.
    assert_eq!(users[1].status, "blocked");
}

#[tokio::test]
async fn list_users_non_success_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = BoardClient::new(server.uri(), "board-key").unwrap();
    let err = client.list_users().await.unwrap_err();

    match err {
        BoardError::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_users_malformed_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\""))
        .mount(&server)
        .await;

    let client = BoardClient::new(server.uri(), "board-key").unwrap();
    let err = client.list_users().await.unwrap_err();

    // Distinct from the HTTP-status kind above.
    assert!(matches!(err, BoardError::Parse(_)));
}

#[tokio::test]
async fn create_user_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(header("Authorization", "Bearer board-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "name": "Alice", "email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = BoardClient::new(server.uri(), "board-key").unwrap();
    client
        .create_user(&NewUser::new("Alice", "a@x.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn create_user_non_success_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = BoardClient::new(server.uri(), "board-key").unwrap();
    let err = client
        .create_user(&NewUser::new("Alice", "a@x.com"))
        .await
        .unwrap_err();

    match err {
        BoardError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
