//! End-to-end run against mock HTTP collaborators.
//!
//! Wires the real directory and board clients through the engine and
//! verifies the full control flow: one attribute query, one listing, one
//! creation call per missing person.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rostersync_board::BoardClient;
use rostersync_directory::{CriteriaFilter, DirectoryClient};
use rostersync_engine::{SyncEngine, SyncError, SyncStats};

#[tokio::test]
async fn full_run_creates_exactly_the_missing_members() {
    let directory_server = MockServer::start().await;
    let board_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/people/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "Attrs": [
                { "AttrName": "gpmail", "Values": ["a@x.com"] },
                { "AttrName": "name", "Values": ["Alice"] },
            ]},
            { "Attrs": [
                { "AttrName": "name", "Values": ["Bob"] },
                { "AttrName": "gpmail", "Values": ["b@x.com"] },
            ]},
        ])))
        .expect(1)
        .mount(&directory_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Bob", "role": "member", "status": "active" },
        ])))
        .expect(1)
        .mount(&board_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(body_json(json!({ "name": "Alice", "email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&board_server)
        .await;

    let directory = DirectoryClient::new(directory_server.uri(), "dir-key").unwrap();
    let board = BoardClient::new(board_server.uri(), "board-key").unwrap();
    let engine = SyncEngine::new(directory, board);

    let stats = engine
        .run(&CriteriaFilter::parse("class=2015"))
        .await
        .unwrap();

    assert_eq!(
        stats,
        SyncStats {
            directory_entries: 2,
            existing_users: 1,
            created: 1,
        }
    );
}

#[tokio::test]
async fn full_run_with_no_directory_matches_succeeds_without_creations() {
    let directory_server = MockServer::start().await;
    let board_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/people/attributes"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no entries"))
        .mount(&directory_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&board_server)
        .await;

    // No POST /api/v1/users mock mounted: any creation attempt would 404
    // and fail the run.
    let directory = DirectoryClient::new(directory_server.uri(), "dir-key").unwrap();
    let board = BoardClient::new(board_server.uri(), "board-key").unwrap();
    let engine = SyncEngine::new(directory, board);

    let stats = engine.run(&CriteriaFilter::new()).await.unwrap();

    assert_eq!(stats, SyncStats::default());
}

#[tokio::test]
async fn full_run_aborts_when_directory_fails() {
    let directory_server = MockServer::start().await;
    let board_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/people/attributes"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&directory_server)
        .await;

    // The board listing must never be reached.
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&board_server)
        .await;

    let directory = DirectoryClient::new(directory_server.uri(), "dir-key").unwrap();
    let board = BoardClient::new(board_server.uri(), "board-key").unwrap();
    let engine = SyncEngine::new(directory, board);

    let err = engine.run(&CriteriaFilter::new()).await.unwrap_err();
    assert!(matches!(err, SyncError::Directory(_)));
}
