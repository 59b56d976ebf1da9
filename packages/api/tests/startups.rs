//! Startups CRUD tests against the in-process mock API.

mod common;

use api::{ApiClient, ApiError, StartupPayload};
use common::spawn_mock;

fn payload(name: &str, description: &str, founder: &str) -> StartupPayload {
    StartupPayload {
        name: name.to_string(),
        description: description.to_string(),
        founder: founder.to_string(),
    }
}

#[tokio::test]
async fn create_returns_record_with_new_id() {
    let (_mock, url) = spawn_mock().await;
    let client = ApiClient::new(&url);

    let created = client
        .create_startup(&payload("Acme", "d", "F"))
        .await
        .expect("create should succeed");
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Acme");

    // The id is what the caller navigates to: `/details/<id>` resolves.
    let fetched = client.get_startup(&created.id).await.expect("get should succeed");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_parses_server_field_names() {
    let (mock, url) = spawn_mock().await;
    let id = mock.seed_startup("Acme", "Rockets", "F");
    let client = ApiClient::new(&url);

    let startups = client.list_startups().await.expect("list should succeed");
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0].id, id);
    assert_eq!(startups[0].founder, "F");
    assert_eq!(startups[0].created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
}

#[tokio::test]
async fn update_changes_the_stored_record() {
    let (mock, url) = spawn_mock().await;
    let id = mock.seed_startup("Acme", "Rockets", "F");
    let client = ApiClient::new(&url);

    client
        .update_startup(&id, &payload("Acme Corp", "Bigger rockets", "F"))
        .await
        .expect("update should succeed");

    let fetched = client.get_startup(&id).await.expect("get should succeed");
    assert_eq!(fetched.name, "Acme Corp");
    assert_eq!(fetched.description, "Bigger rockets");
}

#[tokio::test]
async fn delete_then_refetch_drops_the_record() {
    let (mock, url) = spawn_mock().await;
    let keep = mock.seed_startup("Keep", "d", "F");
    let doomed = mock.seed_startup("Drop", "d", "F");
    let client = ApiClient::new(&url);

    client.delete_startup(&doomed).await.expect("delete should succeed");
    assert!(!mock.has_startup(&doomed));

    // Re-running the list GET (the view's refetch) reflects the deletion.
    let startups = client.list_startups().await.expect("list should succeed");
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0].id, keep);
}

#[tokio::test]
async fn create_failure_carries_server_message() {
    let (_mock, url) = spawn_mock().await;
    let client = ApiClient::new(&url);

    let err = client
        .create_startup(&payload("", "d", "F"))
        .await
        .expect_err("create should fail");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Name is required");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn create_failure_falls_back_to_generic_message() {
    let (_mock, url) = spawn_mock().await;
    let client = ApiClient::new(&url);

    let err = client
        .create_startup(&payload("boom", "d", "F"))
        .await
        .expect_err("create should fail");
    assert_eq!(err.message(), "Failed to create new startup");
}

#[tokio::test]
async fn missing_record_is_a_not_found_error() {
    let (_mock, url) = spawn_mock().await;
    let client = ApiClient::new(&url);

    let err = client.get_startup("nope").await.expect_err("get should fail");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Startup not found");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}
