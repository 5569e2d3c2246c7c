//! End-to-end smoke tests for the full restwired stack.
//!
//! Each test spins up the complete application (memory-backed handlers,
//! real dispatch routes, real axum router) and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot`; no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use restwire_axum::register::register_resource_handler;
use restwire_memory::MemoryResourceHandler;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

/// Build a fully-wired router backed by in-memory resource handlers.
fn app() -> Router {
    let app = Router::new().route("/health", get(|| async { "OK" }));
    register_resource_handler(app, MemoryResourceHandler::new("note"))
        .layer(TraceLayer::new_for_http())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle for notes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_note_crud_cycle() {
    let app = app();

    // Create note
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v0.1/note")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"shopping","body":"milk"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["title"], "shopping");
    let note_id = body["result"]["id"].as_str().unwrap().to_string();

    // Read it back
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v0.1/note/{note_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["result"]["body"], "milk");

    // Replace via PUT
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/v0.1/note/{note_id}"))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"groceries","body":"milk, eggs"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["result"]["title"], "groceries");
    assert_eq!(body["result"]["id"], note_id.as_str());

    // Amend via PATCH
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/v0.1/note/{note_id}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"title":"groceries","body":"milk, eggs, bread"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["result"]["body"], "milk, eggs, bread");

    // Delete returns the stored representation
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v0.1/note/{note_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["id"], note_id.as_str());

    // Verify gone
    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v0.1/note/{note_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], format!("no resource with id {note_id}"));
}

// ---------------------------------------------------------------------------
// Error envelopes end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_unknown_format() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/v0.1/note/1?format=blah")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert_eq!(
        body,
        r#"{"error":"Format not implemented: blah","success":false}"#
    );
}

#[tokio::test]
async fn should_report_missing_resource() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/v0.1/note/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert_eq!(
        body,
        r#"{"error":"no resource with id does-not-exist","success":false}"#
    );
}

// ---------------------------------------------------------------------------
// Multiple collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_keep_collections_isolated() {
    let app = Router::new();
    let app = register_resource_handler(app, MemoryResourceHandler::new("note"));
    let app = register_resource_handler(app, MemoryResourceHandler::new("task"));

    // Create a note
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v0.1/note")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"alone"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    let note_id = body["result"]["id"].as_str().unwrap().to_string();

    // The task collection does not know it
    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v0.1/task/{note_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["success"], false);
}
