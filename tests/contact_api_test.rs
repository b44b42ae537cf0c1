mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use fortune_writers_backend::{error::Error, routes, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use common::{MockLeadStore, MockMailer};

const OWNER: &str = "owner@fortunewriters.example";

fn app(mailer: MockMailer) -> Router {
    let state = AppState::new(Arc::new(mailer), Arc::new(MockLeadStore::new()), OWNER);
    Router::new()
        .route("/send-email", post(routes::contact::send_email))
        .with_state(state)
}

async fn post_json(app: Router, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri("/send-email")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn valid_inquiry_sends_two_messages_and_returns_200() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send()
        .withf(|email| email.to == OWNER && email.subject.contains('A'))
        .times(1)
        .returning(|_| Ok(()));
    mailer
        .expect_send()
        .withf(|email| email.to == "a@b.com")
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = post_json(
        app(mailer),
        json!({ "name": "A", "phone": "1", "email": "a@b.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn owner_send_failure_still_returns_200() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send()
        .withf(|email| email.to == OWNER)
        .times(1)
        .returning(|_| Err(Error::Mail("relay rejected".to_string())));
    mailer
        .expect_send()
        .withf(|email| email.to == "a@b.com")
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = post_json(
        app(mailer),
        json!({ "name": "A", "phone": "1", "email": "a@b.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn submitter_send_failure_returns_500() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send()
        .withf(|email| email.to == OWNER)
        .times(1)
        .returning(|_| Ok(()));
    mailer
        .expect_send()
        .withf(|email| email.to == "a@b.com")
        .times(1)
        .returning(|_| Err(Error::Mail("relay rejected".to_string())));

    let (status, body) = post_json(
        app(mailer),
        json!({ "name": "A", "phone": "1", "email": "a@b.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Failed to send confirmation email"));
}

#[tokio::test]
async fn empty_name_is_rejected_without_sending() {
    let mailer = MockMailer::new();

    let (status, body) = post_json(
        app(mailer),
        json!({ "name": "", "phone": "1", "email": "a@b.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}
