//! `RecaptchaVerifier` against a local stand-in for `siteverify`.

use axum::{Router, body::Bytes, http::StatusCode, routing::post};
use contact_form_relay::infrastructure::captcha::{CaptchaError, CaptchaVerifier, RecaptchaVerifier};
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;

const SECRET: &str = "test-secret";

/// Accepts `response=good` with the expected secret, rejects everything else.
async fn siteverify(body: Bytes) -> (StatusCode, String) {
    let params: Vec<(String, String)> = url::form_urlencoded::parse(&body).into_owned().collect();
    let value = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    let body = if value("secret") != SECRET {
        json!({ "success": false, "error-codes": ["invalid-input-secret"] })
    } else if value("response") == "good" {
        json!({ "success": true, "hostname": "example.com", "challenge_ts": "2024-01-01T00:00:00Z" })
    } else {
        json!({ "success": false, "error-codes": ["invalid-input-response"] })
    };

    (StatusCode::OK, body.to_string())
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/siteverify")
}

fn verifier(url: String, secret: &str) -> RecaptchaVerifier {
    RecaptchaVerifier::new(url, secret, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_verify_accepts_valid_token() {
    let url = spawn(Router::new().route("/siteverify", post(siteverify))).await;

    let verdict = verifier(url, SECRET).verify("good").await.unwrap();

    assert!(verdict.success);
    assert_eq!(verdict.hostname.as_deref(), Some("example.com"));
    assert!(verdict.error_codes.is_empty());
}

#[tokio::test]
async fn test_verify_reports_error_codes() {
    let url = spawn(Router::new().route("/siteverify", post(siteverify))).await;

    let verdict = verifier(url, SECRET).verify("bad").await.unwrap();

    assert!(!verdict.success);
    assert_eq!(verdict.error_codes, vec!["invalid-input-response".to_string()]);
}

#[tokio::test]
async fn test_verify_sends_secret() {
    let url = spawn(Router::new().route("/siteverify", post(siteverify))).await;

    let verdict = verifier(url, "wrong-secret").verify("good").await.unwrap();

    assert!(!verdict.success);
    assert_eq!(verdict.error_codes, vec!["invalid-input-secret".to_string()]);
}

#[tokio::test]
async fn test_verify_non_json_response_is_error() {
    let app = Router::new().route(
        "/siteverify",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
    );
    let url = spawn(app).await;

    let result = verifier(url, SECRET).verify("good").await;

    assert!(matches!(result, Err(CaptchaError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_verify_unreachable_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = verifier(format!("http://{addr}/siteverify"), SECRET)
        .verify("good")
        .await;

    assert!(matches!(result, Err(CaptchaError::Transport(_))));
}
