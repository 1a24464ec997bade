//! End-to-end tests for the signup/login flow and the bearer-token gate.
//!
//! The router runs against the in-memory user store; ledger routes are only
//! exercised up to the authentication boundary.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use farmbook_server::auth::{issue_token, verify_token, AuthService, CredentialStore, MemoryUserStore};
use farmbook_server::db::Database;
use farmbook_server::farm::FarmService;
use farmbook_server::models::{User, UserRole};
use farmbook_server::routes::app_router;
use farmbook_server::state::AppState;

const SECRET: &str = "test-secret-key";

fn test_state() -> AppState {
    let backend = Arc::new(MemoryUserStore::new());
    let auth_service = Arc::new(AuthService::new(
        CredentialStore::new(backend),
        SECRET.to_string(),
        900,
    ));

    // Lazy pool: never connects. The ledger routes are exercised only up to
    // the authentication gate in these tests.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/farmbook_test")
        .expect("lazy pool");
    let db = Database::new(pool);
    let farm_service = Arc::new(FarmService::new(db.pool().clone()));

    AppState::new(auth_service, farm_service, db)
}

fn app() -> Router {
    app_router().with_state(test_state())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn signup_body() -> Value {
    json!({
        "name": "Asha",
        "mobile": "9876543210",
        "password": "secret1"
    })
}

#[tokio::test]
async fn test_signup_creates_consumer_without_password_hash() {
    let app = app();

    let response = app
        .oneshot(post_json("/auth/signup", signup_body()))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], 2);
    assert_eq!(body["mobile"], "9876543210");
    assert_eq!(body["isActive"], true);

    let object = body.as_object().unwrap();
    assert!(!object.contains_key("passwordHash"));
    assert!(!object.contains_key("password_hash"));
    assert!(!object.contains_key("otp"));
}

#[tokio::test]
async fn test_signup_duplicate_mobile_conflicts() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/auth/signup", signup_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let second = json!({
        "name": "Ravi",
        "mobile": "9876543210",
        "password": "secret2"
    });
    let response = app.oneshot(post_json("/auth/signup", second)).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Mobile already in use");
}

#[tokio::test]
async fn test_signup_validation_breakdown() {
    let app = app();

    let bad = json!({
        "name": "Asha",
        "mobile": "12345",
        "password": "secret1"
    });
    let response = app.oneshot(post_json("/auth/signup", bad)).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert!(body["error"]["mobile"].is_array());
}

#[tokio::test]
async fn test_login_round_trip() {
    let app = app();

    app.clone()
        .oneshot(post_json("/auth/signup", signup_body()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/login",
            json!({ "emailOrMobile": "9876543210", "password": "secret1" }),
        ))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["user"]["mobile"], "9876543210");
    assert!(!body["user"].as_object().unwrap().contains_key("passwordHash"));

    let claims = verify_token(token, SECRET).unwrap();
    assert_eq!(claims.mobile, "9876543210");
    assert_eq!(claims.name, "Asha");
    assert_eq!(claims.role, UserRole::Consumer);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = app();

    app.clone()
        .oneshot(post_json("/auth/signup", signup_body()))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({ "emailOrMobile": "9876543210", "password": "wrong1" }),
        ))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_identity_is_generic() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({ "emailOrMobile": "0000000000", "password": "secret1" }),
        ))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

fn ledger_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/milk");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let response = app().oneshot(ledger_request(None)).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized - No token provided");
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        name: "Asha".to_string(),
        email: None,
        mobile: "9876543210".to_string(),
        gender: None,
        address: None,
        role: UserRole::Consumer,
        password_hash: "salt:digest".to_string(),
        otp: None,
        otp_verified: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    let expired = issue_token(&user, SECRET, -120).unwrap();

    let response = app().oneshot(ledger_request(Some(&expired))).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let response = app()
        .oneshot(ledger_request(Some("not.a.token")))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}
