//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and `DATABASE_URL`.
//! They are skipped otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_adds_one_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique("alice");

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "200");
    assert_eq!(body.msg, "Register success");
    assert!(body.user_id.is_some());
    assert!(server.user_exists(&request.username).await.unwrap());
}

#[tokio::test]
async fn test_register_duplicate_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = RegisterRequest::unique("dup");
    server.post("/api/auth/register", &first).await.unwrap();

    // Same email, different username
    let mut same_email = RegisterRequest::unique("other");
    same_email.email = first.email.clone();
    let response = server.post("/api/auth/register", &same_email).await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "400");
    assert_eq!(body.msg, "Username or email already exists");

    // Same username, different email
    let mut same_username = RegisterRequest::unique("other");
    same_username.username = first.username.clone();
    let response = server.post("/api/auth/register", &same_username).await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.msg, "Username or email already exists");

    assert!(!server.user_exists(&same_email.username).await.unwrap());
    assert_eq!(
        server.stored_email(&first.username).await.unwrap(),
        Some(first.email.clone())
    );
}

#[tokio::test]
async fn test_register_get_not_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/auth/register").await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "404");
    assert_eq!(body.msg, "Access to this page is not allowed");
}

#[tokio::test]
async fn test_login_returns_stored_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique("login");
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let registered: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "200");
    assert_eq!(body.msg, "Login sucess");
    let user = body.user.expect("login returns the user row");
    assert_eq!(Some(user.id), registered.user_id);
    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert_eq!(user.number, request.number);
    assert!(!user.password.is_empty());
}

#[tokio::test]
async fn test_login_failures() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique("fail");
    server.post("/api/auth/register", &request).await.unwrap();

    let response = server
        .post(
            "/api/auth/login",
            &json!({ "username": request.username, "password": "not-it" }),
        )
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "400");
    assert_eq!(body.msg, "Wrong password");

    let unknown = RegisterRequest::unique("ghost");
    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&unknown))
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "400");
    assert_eq!(body.msg, "User not found");
}

#[tokio::test]
async fn test_malformed_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_raw("/api/auth/register", "{\"username\":")
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "400");
    assert_eq!(body.msg, "Invalid request body");
}

#[tokio::test]
async fn test_alice_and_bob_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let alice = RegisterRequest::unique("alice");
    let bob = RegisterRequest::unique("bob");

    for account in [&alice, &bob] {
        let response = server.post("/api/auth/register", account).await.unwrap();
        let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.status, "200");
    }

    // carol reuses bob's email
    let mut carol = RegisterRequest::unique("carol");
    carol.email = bob.email.clone();
    let response = server.post("/api/auth/register", &carol).await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "400");

    // Repeated logins give the same row
    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = server
            .post("/api/auth/login", &LoginRequest::from_register(&alice))
            .await
            .unwrap();
        let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
        ids.push(body.user.expect("user row").id);
    }
    assert_eq!(ids[0], ids[1]);

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&carol))
        .await
        .unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.msg, "User not found");

    assert!(server.user_exists(&alice.username).await.unwrap());
    assert!(server.user_exists(&bob.username).await.unwrap());
    assert!(!server.user_exists(&carol.username).await.unwrap());
}
