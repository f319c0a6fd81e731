mod common;

use axum::http::StatusCode;

// ─────────────────────────────────────────────────────────────────────────────
// Registration
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_creates_account() {
    let (app, _) = common::test_app().await;
    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=mama&email=mama@example.com&password=secret&full_name=Jo+Doe",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["username"], "mama");
    assert_eq!(json["email"], "mama@example.com");
    assert_eq!(json["fullName"], "Jo Doe");
    assert_eq!(json["postpartumMonths"], 0);
    assert_eq!(json["isAdmin"], false);
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let (app, _) = common::test_app().await;
    common::register(&app, "mama").await;

    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=mama&email=other@example.com&password=secret&full_name=Other",
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Username")
    );
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (app, _) = common::test_app().await;
    common::register(&app, "mama").await;

    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=other&email=mama@example.com&password=secret&full_name=Other",
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Email")
    );
}

#[tokio::test]
async fn username_is_checked_before_email() {
    let (app, _) = common::test_app().await;
    common::register(&app, "mama").await;

    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=mama&email=mama@example.com&password=secret&full_name=Again",
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Username")
    );
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let (app, _) = common::test_app().await;
    common::register(&app, "mama").await;

    let (status, _) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=Mama&email=capital@example.com&password=secret&full_name=Capital",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn register_requires_every_field() {
    let (app, _) = common::test_app().await;
    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/register",
        "username=mama&email=mama@example.com&password=secret",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

// ─────────────────────────────────────────────────────────────────────────────
// Login / logout
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_returns_token_and_user() {
    let (app, state) = common::test_app().await;
    common::register(&app, "mama").await;

    let (status, json) = common::post_form(
        &app,
        "/api/v1/auth/login",
        "username=mama&password=password123",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["username"], "mama");
    assert_eq!(json["token"].as_str().unwrap_or_default().len(), 64);
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user_alike() {
    let (app, _) = common::test_app().await;
    common::register(&app, "mama").await;

    let (wrong_status, wrong_json) = common::post_form(
        &app,
        "/api/v1/auth/login",
        "username=mama&password=nope",
    )
    .await;
    let (unknown_status, unknown_json) = common::post_form(
        &app,
        "/api/v1/auth/login",
        "username=nobody&password=password123",
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_json, unknown_json);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let (app, state) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    let (status, _) = common::get_with_auth(&app, "/api/v1/profile", &token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::post_form_with_auth(&app, "/api/v1/auth/logout", "", &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(state.sessions.is_empty());

    let (status, json) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn logout_without_session_is_harmless() {
    let (app, _) = common::test_app().await;
    let (status, _) = common::post_form(&app, "/api/v1/auth/logout", "").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_token_is_anonymous() {
    let (app, _) = common::test_app().await;
    let (status, _) = common::get_with_auth(&app, "/api/v1/profile", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
