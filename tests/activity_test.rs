mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn log_exercise_appears_on_dashboard() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    let (status, json) = common::post_form_with_auth(
        &app,
        "/api/v1/exercise/log",
        "exercise_type=Walking&duration=20&notes=Stroller+loop",
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert!(json["id"].as_i64().unwrap_or_default() > 0);

    let (_, json) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    let exercises = json["exercises"].as_array().cloned().unwrap_or_default();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0]["exerciseType"], "Walking");
    assert_eq!(exercises[0]["duration"], 20);
    assert_eq!(exercises[0]["notes"], "Stroller loop");
}

#[tokio::test]
async fn dashboard_shows_five_newest_exercises() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    for minutes in 1..=7 {
        common::post_form_with_auth(
            &app,
            "/api/v1/exercise/log",
            &format!("exercise_type=Walking&duration={minutes}"),
            &token,
        )
        .await;
    }

    let (_, json) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    let durations: Vec<i64> = json["exercises"]
        .as_array()
        .map(|items| items.iter().filter_map(|e| e["duration"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(durations, vec![7, 6, 5, 4, 3]);
}

#[tokio::test]
async fn dashboard_is_private_to_each_user() {
    let (app, _) = common::test_app().await;
    let first = common::register_and_login(&app, "first").await;
    let second = common::register_and_login(&app, "second").await;

    common::post_form_with_auth(
        &app,
        "/api/v1/exercise/log",
        "exercise_type=Pilates&duration=25",
        &first,
    )
    .await;

    let (_, json) = common::get_with_auth(&app, "/api/v1/dashboard", &second).await;
    assert_eq!(json["exercises"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn log_exercise_validates_input() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    for form in [
        "duration=20",
        "exercise_type=Walking",
        "exercise_type=Walking&duration=twenty",
        "exercise_type=Walking&duration=0",
    ] {
        let (status, json) =
            common::post_form_with_auth(&app, "/api/v1/exercise/log", form, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{form}");
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn logging_requires_a_session() {
    let (app, _) = common::test_app().await;
    for (uri, form) in [
        ("/api/v1/exercise/log", "exercise_type=Walking&duration=20"),
        (
            "/api/v1/exercise/progress",
            "exercise_id=1&performance_rating=4&energy_level=3&difficulty_felt=2",
        ),
        ("/api/v1/mental-wellness/log", "mood_rating=4&stress_level=2"),
    ] {
        let (status, _) = common::post_form(&app, uri, form).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn anonymous_writes_are_unauthorized_whatever_the_body() {
    let (app, _) = common::test_app().await;
    let body = json!({ "exercise_type": "Walking", "duration": 20 });
    for uri in [
        "/api/v1/exercise/log",
        "/api/v1/exercise/progress",
        "/api/v1/mental-wellness/log",
        "/api/v1/profile",
    ] {
        let (status, json) = common::post_json(&app, uri, &body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(json["error"]["code"], "UNAUTHORIZED", "{uri}");
    }
}

#[tokio::test]
async fn non_form_body_is_a_validation_error() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;
    let body = json!({ "mood_rating": 4, "stress_level": 2 });
    for uri in [
        "/api/v1/exercise/log",
        "/api/v1/exercise/progress",
        "/api/v1/mental-wellness/log",
        "/api/v1/profile",
    ] {
        let (status, json) = common::post_json_with_auth(&app, uri, &body, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR", "{uri}");
    }

    let (_, dashboard) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    assert_eq!(dashboard["wellnessEntries"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn progress_must_reference_own_exercise() {
    let (app, _) = common::test_app().await;
    let owner = common::register_and_login(&app, "owner").await;
    let other = common::register_and_login(&app, "other").await;

    let (_, logged) = common::post_form_with_auth(
        &app,
        "/api/v1/exercise/log",
        "exercise_type=Walking&duration=20",
        &owner,
    )
    .await;
    let exercise_id = logged["id"].as_i64().unwrap_or_default();
    let form = format!(
        "exercise_id={exercise_id}&performance_rating=4&energy_level=3&difficulty_felt=2&notes=ok"
    );

    let (status, json) =
        common::post_form_with_auth(&app, "/api/v1/exercise/progress", &form, &owner).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Progress logged successfully!");

    let (status, _) =
        common::post_form_with_auth(&app, "/api/v1/exercise/progress", &form, &other).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::post_form_with_auth(
        &app,
        "/api/v1/exercise/progress",
        "exercise_id=999&performance_rating=4&energy_level=3&difficulty_felt=2",
        &owner,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_ratings_are_accepted() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    let (status, _) = common::post_form_with_auth(
        &app,
        "/api/v1/mental-wellness/log",
        "mood_rating=11&stress_level=-2&sleep_hours=",
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, json) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    let entries = json["wellnessEntries"].as_array().cloned().unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["moodRating"], 11);
    assert_eq!(entries[0]["stressLevel"], -2);
    assert!(entries[0]["sleepHours"].is_null());
}

#[tokio::test]
async fn dashboard_shows_three_newest_wellness_entries() {
    let (app, _) = common::test_app().await;
    let token = common::register_and_login(&app, "mama").await;

    for mood in 1..=4 {
        common::post_form_with_auth(
            &app,
            "/api/v1/mental-wellness/log",
            &format!("mood_rating={mood}&stress_level=3&sleep_hours=6.5"),
            &token,
        )
        .await;
    }

    let (_, json) = common::get_with_auth(&app, "/api/v1/dashboard", &token).await;
    let moods: Vec<i64> = json["wellnessEntries"]
        .as_array()
        .map(|items| items.iter().filter_map(|e| e["moodRating"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(moods, vec![4, 3, 2]);
    assert_eq!(json["wellnessEntries"][0]["sleepHours"], 6.5);
}
