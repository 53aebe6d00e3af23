mod common;

use axum::http::StatusCode;
use fittrack::repositories::{ExerciseRepository, WorkoutRepository};
use serde_json::json;

#[tokio::test]
async fn test_add_exercise_to_workout() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);
    let workout = common::create_test_workout(&pool, "1", "Pull", vec![]).await;

    let response = common::send(
        &app.router,
        "POST",
        &format!("/workouts/{}/exercises", workout.id),
        Some(&auth),
        Some(json!({"name": "Pull-up", "sets": 4, "reps": 8, "time": 12})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Exercise added successfully");
    assert_eq!(body["exercise"]["name"], "Pull-up");
    assert_eq!(body["exercise"]["workoutId"], workout.id);

    let stored = WorkoutRepository::new(pool)
        .find_by_id(workout.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.exercises.len(), 1);
    assert_eq!(stored.exercises[0].sets, 4);
}

#[tokio::test]
async fn test_add_exercise_to_missing_workout_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);

    let response = common::send(
        &app.router,
        "POST",
        "/workouts/9999/exercises",
        Some(&auth),
        Some(json!({"name": "Pull-up", "sets": 4, "reps": 8, "time": 12})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(common::count_exercise_entries(&pool, 9999), 0);
}

#[tokio::test]
async fn test_get_exercise() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);
    let workout =
        common::create_test_workout(&pool, "1", "Pull", vec![common::exercise("Row", 3, 10, 8)])
            .await;
    let exercise_id = workout.exercises[0].id;

    let response = common::send(
        &app.router,
        "GET",
        &format!("/exercises/{}", exercise_id),
        Some(&auth),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Row");
    assert_eq!(body["reps"], 10);
}

#[tokio::test]
async fn test_get_missing_exercise_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);

    let response = common::send(&app.router, "GET", "/exercises/9999", Some(&auth), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_exercise_overwrites_fields() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);
    let workout =
        common::create_test_workout(&pool, "1", "Pull", vec![common::exercise("Row", 3, 10, 8)])
            .await;
    let exercise_id = workout.exercises[0].id;

    let response = common::send(
        &app.router,
        "PUT",
        &format!("/exercises/{}", exercise_id),
        Some(&auth),
        Some(json!({"name": "Barbell row", "sets": 5, "reps": 5, "time": 15})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Exercise updated successfully");
    assert_eq!(body["exercise"]["name"], "Barbell row");

    let stored = ExerciseRepository::new(pool)
        .find_by_id(exercise_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sets, 5);
    assert_eq!(stored.reps, 5);
    assert_eq!(stored.time, 15);
    assert_eq!(stored.workout_id, workout.id);
}

#[tokio::test]
async fn test_edit_missing_exercise_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);

    let response = common::send(
        &app.router,
        "PUT",
        "/exercises/9999",
        Some(&auth),
        Some(json!({"name": "Row", "sets": 1, "reps": 1, "time": 1})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_exercise_removes_only_that_entry() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);
    let workout = common::create_test_workout(
        &pool,
        "1",
        "Pull",
        vec![
            common::exercise("Row", 3, 10, 8),
            common::exercise("Curl", 3, 12, 6),
        ],
    )
    .await;

    let response = common::send(
        &app.router,
        "DELETE",
        &format!("/exercises/{}", workout.exercises[0].id),
        Some(&auth),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Exercise deleted successfully");

    let remaining = WorkoutRepository::new(pool)
        .find_by_id(workout.id)
        .await
        .unwrap()
        .unwrap()
        .exercises;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Curl");
}

#[tokio::test]
async fn test_delete_missing_exercise_is_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "pw").await;
    let auth = common::bearer(&app.keys, &user);

    let response =
        common::send(&app.router, "DELETE", "/exercises/9999", Some(&auth), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
