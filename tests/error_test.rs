use axum::{http::StatusCode, response::IntoResponse};
use fittrack::error::AppError;

#[test]
fn test_not_found_returns_404() {
    let response = AppError::NotFound("Workout not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_unauthorized_returns_401() {
    let response = AppError::Unauthorized("Invalid credentials".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_forbidden_returns_403() {
    let response = AppError::Forbidden("Not your planner".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_bad_request_and_validation_return_400() {
    let bad_request = AppError::BadRequest("Planner ID mismatch.".to_string()).into_response();
    assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

    let validation = AppError::Validation("Workout name is required".to_string()).into_response();
    assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_duplicate_returns_400() {
    let response = AppError::Duplicate("Username already exists".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_internal_and_password_hash_return_500() {
    let internal = AppError::Internal("boom".to_string()).into_response();
    assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let hash = AppError::PasswordHash.into_response();
    assert_eq!(hash.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_unique_violation_maps_to_duplicate() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
        .unwrap();
    let err = conn
        .execute("INSERT INTO t VALUES ('a')", [])
        .unwrap_err();

    let mapped = AppError::from_unique_violation(err, "taken");
    assert!(matches!(mapped, AppError::Duplicate(ref msg) if msg == "taken"));
}

#[test]
fn test_other_database_errors_stay_database_errors() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let err = conn.execute("SELECT * FROM missing", []).unwrap_err();

    let mapped = AppError::from_unique_violation(err, "taken");
    assert!(matches!(mapped, AppError::Database(_)));
}

#[test]
fn test_not_null_violation_is_not_a_duplicate() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL UNIQUE);")
        .unwrap();
    let err = conn
        .execute("INSERT INTO t VALUES (NULL)", [])
        .unwrap_err();

    let mapped = AppError::from_unique_violation(err, "taken");
    assert!(matches!(mapped, AppError::Database(_)));
}
