#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fittrack::config::JwtConfig;
use fittrack::db::{create_memory_pool, DbPool};
use fittrack::handlers::{exercises, planners, users, workouts};
use fittrack::migrations::run_migrations_for_tests;
use fittrack::models::{NewExerciseEntry, Planner, User, Workout};
use fittrack::repositories::{
    ExerciseRepository, PlannerRepository, UserRepository, WorkoutRepository,
};
use fittrack::token::JwtKeys;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn test_keys() -> JwtKeys {
    JwtKeys::new(&JwtConfig {
        secret: "test-secret".to_string(),
        issuer: "fittrack-test".to_string(),
        audience: "fittrack-test-users".to_string(),
        ttl_minutes: 60,
    })
}

pub struct TestApp {
    pub router: Router,
    pub keys: JwtKeys,
}

pub fn create_test_app(pool: DbPool) -> TestApp {
    let keys = test_keys();

    let exercise_repo = ExerciseRepository::new(pool.clone());
    let users_state = users::UsersState {
        user_repo: UserRepository::new(pool.clone()),
        keys: keys.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_repo: WorkoutRepository::new(pool.clone()),
        exercise_repo: exercise_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState { exercise_repo };
    let planners_state = planners::PlannersState {
        planner_repo: PlannerRepository::new(pool),
    };

    let router = fittrack::routes::create_router(
        users_state,
        workouts_state,
        exercises_state,
        planners_state,
    );

    TestApp { router, keys }
}

pub async fn create_test_user(pool: &DbPool, username: &str, password: &str) -> User {
    let user_repo = UserRepository::new(pool.clone());
    user_repo
        .create(username, &format!("{}@example.com", username), password)
        .await
        .unwrap()
}

pub fn bearer(keys: &JwtKeys, user: &User) -> String {
    format!("Bearer {}", keys.sign(user).unwrap())
}

pub async fn create_test_workout(
    pool: &DbPool,
    user_id: &str,
    name: &str,
    exercises: Vec<NewExerciseEntry>,
) -> Workout {
    let workout_repo = WorkoutRepository::new(pool.clone());
    workout_repo
        .create(user_id, name, "In Progress", exercises)
        .await
        .unwrap()
}

pub fn exercise(name: &str, sets: i32, reps: i32, time: i32) -> NewExerciseEntry {
    NewExerciseEntry {
        name: name.to_string(),
        sets,
        reps,
        time,
    }
}

pub async fn create_test_planner(
    pool: &DbPool,
    user_id: &str,
    title: &str,
    date: &str,
) -> Planner {
    let planner_repo = PlannerRepository::new(pool.clone());
    planner_repo
        .create(user_id, title, Some("notes"), date.parse().unwrap())
        .await
        .unwrap()
}

/// Counts entry rows for a workout id, including rows whose workout is gone.
pub fn count_exercise_entries(pool: &DbPool, workout_id: i64) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM exercise_entries WHERE workout_id = ?",
        [workout_id],
        |row| row.get(0),
    )
    .unwrap()
}

/// Sends a request with an optional JSON body and bearer header.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
