use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{exercises, health, planners, users, workouts};
use crate::middleware::require_auth;

pub fn create_router(
    users_state: users::UsersState,
    workouts_state: workouts::WorkoutsState,
    exercises_state: exercises::ExercisesState,
    planners_state: planners::PlannersState,
) -> Router {
    let keys = users_state.keys.clone();

    let public: Router = Router::new()
        .route("/health", get(health::health_check))
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .with_state(users_state.clone());

    let protected: Router = Router::new()
        // Users
        .route("/users", get(users::list))
        .route("/users/me", get(users::me))
        .route("/users/{id}", get(users::show).put(users::update))
        .with_state(users_state)
        // Workouts; GET takes the owner's user id, PUT and DELETE a workout id
        .route("/workouts", post(workouts::create))
        .route(
            "/workouts/{id}",
            get(workouts::list_for_user)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .route("/workouts/{id}/exercises", post(workouts::add_exercise))
        .with_state(workouts_state)
        // Exercise entries
        .route(
            "/exercises/{id}",
            get(exercises::show)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .with_state(exercises_state)
        // Planners; GET takes the owner's user id
        .route("/planners", post(planners::create))
        .route(
            "/planners/{id}",
            get(planners::list_for_user)
                .put(planners::update)
                .delete(planners::delete),
        )
        .with_state(planners_state)
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    public.merge(protected).layer(TraceLayer::new_for_http())
}
