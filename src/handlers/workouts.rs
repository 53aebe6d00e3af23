use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::models::{CreateWorkout, ExerciseMessage, NewExerciseEntry, UpdateWorkout, Workout};
use crate::repositories::{ExerciseRepository, WorkoutRepository};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
    pub exercise_repo: ExerciseRepository,
}

pub async fn create(
    State(state): State<WorkoutsState>,
    AppJson(form): AppJson<CreateWorkout>,
) -> Result<Json<Workout>> {
    form.validate().map_err(AppError::Validation)?;

    let status = form.status().to_string();
    let workout = state
        .workout_repo
        .create(&form.user_id, &form.name, &status, form.exercises)
        .await?;

    Ok(Json(workout))
}

/// Lists a user's workouts. A user without any workout is reported as 404.
pub async fn list_for_user(
    State(state): State<WorkoutsState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Workout>>> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("User ID is required".to_string()));
    }

    let workouts = state.workout_repo.find_by_user(&user_id).await?;
    if workouts.is_empty() {
        return Err(AppError::NotFound(
            "No workouts found for this user".to_string(),
        ));
    }

    Ok(Json(workouts))
}

pub async fn update(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<UpdateWorkout>,
) -> Result<Json<Workout>> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("Workout name is required".to_string()));
    }

    let updated = state
        .workout_repo
        .update(id, &form.name, &form.status)
        .await?;
    if !updated {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }

    let workout = state
        .workout_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    Ok(Json(workout))
}

pub async fn delete(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let deleted = state.workout_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Workout and related exercise entries deleted successfully"
    })))
}

pub async fn add_exercise(
    State(state): State<WorkoutsState>,
    Path(workout_id): Path<i64>,
    AppJson(form): AppJson<NewExerciseEntry>,
) -> Result<Json<ExerciseMessage>> {
    form.validate().map_err(AppError::Validation)?;

    let exercise = state
        .exercise_repo
        .add_to_workout(workout_id, form)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    Ok(Json(ExerciseMessage {
        message: "Exercise added successfully",
        exercise,
    }))
}
