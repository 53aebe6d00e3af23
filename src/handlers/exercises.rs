use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::models::{ExerciseEntry, ExerciseMessage, NewExerciseEntry};
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn show(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
) -> Result<Json<ExerciseEntry>> {
    let exercise = state
        .exercise_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    Ok(Json(exercise))
}

pub async fn update(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<NewExerciseEntry>,
) -> Result<Json<ExerciseMessage>> {
    form.validate().map_err(AppError::Validation)?;

    let exercise = state
        .exercise_repo
        .update(id, form)
        .await?
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    Ok(Json(ExerciseMessage {
        message: "Exercise updated successfully",
        exercise,
    }))
}

pub async fn delete(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    if !state.exercise_repo.delete(id).await? {
        return Err(AppError::NotFound("Exercise not found".to_string()));
    }

    Ok(Json(json!({ "message": "Exercise deleted successfully" })))
}
