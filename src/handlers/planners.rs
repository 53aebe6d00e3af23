use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::models::{CreatePlanner, Planner, UpdatePlanner};
use crate::repositories::PlannerRepository;

#[derive(Clone)]
pub struct PlannersState {
    pub planner_repo: PlannerRepository,
}

/// Lists a user's planners by date. An empty list is a normal answer.
pub async fn list_for_user(
    State(state): State<PlannersState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Planner>>> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("User ID is required.".to_string()));
    }

    let planners = state.planner_repo.find_by_user(&user_id).await?;
    Ok(Json(planners))
}

pub async fn create(
    State(state): State<PlannersState>,
    AppJson(form): AppJson<CreatePlanner>,
) -> Result<(StatusCode, Json<Planner>)> {
    if form.user_id.trim().is_empty() {
        return Err(AppError::BadRequest("Invalid planner data.".to_string()));
    }

    let planner = state
        .planner_repo
        .create(
            &form.user_id,
            &form.title,
            form.description.as_deref(),
            form.date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(planner)))
}

pub async fn update(
    State(state): State<PlannersState>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<UpdatePlanner>,
) -> Result<StatusCode> {
    if id != form.id {
        return Err(AppError::BadRequest("Planner ID mismatch.".to_string()));
    }

    let existing = state
        .planner_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planner not found.".to_string()))?;

    if existing.user_id != form.user_id {
        return Err(AppError::Forbidden(
            "You can only edit your own planners.".to_string(),
        ));
    }

    let updated = state
        .planner_repo
        .update(
            id,
            &existing.user_id,
            &form.title,
            form.description.as_deref(),
            form.date,
        )
        .await?;

    if !updated {
        let still_exists = state.planner_repo.exists(id).await?;
        return Err(stale_update_error(id, still_exists));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// The row changed between the read and the write. A vanished row is a
/// plain 404; a row that is still there was taken over and is fatal.
fn stale_update_error(id: i64, still_exists: bool) -> AppError {
    if still_exists {
        AppError::Internal(format!("planner {id} was modified concurrently"))
    } else {
        AppError::NotFound("Planner not found.".to_string())
    }
}

pub async fn delete(
    State(state): State<PlannersState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if !state.planner_repo.delete(id).await? {
        return Err(AppError::NotFound("Planner not found.".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
