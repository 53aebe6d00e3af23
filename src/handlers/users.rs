use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::middleware::AuthUser;
use crate::models::{LoginCredentials, PublicUser, RegisterUser, TokenResponse, UpdateUser};
use crate::repositories::UserRepository;
use crate::token::JwtKeys;

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
    pub keys: JwtKeys,
}

pub async fn register(
    State(state): State<UsersState>,
    AppJson(form): AppJson<RegisterUser>,
) -> Result<Json<PublicUser>> {
    form.validate().map_err(AppError::Validation)?;

    if state
        .user_repo
        .find_by_username(&form.username)
        .await?
        .is_some()
    {
        return Err(AppError::Duplicate("Username already exists".to_string()));
    }

    if state.user_repo.find_by_email(&form.email).await?.is_some() {
        return Err(AppError::Duplicate("Email already exists".to_string()));
    }

    let user = state
        .user_repo
        .create(&form.username, &form.email, &form.password)
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<UsersState>,
    AppJson(credentials): AppJson<LoginCredentials>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .user_repo
        .verify_password(&credentials.username, &credentials.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let token = state.keys.sign(&user)?;
    Ok(Json(TokenResponse { token }))
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<PublicUser>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

pub async fn show(
    State(state): State<UsersState>,
    Path(id): Path<i64>,
) -> Result<Json<PublicUser>> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn me(
    State(state): State<UsersState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<PublicUser>> {
    let user = state
        .user_repo
        .find_by_id(auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

pub async fn update(
    State(state): State<UsersState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<UpdateUser>,
) -> Result<Json<PublicUser>> {
    if state.user_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    if let Some(username) = form.username.as_deref() {
        if username.trim().is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
        if let Some(other) = state.user_repo.find_by_username(username).await? {
            if other.id != id {
                return Err(AppError::Duplicate("Username already exists".to_string()));
            }
        }
    }

    if let Some(email) = form.email.as_deref() {
        if email.trim().is_empty() {
            return Err(AppError::Validation("Email cannot be empty".to_string()));
        }
        if let Some(other) = state.user_repo.find_by_email(email).await? {
            if other.id != id {
                return Err(AppError::Duplicate("Email already exists".to_string()));
            }
        }
    }

    let user = state
        .user_repo
        .update(id, form.username.as_deref(), form.email.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = id, updated_by = %auth_user.username, "user updated");
    Ok(Json(user.into()))
}
