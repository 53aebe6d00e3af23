use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::token::JwtKeys;

/// Identity taken from a verified bearer token. Inserted into the request
/// extensions by [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <jwt>` header.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".to_string()))?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "rejected bearer token");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let id = claims
        .user_id()
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    req.extensions_mut().insert(AuthUser {
        id,
        username: claims.name,
    });

    Ok(next.run(req).await)
}
