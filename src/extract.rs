use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` extractor whose rejections come back as a plain 400 through
/// [`AppError`] instead of axum's default 415/422 responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
