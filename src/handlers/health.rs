use axum::Json;
use serde::Serialize;

use crate::version::GIT_VERSION;

/// Liveness probe. Unauthenticated and never touches the database.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub git_version: &'static str,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        git_version: GIT_VERSION,
    })
}
