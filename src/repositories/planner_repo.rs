use chrono::NaiveDate;
use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Planner};

#[derive(Clone)]
pub struct PlannerRepository {
    pool: DbPool,
}

impl PlannerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Planners of a user ordered by date, earliest first.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Planner>> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM planners WHERE user_id = ? ORDER BY date ASC, id ASC")?;
            let planners = stmt
                .query_map([&user_id], Planner::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(planners)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Planner>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM planners WHERE id = ?")?;
            let result = stmt.query_row([id], Planner::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let exists: bool = conn.query_row(
                "SELECT COUNT(*) > 0 FROM planners WHERE id = ?",
                [id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(
        &self,
        user_id: &str,
        title: &str,
        description: Option<&str>,
        date: NaiveDate,
    ) -> Result<Planner> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        let title = title.to_string();
        let description = description.map(|s| s.to_string());

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO planners (user_id, title, description, date) VALUES (?, ?, ?, ?)",
                rusqlite::params![user_id, title, description, date],
            )?;

            Ok(Planner {
                id: conn.last_insert_rowid(),
                user_id,
                title,
                description,
                date,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Writes the new fields only while the row still belongs to `owner`.
    /// `false` means the row vanished or changed hands since it was read.
    pub async fn update(
        &self,
        id: i64,
        owner: &str,
        title: &str,
        description: Option<&str>,
        date: NaiveDate,
    ) -> Result<bool> {
        let pool = self.pool.clone();
        let owner = owner.to_string();
        let title = title.to_string();
        let description = description.map(|s| s.to_string());

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE planners SET title = ?, description = ?, date = ?
                 WHERE id = ? AND user_id = ?",
                rusqlite::params![title, description, date, id, owner],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM planners WHERE id = ?", [id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
