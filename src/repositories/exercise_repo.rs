use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{ExerciseEntry, FromSqliteRow, NewExerciseEntry};
use crate::repositories::workout_repo::insert_exercise;

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ExerciseEntry>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM exercise_entries WHERE id = ?")?;
            let result = stmt.query_row([id], ExerciseEntry::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Appends an exercise to a workout. Returns `None` when the workout does
    /// not exist, so no orphan entry is ever written.
    pub async fn add_to_workout(
        &self,
        workout_id: i64,
        exercise: NewExerciseEntry,
    ) -> Result<Option<ExerciseEntry>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            let exists: bool = tx.query_row(
                "SELECT COUNT(*) > 0 FROM workouts WHERE id = ?",
                [workout_id],
                |row| row.get(0),
            )?;
            if !exists {
                return Ok(None);
            }

            let entry = insert_exercise(&tx, workout_id, exercise)?;
            tx.commit()?;
            Ok(Some(entry))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Overwrites every editable field. Returns the stored entry, or `None`
    /// when the id is unknown.
    pub async fn update(
        &self,
        id: i64,
        exercise: NewExerciseEntry,
    ) -> Result<Option<ExerciseEntry>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE exercise_entries SET name = ?, sets = ?, reps = ?, time = ? WHERE id = ?",
                rusqlite::params![exercise.name, exercise.sets, exercise.reps, exercise.time, id],
            )?;
            if rows == 0 {
                return Ok(None);
            }

            let mut stmt = conn.prepare("SELECT * FROM exercise_entries WHERE id = ?")?;
            let result = stmt.query_row([id], ExerciseEntry::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM exercise_entries WHERE id = ?", [id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
