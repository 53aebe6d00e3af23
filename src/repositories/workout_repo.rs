use rusqlite::{Connection, OptionalExtension};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{ExerciseEntry, FromSqliteRow, NewExerciseEntry, Workout};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts the workout and any exercises supplied with it in one
    /// transaction.
    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        status: &str,
        exercises: Vec<NewExerciseEntry>,
    ) -> Result<Workout> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        let name = name.to_string();
        let status = status.to_string();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO workouts (name, user_id, status) VALUES (?, ?, ?)",
                rusqlite::params![name, user_id, status],
            )?;
            let workout_id = tx.last_insert_rowid();

            let mut entries = Vec::with_capacity(exercises.len());
            for exercise in exercises {
                entries.push(insert_exercise(&tx, workout_id, exercise)?);
            }

            tx.commit()?;

            Ok(Workout {
                id: workout_id,
                name,
                user_id,
                status,
                exercises: entries,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM workouts WHERE id = ?")?;
            let workout = stmt.query_row([id], Workout::from_row).optional()?;

            match workout {
                Some(mut workout) => {
                    workout.exercises = exercises_for(&conn, workout.id)?;
                    Ok(Some(workout))
                }
                None => Ok(None),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Workouts of a user in insertion order, each with its exercises.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM workouts WHERE user_id = ? ORDER BY id")?;
            let mut workouts = stmt
                .query_map([&user_id], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            for workout in &mut workouts {
                workout.exercises = exercises_for(&conn, workout.id)?;
            }
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn update(&self, id: i64, name: &str, status: &str) -> Result<bool> {
        let pool = self.pool.clone();
        let name = name.to_string();
        let status = status.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE workouts SET name = ?, status = ? WHERE id = ?",
                rusqlite::params![name, status, id],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Removes the workout's exercises and then the workout itself inside a
    /// single transaction. Returns `false` when the workout does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            let removed_entries =
                tx.execute("DELETE FROM exercise_entries WHERE workout_id = ?", [id])?;
            let rows = tx.execute("DELETE FROM workouts WHERE id = ?", [id])?;

            if rows == 0 {
                // Nothing to delete; dropping the transaction rolls back.
                return Ok(false);
            }

            tx.commit()?;
            tracing::debug!(workout_id = id, removed_entries, "workout deleted");
            Ok(true)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

pub(crate) fn insert_exercise(
    conn: &Connection,
    workout_id: i64,
    exercise: NewExerciseEntry,
) -> rusqlite::Result<ExerciseEntry> {
    conn.execute(
        "INSERT INTO exercise_entries (workout_id, name, sets, reps, time) VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            workout_id,
            exercise.name,
            exercise.sets,
            exercise.reps,
            exercise.time
        ],
    )?;

    Ok(ExerciseEntry {
        id: conn.last_insert_rowid(),
        workout_id,
        name: exercise.name,
        sets: exercise.sets,
        reps: exercise.reps,
        time: exercise.time,
    })
}

fn exercises_for(conn: &Connection, workout_id: i64) -> rusqlite::Result<Vec<ExerciseEntry>> {
    let mut stmt =
        conn.prepare("SELECT * FROM exercise_entries WHERE workout_id = ? ORDER BY id")?;
    let entries = stmt
        .query_map([workout_id], ExerciseEntry::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(entries)
}
