use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One exercise logged inside a workout. `time` is the duration in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub time: i32,
}

impl FromSqliteRow for ExerciseEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            name: row.get("name")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            time: row.get("time")?,
        })
    }
}

/// Payload for adding an exercise and for overwriting one.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExerciseEntry {
    pub name: String,
    #[serde(default)]
    pub sets: i32,
    #[serde(default)]
    pub reps: i32,
    #[serde(default)]
    pub time: i32,
}

impl NewExerciseEntry {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Exercise name is required".to_string());
        }
        if self.sets < 0 || self.reps < 0 || self.time < 0 {
            return Err("Sets, reps and time cannot be negative".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseMessage {
    pub message: &'static str,
    pub exercise: ExerciseEntry,
}
