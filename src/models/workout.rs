use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{ExerciseEntry, FromSqliteRow, NewExerciseEntry};

pub const DEFAULT_STATUS: &str = "In Progress";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub user_id: String,
    pub status: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            user_id: row.get("user_id")?,
            status: row.get("status")?,
            exercises: Vec::new(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkout {
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub exercises: Vec<NewExerciseEntry>,
}

impl CreateWorkout {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Workout name is required".to_string());
        }
        if self.user_id.trim().is_empty() {
            return Err("User ID is required".to_string());
        }
        self.exercises.iter().try_for_each(NewExerciseEntry::validate)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}

/// Full overwrite of the editable workout fields. Status is free text.
#[derive(Debug, Deserialize)]
pub struct UpdateWorkout {
    pub name: String,
    pub status: String,
}
