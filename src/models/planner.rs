use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planner {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl FromSqliteRow for Planner {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            date: row.get("date")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanner {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Body of a planner update. `id` must repeat the path id and `user_id` is
/// the owner the caller claims to be.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanner {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}
