//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type BoardId = i64;
pub type ProjectId = i64;
pub type TaskId = i64;

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    /// Opaque to the client, passed through untouched
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Attached by the client after a separate fetch, never sent back
    #[serde(default, skip_serializing)]
    pub projects: Vec<Project>,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub user_input: String,
    pub project_id: ProjectId,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub owner_ids: Vec<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Trim user input, treating blank text as absent
pub fn normalized_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
