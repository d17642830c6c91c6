//! Project Endpoints
//!
//! Bindings for `/projects/`.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{ApiResult, HttpApi};
use crate::models::{BoardId, Project, ProjectId};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub board_id: BoardId,
    pub settings: Value,
}

impl<'a> CreateProjectArgs<'a> {
    pub fn new(name: &'a str, board_id: BoardId) -> Self {
        Self {
            name,
            board_id,
            settings: Value::Object(Map::new()),
        }
    }
}

/// The backend validates `board_id` on update, so it travels with the name
#[derive(Debug, Serialize)]
pub struct RenameProjectArgs<'a> {
    pub name: &'a str,
    pub board_id: BoardId,
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
pub trait ProjectApi {
    async fn list_projects(&self, board_id: BoardId) -> ApiResult<Vec<Project>>;
    async fn create_project(&self, args: &CreateProjectArgs<'_>) -> ApiResult<Project>;
    async fn rename_project(&self, id: ProjectId, args: &RenameProjectArgs<'_>) -> ApiResult<()>;
    async fn delete_project(&self, id: ProjectId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl ProjectApi for HttpApi {
    async fn list_projects(&self, board_id: BoardId) -> ApiResult<Vec<Project>> {
        self.get_json("/projects/", &[("board_id", board_id.to_string())]).await
    }

    async fn create_project(&self, args: &CreateProjectArgs<'_>) -> ApiResult<Project> {
        self.send_json(Method::POST, "/projects/", args).await
    }

    async fn rename_project(&self, id: ProjectId, args: &RenameProjectArgs<'_>) -> ApiResult<()> {
        self.send_unit(Method::PUT, &format!("/projects/{}", id), Some(args)).await
    }

    async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/projects/{}", id), None).await
    }
}
