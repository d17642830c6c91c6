//! Task Endpoints
//!
//! Bindings for `/tasks/`.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{ApiResult, HttpApi};
use crate::models::{ProjectId, Task, TaskId};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub user_input: &'a str,
    pub project_id: ProjectId,
    pub owner_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
}

impl<'a> CreateTaskArgs<'a> {
    /// New task without owners or tags
    pub fn new(user_input: &'a str, project_id: ProjectId) -> Self {
        Self {
            user_input,
            project_id,
            owner_ids: Vec::new(),
            tag_ids: Vec::new(),
        }
    }
}

/// Desired completion state for `PUT /tasks/{id}/complete`
#[derive(Debug, Serialize)]
pub struct CompletionArgs {
    pub is_completed: bool,
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>>;
    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task>;
    async fn set_task_completed(&self, id: TaskId, completed: bool) -> ApiResult<()>;
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>> {
        self.get_json("/tasks/", &[("project_id", project_id.to_string())]).await
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task> {
        self.send_json(Method::POST, "/tasks/", args).await
    }

    async fn set_task_completed(&self, id: TaskId, completed: bool) -> ApiResult<()> {
        let args = CompletionArgs { is_completed: completed };
        self.send_unit(Method::PUT, &format!("/tasks/{}/complete", id), Some(&args)).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/tasks/{}", id), None).await
    }
}
