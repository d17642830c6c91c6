//! Task List Controller
//!
//! Tasks of the selected project: load, create, complete, delete.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Redraw, Region};
use crate::api::{ApiClient, CreateTaskArgs};
use crate::models::{normalized_name, ProjectId, Task, TaskId};
use crate::state::SharedState;
use crate::task_sections::{split_tasks, TaskSections};

#[derive(Clone)]
pub struct TaskListController {
    api: Rc<dyn ApiClient>,
    state: SharedState,
    tasks: Rc<RefCell<Vec<Task>>>,
    redraw: Redraw,
}

impl TaskListController {
    pub fn new(api: Rc<dyn ApiClient>, state: SharedState, redraw: Redraw) -> Self {
        Self {
            api,
            state,
            tasks: Rc::new(RefCell::new(Vec::new())),
            redraw,
        }
    }

    fn current_project_id(&self) -> Option<ProjectId> {
        self.state.borrow().current_project_id()
    }

    pub async fn load_tasks(&self, project_id: ProjectId) {
        match self.api.list_tasks(project_id).await {
            Ok(tasks) => {
                // The selection may have moved on while this request was in flight
                if self.current_project_id() != Some(project_id) {
                    tracing::debug!(project_id, "dropping task list for deselected project");
                    return;
                }
                tracing::info!(project_id, count = tasks.len(), "loaded tasks");
                *self.tasks.borrow_mut() = tasks;
                (self.redraw)(Region::Tasks);
            }
            Err(e) => tracing::error!(project_id, error = %e, "failed to load tasks"),
        }
    }

    async fn reload_current(&self) {
        if let Some(project_id) = self.current_project_id() {
            self.load_tasks(project_id).await;
        }
    }

    /// Returns true when the task was created, so the caller can clear its input
    pub async fn create_new_task(&self, text: &str) -> bool {
        let Some(project_id) = self.current_project_id() else {
            tracing::debug!("no project selected, ignoring new task");
            return false;
        };
        let Some(text) = normalized_name(text) else {
            return false;
        };

        match self.api.create_task(&CreateTaskArgs::new(text, project_id)).await {
            Ok(task) => {
                tracing::info!(project_id, task_id = task.id, "created task");
                self.load_tasks(project_id).await;
                true
            }
            Err(e) => {
                tracing::error!(project_id, error = %e, "failed to create task");
                false
            }
        }
    }

    /// `completed` is the desired state, the negation of what was shown when clicked
    pub async fn toggle_task_completion(&self, task_id: TaskId, completed: bool) {
        match self.api.set_task_completed(task_id, completed).await {
            Ok(()) => self.reload_current().await,
            Err(e) => tracing::error!(task_id, completed, error = %e, "failed to update task"),
        }
    }

    pub async fn delete_task(&self, task_id: TaskId) {
        match self.api.delete_task(task_id).await {
            Ok(()) => {
                tracing::info!(task_id, "deleted task");
                self.reload_current().await;
            }
            Err(e) => tracing::error!(task_id, error = %e, "failed to delete task"),
        }
    }

    /// Forget the rendered list, e.g. after its project disappeared
    pub fn clear(&self) {
        self.tasks.borrow_mut().clear();
        (self.redraw)(Region::Tasks);
    }

    pub fn sections(&self) -> TaskSections {
        split_tasks(&self.tasks.borrow())
    }

    /// Both sections, empty or not, while a project is selected; nothing otherwise
    pub fn visible_sections(&self) -> Option<TaskSections> {
        self.has_project().then(|| self.sections())
    }

    /// Name of the selected project, shown above the list
    pub fn context_title(&self) -> Option<String> {
        self.state.borrow().current_project.as_ref().map(|p| p.name.clone())
    }

    pub fn has_project(&self) -> bool {
        self.current_project_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::controller::fake::{Call, FakeApi, Harness};
    use crate::state::SelectedProject;

    fn select(harness: &Harness, id: ProjectId, name: &str) {
        harness.controllers.state.borrow_mut().current_project =
            Some(SelectedProject { id, name: name.to_string() });
    }

    #[tokio::test]
    async fn test_create_task_posts_once_and_reloads() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        let harness = Harness::new(api);
        select(&harness, 5, "Errands");

        let created = harness.controllers.tasks.create_new_task("  Buy milk ").await;

        assert!(created);
        let posts: Vec<Call> = harness.api.calls_matching("POST", "/tasks/");
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].body,
            Some(json!({"user_input": "Buy milk", "project_id": 5, "owner_ids": [], "tag_ids": []}))
        );
        assert_eq!(harness.api.last_call().map(|c| c.path), Some("/tasks/?project_id=5".to_string()));
        let sections = harness.controllers.tasks.sections();
        assert_eq!(sections.incomplete.len(), 1);
        assert_eq!(sections.incomplete[0].text, "Buy milk");
    }

    #[tokio::test]
    async fn test_create_task_without_project_is_noop() {
        let harness = Harness::new(FakeApi::new());

        assert!(!harness.controllers.tasks.create_new_task("Buy milk").await);
        assert!(harness.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_task_text_is_noop() {
        let harness = Harness::new(FakeApi::new());
        select(&harness, 5, "Errands");

        assert!(!harness.controllers.tasks.create_new_task("   ").await);
        assert!(harness.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_moves_only_that_task() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        api.add_task(1, 5, "a", false);
        api.add_task(2, 5, "b", false);
        api.add_task(3, 5, "c", true);
        let harness = Harness::new(api);
        select(&harness, 5, "Errands");
        let tasks = &harness.controllers.tasks;
        tasks.load_tasks(5).await;

        tasks.toggle_task_completion(1, true).await;

        let sections = tasks.sections();
        let open: Vec<TaskId> = sections.incomplete.iter().map(|r| r.id).collect();
        let done: Vec<TaskId> = sections.completed.iter().map(|r| r.id).collect();
        assert_eq!(open, vec![2]);
        assert_eq!(done, vec![1, 3]);
        let put = harness.api.calls_matching("PUT", "/tasks/1/complete");
        assert_eq!(put[0].body, Some(json!({"is_completed": true})));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        api.add_task(1, 5, "a", false);
        let harness = Harness::new(api);
        select(&harness, 5, "Errands");
        let tasks = &harness.controllers.tasks;
        tasks.load_tasks(5).await;

        harness.api.fail_everything(true);
        tasks.delete_task(1).await;
        tasks.load_tasks(5).await;

        assert_eq!(tasks.sections().incomplete.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_response_for_other_project_is_dropped() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        api.add_task(1, 5, "a", false);
        let harness = Harness::new(api);
        select(&harness, 6, "Other");

        harness.controllers.tasks.load_tasks(5).await;

        assert_eq!(harness.controllers.tasks.sections().len(), 0);
        assert!(harness.redraws().is_empty());
    }

    #[tokio::test]
    async fn test_sections_hidden_until_project_selected() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        let harness = Harness::new(api);
        let tasks = &harness.controllers.tasks;
        assert_eq!(tasks.visible_sections(), None);

        select(&harness, 5, "Errands");
        tasks.load_tasks(5).await;

        assert_eq!(tasks.visible_sections(), Some(TaskSections::default()));
    }

    #[tokio::test]
    async fn test_delete_reloads_current_project() {
        let api = FakeApi::new();
        api.add_board(1, "Work");
        api.add_project(5, 1, "Errands");
        api.add_task(1, 5, "a", false);
        api.add_task(2, 5, "b", true);
        let harness = Harness::new(api);
        select(&harness, 5, "Errands");
        let tasks = &harness.controllers.tasks;

        tasks.delete_task(2).await;

        assert_eq!(harness.api.calls_matching("DELETE", "/tasks/2").len(), 1);
        let sections = tasks.sections();
        assert_eq!(sections.incomplete.len(), 1);
        assert!(sections.completed.is_empty());
        assert_eq!(tasks.context_title().as_deref(), Some("Errands"));
    }
}
