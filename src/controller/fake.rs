//! In-memory backend for controller tests.
//!
//! Behaves like the REST server closely enough for the client: ids are
//! assigned on create, deletes cascade, and every request is recorded.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{Controllers, Region};
use crate::api::{
    ApiError, ApiResult, BoardApi, CreateBoardArgs, CreateProjectArgs, CreateTaskArgs, ProjectApi,
    RenameBoardArgs, RenameProjectArgs, TaskApi,
};
use crate::models::{Board, BoardId, Project, ProjectId, Task, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeApi {
    boards: RefCell<Vec<Board>>,
    projects: RefCell<Vec<Project>>,
    tasks: RefCell<Vec<Task>>,
    calls: RefCell<Vec<Call>>,
    failing_paths: RefCell<HashSet<String>>,
    fail_all: RefCell<bool>,
    next_request_hook: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_board(&self, id: BoardId, name: &str) {
        self.boards.borrow_mut().push(Board {
            id,
            name: name.to_string(),
            settings: Value::Object(Default::default()),
            external_id: None,
            created_at: None,
            updated_at: None,
            projects: Vec::new(),
        });
    }

    pub fn add_project(&self, id: ProjectId, board_id: BoardId, name: &str) {
        self.projects.borrow_mut().push(Project {
            id,
            name: name.to_string(),
            board_id,
            deadline: None,
            settings: Value::Object(Default::default()),
            created_at: None,
            updated_at: None,
        });
    }

    pub fn add_task(&self, id: TaskId, project_id: ProjectId, text: &str, done: bool) {
        self.tasks.borrow_mut().push(Task {
            id,
            user_input: text.to_string(),
            project_id,
            is_completed: done,
            owner_ids: Vec::new(),
            tag_ids: Vec::new(),
            deadline: None,
            note: None,
            phase: None,
            created_at: None,
            updated_at: None,
        });
    }

    pub fn fail_everything(&self, fail: bool) {
        *self.fail_all.borrow_mut() = fail;
    }

    /// Make every request to `path` answer 500
    pub fn fail_path(&self, path: &str) {
        self.failing_paths.borrow_mut().insert(path.to_string());
    }

    /// Run `hook` while the next request is "in flight"
    pub fn on_next_request(&self, hook: impl FnOnce() + 'static) {
        *self.next_request_hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_matching(&self, method: &str, path: &str) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .cloned()
            .collect()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.borrow().last().cloned()
    }

    fn record<B: Serialize + ?Sized>(&self, method: &'static str, path: String, body: Option<&B>) -> ApiResult<()> {
        let body = body.map(|b| serde_json::to_value(b).expect("request body serializes"));
        let fails = *self.fail_all.borrow() || self.failing_paths.borrow().contains(&path);
        self.calls.borrow_mut().push(Call { method, path, body });

        let hook = self.next_request_hook.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }

        if fails {
            Err(ApiError::Status { status: 500, detail: "injected failure".to_string() })
        } else {
            Ok(())
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Status { status: 404, detail: format!("{} not found", what) }
    }
}

#[async_trait(?Send)]
impl BoardApi for FakeApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        self.record::<()>("GET", "/boards/".to_string(), None)?;
        Ok(self.boards.borrow().clone())
    }

    async fn create_board(&self, args: &CreateBoardArgs<'_>) -> ApiResult<Board> {
        self.record("POST", "/boards/".to_string(), Some(args))?;
        let id = self.boards.borrow().iter().map(|b| b.id).max().unwrap_or(0) + 1;
        self.add_board(id, args.name);
        Ok(self.boards.borrow().last().cloned().expect("board was just added"))
    }

    async fn rename_board(&self, id: BoardId, args: &RenameBoardArgs<'_>) -> ApiResult<()> {
        self.record("PUT", format!("/boards/{}", id), Some(args))?;
        let mut boards = self.boards.borrow_mut();
        let board = boards.iter_mut().find(|b| b.id == id).ok_or_else(|| Self::not_found("Board"))?;
        board.name = args.name.to_string();
        Ok(())
    }

    async fn delete_board(&self, id: BoardId) -> ApiResult<()> {
        self.record::<()>("DELETE", format!("/boards/{}", id), None)?;
        let mut boards = self.boards.borrow_mut();
        let before = boards.len();
        boards.retain(|b| b.id != id);
        if boards.len() == before {
            return Err(Self::not_found("Board"));
        }
        let removed: Vec<ProjectId> = self.projects.borrow().iter().filter(|p| p.board_id == id).map(|p| p.id).collect();
        self.projects.borrow_mut().retain(|p| p.board_id != id);
        self.tasks.borrow_mut().retain(|t| !removed.contains(&t.project_id));
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProjectApi for FakeApi {
    async fn list_projects(&self, board_id: BoardId) -> ApiResult<Vec<Project>> {
        self.record::<()>("GET", format!("/projects/?board_id={}", board_id), None)?;
        Ok(self.projects.borrow().iter().filter(|p| p.board_id == board_id).cloned().collect())
    }

    async fn create_project(&self, args: &CreateProjectArgs<'_>) -> ApiResult<Project> {
        self.record("POST", "/projects/".to_string(), Some(args))?;
        let id = self.projects.borrow().iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.add_project(id, args.board_id, args.name);
        Ok(self.projects.borrow().last().cloned().expect("project was just added"))
    }

    async fn rename_project(&self, id: ProjectId, args: &RenameProjectArgs<'_>) -> ApiResult<()> {
        self.record("PUT", format!("/projects/{}", id), Some(args))?;
        let mut projects = self.projects.borrow_mut();
        let project = projects.iter_mut().find(|p| p.id == id).ok_or_else(|| Self::not_found("Project"))?;
        project.name = args.name.to_string();
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.record::<()>("DELETE", format!("/projects/{}", id), None)?;
        let mut projects = self.projects.borrow_mut();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(Self::not_found("Project"));
        }
        self.tasks.borrow_mut().retain(|t| t.project_id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>> {
        self.record::<()>("GET", format!("/tasks/?project_id={}", project_id), None)?;
        Ok(self.tasks.borrow().iter().filter(|t| t.project_id == project_id).cloned().collect())
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<Task> {
        self.record("POST", "/tasks/".to_string(), Some(args))?;
        let id = self.tasks.borrow().iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.add_task(id, args.project_id, args.user_input, false);
        Ok(self.tasks.borrow().last().cloned().expect("task was just added"))
    }

    async fn set_task_completed(&self, id: TaskId, completed: bool) -> ApiResult<()> {
        let body = serde_json::json!({ "is_completed": completed });
        self.record("PUT", format!("/tasks/{}/complete", id), Some(&body))?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| Self::not_found("Task"))?;
        task.is_completed = completed;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.record::<()>("DELETE", format!("/tasks/{}", id), None)?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found("Task"));
        }
        Ok(())
    }
}

/// Controllers wired to a [`FakeApi`] with a recording redraw sink
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub controllers: Controllers,
    redraws: Rc<RefCell<Vec<Region>>>,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        let api = Rc::new(api);
        let redraws = Rc::new(RefCell::new(Vec::new()));
        let sink = redraws.clone();
        let controllers = Controllers::new(api.clone(), Rc::new(move |region| sink.borrow_mut().push(region)));
        Self { api, controllers, redraws }
    }

    pub fn redraws(&self) -> Vec<Region> {
        self.redraws.borrow().clone()
    }
}
