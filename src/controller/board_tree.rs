//! Board Tree Controller
//!
//! The board → project sidebar: loading, selection, expand/collapse and
//! the actions offered by the context menu.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::{ContextMenuController, Redraw, Region, TaskListController};
use crate::api::{ApiClient, ApiResult, CreateBoardArgs, CreateProjectArgs, RenameBoardArgs, RenameProjectArgs};
use crate::models::{normalized_name, Board, BoardId, ProjectId};
use crate::state::{EntityKind, MenuTarget, SelectedProject, SharedState};
use crate::tree::{build_board_tree, BoardNode};

#[derive(Clone)]
pub struct BoardTreeController {
    api: Rc<dyn ApiClient>,
    state: SharedState,
    boards: Rc<RefCell<Vec<Board>>>,
    expanded: Rc<RefCell<HashSet<BoardId>>>,
    menu: ContextMenuController,
    tasks: TaskListController,
    redraw: Redraw,
}

impl BoardTreeController {
    pub fn new(
        api: Rc<dyn ApiClient>,
        state: SharedState,
        menu: ContextMenuController,
        tasks: TaskListController,
        redraw: Redraw,
    ) -> Self {
        Self {
            api,
            state,
            boards: Rc::new(RefCell::new(Vec::new())),
            expanded: Rc::new(RefCell::new(HashSet::new())),
            menu,
            tasks,
            redraw,
        }
    }

    /// Every board with its projects attached; fails as a whole
    async fn fetch_tree(&self) -> ApiResult<Vec<Board>> {
        let mut boards = self.api.list_boards().await?;
        for board in boards.iter_mut() {
            board.projects = self.api.list_projects(board.id).await?;
        }
        Ok(boards)
    }

    pub async fn load_boards(&self) {
        let boards = match self.fetch_tree().await {
            Ok(boards) => boards,
            Err(e) => {
                tracing::error!(error = %e, "failed to load boards");
                return;
            }
        };
        tracing::info!(count = boards.len(), "loaded boards");

        self.expanded
            .borrow_mut()
            .retain(|id| boards.iter().any(|b| b.id == *id));
        let lost_selection = self.sync_selection(&boards);
        *self.boards.borrow_mut() = boards;

        (self.redraw)(Region::Tree);
        if lost_selection {
            self.tasks.clear();
        } else {
            // Title may have been renamed
            (self.redraw)(Region::Tasks);
        }
    }

    /// Refresh the selected project against a new snapshot.
    /// Returns true when the selected project no longer exists.
    fn sync_selection(&self, boards: &[Board]) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(selected) = state.current_project.as_ref().map(|p| p.id) else {
            return false;
        };
        let found = boards
            .iter()
            .flat_map(|b| b.projects.iter())
            .find(|p| p.id == selected);
        match found {
            Some(project) => {
                state.current_project = Some(SelectedProject { id: project.id, name: project.name.clone() });
                false
            }
            None => {
                tracing::debug!(project_id = selected, "selected project is gone");
                state.current_project = None;
                state.current_board_id = None;
                true
            }
        }
    }

    /// Returns true when the board was created
    pub async fn create_new_board(&self, name: &str) -> bool {
        let Some(name) = normalized_name(name) else {
            return false;
        };
        match self.api.create_board(&CreateBoardArgs::new(name)).await {
            Ok(board) => {
                tracing::info!(board_id = board.id, "created board");
                self.load_boards().await;
                true
            }
            Err(e) => {
                tracing::error!(name, error = %e, "failed to create board");
                false
            }
        }
    }

    /// Create a project under the board the context menu was opened on
    pub async fn create_new_project(&self, name: &str) -> bool {
        let Some(target) = self.menu.target() else {
            return false;
        };
        let MenuTarget::Board { id: board_id, .. } = target else {
            tracing::debug!("new project requires a board context");
            return false;
        };
        let Some(name) = normalized_name(name) else {
            return false;
        };
        let _dismiss = self.menu.dismiss_guard(target);

        match self.api.create_project(&CreateProjectArgs::new(name, board_id)).await {
            Ok(project) => {
                tracing::info!(board_id, project_id = project.id, "created project");
                self.expanded.borrow_mut().insert(board_id);
                self.load_boards().await;
                true
            }
            Err(e) => {
                tracing::error!(board_id, error = %e, "failed to create project");
                false
            }
        }
    }

    pub async fn rename_item(&self, new_name: &str) -> bool {
        let Some(target) = self.menu.target() else {
            return false;
        };
        let Some(name) = normalized_name(new_name) else {
            return false;
        };
        let _dismiss = self.menu.dismiss_guard(target.clone());

        let result = match &target {
            MenuTarget::Board { id, .. } => self.api.rename_board(*id, &RenameBoardArgs { name }).await,
            MenuTarget::Project { id, board_id, .. } => {
                self.api
                    .rename_project(*id, &RenameProjectArgs { name, board_id: *board_id })
                    .await
            }
        };
        match result {
            Ok(()) => {
                tracing::info!(kind = %target.kind(), id = target.id(), "renamed");
                self.load_boards().await;
                true
            }
            Err(e) => {
                tracing::error!(kind = %target.kind(), id = target.id(), error = %e, "failed to rename");
                false
            }
        }
    }

    /// Delete the context-menu target; the menu closes whatever the outcome
    pub async fn delete_item(&self) -> bool {
        let Some(target) = self.menu.target() else {
            return false;
        };
        let _dismiss = self.menu.dismiss_guard(target.clone());

        let result = match target.kind() {
            EntityKind::Board => self.api.delete_board(target.id()).await,
            EntityKind::Project => self.api.delete_project(target.id()).await,
        };
        match result {
            Ok(()) => {
                tracing::info!(kind = %target.kind(), id = target.id(), "deleted");
                self.load_boards().await;
                true
            }
            Err(e) => {
                tracing::error!(kind = %target.kind(), id = target.id(), error = %e, "failed to delete");
                false
            }
        }
    }

    pub async fn select_project(&self, project_id: ProjectId) {
        let project = self
            .boards
            .borrow()
            .iter()
            .flat_map(|b| b.projects.iter())
            .find(|p| p.id == project_id)
            .cloned();
        let Some(project) = project else {
            tracing::warn!(project_id, "selected project is not in the tree");
            return;
        };

        {
            let mut state = self.state.borrow_mut();
            state.current_board_id = Some(project.board_id);
            state.current_project = Some(SelectedProject { id: project.id, name: project.name.clone() });
        }
        (self.redraw)(Region::Tree);
        // Previous project's rows must not show under the new title
        self.tasks.clear();
        self.tasks.load_tasks(project.id).await;
    }

    pub fn toggle_board(&self, board_id: BoardId) {
        {
            let mut expanded = self.expanded.borrow_mut();
            if !expanded.remove(&board_id) {
                expanded.insert(board_id);
            }
        }
        (self.redraw)(Region::Tree);
    }

    pub fn tree(&self) -> Vec<BoardNode> {
        let selected = self.state.borrow().current_project_id();
        build_board_tree(&self.boards.borrow(), &self.expanded.borrow(), selected)
    }
}
