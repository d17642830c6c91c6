//! UI State
//!
//! Selection and context-menu state shared by the controllers. Lives on
//! the UI thread only; borrows are never held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos_context_menu::MenuPosition;

use crate::models::{BoardId, ProjectId};

/// Which kind of entity a context menu refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Board,
    Project,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Board => "board",
            EntityKind::Project => "project",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity the open context menu acts on
#[derive(Debug, Clone, PartialEq)]
pub enum MenuTarget {
    Board { id: BoardId, name: String },
    Project { id: ProjectId, name: String, board_id: BoardId },
}

impl MenuTarget {
    pub fn kind(&self) -> EntityKind {
        match self {
            MenuTarget::Board { .. } => EntityKind::Board,
            MenuTarget::Project { .. } => EntityKind::Project,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            MenuTarget::Board { id, .. } | MenuTarget::Project { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MenuTarget::Board { name, .. } | MenuTarget::Project { name, .. } => name,
        }
    }

    /// The board itself, or the board a project belongs to
    pub fn owning_board_id(&self) -> BoardId {
        match self {
            MenuTarget::Board { id, .. } => *id,
            MenuTarget::Project { board_id, .. } => *board_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub visible: bool,
    pub position: MenuPosition,
    pub target: Option<MenuTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedProject {
    pub id: ProjectId,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub current_board_id: Option<BoardId>,
    pub current_project: Option<SelectedProject>,
    pub menu: MenuState,
}

impl UiState {
    pub fn current_project_id(&self) -> Option<ProjectId> {
        self.current_project.as_ref().map(|p| p.id)
    }
}

pub type SharedState = Rc<RefCell<UiState>>;

pub fn new_shared_state() -> SharedState {
    Rc::new(RefCell::new(UiState::default()))
}
