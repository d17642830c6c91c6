//! Controllers
//!
//! UI-independent behaviour: every user action lands here, talks to the
//! backend through [`ApiClient`], and asks the view layer to redraw.

mod board_tree;
mod context_menu;
mod task_list;

#[cfg(test)]
mod fake;

use std::rc::Rc;

use crate::api::ApiClient;
use crate::state::{new_shared_state, SharedState};

pub use board_tree::BoardTreeController;
pub use context_menu::ContextMenuController;
pub use task_list::TaskListController;

/// Part of the screen that needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Tree,
    Tasks,
    Menu,
}

/// Repaint request sink provided by the view layer
pub type Redraw = Rc<dyn Fn(Region)>;

/// All controllers, wired in dependency order
#[derive(Clone)]
pub struct Controllers {
    pub state: SharedState,
    pub menu: ContextMenuController,
    pub tasks: TaskListController,
    pub board_tree: BoardTreeController,
}

impl Controllers {
    pub fn new(api: Rc<dyn ApiClient>, redraw: Redraw) -> Self {
        let state = new_shared_state();
        let menu = ContextMenuController::new(state.clone(), redraw.clone());
        let tasks = TaskListController::new(api.clone(), state.clone(), redraw.clone());
        let board_tree = BoardTreeController::new(api, state.clone(), menu.clone(), tasks.clone(), redraw);
        Self { state, menu, tasks, board_tree }
    }
}
