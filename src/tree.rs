//! Tree Utilities
//!
//! Build the sidebar render tree from a board snapshot.

use std::collections::HashSet;

use crate::models::{Board, BoardId, ProjectId};
use crate::state::MenuTarget;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectNode {
    pub id: ProjectId,
    pub board_id: BoardId,
    pub name: String,
    pub selected: bool,
}

impl ProjectNode {
    pub fn class(&self) -> &'static str {
        if self.selected { "tree-item project-item selected" } else { "tree-item project-item" }
    }

    pub fn menu_target(&self) -> MenuTarget {
        MenuTarget::Project { id: self.id, name: self.name.clone(), board_id: self.board_id }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardNode {
    pub id: BoardId,
    pub name: String,
    pub expanded: bool,
    pub projects: Vec<ProjectNode>,
}

impl BoardNode {
    pub fn chevron_class(&self) -> &'static str {
        if self.expanded { "fas fa-chevron-right fa-chevron-down" } else { "fas fa-chevron-right" }
    }

    pub fn projects_style(&self) -> &'static str {
        if self.expanded { "display: block;" } else { "display: none;" }
    }

    pub fn menu_target(&self) -> MenuTarget {
        MenuTarget::Board { id: self.id, name: self.name.clone() }
    }
}

/// Boards in server order, each with its projects in server order
pub fn build_board_tree(
    boards: &[Board],
    expanded: &HashSet<BoardId>,
    selected_project: Option<ProjectId>,
) -> Vec<BoardNode> {
    boards
        .iter()
        .map(|board| BoardNode {
            id: board.id,
            name: board.name.clone(),
            expanded: expanded.contains(&board.id),
            projects: board
                .projects
                .iter()
                .map(|project| ProjectNode {
                    id: project.id,
                    board_id: project.board_id,
                    name: project.name.clone(),
                    selected: selected_project == Some(project.id),
                })
                .collect(),
        })
        .collect()
}
