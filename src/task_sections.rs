//! Task Sections
//!
//! Split a task list into the incomplete and completed groups.

use crate::models::{Task, TaskId};

pub const COMPLETED_HEADER: &str = "Completed Tasks";

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub deadline: Option<String>,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.user_input.clone(),
            completed: task.is_completed,
            deadline: task.deadline.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn class(&self) -> &'static str {
        if self.completed { "task-item completed" } else { "task-item" }
    }

    pub fn checkbox_class(&self) -> &'static str {
        if self.completed { "circle-checkbox checked" } else { "circle-checkbox" }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSections {
    pub incomplete: Vec<TaskRow>,
    pub completed: Vec<TaskRow>,
}

impl TaskSections {
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.completed.len()
    }
}

/// Incomplete tasks first, completed second; fetch order kept within each group
pub fn split_tasks(tasks: &[Task]) -> TaskSections {
    let (completed, incomplete): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|t| t.is_completed);
    TaskSections {
        incomplete: incomplete.into_iter().map(TaskRow::from_task).collect(),
        completed: completed.into_iter().map(TaskRow::from_task).collect(),
    }
}
