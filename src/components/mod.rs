//! UI Components
//!
//! Leptos components; each reads a view model from the controllers and
//! forwards DOM events back to them.

mod board_item;
mod board_sidebar;
mod context_menu;
mod delete_confirm_button;
mod name_input_form;
mod task_item;
mod task_panel;

pub use board_item::BoardItem;
pub use board_sidebar::BoardSidebar;
pub use context_menu::ContextMenu;
pub use delete_confirm_button::DeleteConfirmButton;
pub use name_input_form::NameInputForm;
pub use task_item::TaskItem;
pub use task_panel::TaskPanel;
