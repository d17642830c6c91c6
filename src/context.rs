//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::controller::{Controllers, Region};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controllers: StoredValue<Controllers, LocalStorage>,
    /// Bumped whenever the board tree changes - read
    pub tree_version: ReadSignal<u32>,
    /// Bumped whenever the task list or its title changes - read
    pub tasks_version: ReadSignal<u32>,
    /// Bumped whenever the context menu opens or closes - read
    pub menu_version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(api: Rc<dyn ApiClient>) -> Self {
        let (tree_version, set_tree_version) = signal(0u32);
        let (tasks_version, set_tasks_version) = signal(0u32);
        let (menu_version, set_menu_version) = signal(0u32);

        let redraw = Rc::new(move |region: Region| {
            let target = match region {
                Region::Tree => set_tree_version,
                Region::Tasks => set_tasks_version,
                Region::Menu => set_menu_version,
            };
            target.update(|v| *v = v.wrapping_add(1));
        });

        Self {
            controllers: StoredValue::new_local(Controllers::new(api, redraw)),
            tree_version,
            tasks_version,
            menu_version,
        }
    }

    /// Cheap handle clone; hold it only inside a single event handler or task
    pub fn controllers(&self) -> Controllers {
        self.controllers.get_value()
    }
}
