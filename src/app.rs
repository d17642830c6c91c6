//! Task Board Frontend App
//!
//! Two-column layout: board tree on the left, tasks of the selected project
//! on the right, plus the floating context menu.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_context_menu::bind_global_dismiss;

use crate::api::HttpApi;
use crate::components::{BoardSidebar, ContextMenu, TaskPanel};
use crate::config::ClientConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    tracing::info!(base_url = %config.base_url, credentials = ?config.credentials, "api client configured");

    let ctx = AppContext::new(Rc::new(HttpApi::new(config)));
    provide_context(ctx);

    // Any click that reaches the document closes the menu
    bind_global_dismiss(move || ctx.controllers().menu.hide());

    // Initial load
    Effect::new(move |_| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.board_tree.load_boards().await;
        });
    });

    view! {
        <div class="app-layout">
            <BoardSidebar />
            <TaskPanel />
            <ContextMenu />
        </div>
    }
}
