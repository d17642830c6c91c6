//! Board Item Component
//!
//! One board header with its collapsible project list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_context_menu::make_on_contextmenu;

use crate::context::AppContext;
use crate::tree::{BoardNode, ProjectNode};

#[component]
pub fn BoardItem(node: BoardNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let board_id = node.id;
    let target = node.menu_target();
    let open_menu = make_on_contextmenu(move |position| {
        ctx.controllers().menu.show(target.clone(), position);
    });

    let chevron = node.chevron_class();
    let projects_style = node.projects_style();
    let name = node.name;
    let projects = node.projects;

    view! {
        <div class="tree-item board-item">
            <div
                class="board-header"
                on:click=move |_| ctx.controllers().board_tree.toggle_board(board_id)
                on:contextmenu=open_menu
            >
                <i class=chevron></i>
                <i class="fas fa-list"></i>
                <span>{name}</span>
            </div>
            <div class="projects-container" style=projects_style>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectItem node=project /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectItem(node: ProjectNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let project_id = node.id;
    let class = node.class();
    let target = node.menu_target();
    let open_menu = make_on_contextmenu(move |position| {
        ctx.controllers().menu.show(target.clone(), position);
    });

    let select = move |ev: web_sys::MouseEvent| {
        // Keep the click away from the board header toggle
        ev.stop_propagation();
        let controllers = ctx.controllers();
        controllers.menu.hide();
        spawn_local(async move {
            controllers.board_tree.select_project(project_id).await;
        });
    };

    view! {
        <div class=class on:click=select on:contextmenu=open_menu>
            <i class="fas fa-folder"></i>
            <span>{node.name}</span>
        </div>
    }
}
