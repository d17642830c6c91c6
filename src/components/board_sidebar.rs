//! Board Sidebar Component
//!
//! Left column: new-board form and the board → project tree.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BoardItem, NameInputForm};
use crate::context::AppContext;

#[component]
pub fn BoardSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (adding, set_adding) = signal(false);

    let on_create = Callback::new(move |name: String| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            if controllers.board_tree.create_new_board(&name).await {
                set_adding.set(false);
            }
        });
    });

    let boards = move || {
        let _ = ctx.tree_version.get();
        ctx.controllers().board_tree.tree()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"Boards"</h2>
                <button
                    id="newBoardBtn"
                    class="new-board-btn"
                    title="New board"
                    on:click=move |_| set_adding.update(|v| *v = !*v)
                >
                    "+"
                </button>
            </div>

            <Show when=move || adding.get()>
                <NameInputForm
                    placeholder="Board name"
                    on_submit=on_create
                    on_cancel=Callback::new(move |_| set_adding.set(false))
                />
            </Show>

            <div class="sidebar-content" id="sidebarContent">
                {move || boards()
                    .into_iter()
                    .map(|node| view! { <BoardItem node=node /> })
                    .collect_view()}
            </div>
        </aside>
    }
}
