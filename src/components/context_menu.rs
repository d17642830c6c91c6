//! Context Menu Component
//!
//! Right-click menu for boards and projects: new project, rename, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_context_menu::MenuOverlay;

use crate::components::{DeleteConfirmButton, NameInputForm};
use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuMode {
    Actions,
    Rename,
    NewProject,
}

#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (mode, set_mode) = signal(MenuMode::Actions);

    let menu = Memo::new(move |_| {
        let _ = ctx.menu_version.get();
        ctx.controllers().menu.view()
    });

    // Every open or close starts from the action list
    Effect::new(move |_| {
        let _ = ctx.menu_version.get();
        set_mode.set(MenuMode::Actions);
    });

    let on_rename = Callback::new(move |name: String| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.board_tree.rename_item(&name).await;
        });
    });

    let on_new_project = Callback::new(move |name: String| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.board_tree.create_new_project(&name).await;
        });
    });

    let on_delete = Callback::new(move |_| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.board_tree.delete_item().await;
        });
    });

    let back = Callback::new(move |_| set_mode.set(MenuMode::Actions));

    view! {
        <MenuOverlay
            visible=Signal::derive(move || menu.get().visible)
            position=Signal::derive(move || menu.get().position)
        >
            <div class="context-menu-title">{move || menu.get().title.unwrap_or_default()}</div>
            {move || match mode.get() {
                MenuMode::Actions => view! {
                    <div class="context-menu-items">
                        <Show when=move || menu.get().show_new_project>
                            <div
                                class="context-menu-item"
                                id="newProjectOption"
                                on:click=move |_| set_mode.set(MenuMode::NewProject)
                            >
                                <i class="fas fa-plus"></i>
                                " New project"
                            </div>
                        </Show>
                        <div
                            class="context-menu-item"
                            id="renameOption"
                            on:click=move |_| set_mode.set(MenuMode::Rename)
                        >
                            <i class="fas fa-pen"></i>
                            " Rename"
                        </div>
                        <DeleteConfirmButton
                            button_class="context-menu-item delete-option"
                            label="Delete"
                            on_confirm=on_delete
                        />
                    </div>
                }.into_any(),
                MenuMode::Rename => view! {
                    <NameInputForm
                        placeholder="New name"
                        initial=menu.get_untracked().title.unwrap_or_default()
                        on_submit=on_rename
                        on_cancel=back
                    />
                }.into_any(),
                MenuMode::NewProject => view! {
                    <NameInputForm
                        placeholder="Project name"
                        on_submit=on_new_project
                        on_cancel=back
                    />
                }.into_any(),
            }}
        </MenuOverlay>
    }
}
