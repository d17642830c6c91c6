//! Task Item Component
//!
//! One task row: completion circle, text, optional deadline, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::task_sections::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    // Desired state is fixed by what the user saw when clicking
    let completed = !row.completed;

    let toggle = move |_| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.tasks.toggle_task_completion(id, completed).await;
        });
    };

    let delete = move |_| {
        let controllers = ctx.controllers();
        spawn_local(async move {
            controllers.tasks.delete_task(id).await;
        });
    };

    let row_class = row.class();
    let checkbox_class = row.checkbox_class();

    view! {
        <div class=row_class>
            <div class="task-checkbox">
                <div class=checkbox_class on:click=toggle></div>
            </div>
            <span class="task-text">{row.text}</span>
            {row.deadline.map(|d| view! { <span class="task-deadline">{d}</span> })}
            <button class="delete-btn" title="Delete task" on:click=delete>
                <i class="fas fa-trash"></i>
            </button>
        </div>
    }
}
