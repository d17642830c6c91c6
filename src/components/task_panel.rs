//! Task Panel Component
//!
//! Main column: selected project title, new-task input, and the task list
//! split into open and completed sections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::task_sections::COMPLETED_HEADER;

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (new_text, set_new_text) = signal(String::new());

    let title = move || {
        let _ = ctx.tasks_version.get();
        ctx.controllers().tasks.context_title()
    };

    let sections = Memo::new(move |_| {
        let _ = ctx.tasks_version.get();
        ctx.controllers().tasks.visible_sections()
    });

    let create_task = move || {
        let text = new_text.get_untracked();
        let controllers = ctx.controllers();
        spawn_local(async move {
            if controllers.tasks.create_new_task(&text).await {
                set_new_text.set(String::new());
            }
        });
    };

    view! {
        <main class="main-content">
            <h1 id="currentContext">
                {move || title().unwrap_or_else(|| "Select a project".to_string())}
            </h1>

            <div class="new-task-row">
                <input
                    id="newTaskInput"
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            create_task();
                        }
                    }
                />
                <button id="addTaskBtn" on:click=move |_| create_task()>"Add"</button>
            </div>

            <div class="tasks-list" id="tasksList">
                {move || sections.get().map(|s| view! {
                    <div class="tasks-section incomplete-tasks">
                        {s.incomplete
                            .into_iter()
                            .map(|row| view! { <TaskItem row=row /> })
                            .collect_view()}
                    </div>
                    <div class="tasks-section complete-tasks">
                        <h3>{COMPLETED_HEADER}</h3>
                        {s.completed
                            .into_iter()
                            .map(|row| view! { <TaskItem row=row /> })
                            .collect_view()}
                    </div>
                })}
            </div>

            <p class="task-count">
                {move || {
                    let s = sections.get().unwrap_or_default();
                    format!("{} open, {} completed", s.incomplete.len(), s.completed.len())
                }}
            </p>
        </main>
    }
}
