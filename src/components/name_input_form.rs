//! Name Input Form Component
//!
//! Single-line inline input used for new boards, new projects and renames.

use leptos::prelude::*;

use crate::models::normalized_name;

/// Inline text form; blank input is ignored, submitted text is cleared
#[component]
pub fn NameInputForm(
    #[prop(into)] placeholder: String,
    #[prop(into, optional)] initial: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into, optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let (text, set_text) = signal(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get_untracked();
        if normalized_name(&value).is_none() {
            return;
        }
        on_submit.run(value);
        set_text.set(String::new());
    };

    view! {
        <form class="name-input-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                autofocus=true
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        if let Some(cancel) = on_cancel {
                            cancel.run(());
                        }
                    }
                }
            />
            <button type="submit">"OK"</button>
            {on_cancel.map(|cancel| view! {
                <button type="button" class="cancel-btn" on:click=move |_| cancel.run(())>"×"</button>
            })}
        </form>
    }
}
