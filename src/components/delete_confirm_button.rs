//! Delete Confirm Button Component

use leptos::prelude::*;

/// Menu entry that arms on the first click and deletes on the second.
/// Clicks never bubble, so the document listener leaves the menu open.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Are you sure?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <div
                    class=button_class.clone()
                    id="deleteOption"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    <i class="fas fa-trash"></i>
                    {format!(" {}", label)}
                </div>
            }
            .into_any()
        }
    }
}
