//! Leptos Context Menu Utilities
//!
//! A single floating menu opened by right-click and dismissed by any
//! click elsewhere in the document.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Page coordinates the menu is anchored at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuPosition {
    pub x: i32,
    pub y: i32,
}

impl MenuPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Inline style for the overlay element
pub fn overlay_style(visible: bool, position: MenuPosition) -> String {
    if visible {
        format!("display: block; left: {}px; top: {}px;", position.x, position.y)
    } else {
        "display: none;".to_string()
    }
}

/// Take ownership of a contextmenu event: suppress the browser menu,
/// keep the event away from the document dismiss listener, and return
/// where the pointer was.
pub fn claim_event(ev: &web_sys::MouseEvent) -> MenuPosition {
    ev.prevent_default();
    ev.stop_propagation();
    MenuPosition::new(ev.page_x(), ev.page_y())
}

/// Create a contextmenu handler that opens the menu at the pointer
pub fn make_on_contextmenu<F>(on_open: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(MenuPosition) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let position = claim_event(&ev);
        on_open(position);
    }
}

/// Bind a document-level click listener that dismisses the menu.
///
/// Clicks inside the overlay never reach it, see [`MenuOverlay`].
pub fn bind_global_dismiss<F>(on_dismiss: F)
where
    F: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        on_dismiss();
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

/// Floating container for menu items
#[component]
pub fn MenuOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] position: Signal<MenuPosition>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="context-menu"
            style=move || overlay_style(visible.get(), position.get())
            on:click=move |ev| ev.stop_propagation()
            on:contextmenu=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
            }
        >
            {children()}
        </div>
    }
}
