//! Context Menu Controller
//!
//! Lifecycle of the single context menu overlay.

use leptos_context_menu::MenuPosition;

use super::{Redraw, Region};
use crate::state::{MenuState, MenuTarget, SharedState};

/// What the overlay needs to paint itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuView {
    pub visible: bool,
    pub position: MenuPosition,
    pub title: Option<String>,
    pub show_new_project: bool,
}

#[derive(Clone)]
pub struct ContextMenuController {
    state: SharedState,
    redraw: Redraw,
}

impl ContextMenuController {
    pub fn new(state: SharedState, redraw: Redraw) -> Self {
        Self { state, redraw }
    }

    /// Open the menu for `target` at page coordinates `position`
    pub fn show(&self, target: MenuTarget, position: MenuPosition) {
        tracing::debug!(kind = %target.kind(), id = target.id(), "opening context menu");
        {
            let mut state = self.state.borrow_mut();
            state.current_board_id = Some(target.owning_board_id());
            state.menu = MenuState {
                visible: true,
                position,
                target: Some(target),
            };
        }
        (self.redraw)(Region::Menu);
    }

    /// Hide only while the menu still points at `target`
    pub fn hide_if(&self, target: &MenuTarget) {
        let still_open = self.state.borrow().menu.target.as_ref() == Some(target);
        if still_open {
            self.hide();
        }
    }

    pub fn hide(&self) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let changed = state.menu.visible || state.menu.target.is_some();
            state.menu.visible = false;
            state.menu.target = None;
            changed
        };
        if changed {
            (self.redraw)(Region::Menu);
        }
    }

    /// Snapshot of the current target; take it before the first `.await`
    pub fn target(&self) -> Option<MenuTarget> {
        self.state.borrow().menu.target.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().menu.visible
    }

    /// Hide the menu opened for `target` when the returned guard goes out
    /// of scope; a menu opened since for another target stays up
    pub fn dismiss_guard(&self, target: MenuTarget) -> MenuDismissGuard {
        MenuDismissGuard { menu: self.clone(), target }
    }

    pub fn view(&self) -> MenuView {
        let state = self.state.borrow();
        let target = state.menu.target.as_ref();
        MenuView {
            visible: state.menu.visible,
            position: state.menu.position,
            title: target.map(|t| t.name().to_string()),
            show_new_project: matches!(target, Some(MenuTarget::Board { .. })),
        }
    }
}

/// Closes the menu on drop, whichever way the owning action ends
pub struct MenuDismissGuard {
    menu: ContextMenuController,
    target: MenuTarget,
}

impl Drop for MenuDismissGuard {
    fn drop(&mut self) {
        self.menu.hide_if(&self.target);
    }
}
