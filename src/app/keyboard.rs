use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::nav::{handles_own_arrows, neighbour_section, scroll_target, Direction};

use super::dom::{measure_sections, navbar_height, scroll_y, smooth_scroll_to};
use super::PageContext;

/// Ctrl+ArrowDown / Ctrl+ArrowUp jump between sections.
pub fn use_section_keyboard() {
    let ctx = expect_context::<PageContext>();
    let nav_config = ctx.config.nav;
    let sections = ctx.sections;
    let navbar = ctx.navbar;

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !ev.ctrl_key() {
            return;
        }
        let direction = match ev.key().as_str() {
            "ArrowDown" => Direction::Next,
            "ArrowUp" => Direction::Previous,
            _ => return,
        };
        // leave caret movement in form fields alone
        let editing = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            .is_some_and(|el| handles_own_arrows(&el.tag_name()) || el.is_content_editable());
        if editing {
            return;
        }
        ev.prevent_default();
        let bounds = measure_sections(sections);
        let offset = navbar_height(navbar);
        if let Some(section) = neighbour_section(&bounds, scroll_y(), offset, &nav_config, direction) {
            smooth_scroll_to(scroll_target(section, offset));
        }
    });
}
