//! Browser measurements and side effects shared by the page controllers.
//! Everything here tolerates missing elements.

use leptos::{html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::{scroll_target, SectionBounds, SectionLink};

pub fn measure_sections(sections: &[SectionLink]) -> Vec<SectionBounds> {
    let doc = document();
    sections
        .iter()
        .filter_map(|s| {
            let el = doc
                .get_element_by_id(s.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                s.id,
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect()
}

fn find_section(sections: &[SectionLink], id: &str) -> Option<SectionBounds> {
    measure_sections(sections).into_iter().find(|s| s.id == id)
}

pub fn navbar_height(navbar: NodeRef<html::Nav>) -> f64 {
    navbar
        .get_untracked()
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

pub fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = document().body() {
        if let Err(e) = body
            .class_list()
            .toggle_with_force("overflow-hidden", locked)
        {
            log::debug!("couldn't toggle body scroll lock: {e:?}");
        }
    }
}

/// Smooth-scroll so the section's top sits just below the navbar. Does nothing
/// when the section isn't on the page.
pub fn scroll_to_section(sections: &[SectionLink], id: &str, navbar: NodeRef<html::Nav>) {
    if let Some(section) = find_section(sections, id) {
        smooth_scroll_to(scroll_target(&section, navbar_height(navbar)));
    }
}
