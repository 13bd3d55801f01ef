use leptos::{
    ev::{self, MouseEvent},
    html,
    prelude::*,
};
use leptos_use::{use_document, use_event_listener, use_window, use_window_scroll};
use wasm_bindgen::JsCast;

use crate::analytics::InteractionEvent;
use crate::nav::{active_section, is_scrolled, MenuState};

use super::dom::{measure_sections, navbar_height, scroll_to_section, set_body_scroll_lock};
use super::PageContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let nav_config = ctx.config.nav;
    let navbar = ctx.navbar;
    let (_, scroll_y) = use_window_scroll();
    let menu = RwSignal::new(MenuState::default());
    let active = RwSignal::new(None::<String>);
    let menu_ref = NodeRef::<html::Ul>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    let scrolled = move || is_scrolled(scroll_y.get(), &nav_config);

    let sections = ctx.sections;
    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = measure_sections(sections);
        let current = active_section(&bounds, y, navbar_height(navbar), &nav_config)
            .map(str::to_string);
        if active.get_untracked() != current {
            active.set(current);
        }
    });

    Effect::new(move |_| set_body_scroll_lock(menu.get().body_locked()));

    // only write the signal when the menu actually closes
    let close_menu_if = move |decide: &dyn Fn(&mut MenuState) -> bool| {
        let mut next = menu.get_untracked();
        if decide(&mut next) {
            menu.set(next);
        }
    };

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let key = ev.key();
        close_menu_if(&|m| m.on_key(&key));
    });

    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let in_menu = menu_ref
            .get_untracked()
            .is_some_and(|el| el.contains(target.as_ref()));
        let on_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|el| el.contains(target.as_ref()));
        close_menu_if(&|m| m.on_document_click(in_menu, on_toggle));
    });

    let follow_link = {
        let sink = ctx.sink.clone();
        move |ev: MouseEvent, id: &'static str| {
            ev.prevent_default();
            scroll_to_section(sections, id, navbar);
            close_menu_if(&|m| m.on_link_click());
            sink.record(InteractionEvent::nav_click(id));
        }
    };

    view! {
        <nav
            node_ref=navbar
            class="navbar fixed top-0 inset-x-0 z-50 transition-all duration-300"
            class:scrolled=scrolled
        >
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between max-w-6xl">
                <a
                    href="#home"
                    class="text-2xl font-bold text-primary"
                    on:click={
                        let follow_link = follow_link.clone();
                        move |ev| follow_link(ev, "home")
                    }
                >
                    "JR"
                </a>
                <ul
                    node_ref=menu_ref
                    class="nav-menu flex gap-8"
                    class:open=move || menu.get().is_open()
                >
                    {sections
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            let follow_link = follow_link.clone();
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        class:active=move || active.get().as_deref() == Some(id)
                                        on:click=move |ev| follow_link(ev, id)
                                    >
                                        {section.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    node_ref=toggle_ref
                    class="nav-toggle md:hidden"
                    class:open=move || menu.get().is_open()
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| {
                        menu.update(|m| {
                            m.toggle();
                        })
                    }
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
