use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::RevealState;

use super::PageContext;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let config = &ctx.config.reveal;
    let offset = config.offset_px;
    let target = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::default());
    // effects only run in the browser
    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));
    let shown = move || state.get().displayed(hydrated.get());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let mut next = state.get_untracked();
                if next.on_intersection(entry.is_intersecting()) {
                    state.set(next);
                    observer.unobserve(&entry.target());
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![config.threshold])
            .root_margin(config.root_margin.clone()),
    );

    view! {
        <div
            node_ref=target
            class=class
            style:opacity=move || shown().opacity()
            style:transform=move || shown().transform(offset)
            style:transition="opacity 0.6s ease, transform 0.6s ease"
        >
            {children()}
        </div>
    }
}
