use leptos::prelude::*;
use leptos_use::{use_throttle_fn_with_arg, use_window_scroll};

use crate::effects::{card_transform, parallax_offset, shape_transform};

use super::PageContext;

#[component]
pub fn HoverCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=class
            style:transform=move || card_transform(hovered.get())
            style:transition="transform 0.3s ease"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {children()}
        </div>
    }
}

/// Background shapes drifting with the page scroll, rate limited.
#[component]
pub fn ParallaxShapes() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let config = ctx.config.effects;
    let (_, scroll_y) = use_window_scroll();
    let (sample, set_sample) = signal(0.0);

    // trailing calls keep the last sample of a burst
    let throttled = use_throttle_fn_with_arg(move |y: f64| set_sample.set(y), config.parallax_interval_ms);
    Effect::new(move |_| {
        throttled(scroll_y.get());
    });

    view! {
        <div class="shapes pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {(0..config.shape_count)
                .map(|i| {
                    view! {
                        <div
                            class=format!("shape shape-{}", i + 1)
                            style:transform=move || {
                                shape_transform(parallax_offset(sample.get(), i, &config))
                            }
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
