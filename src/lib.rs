pub mod analytics;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod effects;
pub mod nav;
pub mod reveal;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::config::SiteConfig;
    console_error_panic_hook::set_once();
    // errors only if a logger is already installed
    let _ = console_log::init_with_level(SiteConfig::global().log_level());
    leptos::mount::hydrate_body(App);
}
