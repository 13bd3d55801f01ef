mod contact;
mod dom;
mod effects;
mod keyboard;
mod navbar;
mod reveal;
mod sections;

use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::analytics::{EventSink, LogSink, NullSink};
use crate::config::SiteConfig;
use crate::nav::SectionLink;

use navbar::Navbar;
use sections::{Footer, HomePage, SECTIONS};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Everything the page controllers share, gathered once when the app starts.
#[derive(Clone)]
pub struct PageContext {
    pub config: &'static SiteConfig,
    pub sections: &'static [SectionLink],
    pub sink: Arc<dyn EventSink>,
    pub navbar: NodeRef<html::Nav>,
}

impl PageContext {
    pub fn new(config: &'static SiteConfig) -> Self {
        let sink: Arc<dyn EventSink> = if config.analytics.enabled {
            Arc::new(LogSink)
        } else {
            Arc::new(NullSink)
        };
        Self {
            config,
            sections: SECTIONS,
            sink,
            navbar: NodeRef::new(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(PageContext::new(SiteConfig::global()));

    view! {
        <Title formatter=|title| format!("Jordan Reyes - {title}") />
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
