use leptos::prelude::*;
use leptos_meta::Title;

use crate::analytics::InteractionEvent;
use crate::contact::SimulatedTransport;
use crate::nav::SectionLink;

use super::contact::ContactForm;
use super::dom::scroll_to_section;
use super::effects::{HoverCard, ParallaxShapes};
use super::keyboard::use_section_keyboard;
use super::reveal::Reveal;
use super::PageContext;

pub const SECTIONS: &[SectionLink] = &[
    SectionLink {
        id: "home",
        label: "Home",
    },
    SectionLink {
        id: "about",
        label: "About",
    },
    SectionLink {
        id: "skills",
        label: "Skills",
    },
    SectionLink {
        id: "projects",
        label: "Projects",
    },
    SectionLink {
        id: "contact",
        label: "Contact",
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    demo: &'static str,
    source: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Ledgerline",
        description: "Double-entry bookkeeping service with an append-only journal and nightly reconciliation.",
        tags: &["Rust", "Axum", "PostgreSQL"],
        demo: "https://ledgerline.example.com",
        source: "https://github.com/jreyes/ledgerline",
    },
    Project {
        title: "Tidepool",
        description: "Streaming metrics dashboard that renders millions of points with WebGL.",
        tags: &["TypeScript", "WebGL", "WebSockets"],
        demo: "https://tidepool.example.com",
        source: "https://github.com/jreyes/tidepool",
    },
    Project {
        title: "Quillmark",
        description: "Markdown static site generator with incremental rebuilds and live reload.",
        tags: &["Rust", "Leptos", "WASM"],
        demo: "https://quillmark.example.com",
        source: "https://github.com/jreyes/quillmark",
    },
];

const SKILLS: &[(&str, &[&str])] = &[
    ("Frontend", &["TypeScript", "React", "Leptos", "HTML", "CSS"]),
    ("Backend", &["Rust", "Go", "Python", "PostgreSQL", "Redis"]),
    ("Tooling", &["Docker", "Terraform", "GitHub Actions", "Linux"]),
];

#[component]
pub fn HomePage() -> impl IntoView {
    use_section_keyboard();
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    // the section after home, when the page has one
    let next_id = ctx.sections.get(1).map(|s| s.id);
    let sections = ctx.sections;
    let navbar = ctx.navbar;

    view! {
        <section id="home" class="hero relative min-h-screen flex flex-col justify-center items-center text-center px-4">
            <ParallaxShapes />
            <h1 class="text-4xl lg:text-6xl font-bold mb-4">
                "Hi, I'm " <span class="text-primary">"Jordan Reyes"</span>
            </h1>
            <p class="text-xl text-muted mb-8">"Full-stack engineer building fast, reliable web systems."</p>
            <div class="flex gap-4">
                <a
                    href="#projects"
                    class="btn btn-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(sections, "projects", navbar);
                    }
                >
                    "View My Work"
                </a>
                <a
                    href="#contact"
                    class="btn btn-secondary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(sections, "contact", navbar);
                    }
                >
                    "Get In Touch"
                </a>
            </div>
            {next_id
                .map(|id| {
                    view! {
                        <button
                            class="scroll-indicator absolute bottom-8"
                            aria-label="Scroll to next section"
                            on:click=move |_| scroll_to_section(sections, id, navbar)
                        >
                            <span class="arrow"></span>
                        </button>
                    }
                })}
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="section max-w-6xl mx-auto px-4 py-20">
            <h2 class="section-title">"About Me"</h2>
            <Reveal class="about-content grid lg:grid-cols-2 gap-8">
                <div>
                    <p class="text-base mb-4 leading-relaxed">
                        "I design and ship software end to end, from database schemas to the last pixel of an interface."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Lately that means Rust on the server, WebAssembly in the browser, and a lot of attention to how things feel under load."
                    </p>
                </div>
                <div class="grid grid-cols-3 gap-4 text-center">
                    <div class="stat"><span class="text-3xl font-bold text-primary">"8+"</span><p>"Years"</p></div>
                    <div class="stat"><span class="text-3xl font-bold text-primary">"40+"</span><p>"Projects"</p></div>
                    <div class="stat"><span class="text-3xl font-bold text-primary">"12"</span><p>"Talks"</p></div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section max-w-6xl mx-auto px-4 py-20">
            <h2 class="section-title">"Skills"</h2>
            <div class="grid md:grid-cols-3 gap-6">
                {SKILLS
                    .iter()
                    .map(|(category, items)| {
                        view! {
                            <Reveal class="skill-category">
                                <h3 class="text-xl font-bold mb-4">{*category}</h3>
                                <ul class="flex flex-wrap gap-2">
                                    {items
                                        .iter()
                                        .map(|s| view! { <li class="skill-tag">{*s}</li> })
                                        .collect_view()}
                                </ul>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    view! {
        <section id="projects" class="section max-w-6xl mx-auto px-4 py-20">
            <h2 class="section-title">"Projects"</h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        let demo_sink = ctx.sink.clone();
                        let source_sink = ctx.sink.clone();
                        let title = p.title;
                        view! {
                            <Reveal>
                                <HoverCard class="project-card h-full rounded-lg p-6">
                                    <h3 class="text-xl font-bold mb-2">{p.title}</h3>
                                    <p class="mb-4">{p.description}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {p
                                            .tags
                                            .iter()
                                            .map(|t| view! { <span class="project-tag">{*t}</span> })
                                            .collect_view()}
                                    </div>
                                    <div class="flex gap-4">
                                        <a
                                            href=p.demo
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="project-link"
                                            on:click=move |_| {
                                                demo_sink.record(InteractionEvent::project_action(title, "demo"))
                                            }
                                        >
                                            "Live Demo"
                                        </a>
                                        <a
                                            href=p.source
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="project-link"
                                            on:click=move |_| {
                                                source_sink.record(InteractionEvent::project_action(title, "source"))
                                            }
                                        >
                                            "Source"
                                        </a>
                                    </div>
                                </HoverCard>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let transport = SimulatedTransport::new(ctx.config.contact.submit_latency());
    view! {
        <section id="contact" class="section max-w-6xl mx-auto px-4 py-20">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="grid lg:grid-cols-2 gap-8">
                <Reveal class="contact-info">
                    <p class="mb-4">"Have a project in mind or just want to chat? Send a message."</p>
                    <p class="mb-2">"📧 hello@jordanreyes.dev"</p>
                    <p>"📍 Portland, OR"</p>
                </Reveal>
                <Reveal class="contact-content">
                    <ContactForm transport />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = env!("BUILD_YEAR");
    view! {
        <footer class="text-center py-8 text-muted">
            <p>{format!("© {year} Jordan Reyes. Built with Rust and Leptos.")}</p>
        </footer>
    }
}
