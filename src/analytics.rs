use serde::Serialize;

/// A best-effort interaction record. Loss is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl InteractionEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    pub fn nav_click(section_id: &str) -> Self {
        Self::new("navigation", "click", section_id)
    }

    pub fn project_action(project: &str, action: &str) -> Self {
        Self::new("project", action, project)
    }

    pub fn form_submit(label: &str) -> Self {
        Self::new("contact", "submit", label)
    }
}

pub trait EventSink: Send + Sync {
    fn record(&self, event: InteractionEvent);
}

/// Writes each event as a JSON line to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: InteractionEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => log::info!("analytics {line}"),
            Err(e) => log::debug!("dropped analytics event: {e}"),
        }
    }
}

/// Used when analytics are switched off in the site config.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: InteractionEvent) {}
}
