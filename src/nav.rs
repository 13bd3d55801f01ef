use crate::config::NavConfig;

/// A page section as a static link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLink {
    pub id: &'static str,
    pub label: &'static str,
}

/// Measured vertical extent of a section, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// The top bar is "scrolled" once the offset reaches the threshold.
pub fn is_scrolled(scroll_y: f64, config: &NavConfig) -> bool {
    scroll_y >= config.scrolled_threshold
}

/// First section whose span, shifted up by the navbar height and lookahead,
/// contains `scroll_y`.
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    navbar_height: f64,
    config: &NavConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| {
            let start = s.top - navbar_height - config.section_lookahead;
            let end = start + s.height;
            scroll_y >= start && scroll_y < end
        })
        .map(|s| s.id.as_str())
}

/// Scroll offset that puts the section's top just below the fixed navbar.
pub fn scroll_target(section: &SectionBounds, navbar_height: f64) -> f64 {
    (section.top - navbar_height).max(0.0)
}

/// Section to jump to from `scroll_y` in `direction`, if any.
///
/// The current section is the last one whose top, less the navbar height and
/// lookahead, is at or above `scroll_y`. That is the same line `scroll_target`
/// lands on, so a jump always makes its target current. With no current
/// section only `Next` moves (to the first).
pub fn neighbour_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    navbar_height: f64,
    config: &NavConfig,
    direction: Direction,
) -> Option<&'a SectionBounds> {
    let lookahead = config.section_lookahead.max(0.0);
    let current = sections
        .iter()
        .rposition(|s| s.top - navbar_height - lookahead <= scroll_y);
    match (direction, current) {
        (Direction::Next, None) => sections.first(),
        (Direction::Next, Some(i)) => sections.get(i + 1),
        (Direction::Previous, None) | (Direction::Previous, Some(0)) => None,
        (Direction::Previous, Some(i)) => sections.get(i - 1),
    }
}

/// Elements that use Ctrl+Arrow for their own caret movement.
pub fn handles_own_arrows(tag_name: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name))
}

/// Mobile slide-in menu. The body scroll is locked exactly while it is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Following an in-page link always closes the menu.
    pub fn on_link_click(&mut self) -> bool {
        self.close()
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Clicks on the menu panel or its toggle button leave it alone.
    pub fn on_document_click(&mut self, in_menu: bool, on_toggle: bool) -> bool {
        !in_menu && !on_toggle && self.close()
    }
}
