/// One-shot fade-in state of an observed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed an intersection report. Returns true only for the transition from
    /// hidden to revealed; once revealed nothing hides the element again.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        match self {
            Self::Hidden if intersecting => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }

    /// The state to paint. Until the page is hydrated nothing can reveal the
    /// element, so server-rendered markup is always shown.
    pub fn displayed(self, hydrated: bool) -> Self {
        if hydrated {
            self
        } else {
            Self::Revealed
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Revealed => "1",
        }
    }

    pub fn transform(&self, offset_px: f64) -> String {
        match self {
            Self::Hidden => format!("translateY({offset_px}px)"),
            Self::Revealed => "translateY(0)".to_string(),
        }
    }
}
