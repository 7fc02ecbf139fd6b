use super::{Color, Display, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub display: Display,
    /// 0.0 (fully transparent) to 1.0 (opaque).
    pub opacity: f32,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            display: Display::Block,
            opacity: 1.0,
            background: None,
            foreground: None,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Foreground as it would actually render, with opacity blended
    /// toward the backdrop.
    pub fn rendered_foreground(&self, backdrop: &Color) -> Option<Color> {
        self.foreground
            .as_ref()
            .map(|fg| fg.blend_toward(backdrop, 1.0 - self.opacity))
    }
}

/// Pre-hide visual state, written when an element is concealed and
/// consumed when it is next revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedVisual {
    pub height: Size,
    pub opacity: f32,
    pub display: Display,
}
