//! Hover highlighting and the shared tooltip
//!
//! There is exactly one tooltip. Entering a word shows it with that word's
//! text and meaning and dims every other word; moving repositions it next to
//! the pointer; leaving hides it and restores every word.

/// Opacity of words that are not hovered while another one is
pub const DIMMED_OPACITY: f64 = 0.3;

/// Pixel offset between the pointer and the tooltip's corner
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Content and position of the single tooltip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub title: String,
    pub body: String,
    /// CSS `left` in page pixels
    pub left: f64,
    /// CSS `top` in page pixels
    pub top: f64,
}

impl Tooltip {
    #[must_use]
    pub fn visibility_css(&self) -> &'static str {
        if self.visible { "visible" } else { "hidden" }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }
}

/// Which word, if any, is under the pointer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl HoverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the word at `index`
    pub fn enter(&mut self, index: usize, text: &str, description: &str) {
        self.hovered = Some(index);
        self.tooltip.visible = true;
        self.tooltip.title = text.to_string();
        self.tooltip.body = description.to_string();
    }

    /// Pointer moved to page coordinates
    pub fn move_to(&mut self, page_x: f64, page_y: f64) {
        self.tooltip.left = page_x + TOOLTIP_OFFSET;
        self.tooltip.top = page_y - TOOLTIP_OFFSET;
    }

    /// Pointer left whichever word it was over
    pub fn leave(&mut self) {
        self.hovered = None;
        self.tooltip.visible = false;
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub const fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Opacity of the word at `index` under the current hover
    #[must_use]
    pub fn opacity_of(&self, index: usize) -> f64 {
        match self.hovered {
            Some(hovered) if hovered != index => DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}
