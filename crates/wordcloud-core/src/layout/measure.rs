//! Text extent measurement
//!
//! The packer only needs a glyph box per word. In the browser the box comes
//! from canvas `measureText`; natively a per-character heuristic is close
//! enough for Fredoka at display sizes.

/// Ink box of a run of text relative to its baseline anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    /// Advance width in pixels
    pub width: f64,
    /// Distance above the baseline
    pub ascent: f64,
    /// Distance below the baseline
    pub descent: f64,
}

impl TextExtent {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Measures text for layout
pub trait TextMeasure {
    /// Extent of `text` rendered at `font_size` pixels
    fn measure(&self, text: &str, font_size: f64) -> TextExtent;
}

/// Em-based estimate: narrow glyphs at `narrow_advance`, emoji and CJK at
/// `wide_advance`, combining marks and joiners at zero width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasure {
    pub narrow_advance: f64,
    pub wide_advance: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl Default for HeuristicMeasure {
    fn default() -> Self {
        Self {
            narrow_advance: 0.58,
            wide_advance: 1.0,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

/// Display width class of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlyphWidth {
    Zero,
    Narrow,
    Wide,
}

fn glyph_width(c: char) -> GlyphWidth {
    match u32::from(c) {
        // ZWJ, variation selectors, skin tone modifiers, combining marks
        0x200D | 0xFE00..=0xFE0F | 0x1F3FB..=0x1F3FF | 0x0300..=0x036F | 0x20E3 => {
            GlyphWidth::Zero
        }
        0x1100..=0x115F
        | 0x2600..=0x27BF
        | 0x2B00..=0x2BFF
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0x1F000..=0x1FAFF
        | 0x20000..=0x3FFFD => GlyphWidth::Wide,
        _ => GlyphWidth::Narrow,
    }
}

impl TextMeasure for HeuristicMeasure {
    fn measure(&self, text: &str, font_size: f64) -> TextExtent {
        let ems: f64 = text
            .chars()
            .map(|c| match glyph_width(c) {
                GlyphWidth::Zero => 0.0,
                GlyphWidth::Narrow => self.narrow_advance,
                GlyphWidth::Wide => self.wide_advance,
            })
            .sum();
        TextExtent {
            width: ems * font_size,
            ascent: self.ascent * font_size,
            descent: self.descent * font_size,
        }
    }
}
