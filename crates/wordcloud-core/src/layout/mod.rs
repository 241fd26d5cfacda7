//! # Word cloud packing
//!
//! Places words on a fixed canvas without overlap. Words are tried largest
//! first; each starts near the middle of the canvas and walks outward along
//! a spiral until its padded box fits inside the canvas and clears every
//! word already placed. Words that never fit are dropped.
//!
//! Coordinates in the result are offsets from the canvas center, so the
//! renderer only has to translate the group.

pub mod measure;
pub mod spiral;

pub use measure::{HeuristicMeasure, TextExtent, TextMeasure};
pub use spiral::{Spiral, SpiralPath};

use rand::Rng;
use tracing::debug;

use crate::record::{PlacedWord, WordRecord};

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Box around a baseline-anchored, horizontally centered run of text,
    /// rotated clockwise by `degrees` about its anchor
    #[must_use]
    pub fn around_text(extent: TextExtent, degrees: f64) -> Self {
        let half = extent.width / 2.0;
        let corners = [
            (-half, -extent.ascent),
            (half, -extent.ascent),
            (half, extent.descent),
            (-half, extent.descent),
        ];
        let (sin, cos) = degrees.to_radians().sin_cos();
        let rotated = corners.map(|(x, y)| (x * cos - y * sin, x * sin + y * cos));
        rotated.iter().fold(
            Self {
                x0: f64::INFINITY,
                y0: f64::INFINITY,
                x1: f64::NEG_INFINITY,
                y1: f64::NEG_INFINITY,
            },
            |acc, &(x, y)| Self {
                x0: acc.x0.min(x),
                y0: acc.y0.min(y),
                x1: acc.x1.max(x),
                y1: acc.y1.max(y),
            },
        )
    }

    #[must_use]
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            x0: self.x0 - amount,
            y0: self.y0 - amount,
            x1: self.x1 + amount,
            y1: self.y1 + amount,
        }
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    #[must_use]
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= width && self.y1 <= height
    }

    /// True if the box's size alone allows it inside a `width` by `height` canvas
    #[must_use]
    pub fn fits_inside(&self, width: f64, height: f64) -> bool {
        self.x1 - self.x0 <= width && self.y1 - self.y0 <= height
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// How each word's rotation is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Every word at the same angle
    Fixed(f64),
    /// `angle` with the given probability, otherwise upright
    Sometimes { angle: f64, probability: f64 },
}

impl Rotation {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self {
            Self::Fixed(angle) => angle,
            Self::Sometimes { angle, probability } => {
                if rng.gen_bool(probability.clamp(0.0, 1.0)) {
                    angle
                } else {
                    0.0
                }
            }
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// Packer configuration
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use wordcloud_core::layout::{CloudLayout, HeuristicMeasure, Spiral};
/// use wordcloud_core::record::WordRecord;
///
/// let words = vec![WordRecord::new("bet", "okay", 24.0)];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let placed = CloudLayout::new(400.0, 300.0)
///     .padding(4.0)
///     .spiral(Spiral::Rectangular)
///     .place(&words, &HeuristicMeasure::default(), &mut rng);
/// assert_eq!(placed.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLayout {
    width: f64,
    height: f64,
    padding: f64,
    rotation: Rotation,
    spiral: Spiral,
}

impl CloudLayout {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: 1.0,
            rotation: Rotation::default(),
            spiral: Spiral::default(),
        }
    }

    #[must_use]
    pub const fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn spiral(mut self, spiral: Spiral) -> Self {
        self.spiral = spiral;
        self
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Places as many words as fit, largest first.
    ///
    /// The result is in placement order. Font size comes from each record's
    /// `size` field.
    pub fn place<M, R>(&self, words: &[WordRecord], measure: &M, rng: &mut R) -> Vec<PlacedWord>
    where
        M: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        if !(self.width > 0.0 && self.height > 0.0) || !self.width.is_finite() || !self.height.is_finite() {
            debug!(width = self.width, height = self.height, "Canvas has no area, nothing placed");
            return Vec::new();
        }

        let mut order: Vec<&WordRecord> = words.iter().collect();
        order.sort_by(|a, b| b.size.total_cmp(&a.size));

        let mut boxes: Vec<Rect> = Vec::with_capacity(order.len());
        let mut bounds: Option<Rect> = None;
        let mut placed = Vec::with_capacity(order.len());

        for word in order {
            let rotate = self.rotation.pick(rng);
            let local = Rect::around_text(measure.measure(&word.text, word.size), rotate)
                .inflate(self.padding);

            if !local.fits_inside(self.width, self.height) {
                debug!(text = %word.text, size = word.size, "Word larger than canvas");
                continue;
            }

            match self.find_position(local, &boxes, bounds.as_ref(), rng) {
                Some((x, y)) => {
                    let footprint = local.translate(x, y);
                    bounds = Some(bounds.map_or(footprint, |b| b.union(&footprint)));
                    boxes.push(footprint);
                    placed.push(PlacedWord::from_record(
                        word,
                        x - self.width / 2.0,
                        y - self.height / 2.0,
                        rotate,
                    ));
                }
                None => debug!(text = %word.text, size = word.size, "Word did not fit"),
            }
        }

        placed
    }

    fn find_position<R: Rng + ?Sized>(
        &self,
        local: Rect,
        boxes: &[Rect],
        bounds: Option<&Rect>,
        rng: &mut R,
    ) -> Option<(f64, f64)> {
        let start_x = (self.width * (rng.gen_range(0.0..1.0) + 0.5) / 2.0).trunc();
        let start_y = (self.height * (rng.gen_range(0.0..1.0) + 0.5) / 2.0).trunc();
        let direction: i64 = if rng.gen_bool(0.5) { 1 } else { -1 };
        let max_delta = self.width.hypot(self.height);

        let mut path = self.spiral.path(self.width, self.height);
        let mut t: i64 = 0;
        loop {
            t = t.saturating_add(direction);
            let (dx, dy) = path.step(t);
            let (dx, dy) = (dx.trunc(), dy.trunc());
            // beyond the diagonal on either axis the walk has left the canvas
            if dx.abs().max(dy.abs()) >= max_delta {
                return None;
            }

            let (x, y) = (start_x + dx, start_y + dy);
            let candidate = local.translate(x, y);
            if !candidate.within(self.width, self.height) {
                continue;
            }
            let clear = bounds.is_none_or(|b| !candidate.intersects(b))
                || !boxes.iter().any(|placed| candidate.intersects(placed));
            if clear {
                return Some((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(count: usize, size: f64) -> Vec<WordRecord> {
        (0..count)
            .map(|i| WordRecord::new(format!("word{i}"), format!("meaning {i}"), size))
            .collect()
    }

    fn footprint(word: &PlacedWord, layout: &CloudLayout, padding: f64) -> Rect {
        let (w, h) = layout.size();
        Rect::around_text(
            HeuristicMeasure::default().measure(&word.text, word.size),
            word.rotate,
        )
        .inflate(padding)
        .translate(word.x + w / 2.0, word.y + h / 2.0)
    }

    #[test]
    fn test_rect_rotation_swaps_axes() {
        let extent = TextExtent {
            width: 40.0,
            ascent: 8.0,
            descent: 2.0,
        };
        let upright = Rect::around_text(extent, 0.0);
        assert_eq!(upright.x1 - upright.x0, 40.0);
        assert_eq!(upright.y1 - upright.y0, 10.0);

        let rotated = Rect::around_text(extent, 90.0);
        assert!(((rotated.x1 - rotated.x0) - 10.0).abs() < 1e-9);
        assert!(((rotated.y1 - rotated.y0) - 40.0).abs() < 1e-9);
        // descent ends up on the left after a clockwise quarter turn
        assert!((rotated.x0 + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_edges_touching_do_not_intersect() {
        let a = Rect { x0: 0.0, y0: 0.0, x1: 10.0, y1: 10.0 };
        let b = a.translate(10.0, 0.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&a.translate(9.5, 9.5)));
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let placed = CloudLayout::new(500.0, 400.0).place(&[], &HeuristicMeasure::default(), &mut rng);
        assert!(placed.is_empty());
    }

    #[test]
    fn test_zero_canvas_places_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let placed =
            CloudLayout::new(0.0, 300.0).place(&words(3, 14.0), &HeuristicMeasure::default(), &mut rng);
        assert!(placed.is_empty());
    }

    #[test]
    fn test_placed_words_inside_canvas_and_disjoint() {
        let mut rng = StdRng::seed_from_u64(42);
        let layout = CloudLayout::new(600.0, 400.0)
            .padding(6.0)
            .spiral(Spiral::Rectangular)
            .rotation(Rotation::Sometimes {
                angle: 90.0,
                probability: 0.3,
            });
        let input = words(40, 18.0);
        let placed = layout.place(&input, &HeuristicMeasure::default(), &mut rng);

        assert!(!placed.is_empty());
        assert!(placed.len() <= input.len());
        let boxes: Vec<Rect> = placed.iter().map(|p| footprint(p, &layout, 6.0)).collect();
        for (i, a) in boxes.iter().enumerate() {
            assert!(a.within(600.0, 400.0), "box {i} escapes the canvas: {a:?}");
            for b in boxes.iter().skip(i + 1) {
                assert!(!a.intersects(b), "overlap between {a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn test_overflow_words_are_dropped() {
        let mut rng = StdRng::seed_from_u64(9);
        let layout = CloudLayout::new(120.0, 60.0).padding(4.0);
        let placed = layout.place(&words(30, 20.0), &HeuristicMeasure::default(), &mut rng);
        assert!(placed.len() < 30);
    }

    #[test]
    fn test_word_larger_than_canvas_is_dropped() {
        let mut rng = StdRng::seed_from_u64(9);
        let input = vec![WordRecord::new("extraordinarily", "long", 80.0)];
        let placed = CloudLayout::new(100.0, 100.0).place(&input, &HeuristicMeasure::default(), &mut rng);
        assert!(placed.is_empty());
    }

    #[test]
    fn test_word_wider_than_tall_canvas_skips_search() {
        let mut rng = StdRng::seed_from_u64(9);
        let input = vec![WordRecord::new("situationship", "no labels", 18.0)];
        let layout = CloudLayout::new(20.0, 2000.0).spiral(Spiral::Rectangular);
        let started = std::time::Instant::now();
        let placed = layout.place(&input, &HeuristicMeasure::default(), &mut rng);
        assert!(placed.is_empty());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_fits_inside_compares_size_only() {
        let r = Rect { x0: 500.0, y0: 500.0, x1: 540.0, y1: 510.0 };
        assert!(r.fits_inside(40.0, 10.0));
        assert!(!r.fits_inside(39.0, 10.0));
        assert!(!r.within(40.0, 10.0));
    }

    #[test]
    fn test_largest_words_placed_first() {
        let mut rng = StdRng::seed_from_u64(5);
        let input = vec![
            WordRecord::new("small", "", 12.0),
            WordRecord::new("large", "", 30.0),
            WordRecord::new("medium", "", 20.0),
        ];
        let placed =
            CloudLayout::new(800.0, 600.0).place(&input, &HeuristicMeasure::default(), &mut rng);
        let order: Vec<&str> = placed.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(order, vec!["large", "medium", "small"]);
    }

    #[test]
    fn test_fixed_rotation_applied() {
        let mut rng = StdRng::seed_from_u64(5);
        let placed = CloudLayout::new(800.0, 600.0)
            .rotation(Rotation::Fixed(0.0))
            .place(&words(10, 14.0), &HeuristicMeasure::default(), &mut rng);
        assert!(placed.iter().all(|p| p.rotate == 0.0));
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let layout = CloudLayout::new(500.0, 300.0).spiral(Spiral::Rectangular);
        let input = words(15, 16.0);
        let first = layout.place(&input, &HeuristicMeasure::default(), &mut StdRng::seed_from_u64(11));
        let second = layout.place(&input, &HeuristicMeasure::default(), &mut StdRng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
