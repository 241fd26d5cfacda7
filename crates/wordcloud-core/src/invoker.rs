//! Layout invocation: per-render sizing and packer configuration
//!
//! Each render recomputes dimensions from the current viewport, overwrites
//! every record's size with a fresh draw from the dataset's range, and
//! packs the words with a rectangular spiral.

use std::ops::Range;

use rand::Rng;
use tracing::info;

use crate::layout::{CloudLayout, Rotation, Spiral, TextMeasure};
use crate::record::{DatasetKind, PlacedWord, WordRecord};
use crate::viewport::{DeviceClass, ViewDimensions, Viewport, cloud_dimensions, layout_canvas};

/// Probability that a slang word is drawn vertically
pub const SLANG_ROTATION_PROBABILITY: f64 = 0.3;

/// Angle used for vertical slang words
pub const SLANG_ROTATION_ANGLE: f64 = 90.0;

/// Font-size range drawn from on every render
#[must_use]
pub const fn size_range(kind: DatasetKind, device: DeviceClass) -> Range<f64> {
    match (kind, device) {
        (DatasetKind::Slang, _) => 12.0..24.0,
        (DatasetKind::Emoji, DeviceClass::Mobile) => 24.0..32.0,
        (DatasetKind::Emoji, DeviceClass::Desktop) => 32.0..42.0,
    }
}

/// Spacing kept around every word's box
#[must_use]
pub const fn word_padding(kind: DatasetKind, device: DeviceClass) -> f64 {
    match (kind, device) {
        (DatasetKind::Slang, DeviceClass::Mobile) => 4.0,
        (DatasetKind::Slang, DeviceClass::Desktop) => 6.0,
        (DatasetKind::Emoji, DeviceClass::Mobile) => 8.0,
        (DatasetKind::Emoji, DeviceClass::Desktop) => 10.0,
    }
}

/// Emoji always upright; slang occasionally vertical
#[must_use]
pub const fn rotation_rule(kind: DatasetKind) -> Rotation {
    match kind {
        DatasetKind::Slang => Rotation::Sometimes {
            angle: SLANG_ROTATION_ANGLE,
            probability: SLANG_ROTATION_PROBABILITY,
        },
        DatasetKind::Emoji => Rotation::Fixed(0.0),
    }
}

/// Everything a render needs to know about the current viewport and dataset
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub kind: DatasetKind,
    pub device: DeviceClass,
    /// SVG container size
    pub dimensions: ViewDimensions,
    /// Area handed to the packer
    pub canvas: ViewDimensions,
    pub sizes: Range<f64>,
    pub padding: f64,
    pub rotation: Rotation,
    pub spiral: Spiral,
}

impl LayoutPlan {
    #[must_use]
    pub fn new(kind: DatasetKind, viewport: Viewport) -> Self {
        let device = viewport.device();
        let dimensions = cloud_dimensions(viewport);
        Self {
            kind,
            device,
            dimensions,
            canvas: layout_canvas(dimensions, device),
            sizes: size_range(kind, device),
            padding: word_padding(kind, device),
            rotation: rotation_rule(kind),
            spiral: Spiral::Rectangular,
        }
    }

    /// Overwrites every record's size with a fresh uniform draw
    pub fn assign_sizes<R: Rng + ?Sized>(&self, records: &mut [WordRecord], rng: &mut R) {
        for record in records.iter_mut() {
            record.size = rng.gen_range(self.sizes.clone());
        }
    }

    #[must_use]
    pub fn packer(&self) -> CloudLayout {
        CloudLayout::new(self.canvas.width, self.canvas.height)
            .padding(self.padding)
            .rotation(self.rotation)
            .spiral(self.spiral)
    }

    /// Packs already-sized records; unplaceable words are dropped
    pub fn run<M, R>(&self, records: &[WordRecord], measure: &M, rng: &mut R) -> Vec<PlacedWord>
    where
        M: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        info!(dataset = %self.kind, total = records.len(), "Total words to render");
        let placed = self.packer().place(records, measure, rng);
        info!(dataset = %self.kind, placed = placed.len(), "Words successfully placed");
        placed
    }
}
