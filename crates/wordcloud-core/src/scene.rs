//! Render model for one pass of the cloud
//!
//! A [`Scene`] is everything the SVG view needs: container size, group
//! translation, and one styled, animated text element per placed word.
//! Building a new scene replaces the previous one entirely.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::config::CloudConfig;
use crate::invoker::LayoutPlan;
use crate::record::{DatasetKind, PlacedWord};
use crate::viewport::group_center;

/// Fill used if the palette is somehow empty
const FALLBACK_FILL: &str = "#4B5945";

/// One text element of the cloud
#[derive(Debug, Clone, PartialEq)]
pub struct WordElement {
    pub text: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub font_size: f64,
    pub fill: String,
    /// Entrance delay in placement order
    pub delay_ms: u32,
}

impl WordElement {
    /// SVG `transform` attribute placing the element's anchor
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate({}, {}) rotate({})", self.x, self.y, self.rotate)
    }

    #[must_use]
    pub fn font_size_css(&self) -> String {
        format!("{}px", self.font_size)
    }
}

/// A fully laid out cloud ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Render generation that produced this scene
    pub generation: u64,
    pub kind: DatasetKind,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub font_family: String,
    pub font_weight: u16,
    pub duration_ms: u32,
    pub elements: Vec<WordElement>,
}

impl Scene {
    /// Styles placed words for display.
    ///
    /// Colors are drawn uniformly from the palette; entrance delays follow
    /// placement order, not screen position.
    pub fn build<R: Rng + ?Sized>(
        placed: Vec<PlacedWord>,
        plan: &LayoutPlan,
        config: &CloudConfig,
        generation: u64,
        rng: &mut R,
    ) -> Self {
        let (center_x, center_y) = group_center(plan.dimensions, plan.device);
        let elements: Vec<WordElement> = placed
            .into_iter()
            .enumerate()
            .map(|(index, word)| WordElement {
                fill: config
                    .palette
                    .choose(rng)
                    .map_or_else(|| FALLBACK_FILL.to_string(), Clone::clone),
                delay_ms: config.animation.delay_for(index),
                text: word.text,
                description: word.description,
                x: word.x,
                y: word.y,
                rotate: word.rotate,
                font_size: word.size,
            })
            .collect();

        info!(
            generation,
            dataset = %plan.kind,
            elements = elements.len(),
            "Total elements rendered"
        );

        Self {
            generation,
            kind: plan.kind,
            width: plan.dimensions.width,
            height: plan.dimensions.height,
            center_x,
            center_y,
            font_family: config.font_family.clone(),
            font_weight: config.font_weight,
            duration_ms: config.animation.duration_ms,
            elements,
        }
    }

    /// SVG `transform` of the group holding every word
    #[must_use]
    pub fn group_transform(&self) -> String {
        format!("translate({},{})", self.center_x, self.center_y)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&WordElement> {
        self.elements.get(index)
    }
}
