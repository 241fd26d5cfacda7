//! Spiral search paths for candidate word positions
//!
//! Both spirals are scaled by the canvas aspect ratio so the search fills
//! wide canvases horizontally before it runs off the top and bottom.

use serde::{Deserialize, Serialize};

/// Shape of the search path around a word's start position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spiral {
    /// Smooth spiral, denser clouds with rounder outlines
    #[default]
    Archimedean,
    /// Square rings, boxier clouds
    Rectangular,
}

const RECTANGULAR_STEP: f64 = 4.0;
const ARCHIMEDEAN_STEP: f64 = 0.1;

/// Stateful walk along a spiral.
///
/// `step` must be called with consecutive `t` values (all positive or all
/// negative); the rectangular walk accumulates its position.
#[derive(Debug, Clone, PartialEq)]
pub enum SpiralPath {
    Archimedean {
        eccentricity: f64,
    },
    Rectangular {
        dx: f64,
        dy: f64,
        x: f64,
        y: f64,
    },
}

impl Spiral {
    /// Starts a fresh walk for a `width` x `height` canvas.
    ///
    /// Callers guarantee both dimensions are positive.
    #[must_use]
    pub fn path(self, width: f64, height: f64) -> SpiralPath {
        match self {
            Self::Archimedean => SpiralPath::Archimedean {
                eccentricity: width / height,
            },
            Self::Rectangular => SpiralPath::Rectangular {
                dx: RECTANGULAR_STEP * width / height,
                dy: RECTANGULAR_STEP,
                x: 0.0,
                y: 0.0,
            },
        }
    }
}

impl SpiralPath {
    /// Offset from the start position at step `t`
    pub fn step(&mut self, t: i64) -> (f64, f64) {
        match self {
            Self::Archimedean { eccentricity } => {
                #[allow(clippy::cast_precision_loss)]
                let t = t as f64 * ARCHIMEDEAN_STEP;
                (*eccentricity * t * t.cos(), t * t.sin())
            }
            Self::Rectangular { dx, dy, x, y } => {
                let sign: i64 = if t < 0 { -1 } else { 1 };
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                let side = {
                    let ring = (1.0 + 4.0 * (sign.saturating_mul(t)) as f64).sqrt() - sign as f64;
                    (ring as i64) & 3
                };
                match side {
                    0 => *x += *dx,
                    1 => *y += *dy,
                    2 => *x -= *dx,
                    _ => *y -= *dy,
                }
                (*x, *y)
            }
        }
    }
}
