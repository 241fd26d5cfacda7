//! Responsive canvas dimensions derived from the browser viewport
//!
//! Pure functions only: given the same viewport they always produce the same
//! dimensions. The mobile breakpoint, paddings, and height bounds follow the
//! stylesheet's single-column layout.

use serde::{Deserialize, Serialize};

/// Viewports at or below this width are laid out for mobile.
pub const MOBILE_BREAKPOINT: f64 = 480.0;

/// Widest the cloud ever gets, regardless of viewport.
pub const MAX_CLOUD_WIDTH: f64 = 800.0;

const MOBILE_PADDING: f64 = 20.0;
const DESKTOP_PADDING: f64 = 64.0;
const MOBILE_HEIGHT_RESERVE: f64 = 200.0;
const MOBILE_CHROME_HEIGHT: f64 = 150.0;
const DESKTOP_MIN_HEIGHT: f64 = 300.0;
const DESKTOP_MAX_HEIGHT: f64 = 500.0;
const DESKTOP_CHROME_HEIGHT: f64 = 250.0;

/// Browser inner window size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, mapping non-finite or negative sizes to zero
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Device class implied by this viewport's width
    #[must_use]
    pub fn device(&self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Coarse device class driving every responsive rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport width (inclusive breakpoint)
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Width and height of the cloud's SVG container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewDimensions {
    pub width: f64,
    pub height: f64,
}

/// Computes the cloud container size for a viewport.
///
/// Width is the viewport minus horizontal padding on both sides, capped at
/// [`MAX_CLOUD_WIDTH`] and never negative. Height is floored at a device
/// minimum and otherwise limited by the space left under the page chrome.
///
/// # Example
///
/// ```
/// use wordcloud_core::viewport::{cloud_dimensions, Viewport};
///
/// let dims = cloud_dimensions(Viewport::new(1920.0, 1080.0));
/// assert_eq!(dims.width, 800.0);
/// assert_eq!(dims.height, 500.0);
/// ```
#[must_use]
pub fn cloud_dimensions(viewport: Viewport) -> ViewDimensions {
    let device = viewport.device();

    let padding = match device {
        DeviceClass::Mobile => MOBILE_PADDING,
        DeviceClass::Desktop => DESKTOP_PADDING,
    };
    let width = (viewport.width - padding * 2.0).min(MAX_CLOUD_WIDTH).max(0.0);

    let min_height = minimum_height(viewport);
    let max_height = match device {
        DeviceClass::Mobile => viewport.height - MOBILE_CHROME_HEIGHT,
        DeviceClass::Desktop => DESKTOP_MAX_HEIGHT.min(viewport.height - DESKTOP_CHROME_HEIGHT),
    };
    let height = min_height.max(max_height).max(0.0);

    ViewDimensions { width, height }
}

/// Height floor for a viewport: most of the screen on mobile, fixed on desktop
#[must_use]
pub fn minimum_height(viewport: Viewport) -> f64 {
    match viewport.device() {
        DeviceClass::Mobile => viewport.height - MOBILE_HEIGHT_RESERVE,
        DeviceClass::Desktop => DESKTOP_MIN_HEIGHT,
    }
}

/// Area handed to the packer; a margin keeps rotated words off the edges
#[must_use]
pub fn layout_canvas(dims: ViewDimensions, device: DeviceClass) -> ViewDimensions {
    let (x_ratio, y_ratio) = match device {
        DeviceClass::Mobile => (0.95, 0.95),
        DeviceClass::Desktop => (0.85, 0.9),
    };
    ViewDimensions {
        width: dims.width * x_ratio,
        height: dims.height * y_ratio,
    }
}

/// Translation of the word group inside the SVG.
///
/// Desktop shifts the cloud slightly left of center to balance the tooltip.
#[must_use]
pub fn group_center(dims: ViewDimensions, device: DeviceClass) -> (f64, f64) {
    let x = match device {
        DeviceClass::Mobile => dims.width * 0.5,
        DeviceClass::Desktop => dims.width * 0.45,
    };
    (x, dims.height / 2.0)
}
