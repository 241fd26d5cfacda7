//! Responsive font scaling

use crate::viewport::{DeviceClass, ViewDimensions};

const REFERENCE_WIDTH: f64 = 800.0;
const REFERENCE_HEIGHT: f64 = 500.0;
const MIN_SCALE: f64 = 0.5;

/// Smallest font size rendered on mobile
pub const MOBILE_MIN_FONT_SIZE: f64 = 12.0;

/// Smallest font size rendered on desktop
pub const DESKTOP_MIN_FONT_SIZE: f64 = 14.0;

/// Scales a base font size to the current cloud dimensions.
///
/// The scale factor is the tighter of the two axes relative to an 800x500
/// reference, never below 0.5. The result never drops below the device
/// minimum.
///
/// # Example
///
/// ```
/// use wordcloud_core::font::dynamic_font_size;
/// use wordcloud_core::viewport::{DeviceClass, ViewDimensions};
///
/// let dims = ViewDimensions { width: 400.0, height: 500.0 };
/// assert_eq!(dynamic_font_size(40.0, dims, DeviceClass::Desktop), 20.0);
/// assert_eq!(dynamic_font_size(10.0, dims, DeviceClass::Desktop), 14.0);
/// ```
#[must_use]
pub fn dynamic_font_size(base: f64, dims: ViewDimensions, device: DeviceClass) -> f64 {
    let scale_factor = (dims.width / REFERENCE_WIDTH).min(dims.height / REFERENCE_HEIGHT);
    // f64::max discards NaN, so degenerate dimensions land on the floors
    let adjusted = scale_factor.max(MIN_SCALE);

    let floor = match device {
        DeviceClass::Mobile => MOBILE_MIN_FONT_SIZE,
        DeviceClass::Desktop => DESKTOP_MIN_FONT_SIZE,
    };
    (base * adjusted).max(floor)
}
