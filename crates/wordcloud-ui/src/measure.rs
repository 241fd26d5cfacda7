//! Text measurement backed by an offscreen canvas

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wordcloud_core::layout::{HeuristicMeasure, TextExtent, TextMeasure};

use crate::error::{Result, UiError};

/// Measures with `CanvasRenderingContext2d::measureText` in the cloud's font
pub struct CanvasMeasure {
    context: CanvasRenderingContext2d,
    font_family: String,
    font_weight: u16,
    fallback: HeuristicMeasure,
}

impl CanvasMeasure {
    /// Creates a detached canvas for measuring
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing or the browser refuses a
    /// 2D context.
    pub fn new(font_family: impl Into<String>, font_weight: u16) -> Result<Self> {
        let document = web_sys::window()
            .ok_or(UiError::WindowUnavailable)?
            .document()
            .ok_or(UiError::DocumentUnavailable)?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| UiError::canvas(format!("Failed to create canvas: {e:?}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| UiError::canvas("Created element is not a canvas"))?;

        let context = canvas
            .get_context("2d")
            .map_err(|e| UiError::canvas(format!("Failed to get canvas context: {e:?}")))?
            .ok_or_else(|| UiError::canvas("Canvas context creation returned None"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| UiError::canvas("Failed to cast context to CanvasRenderingContext2d"))?;

        Ok(Self {
            context,
            font_family: font_family.into(),
            font_weight,
            fallback: HeuristicMeasure::default(),
        })
    }
}

impl TextMeasure for CanvasMeasure {
    fn measure(&self, text: &str, font_size: f64) -> TextExtent {
        self.context
            .set_font(&css_font(self.font_weight, font_size, &self.font_family));
        match self.context.measure_text(text) {
            Ok(metrics) => TextExtent {
                width: metrics.width(),
                ascent: metrics.actual_bounding_box_ascent().max(0.0),
                descent: metrics.actual_bounding_box_descent().max(0.0),
            },
            Err(_) => self.fallback.measure(text, font_size),
        }
    }
}

/// Canvas measurement when available, the heuristic otherwise
pub enum BrowserMeasure {
    Canvas(CanvasMeasure),
    Heuristic(HeuristicMeasure),
}

impl BrowserMeasure {
    pub fn detect(font_family: &str, font_weight: u16) -> Self {
        match CanvasMeasure::new(font_family, font_weight) {
            Ok(canvas) => Self::Canvas(canvas),
            Err(e) => {
                tracing::warn!(error = %e, "Canvas measurement unavailable, using estimates");
                Self::Heuristic(HeuristicMeasure::default())
            }
        }
    }
}

impl TextMeasure for BrowserMeasure {
    fn measure(&self, text: &str, font_size: f64) -> TextExtent {
        match self {
            Self::Canvas(canvas) => canvas.measure(text, font_size),
            Self::Heuristic(heuristic) => heuristic.measure(text, font_size),
        }
    }
}

/// CSS `font` shorthand for the canvas context
fn css_font(weight: u16, size: f64, family: &str) -> String {
    format!("{weight} {size}px {family}")
}
