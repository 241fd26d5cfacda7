//! Leptos 0.7 CSR frontend for the Gen Z slang and emoji word cloud
//!
//! Layout and interaction state come from `wordcloud-core`; this crate wires
//! them to the DOM.
//!
//! ## Module Structure
//! - `app`: root component and render pipeline
//! - `components`: tabs, SVG cloud, tooltip
//! - `fetch`: CSV retrieval with `gloo-net`
//! - `measure`: canvas text measurement
//! - `resize`: window size and debounced resize listener
//! - `telemetry`: `tracing` output to the browser console
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod fetch;
pub mod measure;
pub mod resize;
pub mod telemetry;

pub use app::App;
