//! Core logic for the slang and emoji word cloud
//!
//! Everything here is target independent and deterministic given a random
//! number generator, so it is exercised natively by the test suite while the
//! `wordcloud-ui` crate supplies the browser glue.
//!
//! ## Module Structure
//! - `viewport`: responsive container dimensions
//! - `font`: responsive font scaling
//! - `record`: word records, placed words, dataset kinds
//! - `dataset`: CSV loading with all-or-nothing semantics
//! - `layout`: the spiral word packer
//! - `invoker`: per-render sizing and packer configuration
//! - `scene`: styled, animated render model
//! - `hover`: tooltip and highlight state
//! - `controller`: tabs, resizes, and render generations
//! - `config`: TOML configuration
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod font;
pub mod hover;
pub mod invoker;
pub mod layout;
pub mod record;
pub mod scene;
pub mod viewport;

pub use config::CloudConfig;
pub use controller::{CloudController, LayoutOutcome, RenderRequest, TabState};
pub use dataset::{Datasets, ResourceSource, load_datasets};
pub use error::{Error, Result};
pub use hover::{HoverState, Tooltip};
pub use invoker::LayoutPlan;
pub use record::{DatasetKind, PlacedWord, WordRecord};
pub use scene::{Scene, WordElement};
pub use viewport::{DeviceClass, ViewDimensions, Viewport};
