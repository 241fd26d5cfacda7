//! View components

pub mod cloud;
pub mod tabs;
pub mod tooltip;

pub use cloud::WordCloud;
pub use tabs::Tabs;
pub use tooltip::Tooltip;
