//! Cloud configuration loaded from TOML
//!
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```toml
//! palette = ["#4B5945", "#66785F", "#91AC8F"]
//! resize_debounce_ms = 100
//!
//! [resources]
//! slang = "assets/Gen Z Slang.csv"
//! emoji = "assets/Gen Z Emojis.csv"
//!
//! [animation]
//! duration_ms = 600
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::DatasetKind;

/// Where the two CSV datasets are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub slang: String,
    pub emoji: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            slang: "assets/Gen Z Slang.csv".to_string(),
            emoji: "assets/Gen Z Emojis.csv".to_string(),
        }
    }
}

impl ResourceConfig {
    #[must_use]
    pub fn path(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Slang => &self.slang,
            DatasetKind::Emoji => &self.emoji,
        }
    }
}

/// Staggered fade-in timing for rendered words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            base_delay_ms: 300,
            stagger_ms: 8,
        }
    }
}

impl AnimationConfig {
    /// Start delay of the element at `index` in placement order
    #[must_use]
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub resources: ResourceConfig,
    pub palette: Vec<String>,
    pub font_family: String,
    pub font_weight: u16,
    pub animation: AnimationConfig,
    /// Quiet period before a burst of resize events triggers a re-render
    pub resize_debounce_ms: u32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            resources: ResourceConfig::default(),
            palette: vec![
                "#4B5945".to_string(),
                "#66785F".to_string(),
                "#91AC8F".to_string(),
            ],
            font_family: "'Fredoka', sans-serif".to_string(),
            font_weight: 600,
            animation: AnimationConfig::default(),
            resize_debounce_ms: 100,
        }
    }
}

impl CloudConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the document is not valid TOML,
    /// a field has the wrong type, or validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] on an empty palette, empty resource
    /// path, or empty font family.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::invalid_config("palette must contain at least one color"));
        }
        if let Some(blank) = self.palette.iter().position(|c| c.trim().is_empty()) {
            return Err(Error::invalid_config(format!("palette entry {blank} is blank")));
        }
        for kind in DatasetKind::ALL {
            if self.resources.path(kind).trim().is_empty() {
                return Err(Error::invalid_config(format!("resource path for {kind} is empty")));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::invalid_config("font_family must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = CloudConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, CloudConfig::default());
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.resources.emoji, "assets/Gen Z Emojis.csv");
    }

    #[test]
    fn test_partial_override() {
        let config = CloudConfig::from_toml_str(
            r#"
            resize_debounce_ms = 0

            [resources]
            slang = "data/slang.csv"

            [animation]
            stagger_ms = 20
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.resources.slang, "data/slang.csv");
        assert_eq!(config.resources.emoji, "assets/Gen Z Emojis.csv");
        assert_eq!(config.animation.stagger_ms, 20);
        assert_eq!(config.animation.duration_ms, 600);
        assert_eq!(config.resize_debounce_ms, 0);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = CloudConfig::from_toml_str("palette = []");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = CloudConfig::from_toml_str("font_weight = \"bold\"");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_blank_resource_rejected() {
        let result = CloudConfig::from_toml_str("[resources]\nemoji = \"  \"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("emoji"));
    }

    #[test]
    fn test_stagger_delay() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.delay_for(0), 300);
        assert_eq!(animation.delay_for(10), 380);
        assert_eq!(animation.delay_for(usize::MAX), u32::MAX);
    }
}
