//! Configuration file support for selectfield.
//!
//! Configuration is loaded from `~/.config/selectfield/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/selectfield/config.toml
//! style = "dropdown"
//! done_text = "OK"
//! animation_type = "fade"
//! animation_ms = 250
//! arrow_timing = "immediate"
//! hide_icon = false
//!
//! # An empty table hides the placeholder entry
//! [placeholder]
//! label = "Pick a fruit..."
//! value = ""
//!
//! [[items]]
//! label = "Apple"
//! value = "apple"
//! color = "#FF4136"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::select::{
    AnimationConfig, AnimationType, ArrowTiming, Item, ModalConfig, Placeholder,
    SelectPropsBuilder,
};
use crate::tui::presenter::PresentationStyle;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Which list surface to open
    pub style: Option<PresentationStyle>,

    /// Label of the done button on the sheet
    pub done_text: Option<String>,

    /// Animation used by animated toggles
    pub animation_type: Option<AnimationType>,

    /// Duration of the label animation in milliseconds
    pub animation_ms: Option<u64>,

    /// When the arrow hooks fire
    pub arrow_timing: Option<ArrowTiming>,

    /// Placeholder entry; an empty table hides it
    pub placeholder: Placeholder,

    pub placeholder_text_color: Option<String>,

    pub hide_icon: bool,

    pub hide_done_bar: bool,

    /// Start with the field disabled
    pub disabled: bool,

    /// Items offered by the demo; a built-in list is used when empty
    pub items: Vec<Item>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("selectfield")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        style: Option<PresentationStyle>,
        items: Option<Vec<Item>>,
        disabled: bool,
    ) -> Self {
        if style.is_some() {
            self.style = style;
        }
        if let Some(items) = items {
            self.items = items;
        }
        if disabled {
            self.disabled = true;
        }
        self
    }

    /// Read an item list from a JSON file.
    pub fn items_from_file(path: &Path) -> Result<Vec<Item>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Get the presentation style.
    pub fn style(&self) -> PresentationStyle {
        self.style.unwrap_or_default()
    }

    /// Label animation timing, keeping the default easings.
    pub fn animation(&self) -> AnimationConfig {
        let mut animation = AnimationConfig::default();
        if let Some(ms) = self.animation_ms {
            animation.duration = Duration::from_millis(ms);
        }
        animation
    }

    /// Copy the configured presentation knobs onto a props builder.
    pub fn apply(&self, builder: SelectPropsBuilder) -> SelectPropsBuilder {
        let mut builder = builder
            .placeholder(self.placeholder.clone())
            .hide_icon(self.hide_icon)
            .hide_done_bar(self.hide_done_bar)
            .disabled(self.disabled)
            .modal(ModalConfig {
                animation_type: self.animation_type,
            })
            .animation(self.animation());

        if let Some(text) = &self.done_text {
            builder = builder.done_text(text.clone());
        }
        if let Some(color) = &self.placeholder_text_color {
            builder = builder.placeholder_text_color(color.clone());
        }
        if let Some(timing) = self.arrow_timing {
            builder = builder.arrow_timing(timing);
        }
        builder
    }
}
