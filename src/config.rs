//! Editor configuration persistence
//!
//! Page geometry, text defaults and cursor settings, stored in
//! `~/.config/quire/config.yaml`. Every field has a default, so a partial
//! file (or no file at all) is always valid.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::style::Color;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub page: PageConfig,
    pub indicator: IndicatorConfig,
    pub text: TextDefaults,
    pub cursor: CursorConfig,
    pub fonts: FontConfig,
}

/// Page size, padding and the vertical gap between stacked pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub padding: Padding,
    pub gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        // A4 at 96 dpi
        Self {
            width: 794.0,
            height: 1123.0,
            padding: Padding::default(),
            gap: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 100.0,
            right: 120.0,
            bottom: 100.0,
            left: 120.0,
        }
    }
}

/// Corner marks showing where the content area starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub size: f32,
    pub color: Color,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            size: 35.0,
            color: Color::rgb(0xBA, 0xBA, 0xBA),
        }
    }
}

/// Style values used when a run leaves them unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub color: Color,
    pub font_size: f32,
    pub font_family: String,
    /// Line box height as a multiple of glyph height
    pub line_height: f32,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x33, 0x33, 0x33),
            font_size: 16.0,
            font_family: "sans-serif".to_string(),
            line_height: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Cursor bar height as a multiple of the run's font size
    pub height_ratio: f32,
    pub width: f32,
    pub color: Color,
    pub blink_interval_ms: u64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            height_ratio: 1.5,
            width: 1.0,
            color: Color::BLACK,
            blink_interval_ms: 600,
        }
    }
}

/// Font files for the rasterizing backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Fallback face; system fonts are searched when unset
    pub default: Option<PathBuf>,
    /// Family name to font file
    pub families: BTreeMap<String, PathBuf>,
}

impl EditorConfig {
    /// Width available to rows between left and right padding
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.page.width - self.page.padding.left - self.page.padding.right
    }

    /// Height available to rows between top and bottom padding
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.page.height - self.page.padding.top - self.page.padding.bottom
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        if config.content_width() <= 0.0 || config.content_height() <= 0.0 {
            tracing::warn!(
                "Padding leaves no content area in {} ({}x{})",
                path.display(),
                config.content_width(),
                config.content_height()
            );
        }
        Ok(config)
    }

    /// Save config to an explicit file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }
}
