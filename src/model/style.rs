//! Run styling - colors, per-run style records and resolved font descriptors
//!
//! Styles are plain value records. Runs share them through `Rc<Style>` and
//! modify them copy-on-write (`Rc::make_mut`), so a run that inherits a
//! neighbour's style can never mutate the neighbour by accident.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RGB", "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{}: {}", s, e))
        };
        let short = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 1], 16)
                .map(|v| v * 17)
                .map_err(|e| format!("{}: {}", s, e))
        };

        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }

        match hex.len() {
            3 => Ok(Color::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Style attributes of a single run.
///
/// Unset optional fields resolve against the editor's text defaults at
/// measurement time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Font family name
    #[serde(alias = "fontfamily", skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
    #[serde(alias = "linethrough", skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,
    /// Foreground color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Background fill behind the glyph box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Line-height multiplier override for this run
    #[serde(alias = "lineheight", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl Style {
    /// Resolve the font descriptor for this style against the given defaults.
    pub fn font(&self, default_size: f32, default_family: &str) -> FontDescriptor {
        FontDescriptor {
            italic: self.italic,
            bold: self.bold,
            size: self.size.unwrap_or(default_size),
            family: self
                .family
                .clone()
                .unwrap_or_else(|| default_family.to_string()),
        }
    }
}

/// A fully resolved font description, as handed to the text measurer
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub italic: bool,
    pub bold: bool,
    pub size: f32,
    pub family: String,
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            f.write_str("italic ")?;
        }
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}
