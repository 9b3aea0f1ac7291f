//! Edit box look, loadable from TOML.
//!
//! ```toml
//! background = "#f0f0f0"
//! text_color = "#202020"
//! border_width = 1.0
//! caret_width = 2.0
//!
//! [padding]
//! left = 6.0
//! right = 6.0
//! ```
//!
//! Every key is optional; missing keys keep their [`EditBoxStyle::default`]
//! value. Unknown keys are an error.

use std::fmt;

use egui::Color32;
use serde::Deserialize;

#[derive(Debug)]
pub enum StyleError {
    /// Not valid TOML, or keys/types that do not belong in a style.
    Parse(toml::de::Error),
    InvalidColor { key: &'static str, value: String },
    Negative { key: &'static str, value: f32 },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Parse(err) => write!(f, "invalid style: {err}"),
            StyleError::InvalidColor { key, value } => {
                write!(f, "invalid color for `{key}`: {value:?} (expected #rrggbb or #rrggbbaa)")
            }
            StyleError::Negative { key, value } => {
                write!(f, "`{key}` must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for StyleError {
    fn from(err: toml::de::Error) -> Self {
        StyleError::Parse(err)
    }
}

/// Space between the border and the text area, in points.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn same(v: f32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 4.0,
            top: 2.0,
            right: 4.0,
            bottom: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditBoxStyle {
    pub background: Color32,
    pub background_hover: Color32,
    pub border_color: Color32,
    pub border_color_focused: Color32,
    pub border_width: f32,
    pub padding: Padding,
    pub text_color: Color32,
    pub selected_text_color: Color32,
    pub selected_text_background: Color32,
    /// Color of the placeholder shown while the box is empty.
    pub default_text_color: Color32,
    pub caret_color: Color32,
    pub caret_width: f32,
}

impl Default for EditBoxStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(220, 220, 220),
            background_hover: Color32::from_rgb(235, 235, 235),
            border_color: Color32::from_rgb(120, 120, 120),
            border_color_focused: Color32::from_rgb(40, 110, 220),
            border_width: 1.0,
            padding: Padding::default(),
            text_color: Color32::from_rgb(20, 20, 20),
            selected_text_color: Color32::WHITE,
            selected_text_background: Color32::from_rgb(40, 110, 220),
            default_text_color: Color32::from_rgb(130, 130, 130),
            caret_color: Color32::from_rgb(20, 20, 20),
            caret_width: 1.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyle {
    background: Option<String>,
    background_hover: Option<String>,
    border_color: Option<String>,
    border_color_focused: Option<String>,
    border_width: Option<f32>,
    padding: Option<Padding>,
    text_color: Option<String>,
    selected_text_color: Option<String>,
    selected_text_background: Option<String>,
    default_text_color: Option<String>,
    caret_color: Option<String>,
    caret_width: Option<f32>,
}

impl EditBoxStyle {
    /// Parse a style, starting from the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        let raw: RawStyle = toml::from_str(source)?;
        let mut style = Self::default();

        let colors = [
            ("background", raw.background, &mut style.background),
            ("background_hover", raw.background_hover, &mut style.background_hover),
            ("border_color", raw.border_color, &mut style.border_color),
            (
                "border_color_focused",
                raw.border_color_focused,
                &mut style.border_color_focused,
            ),
            ("text_color", raw.text_color, &mut style.text_color),
            (
                "selected_text_color",
                raw.selected_text_color,
                &mut style.selected_text_color,
            ),
            (
                "selected_text_background",
                raw.selected_text_background,
                &mut style.selected_text_background,
            ),
            (
                "default_text_color",
                raw.default_text_color,
                &mut style.default_text_color,
            ),
            ("caret_color", raw.caret_color, &mut style.caret_color),
        ];
        for (key, value, slot) in colors {
            if let Some(value) = value {
                *slot = parse_color(&value).ok_or(StyleError::InvalidColor { key, value })?;
            }
        }

        if let Some(width) = raw.border_width {
            style.border_width = non_negative("border_width", width)?;
        }
        if let Some(width) = raw.caret_width {
            style.caret_width = non_negative("caret_width", width)?;
        }
        if let Some(padding) = raw.padding {
            non_negative("padding.left", padding.left)?;
            non_negative("padding.top", padding.top)?;
            non_negative("padding.right", padding.right)?;
            non_negative("padding.bottom", padding.bottom)?;
            style.padding = padding;
        }

        log::debug!(target: "widgets", "loaded edit box style: {style:?}");
        Ok(style)
    }
}

fn non_negative(key: &'static str, value: f32) -> Result<f32, StyleError> {
    if value < 0.0 || value.is_nan() {
        return Err(StyleError::Negative { key, value });
    }
    Ok(value)
}

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(value: &str) -> Option<Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}
