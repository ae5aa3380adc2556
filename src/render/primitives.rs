use serde::{Deserialize, Serialize};

use crate::core::ScreenRect;
use crate::error::{OverlayError, OverlayResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// CSS `green`.
    pub const GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);
    /// CSS `red`.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// CSS `gray`.
    pub const GRAY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    /// CSS `yellow`.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> OverlayResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OverlayError::InvalidData(format!(
                "color `{input}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |offset: usize| -> OverlayResult<f64> {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|e| OverlayError::InvalidData(format!("color `{input}`: {e}")))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OverlayError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_opacity(value: f64, name: &str) -> OverlayResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(OverlayError::InvalidData(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

/// Filled rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub fill_opacity: f64,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(rect: ScreenRect, fill: Color, fill_opacity: f64) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill,
            fill_opacity,
        }
    }

    #[must_use]
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(OverlayError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(OverlayError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        validate_opacity(self.fill_opacity, "rect fill opacity")?;
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Box the renderer wraps text into; overflowing lines are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextWrap {
    pub width: f64,
    pub height: f64,
}

/// Label in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub color: Color,
    pub opacity: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub wrap: Option<TextWrap>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            line_height_px: font_size_px,
            color,
            opacity: 1.0,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Top,
            wrap: None,
        }
    }

    #[must_use]
    pub fn with_align(mut self, h_align: TextHAlign, v_align: TextVAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height_px: f64) -> Self {
        self.line_height_px = line_height_px;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Wrap box; negative sizes are floored at zero.
    #[must_use]
    pub fn with_wrap(mut self, width: f64, height: f64) -> Self {
        self.wrap = Some(TextWrap {
            width: width.max(0.0),
            height: height.max(0.0),
        });
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if self.text.is_empty() {
            return Err(OverlayError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(OverlayError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(OverlayError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_height_px.is_finite() || self.line_height_px <= 0.0 {
            return Err(OverlayError::InvalidData(
                "line height must be finite and > 0".to_owned(),
            ));
        }
        if let Some(wrap) = self.wrap {
            if !wrap.width.is_finite() || !wrap.height.is_finite() {
                return Err(OverlayError::InvalidData(
                    "text wrap box must be finite".to_owned(),
                ));
            }
        }
        validate_opacity(self.opacity, "text opacity")?;
        self.color.validate()
    }
}
