use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};
use crate::overlays::{EventMarkerStyle, QuadrantOverlayTheme};

/// Bootstrap configuration for [`super::OverlayEngine`].
///
/// Every section has defaults, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayEngineConfig {
    #[serde(default)]
    pub quadrant_theme: QuadrantOverlayTheme,
    #[serde(default)]
    pub marker_style: EventMarkerStyle,
    #[serde(default = "default_select_first_marker")]
    pub select_first_marker: bool,
}

impl Default for OverlayEngineConfig {
    fn default() -> Self {
        Self {
            quadrant_theme: QuadrantOverlayTheme::default(),
            marker_style: EventMarkerStyle::default(),
            select_first_marker: default_select_first_marker(),
        }
    }
}

fn default_select_first_marker() -> bool {
    true
}

impl OverlayEngineConfig {
    #[must_use]
    pub fn with_quadrant_theme(mut self, theme: QuadrantOverlayTheme) -> Self {
        self.quadrant_theme = theme;
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, style: EventMarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.quadrant_theme.validate()?;
        self.marker_style.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to parse overlay config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to serialize overlay config: {e}"))
        })
    }
}
