//! Timeline event markers spaced left to right so their icons never overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::{CoordinateMapper, PlotBounds, ScreenRect};
use crate::error::{OverlayError, OverlayResult};
use crate::render::{Color, DrawNode, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign};

pub const MARKER_GROUP_PREFIX: &str = "marker-";
pub const EVENT_MARKER_OVERLAY_GROUP: &str = "event-markers";

/// One annotated event on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    /// Selection identity; encoded into the marker group name.
    pub id: String,
    /// Category label of the event on the axis.
    pub key: String,
    /// Data-space x coordinate.
    pub x: f64,
}

impl EventMarker {
    #[must_use]
    pub fn new(id: impl Into<String>, key: impl Into<String>, x: f64) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            x,
        }
    }

    /// Marker at a wall-clock time; the key uses the `YYYY-MM-DD HH:MM` form
    /// the time-axis labels are derived from.
    #[must_use]
    pub fn at_time(id: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self::new(
            id,
            time.format("%Y-%m-%d %H:%M").to_string(),
            datetime_to_unix_seconds(time),
        )
    }
}

/// Running state of one left-to-right placement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacementState {
    pub last_x: f64,
    pub last_index: Option<usize>,
}

impl MarkerPlacementState {
    /// Places the marker at `index`, pushing it right when it would overlap the
    /// previously placed one. Returns the next state and the final x.
    ///
    /// Only forward moves (`index > last_index`) are spaced; callers must feed
    /// indices in increasing order.
    #[must_use]
    pub fn advance(self, index: usize, screen_x: f64, min_spacing: f64) -> (Self, f64) {
        let moving_forward = self.last_index.is_some_and(|last| index > last);
        let x = if moving_forward && self.last_x + min_spacing > screen_x {
            self.last_x + min_spacing
        } else {
            screen_x
        };
        (
            Self {
                last_x: x,
                last_index: Some(index),
            },
            x,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEventMarker {
    pub id: String,
    pub key: String,
    pub index: usize,
    /// Mapped x before collision spacing.
    pub raw_x: f64,
    pub x: f64,
}

impl PlacedEventMarker {
    #[must_use]
    pub fn group_name(&self) -> String {
        format!("{MARKER_GROUP_PREFIX}{}", self.id)
    }

    /// Screen area covered by the marker group: icon plus highlight column.
    #[must_use]
    pub fn hit_rect(&self, bounds: PlotBounds, icon_size_px: f64) -> ScreenRect {
        ScreenRect::new(self.x, bounds.y, icon_size_px, bounds.height.max(icon_size_px))
    }
}

/// Places markers in slice order.
pub fn place_event_markers(
    markers: &[EventMarker],
    mapper: &impl CoordinateMapper,
    min_spacing: f64,
) -> OverlayResult<Vec<PlacedEventMarker>> {
    place_indexed_markers(markers.iter().enumerate(), mapper, min_spacing)
}

/// Places markers carrying their own data indices, such as the visible subset
/// of a zoomed series. Indices must increase along the iterator.
pub fn place_indexed_markers<'a>(
    markers: impl IntoIterator<Item = (usize, &'a EventMarker)>,
    mapper: &impl CoordinateMapper,
    min_spacing: f64,
) -> OverlayResult<Vec<PlacedEventMarker>> {
    if !min_spacing.is_finite() || min_spacing < 0.0 {
        return Err(OverlayError::InvalidData(
            "marker min spacing must be finite and >= 0".to_owned(),
        ));
    }

    let (_, placed) = markers.into_iter().try_fold(
        (MarkerPlacementState::default(), Vec::new()),
        |(state, mut placed), (index, marker)| {
            let raw_x = mapper.to_screen_x(marker.x);
            if !raw_x.is_finite() {
                warn!(id = %marker.id, "event marker mapped to non-finite x");
                return Err(OverlayError::InvalidData(format!(
                    "marker `{}` must map to a finite x",
                    marker.id
                )));
            }
            let (state, x) = state.advance(index, raw_x, min_spacing);
            if x != raw_x {
                trace!(id = %marker.id, raw_x, x, "event marker pushed right");
            }
            placed.push(PlacedEventMarker {
                id: marker.id.clone(),
                key: marker.key.clone(),
                index,
                raw_x,
                x,
            });
            Ok((state, placed))
        },
    )?;

    Ok(placed)
}

/// Fill and opacity of one marker part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPaint {
    pub fill: Color,
    pub opacity: f64,
}

impl MarkerPaint {
    #[must_use]
    pub const fn new(fill: Color, opacity: f64) -> Self {
        Self { fill, opacity }
    }
}

/// Paint for one marker state (normal or active).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPalette {
    pub icon: MarkerPaint,
    pub index_text: Color,
    pub column: MarkerPaint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventMarkerStyle {
    #[serde(default = "default_min_spacing_px")]
    pub min_spacing_px: f64,
    #[serde(default = "default_icon_size_px")]
    pub icon_size_px: f64,
    #[serde(default = "default_index_font_size_px")]
    pub index_font_size_px: f64,
    #[serde(default = "default_normal_palette")]
    pub normal: MarkerPalette,
    /// Used for the selected marker and for hover emphasis.
    #[serde(default = "default_active_palette")]
    pub active: MarkerPalette,
}

impl Default for EventMarkerStyle {
    fn default() -> Self {
        Self {
            min_spacing_px: default_min_spacing_px(),
            icon_size_px: default_icon_size_px(),
            index_font_size_px: default_index_font_size_px(),
            normal: default_normal_palette(),
            active: default_active_palette(),
        }
    }
}

impl EventMarkerStyle {
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        let style: Self = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to parse event marker style json: {e}"))
        })?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.min_spacing_px.is_finite() || self.min_spacing_px < 0.0 {
            return Err(OverlayError::InvalidConfig(
                "marker `min_spacing_px` must be finite and >= 0".to_owned(),
            ));
        }
        for (value, name) in [
            (self.icon_size_px, "icon_size_px"),
            (self.index_font_size_px, "index_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "marker `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn palette(&self, active: bool) -> &MarkerPalette {
        if active { &self.active } else { &self.normal }
    }
}

fn default_min_spacing_px() -> f64 {
    16.0
}

fn default_icon_size_px() -> f64 {
    16.0
}

fn default_index_font_size_px() -> f64 {
    12.0
}

fn default_normal_palette() -> MarkerPalette {
    MarkerPalette {
        // #8a8a8a
        icon: MarkerPaint::new(Color::rgb(138.0 / 255.0, 138.0 / 255.0, 138.0 / 255.0), 0.2),
        // #434343
        index_text: Color::rgb(67.0 / 255.0, 67.0 / 255.0, 67.0 / 255.0),
        // #b5b5b5
        column: MarkerPaint::new(Color::rgb(181.0 / 255.0, 181.0 / 255.0, 181.0 / 255.0), 0.05),
    }
}

fn default_active_palette() -> MarkerPalette {
    // #1d59f2
    let accent = Color::rgb(29.0 / 255.0, 89.0 / 255.0, 242.0 / 255.0);
    MarkerPalette {
        icon: MarkerPaint::new(accent, 0.8),
        index_text: Color::WHITE,
        column: MarkerPaint::new(accent, 0.1),
    }
}

/// Externally owned highlight state read while painting markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerHighlight<'a> {
    pub selected_id: Option<&'a str>,
    pub hovered_id: Option<&'a str>,
}

impl MarkerHighlight<'_> {
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id == Some(id)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.is_selected(id) || self.hovered_id == Some(id)
    }
}

/// Builds one named group per placed marker: icon, 1-based index label and a
/// full-height highlight column.
pub fn build_event_marker_overlay(
    placed: &[PlacedEventMarker],
    bounds: PlotBounds,
    highlight: MarkerHighlight<'_>,
    style: &EventMarkerStyle,
) -> OverlayResult<DrawNode> {
    bounds.validate()?;
    style.validate()?;
    let size = style.icon_size_px;

    let groups = placed
        .iter()
        .map(|marker| {
            let palette = style.palette(highlight.is_active(&marker.id));
            let icon = RectPrimitive::new(
                ScreenRect::new(marker.x, bounds.y, size, size),
                palette.icon.fill,
                palette.icon.opacity,
            );
            let index = TextPrimitive::new(
                (marker.index + 1).to_string(),
                marker.x + size * 0.5,
                bounds.y + size * 0.5,
                style.index_font_size_px,
                palette.index_text,
            )
            .with_align(TextHAlign::Center, TextVAlign::Middle);
            let column = RectPrimitive::new(
                ScreenRect::new(marker.x, bounds.y, size, bounds.height),
                palette.column.fill,
                palette.column.opacity,
            );
            DrawNode::named_group(
                marker.group_name(),
                vec![
                    DrawNode::Rect(icon),
                    DrawNode::Text(index),
                    DrawNode::Rect(column),
                ],
            )
        })
        .collect::<Vec<_>>();

    debug!(count = groups.len(), selected = ?highlight.selected_id, "event marker overlay");
    Ok(DrawNode::named_group(EVENT_MARKER_OVERLAY_GROUP, groups))
}
