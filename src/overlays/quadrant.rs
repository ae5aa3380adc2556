//! Four-quadrant area overlay pivoted at a center point.
//!
//! The plot area is split at the (clamped) center into top-left, top-right,
//! bottom-left and bottom-right cells. A side whose edge the center reaches or
//! crosses is hidden; hidden cells are emitted as zero-area, zero-opacity
//! shapes so the tree keeps a stable layout of four groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{CoordinateMapper, PlotBounds, ScreenPoint, ScreenRect};
use crate::error::{OverlayError, OverlayResult};
use crate::overlays::CenterPoint;
use crate::render::{Color, DrawNode, RectPrimitive, TextPrimitive};

pub const QUADRANT_OVERLAY_GROUP: &str = "quadrant-overlay";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Paint order of the overlay groups.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantVisibility {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl QuadrantVisibility {
    #[must_use]
    pub fn all() -> Self {
        Self {
            top_left: true,
            top_right: true,
            bottom_left: true,
            bottom_right: true,
        }
    }

    #[must_use]
    pub fn is_visible(self, quadrant: Quadrant) -> bool {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomLeft => self.bottom_left,
            Quadrant::BottomRight => self.bottom_right,
        }
    }

    #[must_use]
    pub fn visible_quadrants(self) -> SmallVec<[Quadrant; 4]> {
        Quadrant::ALL
            .into_iter()
            .filter(|quadrant| self.is_visible(*quadrant))
            .collect()
    }
}

/// Per-quadrant fill and label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantStyle {
    pub fill: Color,
    #[serde(default)]
    pub title: Option<String>,
    pub text: String,
}

impl QuadrantStyle {
    #[must_use]
    pub fn new(fill: Color, title: Option<&str>, text: &str) -> Self {
        Self {
            fill,
            title: title.map(str::to_owned),
            text: text.to_owned(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match &self.title {
            Some(title) => format!("{title} {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Visual configuration of the quadrant overlay.
///
/// Serializable so hosts can ship it as JSON next to their chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantOverlayTheme {
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,
    #[serde(default = "default_label_inset_px")]
    pub label_inset_px: f64,
    #[serde(default = "default_label_min_width_px")]
    pub label_min_width_px: f64,
    #[serde(default = "default_label_min_height_px")]
    pub label_min_height_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_line_height_px")]
    pub label_line_height_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_styles")]
    pub styles: IndexMap<Quadrant, QuadrantStyle>,
}

impl Default for QuadrantOverlayTheme {
    fn default() -> Self {
        Self {
            fill_opacity: default_fill_opacity(),
            label_inset_px: default_label_inset_px(),
            label_min_width_px: default_label_min_width_px(),
            label_min_height_px: default_label_min_height_px(),
            label_font_size_px: default_label_font_size_px(),
            label_line_height_px: default_label_line_height_px(),
            label_color: default_label_color(),
            styles: default_styles(),
        }
    }
}

impl QuadrantOverlayTheme {
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        let theme: Self = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to parse quadrant theme json: {e}"))
        })?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to serialize quadrant theme: {e}"))
        })
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(OverlayError::InvalidConfig(
                "quadrant `fill_opacity` must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (value, name) in [
            (self.label_inset_px, "label_inset_px"),
            (self.label_min_width_px, "label_min_width_px"),
            (self.label_min_height_px, "label_min_height_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "quadrant `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [
            (self.label_font_size_px, "label_font_size_px"),
            (self.label_line_height_px, "label_line_height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "quadrant `{name}` must be finite and > 0"
                )));
            }
        }
        for quadrant in Quadrant::ALL {
            let style = self.styles.get(&quadrant).ok_or_else(|| {
                OverlayError::InvalidConfig(format!(
                    "quadrant theme is missing style for `{}`",
                    quadrant.as_str()
                ))
            })?;
            if style.text.is_empty() {
                return Err(OverlayError::InvalidConfig(format!(
                    "quadrant `{}` label text must not be empty",
                    quadrant.as_str()
                )));
            }
            style.fill.validate()?;
        }
        self.label_color.validate()
    }

    fn style(&self, quadrant: Quadrant) -> OverlayResult<&QuadrantStyle> {
        self.styles.get(&quadrant).ok_or_else(|| {
            OverlayError::InvalidConfig(format!(
                "quadrant theme is missing style for `{}`",
                quadrant.as_str()
            ))
        })
    }
}

fn default_fill_opacity() -> f64 {
    0.12
}

fn default_label_inset_px() -> f64 {
    16.0
}

fn default_label_min_width_px() -> f64 {
    64.0
}

fn default_label_min_height_px() -> f64 {
    80.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_label_line_height_px() -> f64 {
    20.0
}

fn default_label_color() -> Color {
    // #646b73
    Color::rgb(100.0 / 255.0, 107.0 / 255.0, 115.0 / 255.0)
}

fn default_styles() -> IndexMap<Quadrant, QuadrantStyle> {
    IndexMap::from([
        (
            Quadrant::TopLeft,
            QuadrantStyle::new(
                Color::GREEN,
                Some("Potential:"),
                "categories here trail on one axis but have room to grow",
            ),
        ),
        (
            Quadrant::TopRight,
            QuadrantStyle::new(
                Color::RED,
                Some("Best sellers:"),
                "categories here lead on both axes",
            ),
        ),
        (
            Quadrant::BottomLeft,
            QuadrantStyle::new(Color::GRAY, None, "Not recommended for this area"),
        ),
        (
            Quadrant::BottomRight,
            QuadrantStyle::new(
                Color::YELLOW,
                Some("Declining:"),
                "categories here are losing momentum",
            ),
        ),
    ])
}

/// One resolved quadrant cell in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantCell {
    pub quadrant: Quadrant,
    pub rect: ScreenRect,
    pub visible: bool,
    pub label_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantLayout {
    pub pivot: ScreenPoint,
    pub visibility: QuadrantVisibility,
    pub cells: [QuadrantCell; 4],
}

impl QuadrantLayout {
    #[must_use]
    pub fn cell(&self, quadrant: Quadrant) -> &QuadrantCell {
        // `cells` follows `Quadrant::ALL`.
        &self.cells[quadrant as usize]
    }
}

/// Hides the sides whose bounds edge the center touches or crosses.
#[must_use]
pub fn quadrant_visibility(center: ScreenPoint, bounds: PlotBounds) -> QuadrantVisibility {
    let left = center.x > bounds.x;
    let right = center.x < bounds.right();
    let top = center.y > bounds.y;
    let bottom = center.y < bounds.bottom();

    QuadrantVisibility {
        top_left: top && left,
        top_right: top && right,
        bottom_left: bottom && left,
        bottom_right: bottom && right,
    }
}

/// Tiling pivot: the center clamped into the plot bounds.
#[must_use]
pub fn quadrant_pivot(center: ScreenPoint, bounds: PlotBounds) -> ScreenPoint {
    bounds.clamp(center)
}

/// Rectangle spanning from the quadrant's two outer bounds edges to `pivot`.
#[must_use]
pub fn quadrant_rect(quadrant: Quadrant, pivot: ScreenPoint, bounds: PlotBounds) -> ScreenRect {
    let (x, width) = if quadrant.is_left() {
        (bounds.x, pivot.x - bounds.x)
    } else {
        (pivot.x, bounds.right() - pivot.x)
    };
    let (y, height) = if quadrant.is_top() {
        (bounds.y, pivot.y - bounds.y)
    } else {
        (pivot.y, bounds.bottom() - pivot.y)
    };
    ScreenRect::new(x, y, width, height)
}

/// Resolves all four cells for a center already mapped to screen space.
#[must_use]
pub fn layout_quadrants(
    bounds: PlotBounds,
    center: ScreenPoint,
    theme: &QuadrantOverlayTheme,
) -> QuadrantLayout {
    let visibility = quadrant_visibility(center, bounds);
    let pivot = quadrant_pivot(center, bounds);

    let cells = Quadrant::ALL.map(|quadrant| {
        let visible = visibility.is_visible(quadrant);
        let rect = if visible {
            quadrant_rect(quadrant, pivot, bounds)
        } else {
            ScreenRect::ZERO
        };
        let label_visible = visible
            && rect.width > theme.label_min_width_px
            && rect.height > theme.label_min_height_px;
        QuadrantCell {
            quadrant,
            rect,
            visible,
            label_visible,
        }
    });

    QuadrantLayout {
        pivot,
        visibility,
        cells,
    }
}

/// Builds the quadrant overlay tree for one render pass.
///
/// An uninitialized center yields an empty group.
pub fn build_quadrant_overlay(
    bounds: PlotBounds,
    center: &CenterPoint,
    mapper: &impl CoordinateMapper,
    theme: &QuadrantOverlayTheme,
) -> OverlayResult<DrawNode> {
    bounds.validate()?;
    theme.validate()?;
    let Some(center_data) = center.data_point() else {
        debug!("quadrant overlay skipped: center not initialized");
        return Ok(DrawNode::named_group(QUADRANT_OVERLAY_GROUP, Vec::new()));
    };

    let center_screen = mapper.to_screen(center_data);
    if !center_screen.is_finite() {
        warn!(x = center_screen.x, y = center_screen.y, "quadrant center mapped to non-finite point");
        return Err(OverlayError::InvalidData(
            "quadrant center must map to a finite screen point".to_owned(),
        ));
    }

    let layout = layout_quadrants(bounds, center_screen, theme);
    debug!(
        pivot_x = layout.pivot.x,
        pivot_y = layout.pivot.y,
        visible = layout.visibility.visible_quadrants().len(),
        "quadrant overlay layout"
    );

    let mut children = Vec::with_capacity(layout.cells.len());
    for cell in layout.cells {
        children.push(cell_node(cell, theme)?);
    }
    Ok(DrawNode::named_group(QUADRANT_OVERLAY_GROUP, children))
}

fn cell_node(cell: QuadrantCell, theme: &QuadrantOverlayTheme) -> OverlayResult<DrawNode> {
    let style = theme.style(cell.quadrant)?;
    let inset = theme.label_inset_px;
    let rect = cell.rect;

    let area = RectPrimitive::new(
        rect,
        style.fill,
        if cell.visible { theme.fill_opacity } else { 0.0 },
    );
    let label = TextPrimitive::new(
        style.label(),
        rect.x + inset,
        rect.y + inset,
        theme.label_font_size_px,
        theme.label_color,
    )
    .with_line_height(theme.label_line_height_px)
    .with_wrap(rect.width - 2.0 * inset, rect.height - 2.0 * inset)
    .with_opacity(if cell.label_visible { 1.0 } else { 0.0 });

    Ok(DrawNode::named_group(
        format!("quadrant-{}", cell.quadrant.as_str()),
        vec![DrawNode::Rect(area), DrawNode::Text(label)],
    ))
}
