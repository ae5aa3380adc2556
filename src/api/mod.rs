mod center_tracker;
mod overlay_config;
mod selection;
mod tooltip;

pub use center_tracker::CenterTracker;
pub use overlay_config::OverlayEngineConfig;
pub use selection::{
    MarkerSelection, hit_test_markers, marker_group_name, parse_marker_group_name,
};
pub use tooltip::{DEFAULT_TOOLTIP_ANCHOR_Y, TooltipState};

use tracing::debug;

use crate::core::{AxisExtentProvider, CoordinateMapper, PlotBounds, ScreenPoint};
use crate::error::OverlayResult;
use crate::overlays::{
    CenterPoint, EventMarker, PlacedEventMarker, build_event_marker_overlay,
    build_quadrant_overlay, place_event_markers,
};
use crate::render::{DrawNode, Renderer};

/// Host-facing facade tying the overlays to one chart instance.
///
/// The chart engine drives it: `on_render_complete` after each engine render,
/// `render` when the overlay layer is repainted, and the pointer handlers for
/// marker interaction. All state changes are serialized through these calls.
pub struct OverlayEngine<R: Renderer> {
    renderer: R,
    config: OverlayEngineConfig,
    center: CenterTracker,
    selection: MarkerSelection,
    tooltip: TooltipState,
    markers: Vec<EventMarker>,
    placed: Vec<PlacedEventMarker>,
    last_bounds: Option<PlotBounds>,
}

impl<R: Renderer> OverlayEngine<R> {
    pub fn new(renderer: R, config: OverlayEngineConfig) -> OverlayResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            center: CenterTracker::new(),
            selection: MarkerSelection::new(),
            tooltip: TooltipState::default(),
            markers: Vec::new(),
            placed: Vec::new(),
            last_bounds: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &OverlayEngineConfig {
        &self.config
    }

    /// Replaces the event markers; they must be in time order.
    pub fn set_markers(&mut self, markers: Vec<EventMarker>) {
        debug!(count = markers.len(), "event markers replaced");
        self.markers = markers;
        self.placed.clear();
        if self.config.select_first_marker {
            self.selection.select_first(&self.markers);
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[EventMarker] {
        &self.markers
    }

    /// Marker positions from the most recent render.
    #[must_use]
    pub fn placed_markers(&self) -> &[PlacedEventMarker] {
        &self.placed
    }

    #[must_use]
    pub fn center(&self) -> CenterPoint {
        self.center.center()
    }

    /// Render-complete hook; returns `true` when the overlay needs a repaint.
    pub fn on_render_complete(&mut self, extents: &impl AxisExtentProvider) -> bool {
        self.center.on_render_complete(extents)
    }

    pub fn quadrant_overlay(
        &self,
        bounds: PlotBounds,
        mapper: &impl CoordinateMapper,
    ) -> OverlayResult<DrawNode> {
        build_quadrant_overlay(
            bounds,
            &self.center.center(),
            mapper,
            &self.config.quadrant_theme,
        )
    }

    /// Places the markers for this pass and builds their overlay.
    pub fn marker_overlay(
        &mut self,
        bounds: PlotBounds,
        mapper: &impl CoordinateMapper,
    ) -> OverlayResult<DrawNode> {
        let style = &self.config.marker_style;
        self.placed = place_event_markers(&self.markers, mapper, style.min_spacing_px)?;
        self.last_bounds = Some(bounds);
        build_event_marker_overlay(&self.placed, bounds, self.selection.highlight(), style)
    }

    /// Builds both overlays and hands them to the renderer as one tree.
    pub fn render(
        &mut self,
        bounds: PlotBounds,
        mapper: &impl CoordinateMapper,
    ) -> OverlayResult<DrawNode> {
        let quadrants = self.quadrant_overlay(bounds, mapper)?;
        let markers = self.marker_overlay(bounds, mapper)?;
        let scene = DrawNode::group(vec![quadrants, markers]);
        self.renderer.render(&scene)?;
        Ok(scene)
    }

    #[must_use]
    pub fn selection(&self) -> &MarkerSelection {
        &self.selection
    }

    /// Selection coming from outside the chart, such as a marker list.
    pub fn select_marker(&mut self, id: impl Into<String>) -> bool {
        self.selection.select(id)
    }

    /// Click reported by the engine's scene graph with the parent group name.
    pub fn pointer_click(&mut self, group_name: Option<&str>) -> bool {
        self.selection.handle_click(group_name)
    }

    /// Click in screen space, hit tested against the last placed markers.
    pub fn pointer_click_at(&mut self, point: ScreenPoint) -> bool {
        let name = self.marker_at(point).map(PlacedEventMarker::group_name);
        self.selection.handle_click(name.as_deref())
    }

    /// Pointer move in screen space: updates hover and the tooltip.
    ///
    /// Returns `true` when either changed.
    pub fn pointer_move_at(&mut self, point: ScreenPoint) -> bool {
        let icon_size = self.config.marker_style.icon_size_px;
        let hit = self.last_bounds.and_then(|bounds| {
            hit_test_markers(&self.placed, bounds, point, icon_size)
                .map(|marker| (marker.group_name(), marker.hit_rect(bounds, icon_size)))
        });

        match hit {
            Some((name, rect)) => {
                let hovered = self.selection.handle_pointer_move(Some(&name));
                let tooltip = self.tooltip.show_for(rect);
                hovered || tooltip
            }
            None => {
                let hovered = self.selection.handle_pointer_move(None);
                let tooltip = self.tooltip.hide();
                hovered || tooltip
            }
        }
    }

    pub fn pointer_leave(&mut self) -> bool {
        let hovered = self.selection.handle_pointer_move(None);
        let tooltip = self.tooltip.hide();
        hovered || tooltip
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipState {
        self.tooltip
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn marker_at(&self, point: ScreenPoint) -> Option<&PlacedEventMarker> {
        let bounds = self.last_bounds?;
        hit_test_markers(
            &self.placed,
            bounds,
            point,
            self.config.marker_style.icon_size_px,
        )
    }
}
