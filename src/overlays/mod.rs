//! Overlay calculators that turn chart-engine geometry into drawable trees.

pub mod center;
pub mod event_markers;
pub mod quadrant;

pub use center::CenterPoint;
pub use event_markers::{
    EVENT_MARKER_OVERLAY_GROUP, EventMarker, EventMarkerStyle, MARKER_GROUP_PREFIX,
    MarkerHighlight, MarkerPaint, MarkerPalette, MarkerPlacementState, PlacedEventMarker,
    build_event_marker_overlay, place_event_markers, place_indexed_markers,
};
pub use quadrant::{
    QUADRANT_OVERLAY_GROUP, Quadrant, QuadrantCell, QuadrantLayout, QuadrantOverlayTheme,
    QuadrantStyle, QuadrantVisibility, build_quadrant_overlay, layout_quadrants, quadrant_pivot,
    quadrant_rect, quadrant_visibility,
};
