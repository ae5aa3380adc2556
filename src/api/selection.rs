use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{PlotBounds, ScreenPoint};
use crate::overlays::{EventMarker, MARKER_GROUP_PREFIX, MarkerHighlight, PlacedEventMarker};

#[must_use]
pub fn marker_group_name(id: &str) -> String {
    format!("{MARKER_GROUP_PREFIX}{id}")
}

/// Extracts the marker id from a drawable group name.
///
/// Everything after the prefix is the id, so ids may contain `-`.
#[must_use]
pub fn parse_marker_group_name(name: &str) -> Option<&str> {
    name.strip_prefix(MARKER_GROUP_PREFIX)
        .filter(|id| !id.is_empty())
}

/// Marker under `point`, using each group's icon-plus-column area.
///
/// When spaced markers still touch, the one whose left edge is closest wins.
#[must_use]
pub fn hit_test_markers<'a>(
    placed: &'a [PlacedEventMarker],
    bounds: PlotBounds,
    point: ScreenPoint,
    icon_size_px: f64,
) -> Option<&'a PlacedEventMarker> {
    placed
        .iter()
        .filter(|marker| marker.hit_rect(bounds, icon_size_px).contains(point))
        .min_by_key(|marker| OrderedFloat((point.x - marker.x).abs()))
}

/// Selected and hovered marker ids, owned by the host UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSelection {
    selected: Option<String>,
    hovered: Option<String>,
}

impl MarkerSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn highlight(&self) -> MarkerHighlight<'_> {
        MarkerHighlight {
            selected_id: self.selected_id(),
            hovered_id: self.hovered_id(),
        }
    }

    /// Returns `true` when the selection changed.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.selected.as_deref() == Some(id.as_str()) {
            return false;
        }
        debug!(id = %id, "marker selected");
        self.selected = Some(id);
        true
    }

    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Selects the first marker, the default after a data load.
    pub fn select_first(&mut self, markers: &[EventMarker]) -> bool {
        match markers.first() {
            Some(marker) => self.select(marker.id.clone()),
            None => self.clear(),
        }
    }

    /// Click on a drawable whose parent group is `group_name`.
    ///
    /// Clicks outside marker groups keep the current selection.
    pub fn handle_click(&mut self, group_name: Option<&str>) -> bool {
        match group_name.and_then(parse_marker_group_name) {
            Some(id) => self.select(id),
            None => false,
        }
    }

    /// Pointer moved over `group_name` (or over nothing). Returns `true` when
    /// the hovered marker changed.
    pub fn handle_pointer_move(&mut self, group_name: Option<&str>) -> bool {
        let next = group_name.and_then(parse_marker_group_name);
        if self.hovered.as_deref() == next {
            return false;
        }
        self.hovered = next.map(str::to_owned);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerSelection, parse_marker_group_name};

    #[test]
    fn group_name_keeps_hyphenated_ids() {
        assert_eq!(parse_marker_group_name("marker-sku-12"), Some("sku-12"));
        assert_eq!(parse_marker_group_name("marker-"), None);
        assert_eq!(parse_marker_group_name("quadrant-top_left"), None);
    }

    #[test]
    fn click_outside_markers_keeps_selection() {
        let mut selection = MarkerSelection::new();
        assert!(selection.handle_click(Some("marker-3")));
        assert!(!selection.handle_click(Some("marker-3")));
        assert!(!selection.handle_click(None));
        assert!(!selection.handle_click(Some("legend")));
        assert_eq!(selection.selected_id(), Some("3"));
    }
}
