use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, ScreenRect};

/// Fixed vertical anchor of the marker tooltip, just under the marker icons.
pub const DEFAULT_TOOLTIP_ANCHOR_Y: f64 = 45.0;

/// Position and visibility of the floating marker tooltip.
///
/// Setters report whether anything changed so hosts can skip redundant
/// repaints while the pointer moves inside one marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub position: ScreenPoint,
    pub visible: bool,
    pub anchor_y: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            position: ScreenPoint::new(0.0, 0.0),
            visible: false,
            anchor_y: DEFAULT_TOOLTIP_ANCHOR_Y,
        }
    }
}

impl TooltipState {
    pub fn set_position(&mut self, position: ScreenPoint) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        true
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Anchors above the horizontal center of the hovered group and shows.
    pub fn show_for(&mut self, group_rect: ScreenRect) -> bool {
        let moved = self.set_position(ScreenPoint::new(group_rect.center_x(), self.anchor_y));
        let shown = self.set_visible(true);
        moved || shown
    }

    pub fn hide(&mut self) -> bool {
        self.set_visible(false)
    }
}

#[cfg(test)]
mod tests {
    use super::TooltipState;
    use crate::core::{ScreenPoint, ScreenRect};

    #[test]
    fn repeated_show_on_same_group_reports_no_change() {
        let mut tooltip = TooltipState::default();
        let rect = ScreenRect::new(100.0, 0.0, 16.0, 300.0);
        assert!(tooltip.show_for(rect));
        assert_eq!(tooltip.position, ScreenPoint::new(108.0, 45.0));
        assert!(!tooltip.show_for(rect));
        assert!(tooltip.hide());
        assert!(!tooltip.hide());
    }
}
