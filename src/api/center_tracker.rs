use tracing::{debug, trace};

use crate::core::{AxisExtentProvider, AxisId};
use crate::overlays::CenterPoint;

/// Owns the quadrant center between renders.
///
/// Fed from the chart engine's render-complete callback; the center is
/// replaced only when the new midpoint differs, so a host re-rendering on
/// change does not loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CenterTracker {
    center: CenterPoint,
}

impl CenterTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn center(&self) -> CenterPoint {
        self.center
    }

    /// Recomputes the center from the current axis extents.
    ///
    /// Returns `true` when the stored center changed. Missing or non-finite
    /// extents leave it untouched.
    pub fn on_render_complete(&mut self, extents: &impl AxisExtentProvider) -> bool {
        let (Some(x), Some(y)) = (extents.extent(AxisId::X), extents.extent(AxisId::Y)) else {
            trace!("render complete without both axis extents");
            return false;
        };
        if !x.is_finite() || !y.is_finite() {
            trace!("render complete with non-finite axis extents");
            return false;
        }

        let next = CenterPoint::from_extents(x, y);
        if self.center.initialized && self.center.x == next.x && self.center.y == next.y {
            return false;
        }

        debug!(x = next.x, y = next.y, "quadrant center updated");
        self.center = next;
        true
    }

    pub fn reset(&mut self) {
        self.center = CenterPoint::UNINITIALIZED;
    }
}

#[cfg(test)]
mod tests {
    use super::CenterTracker;
    use crate::core::{AxisExtent, StaticAxisExtents};

    #[test]
    fn zero_midpoint_still_initializes() {
        let mut tracker = CenterTracker::new();
        let extents = StaticAxisExtents::new(AxisExtent::new(-1.0, 1.0), AxisExtent::new(-5.0, 5.0));
        assert!(tracker.on_render_complete(&extents));
        assert!(tracker.center().initialized);
        assert_eq!((tracker.center().x, tracker.center().y), (0.0, 0.0));
    }

    #[test]
    fn missing_axis_keeps_center_uninitialized() {
        let mut tracker = CenterTracker::new();
        let extents = StaticAxisExtents {
            x: Some(AxisExtent::new(0.0, 10.0)),
            y: None,
        };
        assert!(!tracker.on_render_complete(&extents));
        assert!(!tracker.center().initialized);
    }
}
