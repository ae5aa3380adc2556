use serde::{Deserialize, Serialize};

/// Axis selector used when asking the chart engine for its current extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
}

/// Current `[min, max]` of one axis scale, in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
}

impl AxisExtent {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Read-only view of the axis extents after a chart render.
///
/// Hosts implement this over their engine model; returning `None` means the
/// axis is not available yet (for example before the first data load).
pub trait AxisExtentProvider {
    fn extent(&self, axis: AxisId) -> Option<AxisExtent>;
}

/// Fixed extents, handy for hosts that already track their axis ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticAxisExtents {
    pub x: Option<AxisExtent>,
    pub y: Option<AxisExtent>,
}

impl StaticAxisExtents {
    #[must_use]
    pub fn new(x: AxisExtent, y: AxisExtent) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

impl AxisExtentProvider for StaticAxisExtents {
    fn extent(&self, axis: AxisId) -> Option<AxisExtent> {
        match axis {
            AxisId::X => self.x,
            AxisId::Y => self.y,
        }
    }
}
