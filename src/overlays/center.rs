use serde::{Deserialize, Serialize};

use crate::core::{AxisExtent, DataPoint};

/// Reference point for the quadrant overlay, in data space.
///
/// `initialized == false` means no render has produced axis extents yet;
/// overlays depending on the center draw nothing in that state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterPoint {
    pub x: f64,
    pub y: f64,
    pub initialized: bool,
}

impl CenterPoint {
    pub const UNINITIALIZED: Self = Self {
        x: 0.0,
        y: 0.0,
        initialized: false,
    };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            initialized: true,
        }
    }

    /// Midpoint of the current x and y axis extents.
    #[must_use]
    pub fn from_extents(x: AxisExtent, y: AxisExtent) -> Self {
        Self::new(x.midpoint(), y.midpoint())
    }

    #[must_use]
    pub fn data_point(self) -> Option<DataPoint> {
        self.initialized.then(|| DataPoint::new(self.x, self.y))
    }
}

impl Default for CenterPoint {
    fn default() -> Self {
        Self::UNINITIALIZED
    }
}
