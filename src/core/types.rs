use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Visible plotting area reported by the chart engine, in screen units.
///
/// Zero-sized bounds are accepted; overlays built on them degenerate to
/// zero-area shapes instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> OverlayResult<Self> {
        let bounds = Self {
            x,
            y,
            width,
            height,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(OverlayError::InvalidData(
                "plot bounds origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(OverlayError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    #[must_use]
    pub fn clamp(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x.max(self.x).min(self.right()),
            point.y.max(self.y).min(self.bottom()),
        )
    }

    #[must_use]
    pub fn as_rect(self) -> ScreenRect {
        ScreenRect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Explicit "draw nothing" rectangle anchored at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Area shared with `other`; zero when they only touch.
    #[must_use]
    pub fn intersection_area(self, other: Self) -> f64 {
        let width = (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let height = (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        width.max(0.0) * height.max(0.0)
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotBounds, ScreenPoint, ScreenRect};

    #[test]
    fn plot_bounds_reject_negative_size() {
        assert!(PlotBounds::new(0.0, 0.0, -1.0, 10.0).is_err());
        assert!(PlotBounds::new(0.0, f64::NAN, 1.0, 10.0).is_err());
        assert!(PlotBounds::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn clamp_pins_point_to_nearest_edge() {
        let bounds = PlotBounds::new(10.0, 20.0, 100.0, 50.0).expect("bounds");
        let clamped = bounds.clamp(ScreenPoint::new(-5.0, 200.0));
        assert_eq!(clamped, ScreenPoint::new(10.0, 70.0));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let left = ScreenRect::new(0.0, 0.0, 10.0, 10.0);
        let right = ScreenRect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(left.intersection_area(right), 0.0);
    }
}
