use serde::{Deserialize, Serialize};

use crate::core::extent::{AxisExtent, AxisExtentProvider, AxisId};
use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, PlotBounds, ScreenPoint};
use crate::error::OverlayResult;

/// Data-to-screen projection supplied by the chart engine at render time.
pub trait CoordinateMapper {
    fn to_screen(&self, point: DataPoint) -> ScreenPoint;

    fn to_screen_x(&self, x: f64) -> f64 {
        self.to_screen(DataPoint::new(x, 0.0)).x
    }
}

impl<F> CoordinateMapper for F
where
    F: Fn(DataPoint) -> ScreenPoint,
{
    fn to_screen(&self, point: DataPoint) -> ScreenPoint {
        self(point)
    }
}

/// Two linear scales covering a plot area: x grows to the right and data y
/// grows upward, so the vertical range runs from the bottom edge to the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianMapper {
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CartesianMapper {
    pub fn for_bounds(
        bounds: PlotBounds,
        x_extent: AxisExtent,
        y_extent: AxisExtent,
    ) -> OverlayResult<Self> {
        bounds.validate()?;
        Ok(Self {
            x_scale: LinearScale::new((x_extent.min, x_extent.max), (bounds.x, bounds.right()))?,
            y_scale: LinearScale::new((y_extent.min, y_extent.max), (bounds.bottom(), bounds.y))?,
        })
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn to_data(&self, point: ScreenPoint) -> DataPoint {
        DataPoint::new(self.x_scale.invert(point.x), self.y_scale.invert(point.y))
    }
}

impl CoordinateMapper for CartesianMapper {
    fn to_screen(&self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(self.x_scale.map(point.x), self.y_scale.map(point.y))
    }
}

impl AxisExtentProvider for CartesianMapper {
    fn extent(&self, axis: AxisId) -> Option<AxisExtent> {
        let (min, max) = match axis {
            AxisId::X => self.x_scale.domain(),
            AxisId::Y => self.y_scale.domain(),
        };
        Some(AxisExtent::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::{CartesianMapper, CoordinateMapper};
    use crate::core::{AxisExtent, DataPoint, PlotBounds, ScreenPoint};

    #[test]
    fn cartesian_mapper_flips_vertical_axis() {
        let bounds = PlotBounds::new(50.0, 10.0, 400.0, 300.0).expect("bounds");
        let mapper = CartesianMapper::for_bounds(
            bounds,
            AxisExtent::new(0.0, 100.0),
            AxisExtent::new(0.0, 30.0),
        )
        .expect("mapper");

        assert_eq!(
            mapper.to_screen(DataPoint::new(0.0, 0.0)),
            ScreenPoint::new(50.0, 310.0)
        );
        assert_eq!(
            mapper.to_screen(DataPoint::new(100.0, 30.0)),
            ScreenPoint::new(450.0, 10.0)
        );
        assert_eq!(mapper.to_screen_x(50.0), 250.0);
    }

    #[test]
    fn closures_act_as_mappers() {
        let shift = |point: DataPoint| ScreenPoint::new(point.x + 1.0, point.y - 1.0);
        assert_eq!(
            shift.to_screen(DataPoint::new(1.0, 1.0)),
            ScreenPoint::new(2.0, 0.0)
        );
    }
}
