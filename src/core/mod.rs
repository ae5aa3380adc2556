pub mod extent;
pub mod mapping;
pub mod primitives;
pub mod scale;
pub mod types;

pub use extent::{AxisExtent, AxisExtentProvider, AxisId, StaticAxisExtents};
pub use mapping::{CartesianMapper, CoordinateMapper};
pub use scale::LinearScale;
pub use types::{DataPoint, PlotBounds, ScreenPoint, ScreenRect};
