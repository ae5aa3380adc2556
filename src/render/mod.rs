mod node;
mod null_renderer;
mod primitives;

pub use node::{DrawNode, GroupNode};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign, TextWrap,
};

use crate::error::OverlayResult;

/// Contract implemented by whatever paints the overlay trees.
///
/// Overlay builders never paint; they return a `DrawNode` and the host hands
/// it to the chart engine through this trait.
pub trait Renderer {
    fn render(&mut self, scene: &DrawNode) -> OverlayResult<()>;
}
