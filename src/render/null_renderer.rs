use crate::error::OverlayResult;
use crate::render::{DrawNode, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the tree so invalid geometry is caught without a real
/// chart engine.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &DrawNode) -> OverlayResult<()> {
        scene.validate()?;
        self.last_rect_count = scene.rects().len();
        self.last_text_count = scene.texts().len();
        self.render_count += 1;
        Ok(())
    }
}
