use glam::Vec2;

use crate::api::host::Viewport;

/// Tracks the visual center of the viewport.
/// Re-read every tick so window resizes take effect immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportTracker {
    center: Vec2,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the center from the current viewport size and return it.
    /// Unusable dimensions (zero, negative, NaN) center that axis at 0.
    pub fn scale(&mut self, viewport: &impl Viewport) -> Vec2 {
        let size = viewport.size();
        self.center = Vec2::new(half(size.x), half(size.y));
        self.center
    }

    /// Center computed by the most recent `scale` call.
    pub fn center(&self) -> Vec2 {
        self.center
    }
}

fn half(extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        extent / 2.0
    } else {
        0.0
    }
}
