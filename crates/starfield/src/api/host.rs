//! Capability traits the simulation needs from its environment.
//!
//! The core never touches a browser directly. `starfield-web` implements
//! these against `web-sys`; unit tests implement them with a synchronous fake
//! that records every call.

use glam::Vec2;

/// Source of the current viewport dimensions in pixels.
pub trait Viewport {
    /// Current width and height. Zero (or non-finite) when unavailable.
    fn size(&self) -> Vec2;
}

/// Deferred tick delivery.
///
/// Each call must arrange for the field's tick entry point to run exactly
/// once, some tens of milliseconds later. Implementations must not block
/// or run the tick synchronously.
pub trait Scheduler {
    fn schedule(&mut self);
}

/// The display tree the stars are drawn into.
pub trait Surface {
    /// Handle to one on-screen star node.
    type Node;

    /// Create one star node inside the (not yet attached) container.
    /// Returns None when the display refuses to create it.
    fn spawn_node(&mut self) -> Option<Self::Node>;

    /// Insert the container ahead of all other page content.
    fn attach(&mut self);

    /// Move a node to absolute screen coordinates.
    fn place(&mut self, node: &Self::Node, at: Vec2);
}

/// Uniform random variates.
pub trait RandomSource {
    /// A value in [0, 1).
    fn next_unit(&mut self) -> f32;
}

/// Everything a [`Starfield`](crate::Starfield) needs, as one bound.
pub trait Host: Viewport + Scheduler + Surface + RandomSource {}

impl<T: Viewport + Scheduler + Surface + RandomSource> Host for T {}
