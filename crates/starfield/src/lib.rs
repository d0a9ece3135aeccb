pub mod api;
pub mod core;
pub mod components;
pub mod systems;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience
pub use api::config::{StarfieldConfig, LayerSpeeds};
pub use api::host::{Host, Viewport, Scheduler, Surface, RandomSource};
pub use components::depth::Depth;
pub use components::star::{Star, Layer};
pub use crate::core::cadence::Cadence;
pub use crate::core::field::Starfield;
pub use crate::core::viewport::ViewportTracker;
pub use systems::rng::{Rng, offset};
#[cfg(feature = "decor")]
pub use systems::decor::{Sidebar, sidebar_margin, tag_font_percent, parse_weight, shuffle};
