pub mod rng;
#[cfg(feature = "decor")]
pub mod decor;
