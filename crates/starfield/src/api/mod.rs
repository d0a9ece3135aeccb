// api/mod.rs
//
// Public contract between the simulation and whoever hosts it.

pub mod config;
pub mod host;
