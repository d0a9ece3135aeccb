pub mod cadence;
pub mod field;
pub mod viewport;
