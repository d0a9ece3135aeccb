pub mod depth;
pub mod star;
