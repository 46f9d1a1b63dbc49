//! Command implementations

pub mod fetch;
pub mod render;
