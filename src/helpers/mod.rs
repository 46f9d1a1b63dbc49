//! Helper functions shared across the crate

mod date;

pub use date::*;
