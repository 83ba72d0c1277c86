//! Pointer/touch input normalization.

pub mod cursor;
