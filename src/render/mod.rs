//! RGBA raster surfaces and the magnifier overlay renderer.

pub mod magnifier;
pub mod surface;
