use crate::foundation::error::{YuvLensError, YuvLensResult};

/// Shared raster dimensions in pixels.
///
/// Owned by the viewer configuration and read by every raw decode; encoded images are
/// the one place dimensions are derived from data instead of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create validated dimensions with non-zero width and height.
    pub fn new(width: u32, height: u32) -> YuvLensResult<Self> {
        if width == 0 || height == 0 {
            return Err(YuvLensError::validation("dimensions must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Return `true` when both axes are even, as the 4:2:0 planar layout requires.
    pub fn is_even(self) -> bool {
        self.width.is_multiple_of(2) && self.height.is_multiple_of(2)
    }

    /// Parse one axis from free-form viewer input.
    ///
    /// Signs are ignored and anything unparsable (or zero) falls back to 1.
    pub fn parse_axis(raw: &str) -> u32 {
        match raw.trim().parse::<i64>() {
            Ok(v) if v != 0 => v.unsigned_abs().min(u64::from(u32::MAX)) as u32,
            _ => 1,
        }
    }
}

/// Positive integer magnification factor read by every magnifier render.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ZoomLevel(u32);

impl ZoomLevel {
    /// Create a validated zoom level, `level >= 1`.
    pub fn new(level: u32) -> YuvLensResult<Self> {
        if level == 0 {
            return Err(YuvLensError::validation("zoom level must be >= 1"));
        }
        Ok(Self(level))
    }

    /// Parse from free-form viewer input; signs are ignored and anything unparsable
    /// (or zero) falls back to 1.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(v) if v != 0 => Self(v.unsigned_abs().min(u64::from(u32::MAX)) as u32),
            _ => Self(1),
        }
    }

    /// The magnification factor.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Decoded RGBA8 raster, row-major top-to-bottom, 4 bytes per pixel (R,G,B,A).
///
/// Produced fresh per decode call; ownership moves to the caller for blitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, exactly `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Raster dimensions.
    pub fn dims(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Explicit shared viewer configuration.
///
/// This replaces ambient globals: the registry owns one and hands it (by value, it is
/// `Copy`) into decode and magnifier calls; mutation goes through the registry so that
/// every loaded surface is re-decoded consistently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewerConfig {
    /// Raster dimensions applied to every raw YUV decode.
    pub dimensions: Dimensions,
    /// Current magnification factor.
    pub zoom: ZoomLevel,
}

impl ViewerConfig {
    /// Create a configuration from already-validated parts.
    pub fn new(dimensions: Dimensions, zoom: ZoomLevel) -> Self {
        Self { dimensions, zoom }
    }

    /// Parse a configuration from JSON, e.g. `{"dimensions":{"width":64,"height":48},"zoom":2}`.
    pub fn from_json_str(s: &str) -> YuvLensResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| YuvLensError::validation(format!("parse viewer config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate invariants serde cannot enforce (non-zero dimensions, zoom >= 1).
    pub fn validate(&self) -> YuvLensResult<()> {
        Dimensions::new(self.dimensions.width, self.dimensions.height)?;
        ZoomLevel::new(self.zoom.0)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
