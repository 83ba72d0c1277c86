//! Drawable RGBA8 raster surface.

use crate::foundation::core::FrameRgba;

/// An RGBA8 raster that decoded frames are committed to and the magnifier samples from.
///
/// Pixels are premultiplied RGBA8, row-major. One surface exists per loaded buffer plus
/// one for the magnifier overlay; no state is shared between surfaces.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Replace the surface contents with a decoded frame, committed at offset (0,0).
    ///
    /// The surface adopts the frame's dimensions, matching a canvas resized to fit its
    /// image before the blit.
    pub fn blit_frame(&mut self, frame: FrameRgba) {
        self.width = frame.width;
        self.height = frame.height;
        self.pixels = frame.data;
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Sample one pixel; coordinates outside the raster read as transparent, the blit
    /// semantics the magnifier relies on near surface edges.
    pub fn pixel(&self, x: i64, y: i64) -> [u8; 4] {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return [0, 0, 0, 0];
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&px);
    }

    /// Raw pixel bytes, row-major RGBA8.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
