//! Magnifier overlay: a zoomed, radially-masked crop of a source surface.

use kurbo::{Point, Rect};

use crate::foundation::core::ZoomLevel;
use crate::foundation::error::{YuvLensError, YuvLensResult};
use crate::foundation::math::over;
use crate::input::cursor::CursorSample;
use crate::render::surface::Surface;

// Vignette stops: fully transparent through 80% of the radius, ramping linearly to 30%
// black at the rim.
const VIGNETTE_INNER_STOP: f64 = 0.8;
const VIGNETTE_RIM_ALPHA: f64 = 0.3;

/// Overlay anchor position in viewport coordinates.
///
/// The overlay's top-left sits at the cursor's viewport position. Applying the offset is
/// the shell's layout concern; the value itself is computed here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Viewport x of the overlay's top-left.
    pub x: f64,
    /// Viewport y of the overlay's top-left.
    pub y: f64,
}

/// Magnifier visibility, driven by enter/leave (or touch start/end) on the source
/// surface. There are no intermediate states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Overlay not shown; moves do not render.
    Hidden,
    /// Overlay shown; every move re-renders.
    Visible,
}

/// Source-space crop rectangle for a cursor position and zoom factor.
///
/// Top-left is `cursor - overlay_size/(2*zoom)`, size is `overlay_size/zoom`; scaling
/// that crop to the full overlay yields the magnified view centered on the cursor.
pub fn crop_rect(overlay_width: u32, overlay_height: u32, cursor: Point, zoom: ZoomLevel) -> Rect {
    let ow = f64::from(overlay_width);
    let oh = f64::from(overlay_height);
    let z = f64::from(zoom.get());
    let x0 = cursor.x - ow / (2.0 * z);
    let y0 = cursor.y - oh / (2.0 * z);
    Rect::new(x0, y0, x0 + ow / z, y0 + oh / z)
}

/// Interactive pixel magnifier rendering into an owned overlay surface.
#[derive(Debug)]
pub struct Magnifier {
    overlay: Surface,
    visibility: Visibility,
}

impl Magnifier {
    /// Create a hidden magnifier with an overlay raster of the given size.
    pub fn new(overlay_width: u32, overlay_height: u32) -> YuvLensResult<Self> {
        if overlay_width == 0 || overlay_height == 0 {
            return Err(YuvLensError::configuration(
                "magnifier overlay surface must be non-empty",
            ));
        }
        Ok(Self {
            overlay: Surface::new(overlay_width, overlay_height),
            visibility: Visibility::Hidden,
        })
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The rendered overlay raster.
    pub fn overlay(&self) -> &Surface {
        &self.overlay
    }

    /// Pointer entered / touch started over the source surface.
    pub fn cursor_entered(&mut self) {
        self.visibility = Visibility::Visible;
    }

    /// Pointer left / touch ended; hides the overlay without rendering.
    pub fn cursor_left(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Re-render for a pointer/touch move. Returns the overlay placement when visible;
    /// moves while hidden are a no-op.
    pub fn cursor_moved(
        &mut self,
        source: &Surface,
        cursor: &CursorSample,
        zoom: ZoomLevel,
    ) -> Option<OverlayPlacement> {
        match self.visibility {
            Visibility::Hidden => None,
            Visibility::Visible => Some(self.render(source, cursor, zoom)),
        }
    }

    /// Rasterize the zoomed, vignette-masked crop under `cursor` into the overlay.
    ///
    /// The vignette disc (radius `overlay_width / (2*zoom)`, centered) is laid down
    /// first; the magnified crop is then composited source-over inside the same disc, so
    /// the dark rim shows wherever the crop samples outside the source. Everything
    /// outside the disc stays transparent, and no clip state survives the call.
    pub fn render(
        &mut self,
        source: &Surface,
        cursor: &CursorSample,
        zoom: ZoomLevel,
    ) -> OverlayPlacement {
        let ow = f64::from(self.overlay.width());
        let oh = f64::from(self.overlay.height());
        let z = f64::from(zoom.get());

        let radius = ow / (2.0 * z);
        let center = Point::new(ow / 2.0, oh / 2.0);
        let crop = crop_rect(self.overlay.width(), self.overlay.height(), cursor.surface, zoom);

        self.overlay.clear();
        for oy in 0..self.overlay.height() {
            for ox in 0..self.overlay.width() {
                let dx = (f64::from(ox) + 0.5) - center.x;
                let dy = (f64::from(oy) + 0.5) - center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue; // outside the clip disc
                }

                let vignette = vignette_at(dist / radius);

                // Nearest-neighbor upscale: one source pixel per 1/zoom overlay step.
                let sx = (crop.x0 + f64::from(ox) / z).floor() as i64;
                let sy = (crop.y0 + f64::from(oy) / z).floor() as i64;
                let sample = source.pixel(sx, sy);

                self.overlay.put_pixel(ox, oy, over(vignette, sample));
            }
        }

        OverlayPlacement {
            x: cursor.viewport.x,
            y: cursor.viewport.y,
        }
    }
}

/// Gradient color at normalized distance `t` in `[0, 1]` from the disc center:
/// transparent until the inner stop, then a linear ramp to 30% black at the rim.
fn vignette_at(t: f64) -> [u8; 4] {
    if t <= VIGNETTE_INNER_STOP {
        return [0, 0, 0, 0];
    }
    let ramp = ((t - VIGNETTE_INNER_STOP) / (1.0 - VIGNETTE_INNER_STOP)).clamp(0.0, 1.0);
    let a = (VIGNETTE_RIM_ALPHA * ramp * 255.0).round() as u8;
    // Premultiplied black: color channels stay zero at any alpha.
    [0, 0, 0, a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/magnifier.rs"]
mod tests;
