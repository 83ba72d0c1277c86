//! Raw planar YUV420p to RGBA8 conversion with fixed BT.601-style coefficients.

use crate::foundation::core::{Dimensions, FrameRgba};
use crate::foundation::error::{YuvLensError, YuvLensResult};

/// Byte length a YUV420p buffer must have for `dims`: a full-resolution Y plane plus
/// quarter-resolution U and V planes.
pub fn yuv420p_required_len(dims: Dimensions) -> usize {
    dims.pixel_count() * 3 / 2
}

/// Decode a contiguous Y/U/V 4:2:0 planar buffer into an RGBA8 frame.
///
/// Layout: Y plane (`width*height` bytes), then U plane (`width/2 * height/2`), then V
/// plane (same size as U). Both axes must be even so the closed-form V-plane offset at
/// `width*height*5/4` lines up with the floor-divided chroma indexing. An undersized
/// buffer fails fast with [`YuvLensError::DecodeUnderrun`]; chroma bytes themselves are
/// taken at face value — the point is to visualize raw bytes as-is.
///
/// Per pixel: `R = Y + 1.402*(V-128)`, `G = Y - 0.344136*(U-128) - 0.714136*(V-128)`,
/// `B = Y + 1.772*(U-128)`, each clamped to `[0, 255]`; alpha is fixed at 255.
#[tracing::instrument(skip(buffer), fields(len = buffer.len()))]
pub fn decode_yuv420p(buffer: &[u8], dims: Dimensions) -> YuvLensResult<FrameRgba> {
    let w = dims.width as usize;
    let h = dims.height as usize;
    if w == 0 || h == 0 {
        return Err(YuvLensError::validation("decode dimensions must be non-zero"));
    }
    if !dims.is_even() {
        return Err(YuvLensError::validation(format!(
            "yuv420p requires even dimensions, got {w}x{h}"
        )));
    }

    let required = yuv420p_required_len(dims);
    if buffer.len() < required {
        return Err(YuvLensError::decode_underrun(format!(
            "buffer holds {} bytes, {w}x{h} yuv420p needs {required}",
            buffer.len()
        )));
    }

    let y_plane_len = w * h;
    let u_base = y_plane_len;
    let v_base = y_plane_len + y_plane_len / 4;
    let uv_stride = w / 2;

    let mut data = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let luma = f32::from(buffer[y * w + x]);
            let uv = (y / 2) * uv_stride + x / 2;
            let cb = f32::from(buffer[u_base + uv]) - 128.0;
            let cr = f32::from(buffer[v_base + uv]) - 128.0;

            let r = luma + 1.402 * cr;
            let g = luma - 0.344_136 * cb - 0.714_136 * cr;
            let b = luma + 1.772 * cb;

            let px = (y * w + x) * 4;
            data[px] = r.clamp(0.0, 255.0) as u8;
            data[px + 1] = g.clamp(0.0, 255.0) as u8;
            data[px + 2] = b.clamp(0.0, 255.0) as u8;
            data[px + 3] = 255;
        }
    }

    Ok(FrameRgba {
        width: dims.width,
        height: dims.height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/decode/yuv420p.rs"]
mod tests;
