//! Encoded-image pass-through via the `image` crate's native decoders.

use anyhow::Context;

use crate::foundation::core::FrameRgba;
use crate::foundation::error::YuvLensResult;
use crate::foundation::math::mul_div255;

/// Decode a standard encoded image (PNG, JPEG, ...) into a premultiplied RGBA8 frame.
///
/// This path bypasses the raw YUV decoder entirely. The natural width/height reported
/// on the returned frame is the only place dimensions are derived from data rather than
/// from viewer input; the registry uses it to update the shared
/// [`Dimensions`](crate::Dimensions).
pub fn decode_encoded_image(bytes: &[u8]) -> YuvLensResult<FrameRgba> {
    let dyn_img = image::load_from_memory(bytes).context("decode encoded image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    // Surfaces hold premultiplied pixels; `image` hands back straight alpha.
    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);

    Ok(FrameRgba {
        width,
        height,
        data,
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255(u16::from(px[0]), u16::from(a));
        px[1] = mul_div255(u16::from(px[1]), u16::from(a));
        px[2] = mul_div255(u16::from(px[2]), u16::from(a));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/encoded.rs"]
mod tests;
