use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_reports_natural_dimensions() {
    let frame = decode_encoded_image(&png_bytes(6, 4, [10, 20, 30, 255])).unwrap();
    assert_eq!((frame.width, frame.height), (6, 4));
    assert_eq!(frame.data.len(), 6 * 4 * 4);
    assert_eq!(&frame.data[0..4], &[10, 20, 30, 255]);
}

#[test]
fn translucent_pixels_come_back_premultiplied() {
    // Straight-alpha half-transparent red: the color channels must be scaled by
    // alpha before the frame ever reaches a surface.
    let frame = decode_encoded_image(&png_bytes(8, 8, [255, 0, 0, 128])).unwrap();
    assert_eq!(&frame.data[0..4], &[128, 0, 0, 128]);
}

#[test]
fn fully_transparent_pixels_zero_their_color() {
    let frame = decode_encoded_image(&png_bytes(2, 2, [90, 60, 30, 0])).unwrap();
    assert_eq!(&frame.data[0..4], &[0, 0, 0, 0]);
}

#[test]
fn decode_rejects_garbage_bytes() {
    let err = decode_encoded_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, crate::YuvLensError::Other(_)));
}
