use std::io::Cursor;

use super::*;

fn config(w: u32, h: u32) -> ViewerConfig {
    ViewerConfig::new(Dimensions::new(w, h).unwrap(), ZoomLevel::default())
}

/// Neutral mid-gray planar buffer large enough for `w x h`.
fn gray_yuv(w: u32, h: u32) -> Vec<u8> {
    let px = (w as usize) * (h as usize);
    vec![128u8; px * 3 / 2]
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn content_type_classification() {
    assert_eq!(
        SourceKind::from_content_type(Some("image/png")),
        SourceKind::Encoded
    );
    assert_eq!(
        SourceKind::from_content_type(Some("image/jpeg")),
        SourceKind::Encoded
    );
    assert_eq!(
        SourceKind::from_content_type(Some("application/octet-stream")),
        SourceKind::RawYuv420p
    );
    assert_eq!(SourceKind::from_content_type(None), SourceKind::RawYuv420p);
}

#[test]
fn insert_raw_decodes_against_shared_dimensions() {
    let mut reg = SurfaceRegistry::new(config(4, 2));
    reg.insert("a.yuv", gray_yuv(4, 2), None).unwrap();

    let s = reg.surface("a.yuv").unwrap();
    assert_eq!((s.width(), s.height()), (4, 2));
    assert_eq!(s.pixel(0, 0), [128, 128, 128, 255]);
    assert_eq!(reg.kind("a.yuv"), Some(SourceKind::RawYuv420p));
}

#[test]
fn failed_insert_leaves_registry_unchanged() {
    let mut reg = SurfaceRegistry::new(config(4, 2));
    reg.insert("ok.yuv", gray_yuv(4, 2), None).unwrap();

    let err = reg.insert("short.yuv", vec![0u8; 3], None).unwrap_err();
    assert!(matches!(err, crate::YuvLensError::DecodeUnderrun(_)));
    assert_eq!(reg.len(), 1);
    assert!(reg.surface("short.yuv").is_none());
}

#[test]
fn reinsert_replaces_bytes_in_place() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.insert("a.yuv", gray_yuv(2, 2), None).unwrap();

    let px = (2usize * 2) * 3 / 2;
    reg.insert("a.yuv", vec![255u8; px], None).unwrap();
    assert_eq!(reg.len(), 1);
    // Y=255 with saturated chroma still clamps into range; just check it changed.
    assert_ne!(reg.surface("a.yuv").unwrap().pixel(0, 0), [128, 128, 128, 255]);
}

#[test]
fn dimension_change_redecodes_every_raw_entry() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.insert("a.yuv", gray_yuv(4, 4), None).unwrap();
    reg.insert("b.yuv", gray_yuv(4, 4), None).unwrap();

    reg.set_dimensions(Dimensions::new(4, 4).unwrap());
    for name in ["a.yuv", "b.yuv"] {
        let s = reg.surface(name).unwrap();
        assert_eq!((s.width(), s.height()), (4, 4));
        assert_eq!(s.pixels().len(), 4 * 4 * 4);
        assert!(s.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }
}

#[test]
fn redecode_failure_is_isolated_per_surface() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.insert("big.yuv", gray_yuv(4, 4), None).unwrap();
    reg.insert("small.yuv", gray_yuv(2, 2), None).unwrap();

    // small.yuv cannot satisfy 4x4; it must stay stale while big.yuv updates.
    reg.set_dimensions(Dimensions::new(4, 4).unwrap());

    let big = reg.surface("big.yuv").unwrap();
    assert_eq!((big.width(), big.height()), (4, 4));
    let small = reg.surface("small.yuv").unwrap();
    assert_eq!((small.width(), small.height()), (2, 2));
}

#[test]
fn remove_evicts_exactly_one_entry() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.insert("a.yuv", gray_yuv(2, 2), None).unwrap();
    reg.insert("b.yuv", gray_yuv(2, 2), None).unwrap();

    assert!(reg.remove("a.yuv"));
    assert!(!reg.remove("a.yuv"));
    assert_eq!(reg.len(), 1);
    assert!(reg.surface("b.yuv").is_some());
}

#[test]
fn encoded_insert_adopts_natural_dimensions() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.insert("raw.yuv", gray_yuv(6, 4), None).unwrap();
    reg.insert("shot.png", png_bytes(6, 4), Some("image/png"))
        .unwrap();

    assert_eq!(reg.config().dimensions, Dimensions::new(6, 4).unwrap());
    assert_eq!(reg.kind("shot.png"), Some(SourceKind::Encoded));

    let png = reg.surface("shot.png").unwrap();
    assert_eq!((png.width(), png.height()), (6, 4));
    assert_eq!(png.pixel(0, 0), [10, 20, 30, 255]);

    // The raw entry was re-decoded against the adopted dimensions.
    let raw = reg.surface("raw.yuv").unwrap();
    assert_eq!((raw.width(), raw.height()), (6, 4));
}

#[test]
fn set_zoom_updates_shared_config() {
    let mut reg = SurfaceRegistry::new(config(2, 2));
    reg.set_zoom(ZoomLevel::new(4).unwrap());
    assert_eq!(reg.config().zoom.get(), 4);
}
