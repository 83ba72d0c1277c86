//! Yuvlens renders raw planar YUV420p frame dumps (and standard encoded images) into
//! RGBA rasters for manual inspection, with an interactive pixel-level magnifier.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: a caller-supplied content-type tag picks raw-YUV vs encoded-image
//!    interpretation (no content sniffing)
//! 2. **Decode**: [`decode_yuv420p`] / [`decode_encoded_image`] turn bytes into a
//!    [`FrameRgba`]
//! 3. **Blit**: the frame is committed to a named [`Surface`] inside the
//!    [`SurfaceRegistry`], which also owns the shared [`ViewerConfig`]
//! 4. **Magnify**: pointer/touch events normalize to a [`CursorSample`]; the
//!    [`Magnifier`] rasterizes a zoomed, vignette-masked crop of the hovered surface
//!    into its overlay
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: decoding is a pure, synchronous, re-entrant function
//!   of `(bytes, dimensions)`; identical inputs produce byte-identical rasters.
//! - **No IO in the core**: callers hand over fully-read byte buffers; file selection,
//!   layout, and event wiring live in the shell.
//! - **Premultiplied RGBA8** rasters end-to-end (decoded video frames are fully opaque,
//!   so straight and premultiplied coincide for them).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod decode;
mod foundation;
mod input;
mod render;
mod viewer;

pub use kurbo::{Point, Rect};

pub use decode::encoded::decode_encoded_image;
pub use decode::yuv420p::{decode_yuv420p, yuv420p_required_len};
pub use foundation::core::{Dimensions, FrameRgba, ViewerConfig, ZoomLevel};
pub use foundation::error::{YuvLensError, YuvLensResult};
pub use input::cursor::{CursorSample, InputEvent, TouchPoint};
pub use render::magnifier::{Magnifier, OverlayPlacement, Visibility, crop_rect};
pub use render::surface::Surface;
pub use viewer::registry::{SourceKind, SurfaceRegistry};
