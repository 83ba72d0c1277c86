//! Registry of named drawable surfaces keyed by stable identifiers.

use std::collections::HashMap;

use crate::decode::encoded::decode_encoded_image;
use crate::decode::yuv420p::decode_yuv420p;
use crate::foundation::core::{Dimensions, ViewerConfig, ZoomLevel};
use crate::foundation::error::YuvLensResult;
use crate::render::surface::Surface;

/// How a named byte buffer is interpreted, from the caller-supplied content-type tag.
/// This core performs no content sniffing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Raw planar YUV420p, decoded against the shared [`Dimensions`].
    RawYuv420p,
    /// Standard encoded image, decoded by its own header; its natural size drives the
    /// shared dimensions.
    Encoded,
}

impl SourceKind {
    /// Classify a buffer from its MIME/content-type tag. Anything under `image/` is
    /// treated as an encoded image; everything else as raw planar YUV.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(t) if t.starts_with("image/") => Self::Encoded,
            _ => Self::RawYuv420p,
        }
    }
}

struct SurfaceEntry {
    bytes: Vec<u8>,
    kind: SourceKind,
    surface: Surface,
}

/// Owns the shared [`ViewerConfig`] and one drawable [`Surface`] per loaded buffer.
///
/// Dimension changes re-decode every raw entry in full — decode is cheap and synchronous
/// relative to a single frame, so there is no incremental update and nothing to cancel.
/// A failing entry is logged and skipped; it never blocks the others.
pub struct SurfaceRegistry {
    config: ViewerConfig,
    entries: HashMap<String, SurfaceEntry>,
}

impl SurfaceRegistry {
    /// Create an empty registry around an explicit shared configuration.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Insert or replace a named byte buffer and decode it onto its surface.
    ///
    /// Raw buffers decode against the shared dimensions. Encoded images adopt their
    /// natural dimensions into the shared config, which re-decodes every raw entry —
    /// the one place dimensions flow from data instead of user input.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> YuvLensResult<()> {
        let name = name.into();
        let kind = SourceKind::from_content_type(content_type);
        tracing::debug!(%name, ?kind, len = bytes.len(), "insert surface");

        match kind {
            SourceKind::RawYuv420p => {
                let frame = decode_yuv420p(&bytes, self.config.dimensions)?;
                self.entry_mut(name, bytes, kind).surface.blit_frame(frame);
            }
            SourceKind::Encoded => {
                let frame = decode_encoded_image(&bytes)?;
                let natural = Dimensions::new(frame.width, frame.height)?;
                self.entry_mut(name, bytes, kind).surface.blit_frame(frame);
                self.set_dimensions(natural);
            }
        }
        Ok(())
    }

    /// Evict one named surface; other entries are untouched. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let existed = self.entries.remove(name).is_some();
        if existed {
            tracing::debug!(%name, "removed surface");
        }
        existed
    }

    /// Mutate the shared dimensions and re-decode every raw entry, in no guaranteed
    /// order. Encoded entries keep their natural raster.
    #[tracing::instrument(skip(self))]
    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.config.dimensions = dims;
        for (name, entry) in &mut self.entries {
            if entry.kind != SourceKind::RawYuv420p {
                continue;
            }
            match decode_yuv420p(&entry.bytes, dims) {
                Ok(frame) => entry.surface.blit_frame(frame),
                Err(err) => {
                    tracing::warn!(%name, %err, "re-decode failed; surface left stale");
                }
            }
        }
    }

    /// Mutate the shared zoom level, read by subsequent magnifier renders.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.config.zoom = zoom;
    }

    /// The shared configuration.
    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    /// Drawable surface for `name`, if loaded.
    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.entries.get(name).map(|e| &e.surface)
    }

    /// Interpretation kind recorded for `name`, if loaded.
    pub fn kind(&self, name: &str) -> Option<SourceKind> {
        self.entries.get(name).map(|e| e.kind)
    }

    /// Number of loaded surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no surface is loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over loaded surface names, in no guaranteed order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn entry_mut(&mut self, name: String, bytes: Vec<u8>, kind: SourceKind) -> &mut SurfaceEntry {
        let entry = self.entries.entry(name).or_insert_with(|| SurfaceEntry {
            bytes: Vec::new(),
            kind,
            surface: Surface::new(0, 0),
        });
        entry.bytes = bytes;
        entry.kind = kind;
        entry
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/registry.rs"]
mod tests;
