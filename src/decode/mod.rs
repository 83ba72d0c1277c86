//! Byte-buffer decoders: raw planar YUV420p and the encoded-image pass-through.

pub mod encoded;
pub mod yuv420p;
