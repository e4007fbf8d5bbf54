//! Image decode/encode and output directory handling.
//!
//! The render core only sees [`PixelGrid`] going in and [`FaceImage`] coming
//! out; everything format-specific lives here.

mod png;

pub use png::{
    decode_panorama, encode_png, ensure_directory, load_panorama, CodecError, FaceImage,
    FaceWriter, PngFaceWriter,
};
