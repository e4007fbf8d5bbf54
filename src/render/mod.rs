//! Skybox rendering.
//!
//! Drives the per-pixel chain (face pixel -> direction -> UV -> colour) over
//! all six faces and hands each finished face to a [`crate::codec::FaceWriter`].

mod config;
mod driver;

pub use config::{check_face_size, parse_face_size, ConvertOptions, MAX_FACE_SIZE};
pub use driver::{
    convert_file, convert_panorama, render_face, ConvertError, FaceRenderer, RenderState,
};
