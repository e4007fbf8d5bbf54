//! Equirectangular panorama to cubemap conversion.
//!
//! This crate turns one 2:1 spherical panorama into the six square faces of
//! a skybox by inverse projection: each output pixel is mapped to a cube
//! direction, projected to longitude/latitude on the panorama and sampled
//! with bilinear filtering.

pub mod geometry;
pub mod sampling;
pub mod codec;
pub mod render;

pub use geometry::{CubeFace, Direction3, Uv};
pub use sampling::{Color3, PixelGrid};
pub use render::{convert_file, convert_panorama, ConvertError, ConvertOptions};
