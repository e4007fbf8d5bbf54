//! Source raster and texture filtering.

mod bilinear;
mod color;
mod grid;

pub use bilinear::sample_bilinear;
pub use color::{clamp, Color3};
pub use grid::{GridError, PixelGrid};

#[cfg(test)]
pub(crate) use bilinear::weighted_sum;
