//! Read-only RGB raster holding the source panorama.

use image::{DynamicImage, RgbImage};
use thiserror::Error;

use super::color::Color3;

/// Errors that can occur when building a pixel grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Pixel grid must not be empty: {0}x{1}")]
    Empty(u32, u32),
    #[error("Pixel data length {actual} != expected {expected}")]
    DataLength { expected: usize, actual: usize },
}

/// An 8-bit RGB raster addressed by `(x, y)`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl PixelGrid {
    /// Wraps row-major RGB triples of a `width x height` raster.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty(width, height));
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(GridError::DataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid where every pixel has the same colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, GridError> {
        let len = (width as usize) * (height as usize);
        Self::new(width, height, vec![rgb; len])
    }

    /// Builds a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Converts a decoded image to 8-bit RGB, dropping alpha.
    ///
    /// Wider sample formats (16-bit, float) are rescaled to 0-255 by the
    /// `image` crate, so every grid shares the same channel range.
    pub fn from_image(img: &DynamicImage) -> Result<Self, GridError> {
        Self::from_rgb_image(&img.to_rgb8())
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self, GridError> {
        let pixels = img.pixels().map(|p| p.0).collect();
        Self::new(img.width(), img.height(), pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGB triple at `(x, y)`.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn color_at(&self, x: u32, y: u32) -> Color3 {
        Color3::from_rgb(self.get(x, y))
    }

    /// True for the canonical 2:1 equirectangular aspect.
    pub fn is_two_to_one(&self) -> bool {
        self.width as u64 == 2 * self.height as u64
    }
}
