//! RGB colour values used during interpolation.

use std::ops::{Add, Mul};

use image::Rgba;

/// Clamps `x` into `[min, max]`.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

/// An RGB colour with real-valued channels on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }

    /// Channel-wise product.
    pub fn mul(self, other: Color3) -> Color3 {
        Color3::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    pub fn add_scalar(self, f: f64) -> Color3 {
        Color3::new(self.r + f, self.g + f, self.b + f)
    }

    pub fn clamp(self, min: f64, max: f64) -> Color3 {
        Color3::new(clamp(self.r, min, max), clamp(self.g, min, max), clamp(self.b, min, max))
    }

    /// Linear blend towards `other` by `t`.
    #[inline]
    pub fn lerp(self, other: Color3, t: f64) -> Color3 {
        self + (other + self * -1.0) * t
    }

    /// Truncates each channel to 8 bits, with alpha fixed at 255.
    ///
    /// Channels outside 0-255 saturate.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r as u8, self.g as u8, self.b as u8, 255])
    }
}

impl Add for Color3 {
    type Output = Color3;

    fn add(self, o: Color3) -> Color3 {
        Color3::new(self.r + o.r, self.g + o.g, self.b + o.b)
    }
}

impl Mul<f64> for Color3 {
    type Output = Color3;

    fn mul(self, s: f64) -> Color3 {
        Color3::new(self.r * s, self.g * s, self.b * s)
    }
}
