//! Cube-space directions and the pixel-to-direction mapping for each face.

use std::ops::Add;

use glam::DVec3;
use thiserror::Error;

use super::face::CubeFace;

/// Errors raised by direction arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Cannot normalize a zero-length vector")]
    NormalizeOfZeroVector,
}

/// A direction in cube space. Not necessarily unit length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction3(DVec3);

impl Direction3 {
    pub const ZERO: Direction3 = Direction3(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    pub fn z(self) -> f64 {
        self.0.z
    }

    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Scales the direction to unit length.
    ///
    /// Fails for zero-length (or non-finite) vectors instead of producing NaNs.
    pub fn normalize(self) -> Result<Direction3, GeometryError> {
        self.0
            .try_normalize()
            .map(Direction3)
            .ok_or(GeometryError::NormalizeOfZeroVector)
    }

    /// Element-wise product.
    pub fn mul(self, other: Direction3) -> Direction3 {
        Direction3(self.0 * other.0)
    }

    /// Adds `f` to every component.
    pub fn add_scalar(self, f: f64) -> Direction3 {
        Direction3(self.0 + DVec3::splat(f))
    }

    pub fn as_dvec3(self) -> DVec3 {
        self.0
    }
}

impl Add for Direction3 {
    type Output = Direction3;

    fn add(self, other: Direction3) -> Direction3 {
        Direction3(self.0 + other.0)
    }
}

impl From<DVec3> for Direction3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

/// Maps output pixel `(i, j)` on `face` to a direction in cube space.
///
/// Pixel coordinates are scaled to `a = 2i/size`, `b = 2j/size` in [0, 2),
/// so pixel `(size/2, size/2)` lands on the face's axis.
///
/// # Arguments
/// * `i` - Column in [0, face_size)
/// * `j` - Row in [0, face_size)
/// * `face` - The cube face being rendered
/// * `face_size` - Edge length of the face in pixels, must be > 0
pub fn map_face_to_direction(i: u32, j: u32, face: CubeFace, face_size: u32) -> Direction3 {
    debug_assert!(face_size > 0);
    let a = 2.0 * i as f64 / face_size as f64;
    let b = 2.0 * j as f64 / face_size as f64;

    match face {
        CubeFace::PosY => Direction3::new(1.0 - a, 1.0, 1.0 - b),
        CubeFace::NegY => Direction3::new(a - 1.0, -1.0, 1.0 - b),
        CubeFace::PosZ => Direction3::new(b - 1.0, a - 1.0, 1.0),
        CubeFace::NegZ => Direction3::new(1.0 - b, a - 1.0, -1.0),
        CubeFace::PosX => Direction3::new(1.0, a - 1.0, 1.0 - b),
        CubeFace::NegX => Direction3::new(-1.0, 1.0 - a, 1.0 - b),
    }
}

/// Same as [`map_face_to_direction`] for a raw face index.
///
/// Indices outside 0..5 yield the zero vector.
pub fn map_index_to_direction(i: u32, j: u32, face_index: usize, face_size: u32) -> Direction3 {
    match CubeFace::from_index(face_index) {
        Some(face) => map_face_to_direction(i, j, face, face_size),
        None => Direction3::ZERO,
    }
}
