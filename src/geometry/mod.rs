//! Cube-face geometry.
//!
//! Maps output pixels on each skybox face to cube-space directions, and
//! directions to longitude/latitude texture coordinates on the panorama.

mod face;
mod direction;
mod spherical;

pub use face::CubeFace;
pub use direction::{Direction3, GeometryError, map_face_to_direction, map_index_to_direction};
pub use spherical::{Uv, map_direction_to_uv};
