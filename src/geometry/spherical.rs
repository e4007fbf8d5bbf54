//! Longitude/latitude projection of cube-space directions onto the panorama.

use std::f64::consts::{FRAC_PI_2, PI};

use super::direction::Direction3;

/// Normalized texture coordinates on the equirectangular source.
///
/// `u` follows longitude and spans [0, 2] straight out of
/// [`map_direction_to_uv`]; wrapping is left to the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// Projects a direction onto panorama UV coordinates.
///
/// Only the angle of `dir` matters, so it need not be normalized. The zero
/// vector maps to `(1.0, 0.5)` since `atan2(0, 0)` is zero.
pub fn map_direction_to_uv(dir: Direction3) -> Uv {
    let theta = dir.y().atan2(dir.x());
    let r = dir.x().hypot(dir.y());
    let phi = dir.z().atan2(r);

    Uv {
        u: (theta + PI) / PI,
        v: (FRAC_PI_2 - phi) / PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_uv(uv: Uv, u: f64, v: f64) {
        assert!(
            (uv.u - u).abs() < 1e-12 && (uv.v - v).abs() < 1e-12,
            "expected ({}, {}), got ({}, {})",
            u,
            v,
            uv.u,
            uv.v
        );
    }

    #[test]
    fn test_axis_directions() {
        assert_uv(map_direction_to_uv(Direction3::new(1.0, 0.0, 0.0)), 1.0, 0.5);
        assert_uv(map_direction_to_uv(Direction3::new(0.0, 1.0, 0.0)), 1.5, 0.5);
        assert_uv(map_direction_to_uv(Direction3::new(0.0, -1.0, 0.0)), 0.5, 0.5);
        assert_uv(map_direction_to_uv(Direction3::new(-1.0, 0.0, 0.0)), 2.0, 0.5);
    }

    #[test]
    fn test_poles() {
        // Longitude is undefined at the poles; atan2(0, 0) resolves it to u = 1.
        assert_uv(map_direction_to_uv(Direction3::new(0.0, 0.0, 1.0)), 1.0, 0.0);
        assert_uv(map_direction_to_uv(Direction3::new(0.0, 0.0, -1.0)), 1.0, 1.0);
    }

    #[test]
    fn test_magnitude_does_not_matter() {
        let d = Direction3::new(0.3, -0.7, 0.2);
        let a = map_direction_to_uv(d);
        let b = map_direction_to_uv(d.normalize().unwrap());
        assert!((a.u - b.u).abs() < 1e-12);
        assert!((a.v - b.v).abs() < 1e-12);
    }

    #[test]
    fn test_range() {
        for &(x, y, z) in &[
            (1.0, 1.0, 1.0),
            (-1.0, -1.0, -1.0),
            (0.2, -5.0, 3.0),
            (-4.0, 0.1, -0.3),
        ] {
            let uv = map_direction_to_uv(Direction3::new(x, y, z));
            assert!((0.0..=2.0).contains(&uv.u));
            assert!((0.0..=1.0).contains(&uv.v));
        }
    }
}
