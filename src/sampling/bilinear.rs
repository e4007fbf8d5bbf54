//! Bilinear lookup into the equirectangular source.

use crate::geometry::Uv;

use super::color::Color3;
use super::grid::PixelGrid;

/// Samples `grid` at fractional texture coordinates with bilinear filtering.
///
/// Both `u` and `v` are scaled by the grid *height*, which lines up with
/// the image only for 2:1 panoramas where `u` in [0, 2] spans the full
/// width. Other aspects are sampled the same way and come out stretched.
///
/// The left neighbour column wraps around the width so the 360° seam
/// blends; the right neighbour and both rows clamp to the edge. The
/// returned channels are clamped to [0, 255].
pub fn sample_bilinear(grid: &PixelGrid, uv: Uv) -> Color3 {
    let w = grid.width() as i64;
    let h = grid.height() as i64;

    let xf = uv.u * h as f64;
    let yf = uv.v * h as f64;

    let xb = xf.floor();
    let yb = yf.floor();
    let diffx = xf - xb;
    let diffy = yf - yb;

    let x = xb as i64;
    let y = yb as i64;

    // Casts saturate for huge coordinates, so the +1 neighbours must too.
    let x_wrap = x.rem_euclid(w) as u32;
    let x2 = clamp_index(x.saturating_add(1), w);
    let y1 = clamp_index(y, h);
    let y2 = clamp_index(y.saturating_add(1), h);

    let a = grid.color_at(x_wrap, y1);
    let b = grid.color_at(x2, y1);
    let c = grid.color_at(x_wrap, y2);
    let d = grid.color_at(x2, y2);

    // Equivalent to a(1-dx)(1-dy) + b dx(1-dy) + c(1-dx)dy + d dx dy.
    let top = a.lerp(b, diffx);
    let bottom = c.lerp(d, diffx);
    top.lerp(bottom, diffy).clamp(0.0, 255.0)
}

#[inline]
fn clamp_index(i: i64, len: i64) -> u32 {
    i.clamp(0, len - 1) as u32
}

/// Evaluates the four-tap weighted sum directly. Test oracle only.
#[cfg(test)]
pub(crate) fn weighted_sum(a: Color3, b: Color3, c: Color3, d: Color3, dx: f64, dy: f64) -> Color3 {
    (a * ((1.0 - dx) * (1.0 - dy)) + b * (dx * (1.0 - dy)) + c * ((1.0 - dx) * dy) + d * (dx * dy))
        .clamp(0.0, 255.0)
}
