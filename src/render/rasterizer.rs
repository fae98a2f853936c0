//! Incremental edge-function triangle scan conversion.
//!
//! For an edge from A to B, the edge function at point P is the doubled
//! signed area of the triangle (A, B, P):
//!
//! ```text
//! E(P) = (B.x - A.x) * (P.y - A.y) - (B.y - A.y) * (P.x - A.x)
//!      = A*P.x + B*P.y + C
//! with A = a.y - b.y,  B = b.x - a.x,  C = a.x * b.y - a.y * b.x
//! ```
//!
//! For a positively-wound triangle, a pixel is covered iff all three edge
//! functions are non-negative, and each value is proportional to the
//! barycentric weight of the vertex *opposite* its edge. Because the linear
//! coefficients are constant per edge, the function is evaluated once at the
//! bounding-box origin and then stepped by `+A` per unit x and `+B` per unit
//! y instead of being recomputed per pixel.
//!
//! Screen coordinates arrive floored to integers, so every edge value is an
//! exact integer-valued f32 (bounded well below 2^24 for any practical
//! framebuffer) and incremental stepping matches direct evaluation bit for
//! bit.

use crate::math::vec2::Vec2;

/// On-edge pixel ownership policy.
///
/// Pixels exactly on a triangle edge have an edge value of zero. With the
/// inclusive rule, both triangles sharing such an edge consider the pixel
/// covered, so shared edges may double-draw. The top-left rule breaks the tie
/// the way hardware rasterizers do: a pixel on an edge belongs to the
/// triangle for which that edge is a top or left edge, so adjacent triangles
/// draw every shared-edge pixel exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Cover every pixel with all edge values `>= 0`, including on-edge ones.
    #[default]
    Inclusive,
    /// Top-left tie-break for on-edge pixels. Assumes y grows downward on
    /// screen (the default [`ScreenOrigin::TopLeft`] mapping).
    ///
    /// [`ScreenOrigin::TopLeft`]: super::ScreenOrigin::TopLeft
    TopLeft,
}

/// One edge's linear coefficients: `E(x, y) = a*x + b*y + c`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFunction {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EdgeFunction {
    /// Coefficients for the edge running from `from` to `to`.
    pub fn between(from: Vec2, to: Vec2) -> Self {
        Self {
            a: from.y - to.y,
            b: to.x - from.x,
            c: from.x * to.y - from.y * to.x,
        }
    }

    /// Direct (non-incremental) evaluation at a point.
    #[inline]
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }
}

/// True when the edge from `from` to `to` is a top or left edge of a
/// positively-wound triangle in y-down screen coordinates: horizontal and
/// running rightward, or running upward.
fn is_top_left(from: Vec2, to: Vec2) -> bool {
    (from.y == to.y && to.x > from.x) || to.y < from.y
}

/// Scan-converts a positively-wound screen-space triangle.
///
/// Calls `visitor` once per covered pixel with the integer pixel coordinate
/// and the three raw edge-function values, ordered so that `weights[i]`
/// belongs to `points[i]` (each value comes from the edge opposite that
/// vertex). The weights are unnormalized; dividing by the triangle's doubled
/// area turns them into barycentric coordinates.
///
/// The bounding box is clamped to `[0, width-1] x [0, height-1]`, so the
/// visitor never sees an out-of-bounds coordinate. Callers must normalize
/// winding first; for a negatively-wound triangle nothing is covered.
pub fn rasterize<F>(points: &[Vec2; 3], width: u32, height: u32, fill_rule: FillRule, mut visitor: F)
where
    F: FnMut(i32, i32, [f32; 3]),
{
    let [v0, v1, v2] = *points;

    // weights[i] = edge function of the edge opposite vertex i
    let edges = [
        EdgeFunction::between(v1, v2),
        EdgeFunction::between(v2, v0),
        EdgeFunction::between(v0, v1),
    ];

    let bias = match fill_rule {
        FillRule::Inclusive => [0.0; 3],
        // Coordinates are integral, so excluding E == 0 is exactly E >= 1.
        FillRule::TopLeft => [
            if is_top_left(v1, v2) { 0.0 } else { 1.0 },
            if is_top_left(v2, v0) { 0.0 } else { 1.0 },
            if is_top_left(v0, v1) { 0.0 } else { 1.0 },
        ],
    };

    // Bounding box, clamped to the framebuffer.
    let min_x = (v0.x.min(v1.x).min(v2.x) as i32).max(0);
    let min_y = (v0.y.min(v1.y).min(v2.y) as i32).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x) as i32).min(width as i32 - 1);
    let max_y = (v0.y.max(v1.y).max(v2.y) as i32).min(height as i32 - 1);
    if min_x > max_x || min_y > max_y {
        return;
    }

    // Edge values at the box origin; everything else is reached by stepping.
    let mut row = [
        edges[0].eval(min_x as f32, min_y as f32),
        edges[1].eval(min_x as f32, min_y as f32),
        edges[2].eval(min_x as f32, min_y as f32),
    ];

    for y in min_y..=max_y {
        let mut e = row;
        for x in min_x..=max_x {
            if e[0] >= bias[0] && e[1] >= bias[1] && e[2] >= bias[2] {
                visitor(x, y, e);
            }
            e[0] += edges[0].a;
            e[1] += edges[1].a;
            e[2] += edges[2].a;
        }
        row[0] += edges[0].b;
        row[1] += edges[1].b;
        row[2] += edges[2].b;
    }
}
