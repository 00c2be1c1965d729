//! Grid metrics used by the built-in heuristics.

use tilepath_core::Point;

#[inline]
fn delta(a: Point, b: Point) -> (i32, i32) {
    let d = b - a;
    (d.x.abs(), d.y.abs())
}

/// Steps between two tiles when only orthogonal moves are allowed.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = delta(a, b);
    dx + dy
}

/// Square of the straight-line distance.
#[inline]
pub fn euclidean_squared(a: Point, b: Point) -> f32 {
    let (dx, dy) = delta(a, b);
    (dx * dx + dy * dy) as f32
}

/// Straight-line distance between tile centres.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    euclidean_squared(a, b).sqrt()
}
