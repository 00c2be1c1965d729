//! Tile coordinates and the rectangles that bound tile maps.
//!
//! X grows to the right and Y grows downwards. A map of `width × height`
//! tiles spans [`Range::with_size`]`(width, height)`, and its tiles are
//! numbered row by row from the top-left corner.

use std::fmt;
use std::ops::{Add, Sub};

/// A tile position on a map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when the two tiles differ in both coordinates. For neighbouring
    /// tiles this means the step between them is diagonal.
    #[inline]
    pub const fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// True when `other` is one of the eight tiles surrounding `self`.
    #[inline]
    pub const fn is_adjacent_to(self, other: Point) -> bool {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx != 0 || dy != 0) && dx.abs() <= 1 && dy.abs() <= 1
    }

    /// Tiles sharing an edge with `self`, west, north, south, east.
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y),
            Point::new(x, y - 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y),
        ]
    }

    /// Tiles sharing an edge or a corner with `self`, column by column from
    /// the west.
    pub fn neighbors_8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y - 1),
            Point::new(x - 1, y),
            Point::new(x - 1, y + 1),
            Point::new(x, y - 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y - 1),
            Point::new(x + 1, y),
            Point::new(x + 1, y + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rectangle of tiles from `min` (included) to `max` (excluded).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Bounds of a `width × height` map. Negative sizes give an empty range.
    pub fn with_size(width: i32, height: i32) -> Self {
        Range {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of tiles covered.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major position of `p` among the covered tiles, or `None` when
    /// `p` lies outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let rel = p - self.min;
        Some(rel.y as usize * self.width() as usize + rel.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn point_at(self, index: usize) -> Option<Point> {
        if index >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(Point::new(
            self.min.x + (index % w) as i32,
            self.min.y + (index / w) as i32,
        ))
    }

    /// Covered tiles in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}

/// Iterator over the tiles of a [`Range`], see [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.range.point_at(self.next)?;
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        assert!(p.is_diagonal_to(Point::new(3, 1)));
        assert!(!p.is_diagonal_to(Point::new(2, 5)));
        assert!(p.is_adjacent_to(Point::new(1, 3)));
        assert!(!p.is_adjacent_to(p));
        assert!(!p.is_adjacent_to(Point::new(4, 2)));
        for n in p.neighbors_8() {
            assert!(p.is_adjacent_to(n));
        }
        for n in p.neighbors_4() {
            assert!(p.is_adjacent_to(n) && !p.is_diagonal_to(n));
        }
    }

    #[test]
    fn neighbour_order_is_column_major() {
        let n = Point::ZERO.neighbors_8();
        let mut sorted = n;
        sorted.sort_by_key(|p| (p.x, p.y));
        assert_eq!(n, sorted);
    }

    #[test]
    fn offsets() {
        let a = Point::from((1, 2));
        assert_eq!(a + Point::new(3, -1), Point::new(4, 1));
        assert_eq!(Point::new(4, 1) - a, Point::new(3, -1));
        assert_eq!(a.to_string(), "(1, 2)");
    }

    #[test]
    fn map_bounds() {
        let r = Range::with_size(4, 3);
        assert_eq!((r.width(), r.height(), r.len()), (4, 3, 12));
        assert!(r.contains(Point::new(3, 2)));
        assert!(!r.contains(Point::new(4, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert!(Range::with_size(-2, 5).is_empty());
        assert_eq!(Range::with_size(0, 5).len(), 0);
    }

    #[test]
    fn row_major_indexing() {
        let r = Range {
            min: Point::new(1, 1),
            max: Point::new(4, 3),
        };
        assert_eq!(r.index_of(Point::new(1, 1)), Some(0));
        assert_eq!(r.index_of(Point::new(3, 2)), Some(5));
        assert_eq!(r.index_of(Point::ZERO), None);
        assert_eq!(r.point_at(5), Some(Point::new(3, 2)));
        assert_eq!(r.point_at(6), None);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
        }
        assert_eq!(r.iter().len(), 6);
        assert_eq!(Range::with_size(0, 3).iter().next(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn bounds_serialize_as_corners() {
        let r = Range::with_size(3, 2);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["max"]["x"], 3);
        let back: Range = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
