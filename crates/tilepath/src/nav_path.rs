use std::ops::Index;

use tilepath_core::Point;

/// An ordered sequence of tile steps.
///
/// After a successful search the first step is the start tile and the last
/// step is the target tile. The buffer can be reused across searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPath {
    steps: Vec<Point>,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Number of steps, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step `i`, counted from the start of the path.
    #[inline]
    pub fn step_at(&self, i: usize) -> Option<Point> {
        self.steps.get(i).copied()
    }

    /// X coordinate of step `i`. Panics if `i` is out of bounds.
    #[inline]
    pub fn x(&self, i: usize) -> i32 {
        self.steps[i].x
    }

    /// Y coordinate of step `i`. Panics if `i` is out of bounds.
    #[inline]
    pub fn y(&self, i: usize) -> i32 {
        self.steps[i].y
    }

    pub fn first(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    pub fn append_step(&mut self, x: i32, y: i32) {
        self.steps.push(Point::new(x, y));
    }

    pub fn prepend_step(&mut self, x: i32, y: i32) {
        self.steps.insert(0, Point::new(x, y));
    }

    pub fn reverse(&mut self) {
        self.steps.reverse();
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn contains(&self, p: Point) -> bool {
        self.steps.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.steps
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.steps.push(p);
    }
}

impl Index<usize> for NavPath {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.steps[i]
    }
}

impl<'a> IntoIterator for &'a NavPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<NavPath> for Vec<Point> {
    fn from(path: NavPath) -> Self {
        path.steps
    }
}

impl FromIterator<Point> for NavPath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_reverse_and_query() {
        let mut path = NavPath::new();
        path.append_step(2, 2);
        path.append_step(1, 2);
        path.append_step(1, 1);
        path.reverse();
        assert_eq!(path.len(), 3);
        assert_eq!(path.step_at(0), Some(Point::new(1, 1)));
        assert_eq!(path.step_at(2), Some(Point::new(2, 2)));
        assert_eq!(path.step_at(3), None);
        assert_eq!((path.x(1), path.y(1)), (1, 2));
        assert_eq!(path[1], Point::new(1, 2));
        assert_eq!(path.first(), Some(Point::new(1, 1)));
        assert_eq!(path.last(), Some(Point::new(2, 2)));
        assert!(path.contains(Point::new(1, 2)));
        assert!(!path.contains(Point::new(0, 0)));
    }

    #[test]
    fn prepend_puts_step_first() {
        let mut path = NavPath::new();
        path.append_step(5, 5);
        path.prepend_step(4, 5);
        assert_eq!(path.as_slice(), &[Point::new(4, 5), Point::new(5, 5)]);
    }

    #[test]
    fn clear_empties_for_reuse() {
        let mut path: NavPath = [Point::new(0, 0), Point::new(1, 0)].into_iter().collect();
        assert!(!path.is_empty());
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.first(), None);
        path.append_step(-3, 7);
        let steps: Vec<Point> = path.into();
        assert_eq!(steps, vec![Point::new(-3, 7)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn nav_path_round_trip() {
        let path: NavPath = [Point::new(0, 0), Point::new(0, 1)].into_iter().collect();
        let json = serde_json::to_string(&path).unwrap();
        let back: NavPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
