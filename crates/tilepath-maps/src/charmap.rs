//! ASCII-art tile maps.

use std::cell::RefCell;
use std::f32::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use tilepath::{NavPath, SearchContext, TileMap};
use tilepath_core::{Point, Range};

use crate::tile::{MoverKind, Tile};

/// A tile map parsed from text, one character per tile.
///
/// Lines are separated by `'\n'` and must all have the same width. Diagonal
/// steps cost √2 times the tile cost. By default a diagonal step may slip
/// between two impassable tiles; see
/// [`with_corner_cutting`](Self::with_corner_cutting).
#[derive(Debug, Clone)]
pub struct CharMap {
    size: Point,
    tiles: Vec<Tile>,
    glyphs: Vec<char>,
    start: Option<Point>,
    target: Option<Point>,
    corner_cutting: bool,
    visits: RefCell<Vec<u32>>,
}

impl CharMap {
    /// Parse a map. Leading/trailing blank space around the whole text is
    /// ignored, as are `'\r'` line endings.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::new();
        let mut glyphs = Vec::new();
        let mut start = None;
        let mut target = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let line_width = line.chars().count();
            match width {
                None => width = Some(line_width),
                Some(w) if w != line_width => {
                    return Err(MapError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: line_width,
                    });
                }
                Some(_) => {}
            }

            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let Some(tile) = Tile::from_char(ch) else {
                    return Err(MapError::InvalidRune { ch, pos });
                };
                let marker = match ch {
                    'S' => Some(&mut start),
                    'T' => Some(&mut target),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if slot.is_some() {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    *slot = Some(pos);
                }
                tiles.push(tile);
                glyphs.push(ch);
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        Ok(Self {
            size: Point::new(width, height),
            visits: RefCell::new(vec![0; tiles.len()]),
            tiles,
            glyphs,
            start,
            target,
            corner_cutting: true,
        })
    }

    /// Allow or forbid diagonal steps that squeeze past an impassable
    /// orthogonal tile.
    pub fn with_corner_cutting(mut self, allow: bool) -> Self {
        self.corner_cutting = allow;
        self
    }

    pub fn corner_cutting(&self) -> bool {
        self.corner_cutting
    }

    /// Size as a `Point` (width = x, height = y).
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn bounds(&self) -> Range {
        Range::with_size(self.size.x, self.size.y)
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `T` marker, if any.
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.bounds().index_of(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Replace the tile at `p`. Does nothing if out of bounds. Floor costs
    /// outside what a map character can hold are clamped, see
    /// [`Tile::clamped`].
    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        let tile = tile.clamped();
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
            self.glyphs[i] = tile.to_char();
        }
    }

    fn passable(&self, p: Point, mover: MoverKind) -> bool {
        self.tile(p).is_some_and(|t| t.passable_for(mover))
    }

    /// How many times the finder evaluated tile `p` since the last
    /// [`reset_visits`](Self::reset_visits).
    pub fn visits(&self, p: Point) -> u32 {
        self.index(p).map_or(0, |i| self.visits.borrow()[i])
    }

    /// Number of tiles evaluated at least once.
    pub fn visited_tiles(&self) -> usize {
        self.visits.borrow().iter().filter(|&&v| v > 0).count()
    }

    pub fn reset_visits(&self) {
        self.visits.borrow_mut().fill(0);
    }

    /// Draw the map with `path` overlaid as `*`. The `S` and `T` markers stay
    /// visible.
    pub fn render_path(&self, path: &NavPath) -> String {
        let mut glyphs = self.glyphs.clone();
        for &p in path {
            if let Some(i) = self.index(p) {
                if !matches!(glyphs[i], 'S' | 'T') {
                    glyphs[i] = '*';
                }
            }
        }
        let mut out = String::with_capacity(glyphs.len() + self.size.y as usize);
        for row in glyphs.chunks(self.size.x.max(1) as usize) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl FromStr for CharMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CharMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&NavPath::new()))
    }
}

impl TileMap for CharMap {
    type Mover = MoverKind;

    fn width_in_tiles(&self) -> i32 {
        self.size.x
    }

    fn height_in_tiles(&self) -> i32 {
        self.size.y
    }

    fn blocked(&self, ctx: &SearchContext<'_, MoverKind>, to: Point) -> bool {
        let mover = *ctx.mover();
        if !self.passable(to, mover) {
            return true;
        }
        if self.corner_cutting {
            return false;
        }
        let from = ctx.source();
        if !(from.is_adjacent_to(to) && from.is_diagonal_to(to)) {
            return false;
        }
        !self.passable(Point::new(to.x, from.y), mover) || !self.passable(Point::new(from.x, to.y), mover)
    }

    fn cost(&self, ctx: &SearchContext<'_, MoverKind>, to: Point) -> f32 {
        let base = self
            .tile(to)
            .and_then(|t| t.cost_for(*ctx.mover()))
            .unwrap_or(f32::INFINITY);
        if ctx.source().is_diagonal_to(to) {
            base * SQRT_2
        } else {
            base
        }
    }

    fn visited(&self, p: Point) {
        if let Some(i) = self.index(p) {
            self.visits.borrow_mut()[i] += 1;
        }
    }
}

/// Errors that can occur when parsing a [`CharMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contains no tiles.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a known tile.
    InvalidRune { ch: char, pos: Point },
    /// A second `S` or `T` marker.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no tiles"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} tiles wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
