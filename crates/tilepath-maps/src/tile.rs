//! Tile kinds and the movers that walk over them.

use std::fmt;
use std::str::FromStr;

/// What a single map tile is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Walkable ground with the given step cost.
    Floor(u8),
    Wall,
    Water,
}

/// Step cost of water for movers that can swim.
pub const SWIM_COST: f32 = 2.0;

/// Highest floor cost a map character can express.
pub const MAX_FLOOR_COST: u8 = 9;

impl Tile {
    /// Decode a map character. `S` and `T` decode to plain floor.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | 'S' | 'T' => Some(Self::Floor(1)),
            ',' => Some(Self::Floor(2)),
            '1'..='9' => ch.to_digit(10).map(|d| Self::Floor(d as u8)),
            '#' => Some(Self::Wall),
            '~' => Some(Self::Water),
            _ => None,
        }
    }

    /// The same tile with a floor cost forced into `1..=MAX_FLOOR_COST`.
    pub fn clamped(self) -> Self {
        match self {
            Self::Floor(c) => Self::Floor(c.clamp(1, MAX_FLOOR_COST)),
            other => other,
        }
    }

    /// Canonical character for the tile. Floor costs are clamped first.
    pub fn to_char(self) -> char {
        match self.clamped() {
            Self::Floor(1) => '.',
            Self::Floor(2) => ',',
            Self::Floor(c) => char::from_digit(u32::from(c), 10).unwrap_or('.'),
            Self::Wall => '#',
            Self::Water => '~',
        }
    }

    /// Cost for `mover` to step onto this tile, or `None` if it cannot.
    pub fn cost_for(self, mover: MoverKind) -> Option<f32> {
        match (self, mover) {
            (Self::Floor(c), _) => Some(f32::from(c)),
            (Self::Water, MoverKind::Swimmer) => Some(SWIM_COST),
            (Self::Water, MoverKind::Walker) | (Self::Wall, _) => None,
        }
    }

    #[inline]
    pub fn passable_for(self, mover: MoverKind) -> bool {
        self.cost_for(mover).is_some()
    }
}

/// The kinds of unit a [`CharMap`](crate::CharMap) knows how to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MoverKind {
    #[default]
    Walker,
    /// Crosses water as well as land.
    Swimmer,
}

impl fmt::Display for MoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walker => f.write_str("walker"),
            Self::Swimmer => f.write_str("swimmer"),
        }
    }
}

/// Error returned when a mover name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoverKindError(pub String);

impl fmt::Display for ParseMoverKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mover \u{201c}{}\u{201d} (expected walker or swimmer)", self.0)
    }
}

impl std::error::Error for ParseMoverKindError {}

impl FromStr for MoverKind {
    type Err = ParseMoverKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walker" => Ok(Self::Walker),
            "swimmer" => Ok(Self::Swimmer),
            _ => Err(ParseMoverKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_chars() {
        assert_eq!(Tile::from_char('.'), Some(Tile::Floor(1)));
        assert_eq!(Tile::from_char('S'), Some(Tile::Floor(1)));
        assert_eq!(Tile::from_char(','), Some(Tile::Floor(2)));
        assert_eq!(Tile::from_char('7'), Some(Tile::Floor(7)));
        assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_char('~'), Some(Tile::Water));
        assert_eq!(Tile::from_char('0'), None);
        assert_eq!(Tile::from_char('x'), None);
    }

    #[test]
    fn chars_round_trip() {
        for ch in ['.', ',', '3', '9', '#', '~'] {
            assert_eq!(Tile::from_char(ch).map(Tile::to_char), Some(ch));
        }
    }

    #[test]
    fn out_of_range_costs_clamp() {
        assert_eq!(Tile::Floor(0).clamped(), Tile::Floor(1));
        assert_eq!(Tile::Floor(12).clamped(), Tile::Floor(9));
        assert_eq!(Tile::Wall.clamped(), Tile::Wall);
        for tile in [Tile::Floor(0), Tile::Floor(12), Tile::Floor(5)] {
            assert_eq!(Tile::from_char(tile.to_char()), Some(tile.clamped()));
        }
    }

    #[test]
    fn water_only_for_swimmers() {
        assert_eq!(Tile::Water.cost_for(MoverKind::Walker), None);
        assert_eq!(Tile::Water.cost_for(MoverKind::Swimmer), Some(SWIM_COST));
        assert!(!Tile::Wall.passable_for(MoverKind::Swimmer));
        assert_eq!(Tile::Floor(4).cost_for(MoverKind::Walker), Some(4.0));
    }

    #[test]
    fn parse_mover_names() {
        assert_eq!("walker".parse(), Ok(MoverKind::Walker));
        assert_eq!(" Swimmer ".parse(), Ok(MoverKind::Swimmer));
        assert!("flyer".parse::<MoverKind>().is_err());
        assert_eq!(MoverKind::Swimmer.to_string(), "swimmer");
    }
}
