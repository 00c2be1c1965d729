//! Pluggable cost estimators for the A* search.
//!
//! A heuristic guesses the remaining cost from a tile to the target. For the
//! finder to return shortest paths the guess must never exceed the true
//! remaining cost (it must be *admissible*). Whether a built-in estimator is
//! admissible depends on the map's step costs:
//!
//! | Heuristic | Admissible when |
//! |---|---|
//! | [`ClosestHeuristic`] | every step costs at least its length (1 orthogonal, √2 diagonal) |
//! | [`ManhattanHeuristic`] | 4-way movement, every step costs at least `min_cost` |
//! | [`ClosestSquaredHeuristic`] | never in general; it overestimates past one tile and trades optimality for fewer expansions |

use std::fmt;
use std::str::FromStr;

use tilepath_core::Point;

use crate::distance;
use crate::traits::TileMap;

/// Estimates the cost of reaching `target` from `from`.
pub trait Heuristic<M: TileMap + ?Sized> {
    fn estimate(&self, map: &M, mover: &M::Mover, from: Point, target: Point) -> f32;
}

/// Straight-line (Euclidean) distance to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosestHeuristic;

impl<M: TileMap + ?Sized> Heuristic<M> for ClosestHeuristic {
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, target: Point) -> f32 {
        distance::euclidean(from, target)
    }
}

/// Squared straight-line distance to the target. Avoids the square root.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosestSquaredHeuristic;

impl<M: TileMap + ?Sized> Heuristic<M> for ClosestSquaredHeuristic {
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, target: Point) -> f32 {
        distance::euclidean_squared(from, target)
    }
}

/// Manhattan distance to the target, scaled by the cheapest possible step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManhattanHeuristic {
    min_cost: f32,
}

impl ManhattanHeuristic {
    /// `min_cost` is the cheapest step any tile of the map can cost.
    pub fn new(min_cost: f32) -> Self {
        Self { min_cost }
    }

    pub fn min_cost(&self) -> f32 {
        self.min_cost
    }
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<M: TileMap + ?Sized> Heuristic<M> for ManhattanHeuristic {
    fn estimate(&self, _map: &M, _mover: &M::Mover, from: Point, target: Point) -> f32 {
        self.min_cost * distance::manhattan(from, target) as f32
    }
}

/// Selects one of the built-in heuristics by name, e.g. from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HeuristicKind {
    #[default]
    Closest,
    ClosestSquared,
    Manhattan,
}

impl<M: TileMap + ?Sized> Heuristic<M> for HeuristicKind {
    fn estimate(&self, map: &M, mover: &M::Mover, from: Point, target: Point) -> f32 {
        match self {
            Self::Closest => ClosestHeuristic.estimate(map, mover, from, target),
            Self::ClosestSquared => ClosestSquaredHeuristic.estimate(map, mover, from, target),
            Self::Manhattan => ManhattanHeuristic::default().estimate(map, mover, from, target),
        }
    }
}

impl HeuristicKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Closest => "closest",
            Self::ClosestSquared => "closest_squared",
            Self::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a heuristic name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicKindError(pub String);

impl fmt::Display for ParseHeuristicKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic \u{201c}{}\u{201d} (expected closest, closest_squared or manhattan)",
            self.0
        )
    }
}

impl std::error::Error for ParseHeuristicKindError {}

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicKindError;

    /// Accepts `snake_case` or `kebab-case` names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "closest" => Ok(Self::Closest),
            "closest_squared" => Ok(Self::ClosestSquared),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(ParseHeuristicKindError(s.to_string())),
        }
    }
}

/// Any closure is a heuristic, including boxed ones, which is how a
/// `dyn Heuristic` is handed to a finder.
impl<M, F> Heuristic<M> for F
where
    M: TileMap + ?Sized,
    F: Fn(&M, &M::Mover, Point, Point) -> f32,
{
    fn estimate(&self, map: &M, mover: &M::Mover, from: Point, target: Point) -> f32 {
        self(map, mover, from, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SearchContext;

    struct Open(i32);

    impl TileMap for Open {
        type Mover = ();

        fn width_in_tiles(&self) -> i32 {
            self.0
        }

        fn height_in_tiles(&self) -> i32 {
            self.0
        }

        fn blocked(&self, _ctx: &SearchContext<'_, ()>, _to: Point) -> bool {
            false
        }

        fn cost(&self, _ctx: &SearchContext<'_, ()>, _to: Point) -> f32 {
            1.0
        }
    }

    const FROM: Point = Point::new(0, 0);
    const TO: Point = Point::new(3, 4);

    #[test]
    fn builtin_estimates() {
        let m = Open(10);
        assert_eq!(ClosestHeuristic.estimate(&m, &(), FROM, TO), 5.0);
        assert_eq!(ClosestSquaredHeuristic.estimate(&m, &(), FROM, TO), 25.0);
        assert_eq!(ManhattanHeuristic::default().estimate(&m, &(), FROM, TO), 7.0);
        assert_eq!(ManhattanHeuristic::new(0.5).estimate(&m, &(), FROM, TO), 3.5);
    }

    #[test]
    fn kind_dispatches_to_builtin() {
        let m = Open(10);
        assert_eq!(HeuristicKind::Closest.estimate(&m, &(), FROM, TO), 5.0);
        assert_eq!(HeuristicKind::ClosestSquared.estimate(&m, &(), FROM, TO), 25.0);
        assert_eq!(HeuristicKind::Manhattan.estimate(&m, &(), FROM, TO), 7.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let m = Open(10);
        let zero = |_: &Open, _: &(), _: Point, _: Point| 0.0_f32;
        assert_eq!(zero.estimate(&m, &(), FROM, TO), 0.0);

        let scaled = |_: &Open, _: &(), a: Point, b: Point| 2.0 * distance::manhattan(a, b) as f32;
        assert_eq!(scaled.estimate(&m, &(), FROM, TO), 14.0);
    }

    #[test]
    fn boxed_closures_dispatch_dynamically() {
        let m = Open(10);
        let inner: Box<dyn Heuristic<Open>> = Box::new(ManhattanHeuristic::new(2.0));
        let boxed: Box<dyn Fn(&Open, &(), Point, Point) -> f32> =
            Box::new(move |map: &Open, mover: &(), a: Point, b: Point| {
                inner.estimate(map, mover, a, b)
            });
        assert_eq!(boxed.estimate(&m, &(), FROM, TO), 14.0);
    }

    #[test]
    fn kind_names() {
        assert_eq!("closest".parse(), Ok(HeuristicKind::Closest));
        assert_eq!("closest-squared".parse(), Ok(HeuristicKind::ClosestSquared));
        assert_eq!(" Manhattan".parse(), Ok(HeuristicKind::Manhattan));
        let err = "octile".parse::<HeuristicKind>().unwrap_err();
        assert!(err.to_string().contains("octile"));
        for kind in [
            HeuristicKind::Closest,
            HeuristicKind::ClosestSquared,
            HeuristicKind::Manhattan,
        ] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn estimates_vanish_at_target() {
        let m = Open(10);
        for kind in [
            HeuristicKind::Closest,
            HeuristicKind::ClosestSquared,
            HeuristicKind::Manhattan,
        ] {
            assert_eq!(kind.estimate(&m, &(), TO, TO), 0.0);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kind_uses_snake_case_names() {
        let json = serde_json::to_string(&HeuristicKind::ClosestSquared).unwrap();
        assert_eq!(json, "\"closest_squared\"");
        let back: HeuristicKind = serde_json::from_str("\"manhattan\"").unwrap();
        assert_eq!(back, HeuristicKind::Manhattan);
    }
}
