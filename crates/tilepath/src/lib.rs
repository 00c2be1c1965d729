//! A* path search over fixed-size tile maps.
//!
//! The crate is built around [`AStarPathFinder`], which owns a reusable
//! [`SearchGrid`] of per-tile nodes and an indexed [`OpenList`]. Repeated
//! searches on maps of the same size allocate nothing beyond the returned
//! [`NavPath`].
//!
//! # Collaborators
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`TileMap`] | map size, per-move blocking and step cost |
//! | [`Heuristic`] | the estimate of the remaining cost to the target |
//!
//! Map queries receive a [`SearchContext`] describing the mover, the tile the
//! move starts from and how deep the search currently is.
//!
//! ```
//! use tilepath::{AStarPathFinder, FinderConfig, ManhattanHeuristic, Point, SearchContext, TileMap};
//!
//! struct Field;
//!
//! impl TileMap for Field {
//!     type Mover = ();
//!     fn width_in_tiles(&self) -> i32 { 5 }
//!     fn height_in_tiles(&self) -> i32 { 5 }
//!     fn blocked(&self, _ctx: &SearchContext<'_, ()>, to: Point) -> bool {
//!         to.x == 2 && to.y < 4
//!     }
//!     fn cost(&self, _ctx: &SearchContext<'_, ()>, _to: Point) -> f32 { 1.0 }
//! }
//!
//! let mut finder =
//!     AStarPathFinder::with_heuristic(5, 5, FinderConfig::default(), ManhattanHeuristic::default());
//! let path = finder.find_path(&Field, &(), Point::new(0, 0), Point::new(4, 4)).unwrap();
//! assert!(path.contains(Point::new(2, 4)));
//! ```

mod config;
mod distance;
mod finder;
mod grid;
mod heuristic;
mod nav_path;
mod open_list;
mod traits;

pub use config::{DEFAULT_MAX_SEARCH_DISTANCE, FinderConfig};
pub use distance::{euclidean, euclidean_squared, manhattan};
pub use finder::AStarPathFinder;
pub use grid::{NodeState, SearchGrid, SearchNode};
pub use heuristic::{
    ClosestHeuristic, ClosestSquaredHeuristic, Heuristic, HeuristicKind, ManhattanHeuristic,
    ParseHeuristicKindError,
};
pub use nav_path::NavPath;
pub use open_list::OpenList;
pub use traits::{SearchContext, TileMap};
pub use tilepath_core::{Point, Range};
