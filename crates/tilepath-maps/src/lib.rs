//! Ready-made tile maps for the *tilepath* finder.
//!
//! [`CharMap`] parses ASCII art into a [`TileMap`](tilepath::TileMap), which
//! makes it handy for tests, examples, and small tools:
//!
//! | Char | Tile |
//! |---|---|
//! | `.` | floor, cost 1 |
//! | `,` | grass, cost 2 |
//! | `1`–`9` | floor with that cost |
//! | `#` | wall |
//! | `~` | water, only crossed by [`MoverKind::Swimmer`] |
//! | `S` / `T` | floor marking the start / target |

pub mod charmap;
pub mod tile;

pub use charmap::{CharMap, MapError};
pub use tile::{MoverKind, ParseMoverKindError, Tile};
