//! Integer geometry for tile grids.
//!
//! This crate provides the coordinate types shared across the *tilepath*
//! workspace: a 2D tile coordinate ([`Point`]) and a half-open rectangle of
//! tiles ([`Range`]) used to describe grid bounds and to iterate them in
//! row-major order.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
