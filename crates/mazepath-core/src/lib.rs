//! **mazepath-core** — core types for grid maze pathfinding.
//!
//! This crate provides the foundational types shared across the
//! *mazepath* workspace: the [`Coord`] value type, the [`Maze`]
//! traversability grid, and the [`GridError`] raised for malformed grids
//! or out-of-bounds coordinates.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Coord;
pub use grid::Maze;
