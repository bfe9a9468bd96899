//! Shortest-path search on grid mazes.
//!
//! The centrepiece is [`find_path`]: A\* with the Manhattan heuristic over
//! the open cells of a [`Maze`](mazepath_core::Maze), 4-directional moves
//! of unit cost. It validates its endpoints and returns `Ok(None)` when the
//! goal cannot be reached.
//!
//! - **A\*** on any [`AstarPather`] ([`astar_path`], [`astar_with_stats`])
//! - **BFS** unweighted distance maps ([`bfs_map`], [`bfs_distance`]), used
//!   as a cross-check for A\*
//!
//! Every search allocates its own bookkeeping and releases it on return;
//! nothing is cached between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | — |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod search;
mod traits;

pub use astar::{SearchStats, astar_path, astar_with_stats};
pub use bfs::bfs_map;
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use search::{bfs_distance, find_path, path_is_valid};
pub use traits::{AstarPather, Pather, WeightedPather};
