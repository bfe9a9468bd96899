//! Maze collaborators for mazepath: reading mazes from text, generating
//! random ones, and drawing a found path.

pub mod mapgen;
pub mod render;
pub mod text;

pub use mapgen::MazeGen;
pub use render::render;
pub use text::{MazeText, ParseError};
