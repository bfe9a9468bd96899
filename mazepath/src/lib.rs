//! mazepath — shortest paths through text and generated mazes.
//!
//! The binary is a thin wrapper over [`run::run`]; everything it does is
//! reachable from here so it can be driven from tests.

pub mod config;
pub mod logger;
pub mod run;

pub use config::{Command, Config, Format, Source};
pub use run::{Outcome, RunError, Status};
