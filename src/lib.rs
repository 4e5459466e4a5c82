//! Conway's Game of Life on a fixed-size 2D grid, with an optional
//! row-partitioned parallel advancer.
//!
//! The engine lives in [`automaton`]: a double-buffered [`Grid`], two
//! equivalent neighbor-counting strategies, the transition rule, and the
//! sequential and parallel generation advancers. Everything else is thin
//! collaborator code: seed [`pattern`]s, a text [`render`]er, and the
//! config-driven [`Simulation`] the CLI drives.
//!
//! Out-of-bounds coordinates are defined to be dead — the grid boundary is
//! fixed, not toroidal.

pub mod automaton;
pub mod config;
pub mod error;
pub mod pattern;
pub mod render;
pub mod sim;

pub use automaton::{
    advance_partitioned, advance_sequential, apply_rule, count_alive_neighbors,
    count_alive_neighbors_convolution, partition_rows, Grid, GridView, NeighborStrategy,
};
pub use config::SimConfig;
pub use error::LifeError;
pub use pattern::Pattern;
pub use sim::Simulation;
