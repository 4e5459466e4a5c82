//! Simulation configuration.
//!
//! Everything the original driver kept as ambient state in `main` — pattern,
//! dimensions, generation count, worker count, frame delay — collected into
//! one struct passed to [`Simulation::new`](crate::sim::Simulation::new), so
//! the core can be exercised without process entry or stdin.

use std::time::Duration;

use crate::automaton::NeighborStrategy;
use crate::pattern::{Pattern, PATTERN_SIZE};

/// Complete configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seed pattern written into the initial grid.
    pub pattern: Pattern,
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Number of generations the driver loop runs.
    pub generations: u32,
    /// Parallel worker count, or `None` for the sequential advancer.
    /// Must lie in `[1, height]` when set.
    pub workers: Option<usize>,
    /// Neighbor-counting formulation used by the advancers.
    pub strategy: NeighborStrategy,
    /// Delay between rendered frames.
    pub frame_delay: Duration,
}

impl SimConfig {
    /// Defaults matching the original simulation: a 20x20 grid, 32
    /// generations, 4 workers, 150 ms per frame.
    pub fn new(pattern: Pattern) -> Self {
        SimConfig {
            pattern,
            width: PATTERN_SIZE,
            height: PATTERN_SIZE,
            generations: 32,
            workers: Some(4),
            strategy: NeighborStrategy::Direct,
            frame_delay: Duration::from_millis(150),
        }
    }
}
