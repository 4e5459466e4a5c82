//! Config-driven simulation wrapper.

use tracing::debug;

use crate::automaton::{advance_partitioned, advance_sequential, Grid};
use crate::config::SimConfig;
use crate::error::LifeError;

/// Owns a seeded grid and advances it according to its configuration.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
}

impl Simulation {
    /// Build and seed the grid from the configuration.
    ///
    /// Fails fast on invalid dimensions or a worker count outside
    /// `[1, height]` — the configuration is never silently clamped.
    pub fn new(config: SimConfig) -> Result<Self, LifeError> {
        let mut grid = Grid::new(config.width, config.height)?;
        if let Some(num_workers) = config.workers {
            if num_workers < 1 || num_workers > config.height as usize {
                return Err(LifeError::InvalidWorkerCount {
                    num_workers,
                    height: config.height,
                });
            }
        }

        config.pattern.seed(&mut grid);
        Ok(Simulation { config, grid })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance one full generation: partition (when parallel), run, join,
    /// commit.
    pub fn step(&mut self) -> Result<(), LifeError> {
        match self.config.workers {
            Some(num_workers) => {
                advance_partitioned(&mut self.grid, num_workers, self.config.strategy)?
            }
            None => advance_sequential(&mut self.grid, self.config.strategy),
        }
        debug!(
            generation = self.grid.generation(),
            alive = self.grid.alive_count(),
            "generation advanced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::NeighborStrategy;
    use crate::pattern::Pattern;

    #[test]
    fn test_new_seeds_pattern() {
        let sim = Simulation::new(SimConfig::new(Pattern::Glider)).unwrap();
        assert_eq!(sim.grid().alive_count(), 5);
        assert_eq!(sim.grid().generation(), 0);
    }

    #[test]
    fn test_rejects_invalid_worker_count() {
        let mut config = SimConfig::new(Pattern::Blinker);
        config.workers = Some(21); // height is 20
        assert!(matches!(
            Simulation::new(config),
            Err(LifeError::InvalidWorkerCount {
                num_workers: 21,
                height: 20
            })
        ));

        let mut config = SimConfig::new(Pattern::Blinker);
        config.workers = Some(0);
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_sequential_and_parallel_runs_match() {
        let mut parallel_config = SimConfig::new(Pattern::Glider);
        parallel_config.workers = Some(4);
        let mut sequential_config = SimConfig::new(Pattern::Glider);
        sequential_config.workers = None;
        sequential_config.strategy = NeighborStrategy::Convolution;

        let mut parallel = Simulation::new(parallel_config).unwrap();
        let mut sequential = Simulation::new(sequential_config).unwrap();

        for _ in 0..16 {
            parallel.step().unwrap();
            sequential.step().unwrap();
        }

        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(
                    parallel.grid().state_at(x, y),
                    sequential.grid().state_at(x, y),
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
        assert_eq!(parallel.grid().generation(), 16);
    }
}
