//! Error types for the `life-automata` crate.

/// Errors from configuration validation at the simulation boundary.
///
/// Out-of-bounds coordinate queries are deliberately not represented here:
/// the boundary policy defines them as dead, never as failures.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// The worker count must lie in `[1, height]` so every partition gets at
    /// least one row.
    #[error("invalid worker count {num_workers} for grid height {height}: must be in [1, {height}]")]
    InvalidWorkerCount {
        /// Requested number of workers.
        num_workers: usize,
        /// Height of the grid being partitioned.
        height: i32,
    },

    /// A pattern name that no known seed pattern matches.
    #[error("unknown pattern {0:?} (expected Square, Blinker, or Glider)")]
    UnknownPattern(String),
}
