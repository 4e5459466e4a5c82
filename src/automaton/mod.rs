//! Core simulation engine: grid state, neighbor counting, the transition
//! rule, and the sequential and row-partitioned advancers.

pub mod grid;
pub mod neighbors;
pub mod rule;
pub mod stepping;

pub use grid::{Grid, GridView};
pub use neighbors::{count_alive_neighbors, count_alive_neighbors_convolution, NeighborStrategy};
pub use rule::apply_rule;
pub use stepping::{advance_partitioned, advance_sequential, partition_rows};
