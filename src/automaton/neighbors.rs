//! Alive-neighbor counting over the Moore neighborhood.
//!
//! Two interchangeable strategies: a direct sum of the 8 adjacent cells, and
//! a convolution formulation that samples the 3x3 neighborhood and correlates
//! it with a fixed kernel. Both apply the same boundary policy (dead outside
//! the grid) and must produce identical counts for every coordinate.

use super::grid::GridView;

/// 3x3 convolution kernel: all ones with a zero center, so the correlation
/// result at the center equals the alive-neighbor count.
pub const NEIGHBOR_KERNEL: [[u8; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];

/// Which neighbor-counting formulation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborStrategy {
    /// Sum the 8 adjacent cells directly.
    Direct,
    /// Sample the 3x3 neighborhood and correlate with [`NEIGHBOR_KERNEL`].
    Convolution,
}

impl NeighborStrategy {
    /// Count alive neighbors of `(x, y)` using this strategy.
    #[inline]
    pub fn count(self, view: GridView<'_>, x: i32, y: i32) -> u8 {
        match self {
            NeighborStrategy::Direct => count_alive_neighbors(view, x, y),
            NeighborStrategy::Convolution => count_alive_neighbors_convolution(view, x, y),
        }
    }
}

/// Count alive neighbors by summing the 8 Moore offsets, skipping the center.
pub fn count_alive_neighbors(view: GridView<'_>, x: i32, y: i32) -> u8 {
    let mut alive = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            alive += view.state_at(x + dx, y + dy);
        }
    }

    alive
}

/// Count alive neighbors by correlating the 3x3 neighborhood sample with
/// [`NEIGHBOR_KERNEL`]. The zero center excludes the cell itself, so the
/// result equals the direct sum.
pub fn count_alive_neighbors_convolution(view: GridView<'_>, x: i32, y: i32) -> u8 {
    let mut sample = [[0u8; 3]; 3];
    for (j, row) in sample.iter_mut().enumerate() {
        for (i, cell) in row.iter_mut().enumerate() {
            *cell = view.state_at(x + i as i32 - 1, y + j as i32 - 1);
        }
    }

    let mut alive = 0;
    for j in 0..3 {
        for i in 0..3 {
            alive += sample[j][i] * NEIGHBOR_KERNEL[j][i];
        }
    }

    alive
}
