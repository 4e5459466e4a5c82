//! Double-buffered grid state and cell access helpers.
//!
//! Every cell carries two state slots: the current plane (authoritative for
//! this generation) and the next plane (being computed). All reads during a
//! generation target the current plane, all writes target the next plane, and
//! `commit_generation` copies next into current in one step. Workers hold a
//! [`GridView`] of the current plane while the next plane is split into
//! disjoint mutable row slices.

use crate::error::LifeError;

/// A fixed-size 2D grid of binary cells with double-buffered state.
pub struct Grid {
    width: i32,
    height: i32,
    current: Vec<u8>, // 0 = dead, 1 = alive
    next: Vec<u8>,
    generation: u64,
}

/// Read-only view of a grid's current plane.
///
/// `Copy` so every worker in a parallel step can hold one while the next
/// plane is mutably partitioned.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    width: i32,
    height: i32,
    cells: &'a [u8],
}

impl Grid {
    /// Create an all-dead grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(width: i32, height: i32) -> Result<Self, LifeError> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Grid {
            width,
            height,
            current: vec![0; size],
            next: vec![0; size],
            generation: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of committed generations since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Calculate the linear index for a coordinate. Row-major y/x layout.
    #[inline]
    fn index_of(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if a coordinate is within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Current state at a coordinate. Out-of-bounds coordinates are dead —
    /// this is the boundary policy, not an error.
    #[inline]
    pub fn state_at(&self, x: i32, y: i32) -> u8 {
        self.view().state_at(x, y)
    }

    /// Set the current state of a cell. Out-of-bounds writes are ignored.
    pub fn set_current_state(&mut self, x: i32, y: i32, state: u8) {
        if self.in_bounds(x, y) {
            let idx = self.index_of(x, y);
            self.current[idx] = state;
        }
    }

    /// Set the next-generation state of a cell. Out-of-bounds writes are
    /// ignored.
    pub fn set_next_state(&mut self, x: i32, y: i32, state: u8) {
        if self.in_bounds(x, y) {
            let idx = self.index_of(x, y);
            self.next[idx] = state;
        }
    }

    /// Copy every cell's next state into its current state and advance the
    /// generation counter. Must not run while workers are still writing.
    pub fn commit_generation(&mut self) {
        self.current.copy_from_slice(&self.next);
        self.generation += 1;
    }

    /// Read-only view of the current plane.
    pub fn view(&self) -> GridView<'_> {
        GridView {
            width: self.width,
            height: self.height,
            cells: &self.current,
        }
    }

    /// Split the buffers for one generation step: an immutable view of the
    /// current plane and the whole next plane for writing. The borrows are
    /// disjoint, so workers can read every cell's current state while the
    /// next plane is carved into per-partition slices.
    pub(crate) fn planes_mut(&mut self) -> (GridView<'_>, &mut [u8]) {
        (
            GridView {
                width: self.width,
                height: self.height,
                cells: &self.current,
            },
            &mut self.next,
        )
    }

    /// Count of alive cells in the current plane.
    pub fn alive_count(&self) -> usize {
        self.current.iter().filter(|&&c| c == 1).count()
    }
}

impl GridView<'_> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Current state at a coordinate, dead outside the grid.
    #[inline]
    pub fn state_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return 0;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.alive_count(), 0);
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(grid.state_at(x, y), 0);
            }
        }
    }

    #[test]
    fn test_new_grid_rejects_non_positive_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(-1, -1),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_state_at_out_of_bounds_is_dead() {
        let mut grid = Grid::new(4, 3).unwrap();
        // Fill the whole grid alive so any in-bounds read would return 1.
        for y in 0..3 {
            for x in 0..4 {
                grid.set_current_state(x, y, 1);
            }
        }

        assert_eq!(grid.state_at(-1, 0), 0);
        assert_eq!(grid.state_at(0, -1), 0);
        assert_eq!(grid.state_at(4, 0), 0);
        assert_eq!(grid.state_at(0, 3), 0);
        assert_eq!(grid.state_at(-1, -1), 0);
        assert_eq!(grid.state_at(100, 100), 0);

        // Same policy for a 1x1 grid.
        let tiny = Grid::new(1, 1).unwrap();
        assert_eq!(tiny.state_at(1, 0), 0);
        assert_eq!(tiny.state_at(0, 1), 0);
        assert_eq!(tiny.state_at(-1, 0), 0);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_current_state(-1, 0, 1);
        grid.set_current_state(3, 3, 1);
        grid.set_next_state(7, 7, 1);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_commit_copies_next_into_current() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_next_state(1, 1, 1);
        grid.set_next_state(2, 0, 1);

        // Next-state writes are invisible until commit.
        assert_eq!(grid.state_at(1, 1), 0);
        assert_eq!(grid.state_at(2, 0), 0);

        grid.commit_generation();
        assert_eq!(grid.state_at(1, 1), 1);
        assert_eq!(grid.state_at(2, 0), 1);
        assert_eq!(grid.generation(), 1);

        grid.commit_generation();
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_view_tracks_current_plane() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_current_state(0, 1, 1);
        let view = grid.view();
        assert_eq!(view.state_at(0, 1), 1);
        assert_eq!(view.state_at(1, 1), 0);
        assert_eq!(view.state_at(-1, 2), 0);
    }
}
