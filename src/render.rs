//! Text rendering of a grid's current state.
//!
//! Read-only collaborator: consumes `state_at` for every coordinate and
//! formats one line per row. Terminal control and frame timing live in the
//! binary, not here.

use crate::automaton::Grid;

/// Render the current generation, `█` for alive and space for dead.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(if grid.state_at(x, y) == 1 { '█' } else { ' ' });
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small_grid() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_current_state(0, 0, 1);
        grid.set_current_state(2, 1, 1);

        assert_eq!(render(&grid), "█  \n  █\n");
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(render(&grid), "  \n  \n");
    }
}
