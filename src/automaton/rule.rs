//! The Game of Life transition rule.

/// Compute a cell's next state from its current state and alive-neighbor
/// count. Pure and total over `current ∈ {0, 1}`, `alive_neighbors ∈ 0..=8`.
///
/// - An alive cell dies of underpopulation (fewer than 2 neighbors) or
///   overpopulation (more than 3 neighbors), otherwise it survives.
/// - A dead cell becomes alive with exactly 3 neighbors, otherwise it stays
///   dead.
#[inline]
pub fn apply_rule(current: u8, alive_neighbors: u8) -> u8 {
    if current == 1 {
        if alive_neighbors < 2 || alive_neighbors > 3 {
            0
        } else {
            1
        }
    } else if alive_neighbors == 3 {
        1
    } else {
        0
    }
}
