//! Generation advancement, sequential and row-partitioned parallel.
//!
//! Both advancers share the two-phase structure: compute every cell's next
//! state against the current plane, then commit once. The parallel advancer
//! splits the next plane into disjoint contiguous row-range slices, one per
//! worker, spawned fresh each generation inside a rayon scope. Disjointness
//! of the write slices and immutability of the current plane during the run
//! make the step race-free without locks; the scope join guarantees the
//! commit happens after every worker has finished.

use std::ops::Range;

use tracing::trace;

use super::grid::Grid;
use super::neighbors::NeighborStrategy;
use super::rule::apply_rule;
use crate::error::LifeError;

/// Advance the grid by one generation, single-threaded.
pub fn advance_sequential(grid: &mut Grid, strategy: NeighborStrategy) {
    let (view, next) = grid.planes_mut();
    let width = view.width();
    let height = view.height();

    let mut idx = 0;
    for y in 0..height {
        for x in 0..width {
            let alive_neighbors = strategy.count(view, x, y);
            next[idx] = apply_rule(view.state_at(x, y), alive_neighbors);
            idx += 1;
        }
    }

    grid.commit_generation();
}

/// Split `height` rows into `num_workers` contiguous ranges.
///
/// Each worker gets `floor(height / num_workers)` rows; the last worker
/// absorbs the remainder so no row is dropped when the division is uneven.
/// Caller must ensure `1 <= num_workers <= height`.
pub fn partition_rows(height: i32, num_workers: usize) -> Vec<Range<i32>> {
    let rows_per_worker = height / num_workers as i32;

    (0..num_workers)
        .map(|i| {
            let start = i as i32 * rows_per_worker;
            let end = if i == num_workers - 1 {
                height
            } else {
                start + rows_per_worker
            };
            start..end
        })
        .collect()
}

/// Advance the grid by one generation with `num_workers` parallel workers,
/// one per contiguous row partition.
///
/// Workers read the current plane (never mutated during the run) and write
/// only their own slice of the next plane. The commit runs exactly once,
/// after the scope has joined every worker. A worker panic unwinds out of
/// the scope and aborts the generation step; no partial result is committed.
pub fn advance_partitioned(
    grid: &mut Grid,
    num_workers: usize,
    strategy: NeighborStrategy,
) -> Result<(), LifeError> {
    let height = grid.height();
    if num_workers < 1 || num_workers > height as usize {
        return Err(LifeError::InvalidWorkerCount {
            num_workers,
            height,
        });
    }

    let width = grid.width();
    let partitions = partition_rows(height, num_workers);
    let (view, next) = grid.planes_mut();

    rayon::scope(|scope| {
        let mut rest = next;
        for rows in partitions {
            let slice_len = rows.len() * width as usize;
            let (slice, tail) = rest.split_at_mut(slice_len);
            rest = tail;

            scope.spawn(move |_| {
                trace!(start_row = rows.start, end_row = rows.end, "worker start");
                let mut idx = 0;
                for y in rows {
                    for x in 0..width {
                        let alive_neighbors = strategy.count(view, x, y);
                        slice[idx] = apply_rule(view.state_at(x, y), alive_neighbors);
                        idx += 1;
                    }
                }
            });
        }
    });

    grid.commit_generation();
    Ok(())
}
