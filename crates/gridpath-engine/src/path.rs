//! Path reconstruction from predecessor backlinks.

use gridpath_core::{Grid, Point};

use crate::error::SearchError;

/// Walk `predecessor` links from `goal` back to the grid's start and
/// return the intermediate cells in start→goal order.
///
/// The start and goal themselves are excluded: renderers keep their own
/// markers for the endpoints, so the path is exactly the cells to paint
/// between them. A start == goal walk yields an empty path.
///
/// Fails with [`SearchError::InvariantViolation`] if the chain is
/// broken (a non-start cell without a predecessor), leaves the grid, or
/// is longer than the grid has cells — all of which mean the engine's
/// step logic was violated, never a normal no-path outcome.
pub fn reconstruct(grid: &Grid, goal: Point) -> Result<Vec<Point>, SearchError> {
    let Some(goal_idx) = grid.idx(goal) else {
        return Err(SearchError::invariant(format!(
            "goal {goal} lies outside the grid"
        )));
    };
    let start_idx = grid
        .idx(grid.start())
        .expect("grid start is in bounds by construction");

    if goal_idx == start_idx {
        return Ok(Vec::new());
    }

    let Some(mut cur) = grid.cell_at(goal_idx).predecessor else {
        return Err(SearchError::invariant(format!(
            "goal {goal} has no predecessor"
        )));
    };

    let mut path = Vec::new();
    while cur != start_idx {
        if cur >= grid.len() {
            return Err(SearchError::invariant(format!(
                "predecessor index {cur} out of range"
            )));
        }
        if path.len() >= grid.len() {
            return Err(SearchError::invariant(
                "predecessor chain exceeds grid size (cycle)",
            ));
        }
        path.push(grid.point(cur));
        let Some(prev) = grid.cell_at(cur).predecessor else {
            return Err(SearchError::invariant(format!(
                "predecessor chain broken at {} before reaching start",
                grid.point(cur)
            )));
        };
        cur = prev;
    }

    path.reverse();
    Ok(path)
}
