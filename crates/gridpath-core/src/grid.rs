//! The obstacle grid: [`Cell`] and [`Grid`].
//!
//! Cells live in a flat row-major `Vec`; backlinks between cells are
//! flat indices rather than references, so one search run can mutate
//! the grid freely without shared ownership.

use crate::Point;
use crate::error::GridError;

/// One grid cell.
///
/// `obstacle` is terrain, edited between runs through
/// [`Grid::toggle_obstacle`] / [`Grid::set_obstacle`]. The remaining
/// fields are search-scoped: they belong to the engine for the duration
/// of a single run and are cleared by [`Grid::reset`]. `None` in the
/// cost fields means "not assigned yet" — there is no sentinel value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    obstacle: bool,
    /// Whether the cell was visited (BFS/DFS) or finalized (A*).
    pub visited: bool,
    /// Flat index of the cell this one was reached from.
    pub predecessor: Option<usize>,
    /// A* accumulated path cost from the start (g).
    pub cost: Option<i32>,
    /// A* cost plus heuristic estimate to the end (f).
    pub score: Option<i32>,
}

impl Cell {
    /// Whether the cell is an obstacle.
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// Clear the search-scoped fields, leaving terrain untouched.
    fn clear_search_state(&mut self) {
        self.visited = false;
        self.predecessor = None;
        self.cost = None;
        self.score = None;
    }
}

/// A rectangular obstacle grid with one start and one end cell.
///
/// Dimensions, start, and end are fixed for the lifetime of the grid.
/// Start and end can never be obstacles: edits targeting them are
/// rejected, so the invariant holds by construction.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a grid of the given dimensions with all cells free.
    ///
    /// `start` and `end` must be in bounds. They may coincide: a search
    /// on such a grid terminates immediately with an empty path.
    pub fn new(width: i32, height: i32, start: Point, end: Point) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let in_bounds = |p: Point| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        for p in [start, end] {
            if !in_bounds(p) {
                return Err(GridError::OutOfBounds {
                    pos: p,
                    width,
                    height,
                });
            }
        }
        Ok(Self {
            cells: vec![Cell::default(); (width * height) as usize],
            width,
            height,
            start,
            end,
        })
    }

    /// Grid width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Always false for a constructed
    /// grid, present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The start cell coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell coordinate.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// The cell at a flat index obtained from [`Grid::idx`].
    ///
    /// Panics on an out-of-range index; indices produced by `idx` on
    /// the same grid are always valid.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable counterpart of [`Grid::cell_at`].
    #[inline]
    pub fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Whether the cell at `p` is an obstacle. Out-of-bounds points are
    /// not obstacles (they are simply not part of the grid).
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_obstacle)
    }

    /// Flip the obstacle flag at `p`, returning the new value.
    ///
    /// Rejected with [`GridError::InvalidEdit`] for the start or end
    /// cell and [`GridError::OutOfBounds`] outside the grid; the grid
    /// is unchanged in both cases.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_edit_idx(p)?;
        let cell = &mut self.cells[i];
        cell.obstacle = !cell.obstacle;
        Ok(cell.obstacle)
    }

    /// Set the obstacle flag at `p` to an explicit value.
    ///
    /// Same validation as [`Grid::toggle_obstacle`]. Useful for drivers
    /// that paint walls rather than toggle them.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<(), GridError> {
        let i = self.checked_edit_idx(p)?;
        self.cells[i].obstacle = obstacle;
        Ok(())
    }

    fn checked_edit_idx(&self, p: Point) -> Result<usize, GridError> {
        let Some(i) = self.idx(p) else {
            return Err(GridError::OutOfBounds {
                pos: p,
                width: self.width,
                height: self.height,
            });
        };
        if p == self.start || p == self.end {
            return Err(GridError::InvalidEdit { pos: p });
        }
        Ok(i)
    }

    /// Clear all search-scoped cell state.
    ///
    /// Obstacles, start, and end are untouched. Must run before every
    /// search so no run observes stale state from a previous one.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
        }
    }

    /// Append the walkable neighbors of `p` into `buf`: the up-to-four
    /// cardinal neighbors (east, south, west, north order) that are in
    /// bounds, not obstacles, and not yet visited.
    ///
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            let Some(i) = self.idx(n) else {
                continue;
            };
            let cell = &self.cells[i];
            if !cell.obstacle && !cell.visited {
                buf.push(n);
            }
        }
    }
}
