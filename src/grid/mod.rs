//! Obstacle grids.
//!
//! A [`Grid`] is fixed once built: dimensions, obstacles, start, goal and the
//! per-cell traversal cost never change. Per-run search state lives in
//! [`SearchContext`](crate::search::SearchContext), so one grid can serve any
//! number of searches.

mod generate;
mod parse;

use crate::errors::GridError;
use crate::geometry::{Action, Position};


/// Kind of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        self == Cell::Open
    }
}


/// 2D obstacle map with a start and a goal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>, // row-major, width * height
    width: usize,
    height: usize,
    start: Position,
    goal: Position,
    cell_cost: u32,
}

impl Grid {

    /// Build a grid from rows of cells
    /// Rows may differ in length; width is the longest row and the missing
    /// tail of shorter rows is filled with walls.
    pub fn new(rows: Vec<Vec<Cell>>, start: Position, goal: Position) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Wall);
            cells.extend(row);
        }

        let grid = Self { cells, width, height, start, goal, cell_cost: 1 };
        grid.check_endpoint(start)?;
        grid.check_endpoint(goal)?;
        Ok(grid)
    }

    /// Replace the traversal cost applied to every passable cell
    pub fn with_cell_cost(mut self, cost: u32) -> Result<Self, GridError> {
        if cost == 0 {
            return Err(GridError::ZeroCost);
        }
        self.cell_cost = cost;
        Ok(self)
    }

    fn check_endpoint(&self, pos: Position) -> Result<(), GridError> {
        if !self.cell(pos)?.is_passable() {
            return Err(GridError::Blocked(pos));
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn cell_cost(&self) -> u32 {
        self.cell_cost
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        Ok(pos.row * self.width + pos.col)
    }

    pub fn cell(&self, pos: Position) -> Result<Cell, GridError> {
        Ok(self.cells[self.index(pos)?])
    }

    /// In bounds and not an obstacle
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_ok_and(Cell::is_passable)
    }

    /// Passable cells adjacent to `pos`, in `Action::ALL` order
    /// Directions that leave the grid or hit an obstacle are omitted.
    pub fn get_neighbours(&self, pos: Position) -> Result<Vec<(Action, Position)>, GridError> {
        self.index(pos)?;

        let neighbours = Action::ALL
            .into_iter()
            .filter_map(|action| {
                pos.step(action)
                    .filter(|&next| self.is_passable(next))
                    .map(|next| (action, next))
            })
            .collect();
        Ok(neighbours)
    }

    /// Cost of entering `pos`
    pub fn get_cost(&self, pos: Position) -> Result<u32, GridError> {
        self.index(pos)?;
        Ok(self.cell_cost)
    }

    /// Every passable position, row-major
    pub fn passable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_passable())
            .map(|(i, _)| Position::new(i / self.width, i % self.width))
    }
}
