use std::fmt;
use std::str::FromStr;

use log::debug;

use super::{Cell, Grid};
use crate::errors::GridError;
use crate::geometry::Position;
use crate::search::Solution;


const WALL: char = '#';
const START: char = 'A';
const GOAL: char = 'B';
const OPEN: char = ' ';
const PATH: char = '*';
const EXPLORED: char = '.';


impl Grid {

    /// Load a maze from text lines
    /// `#` is an obstacle, `A` the start, `B` the goal, anything else is open.
    pub fn from_rows<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.into_iter().enumerate() {
            let mut cells = Vec::new();
            for (col, ch) in line.as_ref().chars().enumerate() {
                let pos = Position::new(row, col);
                match ch {
                    WALL => cells.push(Cell::Wall),
                    START => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                        cells.push(Cell::Open);
                    }
                    GOAL => {
                        if goal.replace(pos).is_some() {
                            return Err(GridError::DuplicateGoal(pos));
                        }
                        cells.push(Cell::Open);
                    }
                    _ => cells.push(Cell::Open),
                }
            }
            rows.push(cells);
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;
        let grid = Grid::new(rows, start, goal)?;

        debug!("loaded {}x{} grid, start {} goal {}", grid.width, grid.height, start, goal);
        Ok(grid)
    }

    /// Draw the grid with a solution's explored cells and path overlaid
    pub fn render_path(&self, solution: &Solution) -> String {
        self.render_with(|pos| {
            if solution.path().contains(&pos) {
                Some(PATH)
            } else if solution.explored().contains(&pos) {
                Some(EXPLORED)
            } else {
                None
            }
        })
    }

    fn render_with<F>(&self, overlay: F) -> String
    where
        F: Fn(Position) -> Option<char>,
    {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                let ch = if pos == self.start {
                    START
                } else if pos == self.goal {
                    GOAL
                } else if self.cells[row * self.width + col] == Cell::Wall {
                    WALL
                } else {
                    overlay(pos).unwrap_or(OPEN)
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_rows(s.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}
