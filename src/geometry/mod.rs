use std::fmt;
use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid cell coordinate, row first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells, |Δrow| + |Δcol|
    pub fn manhattan(&self, other: &Position) -> u32 {
        let d = manhattan_distance(
            self.row as i64, self.col as i64,
            other.row as i64, other.col as i64,
        );
        d as u32
    }

    /// The cell one step away in `action`'s direction
    /// None when the step would leave the non-negative quadrant
    pub fn step(&self, action: Action) -> Option<Position> {
        let (dr, dc) = action.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Axis-aligned move between neighbouring cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {

    /// Expansion order for neighbours. Fixed so searches are reproducible.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// (row, col) offset
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        f.write_str(name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(-2, 5, 2, 1), 8);
        assert_eq!(Position::new(4, 1).manhattan(&Position::new(1, 3)), 5);
    }

    #[test]
    fn test_step_stays_non_negative() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Action::Up), None);
        assert_eq!(origin.step(Action::Left), None);
        assert_eq!(origin.step(Action::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Action::Right), Some(Position::new(0, 1)));
    }
}
