use rand::Rng;

use super::{Cell, Grid};
use crate::errors::GridError;
use crate::geometry::Position;


impl Grid {

    /// Random obstacle grid
    /// Each cell becomes a wall with probability `wall_density` (clamped to
    /// [0, 1]; NaN counts as 0). Start is the top-left corner and goal the bottom-right one;
    /// both are always open. A path between them is not guaranteed.
    pub fn random<R>(width: usize, height: usize, wall_density: f64, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let density = if wall_density.is_nan() { 0.0 } else { wall_density.clamp(0.0, 1.0) };
        let start = Position::new(0, 0);
        let goal = Position::new(height.saturating_sub(1), width.saturating_sub(1));

        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let pos = Position::new(row, col);
                        if pos != start && pos != goal && rng.random_bool(density) {
                            Cell::Wall
                        } else {
                            Cell::Open
                        }
                    })
                    .collect()
            })
            .collect();

        Grid::new(rows, start, goal)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_grid_keeps_endpoints_open() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(6, 4, 1.0, &mut rng).unwrap();

        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goal(), Position::new(3, 5));
        assert_eq!(grid.passable_positions().collect::<Vec<_>>(), vec![grid.start(), grid.goal()]);
    }

    #[test]
    fn test_random_grid_is_seed_deterministic() {
        let a = Grid::random(8, 8, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(8, 8, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_grid_nan_density_is_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(5, 5, f64::NAN, &mut rng).unwrap();
        assert_eq!(grid.passable_positions().count(), 25);
    }

    #[test]
    fn test_random_grid_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(0, 3, 0.2, &mut rng), Err(GridError::Empty));
    }
}
