use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a random grid cell not covered by the snake, or `None` once the
/// snake fills the whole grid.
pub fn spawn_food<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Cell> {
    let choices: Vec<Cell> = grid.cells().filter(|&cell| !snake.contains(cell)).collect();
    choices.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_never_lands_on_the_snake() {
        let grid = Grid::new(10, 2);
        let snake = Snake::new(Cell::new(0, 0), 10, Direction::Right);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let food = spawn_food(&snake, &grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(food));
            assert_eq!(food.y, 1);
        }
    }

    #[test]
    fn last_free_cell_is_chosen_every_time() {
        let grid = Grid::new(4, 1);
        let snake = Snake::new(Cell::new(0, 0), 3, Direction::Right);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(spawn_food(&snake, &grid, &mut rng), Some(Cell::new(3, 0)));
        assert_eq!(spawn_food(&snake, &grid, &mut rng), Some(Cell::new(3, 0)));
    }

    #[test]
    fn full_grid_has_no_food() {
        let grid = Grid::new(4, 1);
        let snake = Snake::new(Cell::new(0, 0), 4, Direction::Right);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(spawn_food(&snake, &grid, &mut rng), None);
    }

    #[test]
    fn every_free_cell_can_be_picked() {
        let grid = Grid::new(3, 3);
        let snake = Snake::new(Cell::new(0, 0), 3, Direction::Right);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(spawn_food(&snake, &grid, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), 6);
    }
}
