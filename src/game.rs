use log::{debug, info};
use rand::rngs::StdRng;

use crate::food::spawn_food;
use crate::grid::{Cell, Grid};
use crate::input::FrameInput;
use crate::snake::{Direction, Snake};

pub const INITIAL_SNAKE_LENGTH: usize = 8;
const START_COLUMN: i32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
    /// The snake covers every cell, there is nowhere left to put food.
    Won,
}

pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    state: GameState,
    paused: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        let snake = starting_snake(&grid);
        let mut game = Game { grid, snake, food: None, score: 0, state: GameState::Start, paused: false, rng };
        game.food = spawn_food(&game.snake, &game.grid, &mut game.rng);
        game
    }

    /// A game already in play with the given snake on the grid.
    #[cfg(test)]
    pub fn with_snake(grid: Grid, snake: Snake, rng: StdRng) -> Self {
        let mut game = Game::new(grid, rng);
        game.snake = snake;
        game.food = spawn_food(&game.snake, &game.grid, &mut game.rng);
        game.state = GameState::Playing;
        game
    }

    /// Puts a fresh snake and food on the grid and starts playing right away.
    pub fn reset(&mut self) {
        self.snake = starting_snake(&self.grid);
        self.score = 0;
        self.food = spawn_food(&self.snake, &self.grid, &mut self.rng);
        self.state = GameState::Playing;
        self.paused = false;
        info!("New game started");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Pauses a running game. Does nothing on the other screens.
    pub fn pause(&mut self) {
        if self.state == GameState::Playing && !self.paused {
            self.set_paused(true);
        }
    }

    /// Runs one frame of the state machine. Nothing moves while paused.
    pub fn update(&mut self, input: &FrameInput) {
        if self.state != GameState::Playing {
            self.paused = false;
        } else if input.pause {
            self.set_paused(!self.paused);
        }

        if self.paused {
            return;
        }

        match self.state {
            GameState::Start => {
                if input.start {
                    self.state = GameState::Playing;
                    info!("Game started");
                }
            }
            GameState::Playing => self.step(&input.directions),
            GameState::GameOver | GameState::Won => {
                if input.start {
                    self.reset();
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        debug!("Paused: {}", paused);
    }

    fn step(&mut self, directions: &[Direction]) {
        if self.food.is_none() && !self.respawn_food() {
            return;
        }

        // One turn per frame, the first one that is allowed
        if let Some(dir) = directions.iter().copied().find(|&dir| self.snake.set_direction(dir)) {
            debug!("Turned {:?}", dir);
        }

        let hit_wall = self.snake.check_wall_collision(&self.grid);
        if hit_wall || self.snake.check_self_collision() {
            self.state = GameState::GameOver;
            info!(
                "Game over: hit {} with score {} and length {}",
                if hit_wall { "the wall" } else { "itself" },
                self.score,
                self.snake.len()
            );
            return;
        }

        self.snake.move_step();

        if self.food == Some(self.snake.head()) {
            self.score += 1;
            self.snake.grow();
            self.respawn_food();
        }
    }

    /// Returns false, and ends the game as won, when no free cell is left.
    fn respawn_food(&mut self) -> bool {
        self.food = spawn_food(&self.snake, &self.grid, &mut self.rng);

        match self.food {
            Some(food) => {
                debug!("Food spawned at ({}, {})", food.x, food.y);
                true
            }
            None => {
                self.state = GameState::Won;
                info!("Grid full, game won with score {}", self.score);
                false
            }
        }
    }
}

fn starting_snake(grid: &Grid) -> Snake {
    Snake::new(Cell::new(START_COLUMN, grid.rows() / 2), INITIAL_SNAKE_LENGTH, Direction::Right)
}
