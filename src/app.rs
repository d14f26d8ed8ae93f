use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::{bail, Result};
use log::{info, warn};
use rand::rngs::StdRng;

use crate::game::{Game, INITIAL_SNAKE_LENGTH};
use crate::grid::Grid;
use crate::input::FrameInput;
use crate::render;
use crate::term::TermManager;

pub const FRAMES_PER_SECOND: u32 = 15;

/// Room needed to the right of the starting snake before it meets the wall.
const MIN_FREE_COLUMNS: i32 = 2;
const MIN_ROWS: i32 = 3;

/// Holds the terminal and the game for the whole run.
pub struct App {
    term: TermManager,
    game: Game,
    too_small: bool,
}

impl App {
    pub fn new(rng: StdRng) -> Result<Self> {
        let term = TermManager::new()?;

        let (width, height) = term.get_terminal_size();
        let grid = Grid::fit_terminal(width, height);
        let min_cols = INITIAL_SNAKE_LENGTH as i32 + 1 + MIN_FREE_COLUMNS;
        if grid.cols() < min_cols || grid.rows() < MIN_ROWS {
            bail!(
                "Terminal of {}x{} is too small, the playfield needs at least {}x{} cells",
                width, height, min_cols, MIN_ROWS
            );
        }

        info!("Playfield is {}x{} ({} cells)", grid.cols(), grid.rows(), grid.area());
        Ok(App { term, game: Game::new(grid, rng), too_small: false })
    }

    /// Runs until the player quits.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let frame_interval = Duration::from_secs(1) / FRAMES_PER_SECOND;

        loop {
            let frame_start = Instant::now();

            let keys = self.term.read_key_events_queue()?;
            let mut input = FrameInput::from_keys(&keys);
            if input.quit {
                info!("Quit with score {}", self.game.score());
                break;
            }

            if self.check_terminal_size() {
                // Stay paused until the playfield fits again
                input.pause = false;
            }
            self.game.update(&input);

            render::draw(self.term.canvas_mut(), &self.game);
            self.term.present()?;

            sleep(frame_interval.saturating_sub(frame_start.elapsed()));
        }

        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    /// The grid keeps its startup size, so play is held while the terminal
    /// can't show all of it.
    fn check_terminal_size(&mut self) -> bool {
        let size = self.term.get_terminal_size();
        let too_small = !render::fits_terminal(self.game.grid(), size);

        if too_small {
            if !self.too_small {
                let (needed_width, needed_height) = render::playfield_size(self.game.grid());
                warn!(
                    "Terminal shrunk to {}x{}, the playfield needs {}x{}; pausing",
                    size.0, size.1, needed_width, needed_height
                );
            }
            self.game.pause();
        }

        self.too_small = too_small;
        too_small
    }
}
