use crossterm::style::Color;

use crate::{Coords, TermInt};
use crate::game::{Game, GameState};
use crate::grid::{Cell, Grid, TERM_CELL_WIDTH};
use crate::term::Canvas;

const SNAKE_BODY_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';
const APPLE_CHARS: [char; 2] = ['(', ')'];

const TEXT_COLOR: Color = Color::White;
const BORDER_COLOR: Color = Color::Grey;
const BODY_COLOR: Color = Color::Red;
const HEAD_COLOR: Color = Color::White;
const FOOD_COLOR: Color = Color::Green;

/// Row holding the score; the playfield border starts right below it.
const HUD_ROW: TermInt = 0;
const FIELD_TOP: TermInt = 1;

/// Draws a whole frame for the current game into `canvas`.
pub fn draw(canvas: &mut Canvas, game: &Game) {
    canvas.clear();

    let score_line = format!("Score: {}", game.score());
    canvas.print_str((0, HUD_ROW), &score_line, TEXT_COLOR);
    draw_borders(canvas, game.grid());

    if let Some(food) = game.food() {
        draw_cell(canvas, game.grid(), food, APPLE_CHARS, FOOD_COLOR);
    }

    let dead = game.state() == GameState::GameOver;
    draw_snake(canvas, game, dead);

    match game.state() {
        GameState::Start => canvas.show_message(&[
            "S N A K E",
            "",
            "Arrow keys or WASD to move",
            "Esc to pause, Q to quit",
            "",
            "Press [SPACE] to start",
        ], TEXT_COLOR),
        GameState::Playing if game.paused() => canvas.show_message(&[
            "Paused",
            "Press Esc to resume",
            "or Q to quit",
        ], TEXT_COLOR),
        GameState::Playing => {}
        GameState::GameOver | GameState::Won => {
            let title = if game.state() == GameState::Won { "YOU WON" } else { "GAME OVER" };
            canvas.show_message(&[
                title,
                &score_line,
                "",
                "Press [SPACE] to restart",
                "or Q to quit",
            ], TEXT_COLOR);
        }
    }
}

/// Terminal columns and rows needed to show the score line and the bordered
/// playfield.
pub fn playfield_size(grid: &Grid) -> Coords {
    let width = grid.cols() as TermInt * TERM_CELL_WIDTH + 2;
    let height = FIELD_TOP + grid.rows() as TermInt + 2;
    (width, height)
}

pub fn fits_terminal(grid: &Grid, term_size: Coords) -> bool {
    let (width, height) = playfield_size(grid);
    term_size.0 >= width && term_size.1 >= height
}

/// Terminal position of the left half of a grid cell.
pub fn cell_origin(cell: Cell) -> Coords {
    let x = 1 + cell.x as TermInt * TERM_CELL_WIDTH;
    let y = FIELD_TOP + 1 + cell.y as TermInt;
    (x, y)
}

fn draw_snake(canvas: &mut Canvas, game: &Game, dead: bool) {
    let snake = game.snake();
    let head = snake.head();

    for &cell in snake.cells() {
        let (ch, color) = match (dead, cell == head) {
            (true, _) => (DEAD_SNAKE_CHAR, BODY_COLOR),
            (false, true) => (SNAKE_BODY_CHAR, HEAD_COLOR),
            (false, false) => (SNAKE_BODY_CHAR, BODY_COLOR),
        };
        draw_cell(canvas, game.grid(), cell, [ch, ch], color);
    }
}

fn draw_cell(canvas: &mut Canvas, grid: &Grid, cell: Cell, chars: [char; 2], color: Color) {
    // Grown segments can sit past the edge until they catch up
    if !grid.contains(cell) {
        return;
    }

    let (x, y) = cell_origin(cell);
    canvas.print_at((x, y), chars[0], color);
    canvas.print_at((x + 1, y), chars[1], color);
}

fn draw_borders(canvas: &mut Canvas, grid: &Grid) {
    let (width, height) = playfield_size(grid);
    let end_x = width - 1;
    let end_y = height - 1;

    for x in 0..width {
        let ch = if x == 0 || x == end_x {'+'} else {'-'};
        canvas.print_at((x, FIELD_TOP), ch, BORDER_COLOR);
        canvas.print_at((x, end_y), ch, BORDER_COLOR);
    }

    for y in FIELD_TOP + 1..end_y {
        canvas.print_at((0, y), '|', BORDER_COLOR);
        canvas.print_at((end_x, y), '|', BORDER_COLOR);
    }
}
