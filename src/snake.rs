use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn offset(self) -> Cell {
        match self {
            Up => Cell::new(0, -1),
            Down => Cell::new(0, 1),
            Left => Cell::new(-1, 0),
            Right => Cell::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn between(from: Cell, to: Cell) -> Option<Direction> {
        [Up, Down, Left, Right].into_iter().find(|dir| from + dir.offset() == to)
    }
}

/// Cells ordered from tail (front) to head (back).
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new(tail: Cell, size: usize, direction: Direction) -> Self {
        let step = direction.offset();
        let mut body = VecDeque::with_capacity(size.max(1));
        let mut pos = tail;

        for _ in 0..size.max(1) {
            body.push_back(pos);
            pos = pos + step;
        }

        Snake { body, direction }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    // Returns whether the turn was taken
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if !new_direction.is_perpendicular_to(self.direction) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn next_head(&self) -> Cell {
        self.head() + self.direction.offset()
    }

    /// Advances one cell: the head steps forward, every other segment takes
    /// the place of the one in front of it and the old tail is dropped.
    pub fn move_step(&mut self) {
        let new_head = self.next_head();
        self.body.push_back(new_head);
        self.body.pop_front();
    }

    /// Adds a segment behind the tail, continuing the line from the tail's
    /// neighbour through the tail.
    pub fn grow(&mut self) {
        let tail = self.tail();
        let travel = match self.body.get(1) {
            // The tail travels towards its neighbour, so the new segment goes
            // the other way.
            Some(&next) => Direction::between(tail, next).unwrap_or(self.direction),
            None => self.direction,
        };

        self.body.push_front(tail + travel.opposite().offset());
    }

    pub fn check_wall_collision(&self, grid: &Grid) -> bool {
        let head = self.head();

        match self.direction {
            Right => head.x + 1 >= grid.cols(),
            Left => head.x <= 0,
            Up => head.y <= 0,
            Down => head.y + 1 >= grid.rows(),
        }
    }

    /// Whether the head overlaps the body. The head and the neck right behind
    /// it are left out.
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        let checked = self.body.len().saturating_sub(2);

        self.body.iter().take(checked).any(|&cell| cell == head)
    }
}
