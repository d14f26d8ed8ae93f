use std::ops::Add;

/// Width and height of the reference playfield, in pixels.
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const CELL_SIZE: i32 = 20;

/// Terminal columns and rows taken by one cell. Terminal characters are
/// roughly twice as tall as they are wide.
pub const TERM_CELL_WIDTH: u16 = 2;
pub const TERM_CELL_HEIGHT: u16 = 1;
/// Terminal rows/columns not available to the playfield: the score line on
/// top plus the border on each side.
const TERM_RESERVED_COLS: u16 = 2;
const TERM_RESERVED_ROWS: u16 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Grid { cols: cols.max(0), rows: rows.max(0) }
    }

    /// A grid covering a `width` x `height` screen with square cells of
    /// `cell_size`. Partial cells at the right and bottom edges are dropped.
    pub fn from_screen(width: i32, height: i32, cell_size: i32) -> Self {
        Grid::new(width / cell_size, height / cell_size)
    }

    pub fn standard() -> Self {
        Grid::from_screen(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE)
    }

    /// The largest grid, no bigger than the reference playfield, that fits a
    /// terminal of the given size together with the score line and borders.
    pub fn fit_terminal(term_width: u16, term_height: u16) -> Self {
        let cols = term_width.saturating_sub(TERM_RESERVED_COLS) / TERM_CELL_WIDTH;
        let rows = term_height.saturating_sub(TERM_RESERVED_ROWS) / TERM_CELL_HEIGHT;
        let standard = Grid::standard();

        Grid::new(standard.cols.min(cols as i32), standard.rows.min(rows as i32))
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn area(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_is_40_by_30() {
        let grid = Grid::standard();
        assert_eq!(grid.cols(), 40);
        assert_eq!(grid.rows(), 30);
        assert_eq!(grid.area(), 1200);
    }

    #[test]
    fn cells_enumerates_row_major() {
        let cells: Vec<Cell> = Grid::new(3, 2).cells().collect();
        assert_eq!(cells, vec![
            Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0),
            Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1),
        ]);
    }

    #[test]
    fn contains_rejects_outside_cells() {
        let grid = Grid::new(4, 3);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(3, 2)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(4, 0)));
        assert!(!grid.contains(Cell::new(0, 3)));
    }

    #[test]
    fn fit_terminal_caps_at_standard_size() {
        assert_eq!(Grid::fit_terminal(300, 100), Grid::standard());
        assert_eq!(Grid::fit_terminal(80, 24), Grid::new(39, 21));
        assert_eq!(Grid::fit_terminal(1, 1), Grid::new(0, 0));
    }
}
