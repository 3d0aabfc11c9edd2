//! Board module - the fixed-size playfield grid
//!
//! Cells are stored in a flat row-major vector for cache locality. The
//! dimensions are chosen at construction and never change afterwards.
//! Coordinates: (x, y) where x grows to the right and y grows downwards,
//! row 0 being the top row new pieces spawn on.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, COLOR_COUNT, EMPTY, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// The game board - `width` columns x `height` rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Dimensions are clamped to `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let height = height.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Returns `None` if the rows are ragged, outside the accepted
    /// dimensions, or hold a value that is not a colour index.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let dims = MIN_BOARD_DIM as usize..=MAX_BOARD_DIM as usize;
        if !dims.contains(&width) || !dims.contains(&height) {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
        if cells.iter().any(|&c| c > COLOR_COUNT) {
            return None;
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y)
    ///
    /// Returns false if out of bounds or `cell` is not a colour index.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > COLOR_COUNT {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(EMPTY))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Remove every full row in a single pass and return how many went.
    ///
    /// Remaining rows keep their order and settle at the bottom; the same
    /// number of empty rows appears at the top, so the height is unchanged.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Write `color` into every listed cell. Out-of-bounds cells are skipped;
    /// returns false if any were.
    pub fn merge_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, color: Cell) -> bool {
        let mut all_placed = true;
        for (x, y) in cells {
            all_placed &= self.set(x, y, color);
        }
        all_placed
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Rows as nested vectors (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
