//! Board module - the fixed grid of settled cubes
//!
//! The board is a 10x20 grid where each cell is empty or holds a settled cube.
//! Uses a flat array for cache locality; boards are values, so settling a
//! piece or clearing rows returns a new board instead of editing in place.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::{Cube, Piece};
use crate::types::{Vec2, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// A board cell: `None` when empty
pub type Cell = Option<Cube>;

/// Indices of rows removed by [`Board::clear_full_rows`], top to bottom
pub type ClearedRows = ArrayVec<usize, GRID_HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// New board with `cube` written at (x, y). Out-of-bounds writes are dropped.
    pub fn with_cell(&self, x: i32, y: i32, cube: Cube) -> Board {
        let mut next = self.clone();
        if let Some(idx) = Self::index(x, y) {
            next.cells[idx] = Some(cube.at(Vec2::new(x, y)));
        }
        next
    }

    /// Does `piece` leave the board sideways, reach the floor, or overlap a settled cube?
    ///
    /// Cells above the top edge (negative y) are never a collision.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.absolute_positions().any(|Vec2 { x, y }| {
            x < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 || self.is_occupied(x, y)
        })
    }

    /// New board with every cube of `piece` burned in at its absolute position.
    ///
    /// Cubes outside the grid are dropped.
    pub fn settle(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        for (cube, pos) in piece.cubes().iter().zip(piece.absolute_positions()) {
            if let Some(idx) = Self::index(pos.x, pos.y) {
                next.cells[idx] = Some(cube.at(pos));
            }
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove every full row and drop the rest down.
    ///
    /// Remaining rows keep their relative order and the same number of empty
    /// rows is added at the top. Returns the new board and the indices of the
    /// removed rows.
    pub fn clear_full_rows(&self) -> (Board, ClearedRows) {
        let mut next = Board::new();
        let mut cleared = ClearedRows::new();
        let mut write_y = GRID_HEIGHT;

        // Scan from bottom to top
        for read_y in (0..GRID_HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            for x in 0..GRID_WIDTH {
                next.cells[write_y * GRID_WIDTH + x] = self.cells[read_y * GRID_WIDTH + x]
                    .map(|cube| cube.at(Vec2::new(x as i32, write_y as i32)));
            }
        }

        cleared.reverse();
        (next, cleared)
    }

    /// Any settled cube in the top row ends the game.
    pub fn is_game_over(&self) -> bool {
        self.cells[..GRID_WIDTH].iter().any(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// One row of cells, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= GRID_HEIGHT {
            return None;
        }
        let start = y * GRID_WIDTH;
        Some(&self.cells[start..start + GRID_WIDTH])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
