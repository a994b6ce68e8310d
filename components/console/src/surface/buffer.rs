//! In-memory display surface

use super::Surface;
use crate::cell::{Cell, CellIndex};
use crate::{CELL_COUNT, WIDTH};

/// Owned grid of cells, same layout as the hardware buffer
#[derive(Clone)]
pub struct BufferSurface {
    cells: [Cell; CELL_COUNT],
}

impl BufferSurface {
    /// Grid filled with blank cells
    pub const fn new() -> Self {
        Self::filled(Cell::BLANK)
    }

    pub const fn filled(cell: Cell) -> Self {
        Self {
            cells: [cell; CELL_COUNT],
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row
    ///
    /// # Panics
    /// If `row >= HEIGHT`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Character codes of one row, left to right
    pub fn row_characters(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        self.row(row).iter().map(|cell| cell.character)
    }
}

impl Default for BufferSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for BufferSurface {
    #[inline]
    fn write_cell(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.offset()] = cell;
    }

    #[inline]
    fn read_cell(&self, index: CellIndex) -> Cell {
        self.cells[index.offset()]
    }
}
