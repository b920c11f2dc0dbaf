use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Board {
    // === Cells ===
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    #[inline]
    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.get(row, col).map_or(false, |c| c.occupied)
    }

    /// Overwrite one cell. Panics when `(row, col)` is off the board.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        assert!(
            row < self.size && col < self.size,
            "set: ({}, {}) outside {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    // === Rows ===
    #[inline]
    pub fn row(&self, row: u32) -> &[Cell] {
        let size = self.size as usize;
        let start = (row as usize) * size;
        &self.cells[start..start + size]
    }

    /// Every row as its own exclusive slice, top to bottom
    #[inline]
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Cell> {
        let size = (self.size as usize).max(1);
        self.cells.chunks_exact_mut(size)
    }

    // === Whole-board operations ===

    /// Count occupied cells
    /// Parallel row scan with Rayon when the feature is enabled
    pub fn live_count(&self) -> usize {
        let size = (self.size as usize).max(1);
        #[cfg(feature = "parallel")]
        {
            self.cells
                .par_chunks(size)
                .map(|row| row.iter().filter(|c| c.occupied).count())
                .sum()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells
                .chunks(size)
                .map(|row| row.iter().filter(|c| c.occupied).count())
                .sum()
        }
    }

    /// Reset every cell to unoccupied
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.cells.par_iter_mut().for_each(|c| *c = Cell::EMPTY);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.fill(Cell::EMPTY);
        }
    }

    /// Byte-per-cell snapshot for renderers: 0 = empty, otherwise `1 + AgeBand`
    pub fn write_occupancy(&self, out: &mut Vec<u8>) {
        out.resize(self.cells.len(), 0);
        for (dst, cell) in out.iter_mut().zip(self.cells.iter()) {
            *dst = if cell.occupied {
                1 + cell.age_band() as u8
            } else {
                0
            };
        }
    }
}
