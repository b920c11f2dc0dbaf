//! Board - square, bounded grid of cells
//!
//! One contiguous row-major `Vec<Cell>`: row `r` is `cells[r*size .. (r+1)*size]`.
//! Keeping rows contiguous lets the step hand each worker whole `&mut [Cell]`
//! rows of the output board without any locking.

use crate::domain::cell::Cell;

mod indexing;
mod accessors;

pub const DEFAULT_BOARD_SIZE: u32 = 1000;
/// Largest accepted side length; two boards of this size take about 1 GiB
pub const MAX_BOARD_SIZE: u32 = 8192;

#[derive(Clone)]
pub struct Board {
    size: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-unoccupied `size × size` board
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![Cell::EMPTY; len],
        }
    }

    /// Build a board from `(row, col)` positions; out-of-range entries are skipped
    pub fn with_cells(size: u32, occupied: &[(u32, u32)]) -> Self {
        let mut board = Self::new(size);
        for &(row, col) in occupied {
            if row < size && col < size {
                board.set(row, col, Cell::born());
            }
        }
        board
    }
}

impl PartialEq for Board {
    /// Boards compare by occupancy only; age is presentation data
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.occupied == b.occupied)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {}x{}", self.size, self.size)?;
        // Large boards print only their live count
        if self.size > 64 {
            return writeln!(f, "  {} live cells", self.live_count());
        }
        for row in self.cells.chunks_exact(self.size as usize) {
            let line: String = row
                .iter()
                .map(|c| if c.occupied { '#' } else { '.' })
                .collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_and_square() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.len(), 49);
        assert_eq!(board.live_count(), 0);
    }

    #[test]
    fn with_cells_skips_out_of_range() {
        let board = Board::with_cells(4, &[(0, 0), (3, 3), (4, 0), (0, 9)]);
        assert_eq!(board.live_count(), 2);
        assert!(board.is_occupied(3, 3));
    }

    #[test]
    fn equality_ignores_age() {
        let mut a = Board::with_cells(3, &[(1, 1)]);
        let b = Board::with_cells(3, &[(1, 1)]);
        a.set(1, 1, Cell { occupied: true, age: 9 });
        assert_eq!(a, b);
    }

    #[test]
    fn index_and_coords_round_trip_at_edges() {
        let board = Board::new(5);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(4, 4), 24);
        assert_eq!(board.coords(board.index(2, 3)), (2, 3));
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(4, 4));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 5));
    }
}
