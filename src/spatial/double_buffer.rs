//! Current/next board pair
//!
//! Both boards are owned here; `current` is just an index. Swapping flips the
//! index, so a generation becomes visible in O(1) and the old current board is
//! reused as scratch for the next step without reallocating.

use super::board::Board;

pub struct DoubleBuffer {
    boards: [Board; 2],
    current: usize,
}

impl DoubleBuffer {
    pub fn new(size: u32) -> Self {
        Self {
            boards: [Board::new(size), Board::new(size)],
            current: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.boards[self.current].size()
    }

    #[inline]
    pub fn current(&self) -> &Board {
        &self.boards[self.current]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.boards[self.current]
    }

    #[inline]
    pub fn next(&self) -> &Board {
        &self.boards[1 - self.current]
    }

    /// Shared view of `current` plus exclusive view of `next`, for one step pass
    pub fn split(&mut self) -> (&Board, &mut Board) {
        let [a, b] = &mut self.boards;
        let (current, next) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        assert_eq!(
            current.size(),
            next.size(),
            "current/next boards have different sizes"
        );
        (current, next)
    }

    /// Make `next` the current board
    #[inline]
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Index of the board currently playing `current` (0 or 1)
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Clear both boards in place
    pub fn clear(&mut self) {
        for board in self.boards.iter_mut() {
            board.clear();
        }
        self.current = 0;
    }

    /// Reallocate both boards at `size`, all unoccupied
    pub fn resize(&mut self, size: u32) {
        self.boards = [Board::new(size), Board::new(size)];
        self.current = 0;
    }

    /// Replace `current` wholesale (tests and hosts seeding a known board)
    pub fn load(&mut self, board: Board) {
        let size = board.size();
        if size != self.size() {
            self.resize(size);
        }
        self.boards[self.current] = board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::Cell;

    #[test]
    fn swap_flips_roles_without_copying() {
        let mut buffers = DoubleBuffer::new(4);
        buffers.current_mut().set(1, 1, Cell::born());
        assert_eq!(buffers.current_index(), 0);

        buffers.swap();
        assert_eq!(buffers.current_index(), 1);
        assert!(!buffers.current().is_occupied(1, 1));
        assert!(buffers.next().is_occupied(1, 1));

        buffers.swap();
        assert!(buffers.current().is_occupied(1, 1));
    }

    #[test]
    fn split_gives_current_and_next() {
        let mut buffers = DoubleBuffer::new(3);
        buffers.current_mut().set(0, 0, Cell::born());
        let (current, next) = buffers.split();
        assert!(current.is_occupied(0, 0));
        next.set(2, 2, Cell::born());
        buffers.swap();
        assert!(buffers.current().is_occupied(2, 2));
    }

    #[test]
    fn resize_resets_both_boards() {
        let mut buffers = DoubleBuffer::new(3);
        buffers.current_mut().set(0, 0, Cell::born());
        buffers.swap();
        buffers.resize(8);
        assert_eq!(buffers.size(), 8);
        assert_eq!(buffers.current_index(), 0);
        assert_eq!(buffers.current().live_count(), 0);
        assert_eq!(buffers.next().size(), 8);
    }

    #[test]
    fn load_adopts_board_size() {
        let mut buffers = DoubleBuffer::new(3);
        buffers.load(Board::with_cells(6, &[(5, 5)]));
        assert_eq!(buffers.size(), 6);
        assert_eq!(buffers.next().size(), 6);
        assert!(buffers.current().is_occupied(5, 5));
    }
}
