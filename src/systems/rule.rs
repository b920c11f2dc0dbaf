//! Transition rule (B3/S23) on a bounded board
//!
//! RULES:
//! 1. Survival: occupied cell with 2 or 3 neighbours stays occupied
//! 2. Death: occupied cell with 0/1 (isolation) or 4+ (overcrowding) neighbours empties
//! 3. Birth: empty cell with exactly 3 neighbours becomes occupied
//!
//! Cells beyond the edge do not exist: they are never counted and never
//! indexed. Edge rows pass `None` for the missing neighbour row, edge columns
//! skip the missing side.

use crate::domain::cell::Cell;
use crate::spatial::board::Board;

/// Occupied neighbours of `(row, col)`; 0..=8
#[inline]
pub fn count_neighbours(board: &Board, row: u32, col: u32) -> u8 {
    let size = board.size();
    debug_assert!(row < size && col < size);
    let above = if row > 0 { Some(board.row(row - 1)) } else { None };
    let below = if row + 1 < size { Some(board.row(row + 1)) } else { None };
    count_in_rows(above, board.row(row), below, col as usize)
}

/// Neighbour count from pre-sliced rows; `mid` is the cell's own row
#[inline(always)]
fn count_in_rows(above: Option<&[Cell]>, mid: &[Cell], below: Option<&[Cell]>, col: usize) -> u8 {
    let last = mid.len() - 1;
    let has_left = col > 0;
    let has_right = col < last;
    let mut n = 0u8;

    for line in [above, below].into_iter().flatten() {
        if has_left && fast!(line, [col - 1]).occupied {
            n += 1;
        }
        if fast!(line, [col]).occupied {
            n += 1;
        }
        if has_right && fast!(line, [col + 1]).occupied {
            n += 1;
        }
    }
    if has_left && fast!(mid, [col - 1]).occupied {
        n += 1;
    }
    if has_right && fast!(mid, [col + 1]).occupied {
        n += 1;
    }
    n
}

/// Next state of one cell given its neighbour count
#[inline(always)]
pub fn next_cell(cell: Cell, neighbours: u8, track_age: bool) -> Cell {
    if cell.occupied {
        let occupied = neighbours == 2 || neighbours == 3;
        Cell {
            occupied,
            age: if track_age && occupied { cell.age.saturating_add(1) } else { 0 },
        }
    } else {
        Cell {
            occupied: neighbours == 3,
            age: 0,
        }
    }
}

/// Apply the rule to one full row of `current`, writing into `out`.
///
/// `out` must be exactly one row long; it is the only memory this touches.
pub fn compute_row(current: &Board, row: u32, out: &mut [Cell], track_age: bool) {
    let size = current.size();
    assert_eq!(
        out.len(),
        size as usize,
        "compute_row: output row length does not match board size"
    );
    let above = if row > 0 { Some(current.row(row - 1)) } else { None };
    let mid = current.row(row);
    let below = if row + 1 < size { Some(current.row(row + 1)) } else { None };

    for col in 0..mid.len() {
        let n = count_in_rows(above, mid, below, col);
        fast!(out, [col] = next_cell(*fast!(mid, [col]), n, track_age));
    }
}

/// Whole-board pass on the calling thread
pub fn compute_board(current: &Board, next: &mut Board, track_age: bool) {
    assert_eq!(current.size(), next.size(), "compute_board: board sizes differ");
    for (row, out) in next.rows_mut().enumerate() {
        compute_row(current, row as u32, out, track_age);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(lines: &[&str]) -> Board {
        let size = lines.len() as u32;
        let mut cells = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), lines.len());
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    cells.push((r as u32, c as u32));
                }
            }
        }
        Board::with_cells(size, &cells)
    }

    #[test]
    fn centre_cell_counts_all_eight() {
        let board = board_from(&["###", "###", "###"]);
        assert_eq!(count_neighbours(&board, 1, 1), 8);
    }

    #[test]
    fn corners_only_see_three_neighbours() {
        let board = board_from(&["###", "###", "###"]);
        assert_eq!(count_neighbours(&board, 0, 0), 3);
        assert_eq!(count_neighbours(&board, 0, 2), 3);
        assert_eq!(count_neighbours(&board, 2, 0), 3);
        assert_eq!(count_neighbours(&board, 2, 2), 3);
    }

    #[test]
    fn edges_only_see_five_neighbours() {
        let board = board_from(&["###", "###", "###"]);
        assert_eq!(count_neighbours(&board, 0, 1), 5);
        assert_eq!(count_neighbours(&board, 1, 0), 5);
        assert_eq!(count_neighbours(&board, 1, 2), 5);
        assert_eq!(count_neighbours(&board, 2, 1), 5);
    }

    #[test]
    fn edges_do_not_wrap() {
        // A wrapping board would give (0,0) neighbours from the far side
        let board = board_from(&["...#", "...#", "....", "####"]);
        assert_eq!(count_neighbours(&board, 0, 0), 0);
        assert_eq!(count_neighbours(&board, 3, 0), 1);
    }

    #[test]
    fn cell_itself_is_not_counted() {
        let board = board_from(&["...", ".#.", "..."]);
        assert_eq!(count_neighbours(&board, 1, 1), 0);
    }

    #[test]
    fn count_depends_only_on_three_by_three() {
        let inner = board_from(&[".....", ".#.#.", "..#..", ".##..", "....."]);
        let noisy = board_from(&["#####", "##.##", "#.#.#", "###.#", "#.###"]);
        // Same 3x3 block around (2,2) in both boards except the outer ring
        let mut same = noisy.clone();
        for r in 1..4 {
            for c in 1..4 {
                same.set(r, c, inner.get(r, c).unwrap());
            }
        }
        assert_eq!(count_neighbours(&inner, 2, 2), count_neighbours(&same, 2, 2));
    }

    #[test]
    fn transition_table() {
        let live = Cell::born();
        let dead = Cell::EMPTY;
        for n in 0..=8u8 {
            assert_eq!(next_cell(live, n, false).occupied, n == 2 || n == 3, "live with {n}");
            assert_eq!(next_cell(dead, n, false).occupied, n == 3, "dead with {n}");
        }
    }

    #[test]
    fn age_grows_only_while_surviving() {
        let old = Cell { occupied: true, age: 5 };
        assert_eq!(next_cell(old, 2, true), Cell { occupied: true, age: 6 });
        assert_eq!(next_cell(old, 4, true), Cell::EMPTY);
        assert_eq!(next_cell(Cell::EMPTY, 3, true), Cell::born());
        // Tracking off: age stays pinned at 0
        assert_eq!(next_cell(old, 3, false), Cell::born());
    }

    #[test]
    fn compute_row_on_one_by_one_board() {
        let board = board_from(&["#"]);
        let mut out = vec![Cell::born(); 1];
        compute_row(&board, 0, &mut out, false);
        assert!(!out[0].occupied);
    }

    #[test]
    fn compute_board_blinker_flips() {
        let board = board_from(&[".....", ".....", ".###.", ".....", "....."]);
        let mut next = Board::new(5);
        compute_board(&board, &mut next, false);
        assert_eq!(next, board_from(&[".....", "..#..", "..#..", "..#..", "....."]));
    }

    #[test]
    #[should_panic(expected = "output row length")]
    fn compute_row_rejects_short_output() {
        let board = Board::new(4);
        let mut out = vec![Cell::EMPTY; 3];
        compute_row(&board, 0, &mut out, false);
    }
}
