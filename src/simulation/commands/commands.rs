use crate::domain::cell::Cell;
use crate::domain::formations::{self, Offset};
use crate::spatial::board::{Board, MAX_BOARD_SIZE};

use super::notify::Notification;
use super::{run, xorshift32, LifeCore};

/// Flip one cell; out-of-bounds positions are ignored
pub(super) fn toggle(core: &mut LifeCore, row: i32, col: i32) -> bool {
    let board = core.buffers.current_mut();
    if !board.in_bounds(row, col) {
        return false;
    }
    let (row, col) = (row as u32, col as u32);
    let Some(cell) = board.cell_mut(row, col) else {
        return false;
    };
    *cell = Cell {
        occupied: !cell.occupied,
        age: 0,
    };
    cell_changed(core, row, col);
    true
}

/// Occupy `anchor + offset` for every offset that lands on the board.
/// Returns how many cells were stamped.
pub(super) fn stamp_pattern(core: &mut LifeCore, anchor_row: i32, anchor_col: i32, offsets: &[Offset]) -> usize {
    let mut stamped = 0;
    for &(dr, dc) in offsets {
        let (Some(row), Some(col)) = (anchor_row.checked_add(dr), anchor_col.checked_add(dc)) else {
            continue;
        };
        if !core.buffers.current().in_bounds(row, col) {
            continue;
        }
        let (row, col) = (row as u32, col as u32);
        core.buffers.current_mut().set(row, col, Cell::born());
        cell_changed(core, row, col);
        stamped += 1;
    }
    stamped
}

pub(super) fn stamp_formation(core: &mut LifeCore, anchor_row: i32, anchor_col: i32, name: &str) -> Result<usize, String> {
    let formation = formations::find(name).ok_or_else(|| format!("unknown formation: {name}"))?;
    Ok(stamp_pattern(core, anchor_row, anchor_col, formation.cells))
}

/// Fresh board, then one random bit per cell
pub(super) fn randomize(core: &mut LifeCore) {
    wipe_board(core);
    let mut state = core.rng_state;
    for cell in core.buffers.current_mut().cells_mut() {
        *cell = if xorshift32(&mut state) & 0x8000_0000 != 0 {
            Cell::born()
        } else {
            Cell::EMPTY
        };
    }
    core.rng_state = state;
    tracing::debug!(size = core.buffers.size(), "board randomized");
    announce_new_board(core);
}

pub(super) fn clear(core: &mut LifeCore) {
    wipe_board(core);
    announce_new_board(core);
    tracing::debug!(size = core.buffers.size(), "board cleared");
}

pub(super) fn resize(core: &mut LifeCore, size: u32) -> Result<(), String> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(format!("board size {size} outside 1..={MAX_BOARD_SIZE}"));
    }
    core.pause();
    core.buffers.resize(size);
    core.occupancy.clear();
    core.generation = 0;
    tracing::debug!(size, "board resized");
    announce_new_board(core);
    Ok(())
}

/// Replace the current board wholesale; counts as a new board
pub(super) fn load_board(core: &mut LifeCore, board: Board) -> Result<(), String> {
    if board.size() == 0 || board.size() > MAX_BOARD_SIZE {
        return Err(format!("board size {} outside 1..={MAX_BOARD_SIZE}", board.size()));
    }
    core.pause();
    core.buffers.load(board);
    core.generation = 0;
    announce_new_board(core);
    Ok(())
}

/// Pause, empty both boards and restart the generation count
fn wipe_board(core: &mut LifeCore) {
    core.pause();
    core.buffers.clear();
    core.generation = 0;
}

fn announce_new_board(core: &mut LifeCore) {
    run::show_whole_board(core);
    core.notifier.notify(Notification::TitleChanged { generation: 0 });
}

/// Single-cell notification, unless a whole-board refresh is already pending
fn cell_changed(core: &mut LifeCore, row: u32, col: u32) {
    if core.run.needs_refresh() {
        return;
    }
    core.notifier.notify(Notification::CellChanged { row, col });
}
