use life_engine::{Board, LifeCore, Offset};

fn core_with(size: u32, cells: &[(u32, u32)]) -> LifeCore {
    let mut core = LifeCore::new(size);
    core.load_board(Board::with_cells(size, cells)).unwrap();
    core
}

fn live(core: &LifeCore) -> Vec<(u32, u32)> {
    let board = core.board();
    (0..board.len())
        .filter(|&i| board.cells()[i].occupied)
        .map(|i| board.coords(i))
        .collect()
}

fn shifted(cells: &[(u32, u32)], dr: u32, dc: u32) -> Vec<(u32, u32)> {
    let mut out: Vec<_> = cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect();
    out.sort_unstable();
    out
}

#[test]
fn block_stays_put() {
    let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let mut core = core_with(1000, &block);
    for _ in 0..10 {
        core.advance();
    }
    assert_eq!(live(&core), block.to_vec());
    assert_eq!(core.generation(), 10);
}

#[test]
fn blinker_returns_after_two_generations() {
    let blinker = [(10, 9), (10, 10), (10, 11)];
    let mut core = core_with(32, &blinker);
    core.advance();
    assert_ne!(live(&core), blinker.to_vec());
    core.advance();
    assert_eq!(live(&core), blinker.to_vec());
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    let glider = [(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)];
    let mut core = core_with(40, &glider);
    let start = core.generation();
    for _ in 0..4 {
        core.advance();
    }
    assert_eq!(core.generation(), start + 4);
    assert_eq!(live(&core), shifted(&glider, 1, 1));

    for _ in 0..4 {
        core.advance();
    }
    assert_eq!(live(&core), shifted(&glider, 2, 2));
}

#[test]
fn catalog_glider_matches_canonical_shape() {
    let mut core = LifeCore::new(20);
    assert_eq!(core.stamp_formation(2, 2, "Glider"), Ok(5));
    let before = live(&core);
    for _ in 0..4 {
        core.advance();
    }
    assert_eq!(live(&core), shifted(&before, 1, 1));
}

#[test]
fn corner_cell_on_a_large_board_just_dies() {
    let mut core = core_with(1000, &[(0, 0)]);
    core.advance();
    assert_eq!(core.live_cells(), 0);

    // All four corners, each with a partner on the edge
    let last = 999;
    let cells = [
        (0, 0),
        (0, 1),
        (0, last),
        (1, last),
        (last, 0),
        (last - 1, 0),
        (last, last),
        (last, last - 1),
    ];
    let mut core = core_with(1000, &cells);
    core.advance();
    assert_eq!(core.live_cells(), 0);
}

#[test]
fn glider_dies_into_a_block_at_the_edge() {
    // No wrap-around: a glider hitting the bottom-right corner settles
    // instead of reappearing at the top-left.
    let glider: Vec<Offset> = vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut core = LifeCore::new(8);
    core.stamp_pattern(0, 0, &glider);
    for _ in 0..40 {
        core.advance();
    }
    assert_eq!(live(&core), vec![(6, 6), (6, 7), (7, 6), (7, 7)]);
}

#[test]
fn oscillators_from_the_catalog_have_period_two() {
    for name in ["Blinker", "Beacon", "Toad", "Clock"] {
        let mut core = LifeCore::new(16);
        core.stamp_formation(5, 5, name).unwrap();
        let start = live(&core);
        core.advance();
        assert_ne!(live(&core), start, "{name}");
        core.advance();
        assert_eq!(live(&core), start, "{name}");
    }
}

#[test]
fn still_lifes_from_the_catalog_do_not_change() {
    for name in ["Block", "Beehive"] {
        let mut core = LifeCore::new(12);
        core.stamp_formation(4, 4, name).unwrap();
        let start = live(&core);
        core.advance();
        assert_eq!(live(&core), start, "{name}");
    }
}
