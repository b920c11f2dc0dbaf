use life_engine::{Life, LifeCore, Parallelism};

#[test]
fn perf_smoke_step() {
    let mut life = Life::new(128);
    life.enable_perf_metrics(true);
    life.set_seed(42);
    life.randomize();
    life.advance();
    let stats = life.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.compute_ms() <= stats.step_ms());
    assert_eq!(stats.board_size(), 128);
    assert_eq!(stats.live_cells(), life.live_cells());
}

#[test]
fn perf_smoke_thread_pool_on_default_board() {
    let mut core = LifeCore::new(life_engine::DEFAULT_BOARD_SIZE);
    core.set_parallelism(Parallelism::ThreadPool, 4);
    core.enable_perf_metrics(true);
    core.randomize();
    let before = core.live_cells() as i64;
    core.advance();

    let stats = core.perf_stats();
    assert_eq!(stats.workers(), 4);
    assert_eq!(stats.rows_per_worker_max(), 250);
    assert_eq!(
        stats.live_cells() as i64,
        before + stats.births() as i64 - stats.deaths() as i64
    );
}
