use crate::domain::cell::Cell;
use crate::spatial::board::Board;
use crate::systems::executor::{Parallelism, PartitionJob, RowExecutor, MAX_WORKERS, MIN_WORKERS};
use crate::systems::rule;

use super::partition::stride_partitions;
use super::{run, LifeCore, PerfTimer};

/// One generation with the configured parallelism
pub(super) fn advance(core: &mut LifeCore) {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let compute_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let rows_max = {
        let (current, next) = core.buffers.split();
        match core.parallelism {
            Parallelism::Sequential => {
                rule::compute_board(current, next, core.track_age);
                current.size() as usize
            }
            Parallelism::ThreadPool | Parallelism::ScopedThreads => {
                compute_partitioned(current, next, core.executor.as_ref(), core.track_age)
            }
        }
    };
    let workers = core.active_workers();
    finish(core, perf_on, step_start, compute_start, workers, rows_max);
}

/// One generation on a caller-supplied executor, regardless of the configured mode
pub(super) fn advance_with(core: &mut LifeCore, executor: &dyn RowExecutor) {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let compute_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let rows_max = {
        let (current, next) = core.buffers.split();
        compute_partitioned(current, next, executor, core.track_age)
    };
    finish(core, perf_on, step_start, compute_start, executor.workers(), rows_max);
}

/// Fan the rows of `next` out over the executor by fixed stride and join.
///
/// Returns the largest number of rows any single partition computed.
fn compute_partitioned(
    current: &Board,
    next: &mut Board,
    executor: &dyn RowExecutor,
    track_age: bool,
) -> usize {
    let row_count = current.size() as usize;
    let workers = executor.workers();
    assert!(
        (MIN_WORKERS..=MAX_WORKERS).contains(&workers),
        "executor reports {} workers, supported range is {}..={}",
        workers,
        MIN_WORKERS,
        MAX_WORKERS
    );

    let sets = stride_partitions(next.rows_mut(), row_count, workers);
    let rows_max = sets.iter().map(|set| set.rows.len()).max().unwrap_or(0);

    let jobs: Vec<PartitionJob<'_>> = sets
        .into_iter()
        .map(|set| {
            let partition = set.partition;
            Box::new(move || {
                for (row, out) in set.rows {
                    debug_assert!(partition.owns(row as usize));
                    rule::compute_row(current, row, out, track_age);
                }
            }) as PartitionJob<'_>
        })
        .collect();

    // Barrier: every partition has written its rows once this returns
    executor.execute(jobs);
    rows_max
}

fn finish(
    core: &mut LifeCore,
    perf_on: bool,
    step_start: Option<PerfTimer>,
    compute_start: Option<PerfTimer>,
    workers: usize,
    rows_max: usize,
) {
    let compute_ms = compute_start.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    let swap_start = if perf_on { Some(PerfTimer::start()) } else { None };
    core.buffers.swap();
    core.generation += 1;
    let swap_ms = swap_start.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    if perf_on {
        let census_start = PerfTimer::start();
        let (live, births, deaths) = census(core.buffers.current(), core.buffers.next());
        let size = core.buffers.size();

        let stats = &mut core.perf_stats;
        stats.reset();
        stats.compute_ms = compute_ms;
        stats.swap_ms = swap_ms;
        stats.census_ms = census_start.elapsed_ms();
        stats.generation = core.generation;
        stats.live_cells = live;
        stats.births = births;
        stats.deaths = deaths;
        stats.workers = workers as u32;
        stats.rows_per_worker_max = rows_max as u32;
        stats.board_size = size;
        stats.memory_bytes = (core.buffers.current().len() as u32)
            .saturating_mul(2 * std::mem::size_of::<Cell>() as u32);
        stats.step_ms = step_start.map(|t| t.elapsed_ms()).unwrap_or(0.0);
    }

    run::after_generation(core);
}

/// Live cells in `now`, plus births and deaths relative to `before`
fn census(now: &Board, before: &Board) -> (u32, u32, u32) {
    let mut live = 0u32;
    let mut births = 0u32;
    let mut deaths = 0u32;
    for (a, b) in now.cells().iter().zip(before.cells()) {
        match (a.occupied, b.occupied) {
            (true, true) => live += 1,
            (true, false) => {
                live += 1;
                births += 1;
            }
            (false, true) => deaths += 1,
            (false, false) => {}
        }
    }
    (live, births, deaths)
}
