use crate::systems::executor::{build_executor, clamp_workers, Parallelism};

use super::config::LifeConfig;
use super::controller::Cadence;
use super::perf_stats::PerfStats;
use super::{commands, LifeCore};

pub(super) fn set_parallelism(core: &mut LifeCore, parallelism: Parallelism, workers: usize) {
    let workers = clamp_workers(workers);
    if parallelism == core.parallelism && workers == core.workers {
        return;
    }
    core.parallelism = parallelism;
    core.workers = workers;
    core.executor = build_executor(parallelism, workers);
    tracing::debug!(
        parallelism = parallelism.label(),
        workers,
        executor = core.executor.label(),
        "parallelism changed"
    );
}

pub(super) fn set_workers(core: &mut LifeCore, workers: usize) {
    set_parallelism(core, core.parallelism, workers);
}

/// Turning tracking off zeroes every age on the board
pub(super) fn set_track_age(core: &mut LifeCore, enabled: bool) {
    core.track_age = enabled;
    if !enabled {
        for cell in core.buffers.current_mut().cells_mut() {
            cell.age = 0;
        }
    }
}

pub(super) fn set_seed(core: &mut LifeCore, seed: u32) {
    core.seed = seed;
    core.rng_state = seed;
}

pub(super) fn enable_perf_metrics(core: &mut LifeCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &LifeCore) -> PerfStats {
    core.perf_stats.clone()
}

/// Apply a validated config. A different board size reallocates the board.
pub(super) fn configure(core: &mut LifeCore, config: &LifeConfig) -> Result<(), String> {
    config.validate()?;
    if config.board_size != core.buffers.size() {
        commands::resize(core, config.board_size)?;
    }
    set_parallelism(core, config.parallelism, config.workers);
    set_track_age(core, config.track_age);
    core.run.set_interval_ms(config.interval_ms);
    core.run.set_display(config.display);
    if config.fastest {
        core.run.set_fastest();
    }
    set_seed(core, config.seed);
    enable_perf_metrics(core, config.perf_metrics);
    Ok(())
}

pub(super) fn config(core: &LifeCore) -> LifeConfig {
    LifeConfig {
        board_size: core.buffers.size(),
        parallelism: core.parallelism,
        workers: core.workers,
        track_age: core.track_age,
        display: core.run.display(),
        interval_ms: core.run.interval_ms(),
        fastest: core.run.cadence() == Cadence::Fastest,
        seed: core.seed,
        perf_metrics: core.perf_enabled,
    }
}

