use crate::spatial::board::MAX_BOARD_SIZE;
use crate::spatial::double_buffer::DoubleBuffer;
use crate::systems::executor::{build_executor, clamp_workers};

use super::config::LifeConfig;
use super::controller::RunController;
use super::notify::Notifier;
use super::perf_stats::PerfStats;
use super::LifeCore;

/// Board side clamped into `1..=MAX_BOARD_SIZE`
pub(super) fn clamp_board_size(size: u32) -> u32 {
    size.clamp(1, MAX_BOARD_SIZE)
}

pub(super) fn create_life_core(size: u32) -> LifeCore {
    let config = LifeConfig {
        board_size: clamp_board_size(size),
        ..LifeConfig::default()
    };
    build(&config)
}

pub(super) fn create_life_core_with_config(config: &LifeConfig) -> Result<LifeCore, String> {
    config.validate()?;
    Ok(build(config))
}

fn build(config: &LifeConfig) -> LifeCore {
    let workers = clamp_workers(config.workers);
    let mut run = RunController::new();
    run.set_interval_ms(config.interval_ms);
    run.set_display(config.display);
    if config.fastest {
        run.set_fastest();
    }

    tracing::debug!(
        size = config.board_size,
        parallelism = config.parallelism.label(),
        workers,
        "life core created"
    );

    LifeCore {
        buffers: DoubleBuffer::new(config.board_size),
        generation: 0,
        parallelism: config.parallelism,
        workers,
        executor: build_executor(config.parallelism, workers),
        track_age: config.track_age,
        seed: config.seed,
        rng_state: config.seed,
        run,
        notifier: Notifier::new(),
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
        occupancy: Vec::new(),
    }
}
