use crate::core::utils::console;

use super::controller::{Cadence, FASTEST_BUDGET_MS};
use super::notify::Notification;
use super::{LifeCore, PerfTimer};

pub(super) fn start(core: &mut LifeCore) -> bool {
    let started = core.run.begin(core.generation);
    if started {
        tracing::debug!(generation = core.generation, "run started");
    }
    started
}

/// Running → Idle. Reports statistics, then brings the title and board up to date.
pub(super) fn pause(core: &mut LifeCore) {
    let label = core.executor_label();
    let workers = core.active_workers() as u32;
    if let Some(report) = core.run.end(core.generation, label, workers) {
        tracing::debug!(
            executor = report.executor,
            workers = report.workers,
            generations = report.generations,
            elapsed_ms = report.elapsed_ms,
            generations_per_sec = report.generations_per_sec,
            "run paused"
        );
        console::log(&report.message());
        core.notifier.notify(Notification::StatsChanged(report));
    }
    core.notifier.notify(Notification::TitleChanged { generation: core.generation });
    if core.run.needs_refresh() {
        show_whole_board(core);
    }
}

pub(super) fn single_step(core: &mut LifeCore) -> bool {
    if core.run.is_running() {
        return false;
    }
    core.advance();
    true
}

/// Produce whatever generations are due at `now_ms`; returns how many ran
pub(super) fn poll(core: &mut LifeCore, now_ms: f64) -> u32 {
    if !core.run.is_running() {
        return 0;
    }
    match core.run.cadence() {
        Cadence::Interval(ms) => {
            let due = core.run.take_due(now_ms, ms);
            for _ in 0..due {
                core.advance();
            }
            due
        }
        Cadence::Fastest => {
            let budget = PerfTimer::start();
            let mut produced = 0u32;
            loop {
                core.advance();
                produced += 1;
                if budget.elapsed_ms() >= FASTEST_BUDGET_MS {
                    break;
                }
            }
            produced
        }
    }
}

/// Drive the run on the calling thread until `stop` says so, then pause
#[cfg(not(target_arch = "wasm32"))]
pub(super) fn run_blocking<F>(core: &mut LifeCore, mut stop: F)
where
    F: FnMut(&LifeCore) -> bool,
{
    start(core);
    let clock = PerfTimer::start();
    while !stop(core) {
        let now = clock.elapsed_ms();
        if poll(core, now) == 0 {
            // Wake at least every 10 ms so `stop` is checked promptly
            let wait = core.run.ms_until_due(now).unwrap_or(1.0).clamp(1.0, 10.0);
            std::thread::sleep(std::time::Duration::from_secs_f64(wait / 1000.0));
        }
    }
    pause(core);
}

/// Notifications after a completed generation
pub(super) fn after_generation(core: &mut LifeCore) {
    core.run.set_needs_refresh(true);
    if core.run.is_running() && !core.run.display() {
        if core.run.title_due(core.generation) {
            core.notifier.notify(Notification::TitleChanged { generation: core.generation });
        }
        return;
    }
    show_whole_board(core);
    core.notifier.notify(Notification::TitleChanged { generation: core.generation });
}

pub(super) fn show_whole_board(core: &mut LifeCore) {
    core.run.set_needs_refresh(false);
    core.notifier.notify(Notification::BoardDirty);
}
