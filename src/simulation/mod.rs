//! Life engine core
//!
//! `LifeCore` owns the double-buffered board and orchestrates everything else;
//! the actual work lives in the submodules:
//! - step/      - one generation, sequential or row-partitioned
//! - run/       - run state machine, cadence, statistics
//! - commands/  - board edits
//! - notify/    - observer callbacks and the polling queue
//! - init/      - construction, settings, config

use crate::domain::cell::Cell;
use crate::domain::formations::Offset;
use crate::spatial::board::Board;
use crate::spatial::double_buffer::DoubleBuffer;
use crate::systems::executor::{Parallelism, RowExecutor};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/partition.rs"]
mod partition;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "run/report.rs"]
mod report;
#[path = "run/controller.rs"]
mod controller;
#[path = "run/run.rs"]
mod run;
#[path = "notify/notify.rs"]
mod notify;
mod facade;

pub use config::{LifeConfig, DEFAULT_SEED};
pub use controller::{Cadence, RunState, DEFAULT_INTERVAL_MS, SPEED_MAX};
pub use facade::Life;
pub use notify::{Notification, Observer, NOTIFICATION_QUEUE_LIMIT};
pub use perf_stats::PerfStats;
pub use report::RunReport;

use controller::RunController;
use notify::Notifier;
use perf_timer::PerfTimer;

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    random::xorshift32(state)
}

/// The simulation engine
pub struct LifeCore {
    buffers: DoubleBuffer,
    generation: u64,

    // Stepping
    parallelism: Parallelism,
    workers: usize,
    executor: Box<dyn RowExecutor>,
    track_age: bool,
    seed: u32,
    rng_state: u32,

    run: RunController,
    notifier: Notifier,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Byte-per-cell snapshot handed to JS renderers
    occupancy: Vec<u8>,
}

impl LifeCore {
    /// Empty `size × size` board with default settings.
    /// `size` is clamped into `1..=MAX_BOARD_SIZE`.
    pub fn new(size: u32) -> Self {
        init::create_life_core(size)
    }

    pub fn with_config(config: &LifeConfig) -> Result<Self, String> {
        init::create_life_core_with_config(config)
    }

    /// Apply new settings between generations
    pub fn configure(&mut self, config: &LifeConfig) -> Result<(), String> {
        settings::configure(self, config)
    }

    pub fn config(&self) -> LifeConfig {
        settings::config(self)
    }

    // === QUERIES ===

    pub fn size(&self) -> u32 { self.buffers.size() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn run_state(&self) -> RunState { self.run.state() }

    pub fn is_running(&self) -> bool { self.run.is_running() }

    /// Current board, read-only
    pub fn board(&self) -> &Board {
        self.buffers.current()
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        self.buffers.current().get(row, col)
    }

    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.buffers.current().is_occupied(row, col)
    }

    /// Generations survived; always 0 while age tracking is off
    pub fn age(&self, row: u32, col: u32) -> Option<u32> {
        self.cell(row, col).map(|cell| cell.age)
    }

    pub fn live_cells(&self) -> usize {
        self.buffers.current().live_count()
    }

    pub fn last_run_report(&self) -> Option<&RunReport> {
        self.run.last_report()
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn parallelism(&self) -> Parallelism { self.parallelism }

    pub fn workers(&self) -> usize { self.workers }

    /// Label of what actually steps the board
    pub fn executor_label(&self) -> &'static str {
        match self.parallelism {
            Parallelism::Sequential => Parallelism::Sequential.label(),
            _ => self.executor.label(),
        }
    }

    fn active_workers(&self) -> usize {
        match self.parallelism {
            Parallelism::Sequential => 1,
            _ => self.executor.workers(),
        }
    }

    pub fn track_age(&self) -> bool { self.track_age }

    pub fn cadence(&self) -> Cadence { self.run.cadence() }

    pub fn interval_ms(&self) -> u32 { self.run.interval_ms() }

    pub fn speed(&self) -> u32 { self.run.speed() }

    pub fn display(&self) -> bool { self.run.display() }

    /// Refresh and return the byte-per-cell occupancy snapshot
    /// (0 = empty, 1.. = occupied, `1 + AgeBand`)
    pub fn occupancy(&mut self) -> &[u8] {
        self.buffers.current().write_occupancy(&mut self.occupancy);
        &self.occupancy
    }

    // === STEPPING ===

    /// Compute the next generation, swap buffers, bump the counter
    pub fn advance(&mut self) {
        step::advance(self);
    }

    /// Like `advance`, but on the given executor whatever the configured mode
    pub fn advance_with(&mut self, executor: &dyn RowExecutor) {
        step::advance_with(self, executor);
    }

    // === RUN CONTROL ===

    /// Idle → Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        run::start(self)
    }

    /// Running → Idle, reporting run statistics
    pub fn pause(&mut self) {
        run::pause(self);
    }

    pub fn stop(&mut self) {
        run::pause(self);
    }

    /// One generation, only while Idle
    pub fn single_step(&mut self) -> bool {
        run::single_step(self)
    }

    /// Produce the generations due at host time `now_ms`; returns how many ran
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        run::poll(self, now_ms)
    }

    /// Run on this thread until `stop` returns true
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_blocking<F>(&mut self, stop: F)
    where
        F: FnMut(&LifeCore) -> bool,
    {
        run::run_blocking(self, stop);
    }

    /// 0..=`SPEED_MAX`; the interval becomes `SPEED_MAX - speed` ms
    pub fn set_speed(&mut self, speed: u32) {
        self.run.set_speed(speed);
    }

    pub fn set_interval_ms(&mut self, ms: u32) {
        self.run.set_interval_ms(ms);
    }

    /// No pacing, display off
    pub fn fastest(&mut self) {
        self.run.set_fastest();
    }

    pub fn set_display(&mut self, display: bool) {
        self.run.set_display(display);
    }

    // === EDITS ===

    /// Flip a cell; false for out-of-bounds positions
    pub fn toggle(&mut self, row: i32, col: i32) -> bool {
        commands::toggle(self, row, col)
    }

    pub fn stamp_pattern(&mut self, anchor_row: i32, anchor_col: i32, offsets: &[Offset]) -> usize {
        commands::stamp_pattern(self, anchor_row, anchor_col, offsets)
    }

    /// Stamp a catalog formation by name
    pub fn stamp_formation(&mut self, anchor_row: i32, anchor_col: i32, name: &str) -> Result<usize, String> {
        commands::stamp_formation(self, anchor_row, anchor_col, name)
    }

    pub fn randomize(&mut self) {
        commands::randomize(self);
    }

    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn resize(&mut self, size: u32) -> Result<(), String> {
        commands::resize(self, size)
    }

    /// Replace the board (pauses, generation back to 0)
    pub fn load_board(&mut self, board: Board) -> Result<(), String> {
        commands::load_board(self, board)
    }

    // === SETTINGS ===

    pub fn set_parallelism(&mut self, parallelism: Parallelism, workers: usize) {
        settings::set_parallelism(self, parallelism, workers);
    }

    /// Clamped into `1..=255`
    pub fn set_workers(&mut self, workers: usize) {
        settings::set_workers(self, workers);
    }

    pub fn set_track_age(&mut self, enabled: bool) {
        settings::set_track_age(self, enabled);
    }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds a census pass when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    // === NOTIFICATIONS ===

    pub fn subscribe(&mut self, observer: Observer) {
        self.notifier.subscribe(observer);
    }

    /// Everything queued since the last drain, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
