//! Run state machine and cadence bookkeeping
//!
//! The controller owns no timers. Hosts feed it the current time through
//! `poll`, and it answers how many generations are due. The engine performs
//! the generations, so a pause can only land between two of them.

use super::report::RunReport;
use super::PerfTimer;

pub const DEFAULT_INTERVAL_MS: u32 = 500;
pub const SPEED_MAX: u32 = 1000;
/// With display off, the title still updates every this many generations...
pub const TITLE_EVERY_GENERATIONS: u64 = 10;
/// ...or after every generation when the interval is at least this long
pub const TITLE_EVERY_INTERVAL_MS: u32 = 500;
/// Generations a single interval poll may catch up on
pub const MAX_CATCH_UP: u32 = 8;
/// Time a fastest-mode poll may spend stepping
pub const FASTEST_BUDGET_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cadence {
    /// One generation per `n` milliseconds
    Interval(u32),
    /// As many generations as the frame budget allows
    Fastest,
}

pub(crate) struct RunController {
    state: RunState,
    interval_ms: u32,
    fastest: bool,
    display: bool,
    needs_refresh: bool,
    started: Option<PerfTimer>,
    start_generation: u64,
    last_tick_ms: Option<f64>,
    last_report: Option<RunReport>,
}

impl RunController {
    pub(crate) fn new() -> Self {
        Self {
            state: RunState::Idle,
            interval_ms: DEFAULT_INTERVAL_MS,
            fastest: false,
            display: true,
            needs_refresh: false,
            started: None,
            start_generation: 0,
            last_tick_ms: None,
            last_report: None,
        }
    }

    pub(crate) fn state(&self) -> RunState {
        self.state
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub(crate) fn cadence(&self) -> Cadence {
        if self.fastest || self.interval_ms == 0 {
            Cadence::Fastest
        } else {
            Cadence::Interval(self.interval_ms)
        }
    }

    pub(crate) fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub(crate) fn set_interval_ms(&mut self, ms: u32) {
        self.interval_ms = ms.min(SPEED_MAX);
        self.fastest = false;
        self.last_tick_ms = None;
    }

    /// Slider position: `SPEED_MAX` is fastest, 0 is one generation per second
    pub(crate) fn speed(&self) -> u32 {
        SPEED_MAX - self.interval_ms
    }

    pub(crate) fn set_speed(&mut self, speed: u32) {
        self.set_interval_ms(SPEED_MAX - speed.min(SPEED_MAX));
    }

    pub(crate) fn set_fastest(&mut self) {
        self.interval_ms = 0;
        self.fastest = true;
        self.display = false;
        self.last_tick_ms = None;
    }

    pub(crate) fn display(&self) -> bool {
        self.display
    }

    pub(crate) fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    pub(crate) fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    pub(crate) fn set_needs_refresh(&mut self, needs_refresh: bool) {
        self.needs_refresh = needs_refresh;
    }

    /// Idle → Running. Returns false if already running.
    pub(crate) fn begin(&mut self, generation: u64) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = RunState::Running;
        self.started = Some(PerfTimer::start());
        self.start_generation = generation;
        self.last_tick_ms = None;
        true
    }

    /// Running → Idle, producing the interval's report. `None` if not running.
    pub(crate) fn end(&mut self, generation: u64, executor: &'static str, workers: u32) -> Option<RunReport> {
        if !self.is_running() {
            return None;
        }
        self.state = RunState::Idle;
        self.last_tick_ms = None;
        let elapsed_ms = self.started.take().map(|t| t.elapsed_whole_ms()).unwrap_or(0);
        let generations = generation.saturating_sub(self.start_generation);
        let report = RunReport::new(executor, workers, generations, elapsed_ms);
        self.last_report = Some(report.clone());
        Some(report)
    }

    pub(crate) fn last_report(&self) -> Option<&RunReport> {
        self.last_report.as_ref()
    }

    /// Interval generations due at `now_ms`, capped at `MAX_CATCH_UP`.
    ///
    /// The first poll after a start only anchors the clock. A clock that goes
    /// backwards re-anchors without producing anything.
    pub(crate) fn take_due(&mut self, now_ms: f64, interval_ms: u32) -> u32 {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return 0;
        };
        if now_ms < last {
            self.last_tick_ms = Some(now_ms);
            return 0;
        }
        let interval = f64::from(interval_ms.max(1));
        let due = ((now_ms - last) / interval).floor() as u64;
        if due == 0 {
            return 0;
        }
        if due > u64::from(MAX_CATCH_UP) {
            self.last_tick_ms = Some(now_ms);
            return MAX_CATCH_UP;
        }
        self.last_tick_ms = Some(last + due as f64 * interval);
        due as u32
    }

    /// Milliseconds until the next interval generation is due
    pub(crate) fn ms_until_due(&self, now_ms: f64) -> Option<f64> {
        match (self.cadence(), self.last_tick_ms) {
            (Cadence::Interval(ms), Some(last)) => Some((last + f64::from(ms) - now_ms).max(0.0)),
            _ => None,
        }
    }

    /// Whether a generation should update the title while display is off
    pub(crate) fn title_due(&self, generation: u64) -> bool {
        self.interval_ms >= TITLE_EVERY_INTERVAL_MS || generation % TITLE_EVERY_GENERATIONS == 0
    }
}
