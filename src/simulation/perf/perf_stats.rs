use wasm_bindgen::prelude::*;

/// Snapshot of the last `advance()` (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) compute_ms: f64,
    pub(super) swap_ms: f64,
    pub(super) census_ms: f64,
    pub(super) generation: u64,
    pub(super) live_cells: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) workers: u32,
    pub(super) rows_per_worker_max: u32,
    pub(super) board_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    #[wasm_bindgen(getter)]
    pub fn swap_ms(&self) -> f64 { self.swap_ms }
    #[wasm_bindgen(getter)]
    pub fn census_ms(&self) -> f64 { self.census_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }
    #[wasm_bindgen(getter)]
    pub fn rows_per_worker_max(&self) -> u32 { self.rows_per_worker_max }
    #[wasm_bindgen(getter)]
    pub fn board_size(&self) -> u32 { self.board_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
