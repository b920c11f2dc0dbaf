use wasm_bindgen::prelude::*;

use crate::domain::formations::{self, Offset};
use crate::systems::executor::Parallelism;

use super::config::LifeConfig;
use super::perf_stats::PerfStats;
use super::LifeCore;

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

#[wasm_bindgen]
pub struct Life {
    core: LifeCore,
}

#[wasm_bindgen]
impl Life {
    /// Create an empty `size × size` board with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Self {
        Self {
            core: LifeCore::new(size),
        }
    }

    /// Create from a JSON `LifeConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Life, JsValue> {
        let config = LifeConfig::from_json(&json).map_err(js_err)?;
        let core = LifeCore::with_config(&config).map_err(js_err)?;
        Ok(Self { core })
    }

    pub fn configure(&mut self, json: String) -> Result<(), JsValue> {
        let config = LifeConfig::from_json(&json).map_err(js_err)?;
        self.core.configure(&config).map_err(js_err)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn run_state(&self) -> String { self.core.run_state().as_str().to_string() }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.core.live_cells() as u32 }

    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.core.is_occupied(row, col)
    }

    /// Age of the cell, 0 off the board
    pub fn age(&self, row: u32, col: u32) -> u32 {
        self.core.age(row, col).unwrap_or(0)
    }

    // === STEPPING & RUN CONTROL ===

    pub fn advance(&mut self) {
        self.core.advance();
    }

    pub fn start(&mut self) -> bool {
        self.core.start()
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn single_step(&mut self) -> bool {
        self.core.single_step()
    }

    /// Call once per animation frame with `performance.now()`
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        self.core.poll(now_ms)
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.core.set_speed(speed);
    }

    pub fn fastest(&mut self) {
        self.core.fastest();
    }

    pub fn set_display(&mut self, display: bool) {
        self.core.set_display(display);
    }

    /// Last run report as JSON, `null` before the first pause
    pub fn last_run_report_json(&self) -> String {
        self.core
            .last_run_report()
            .map(|report| report.to_json())
            .unwrap_or_else(|| "null".to_string())
    }

    // === EDITS ===

    pub fn toggle(&mut self, row: i32, col: i32) -> bool {
        self.core.toggle(row, col)
    }

    /// `deltas` is a flat `[row0, col0, row1, col1, ...]` list
    pub fn stamp_pattern(&mut self, row: i32, col: i32, deltas: Vec<i32>) -> Result<u32, JsValue> {
        if deltas.len() % 2 != 0 {
            return Err(js_err(format!(
                "pattern needs (row, col) pairs, got {} values",
                deltas.len()
            )));
        }
        let offsets: Vec<Offset> = deltas.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
        Ok(self.core.stamp_pattern(row, col, &offsets) as u32)
    }

    pub fn stamp_formation(&mut self, row: i32, col: i32, name: String) -> Result<u32, JsValue> {
        self.core
            .stamp_formation(row, col, &name)
            .map(|n| n as u32)
            .map_err(js_err)
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn resize(&mut self, size: u32) -> Result<(), JsValue> {
        self.core.resize(size).map_err(js_err)
    }

    // === SETTINGS ===

    /// `mode` is `"sequential"`, `"threadPool"` or `"scopedThreads"`
    pub fn set_parallelism(&mut self, mode: String, workers: u32) -> Result<(), JsValue> {
        let parallelism: Parallelism = serde_json::from_value(serde_json::Value::String(mode))
            .map_err(|e| js_err(e.to_string()))?;
        self.core.set_parallelism(parallelism, workers as usize);
        Ok(())
    }

    pub fn set_track_age(&mut self, enabled: bool) {
        self.core.set_track_age(enabled);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds a census pass when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === RENDERING ===

    /// Queued notifications as a JSON array; empties the queue
    pub fn drain_notifications_json(&mut self) -> String {
        let drained = self.core.drain_notifications();
        serde_json::to_string(&drained).unwrap_or_else(|_| "[]".to_string())
    }

    /// Refresh the occupancy snapshot and return a pointer into wasm memory
    pub fn occupancy_ptr(&mut self) -> *const u8 {
        self.core.occupancy().as_ptr()
    }

    /// Bytes in the occupancy snapshot (`size * size`)
    pub fn occupancy_len(&self) -> usize {
        self.core.board().len()
    }

    pub fn formations_manifest_json(&self) -> String {
        formations::manifest_json()
    }
}
