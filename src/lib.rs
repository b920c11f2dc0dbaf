//! Life Engine - Conway's Game of Life on a bounded board, native and WASM
//!
//! Architecture:
//! - core/        - macros and console logging
//! - domain/      - cells and the formation catalog
//! - spatial/     - board storage and the current/next double buffer
//! - systems/     - the B3/S23 rule and row executors
//! - simulation/  - engine orchestration, run control, edits, JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::utils::console::log(&format!("Life engine {} initialized", version()));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Formation catalog as JSON, for hosts building pattern menus
#[wasm_bindgen]
pub fn formations_manifest_json() -> String {
    domain::formations::manifest_json()
}

// Re-export main types
pub use domain::cell::{AgeBand, Cell};
pub use domain::formations::{Formation, FormationCategory, Offset};
pub use simulation::{
    Cadence, Life, LifeConfig, LifeCore, Notification, PerfStats, RunReport, RunState,
};
pub use spatial::board::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use systems::executor::{
    build_executor, InlineExecutor, Parallelism, PartitionJob, RowExecutor, ScopedThreadExecutor,
};
#[cfg(feature = "parallel")]
pub use systems::executor::PoolExecutor;
