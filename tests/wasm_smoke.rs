#![cfg(target_arch = "wasm32")]

use life_engine::Life;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn life_steps_in_the_browser() {
    let mut life = Life::new(16);
    assert_eq!(life.stamp_formation(1, 1, "Glider".to_string()).ok(), Some(5));
    life.advance();
    assert_eq!(life.generation(), 1);
    assert_eq!(life.live_cells(), 5);
    assert!(life.drain_notifications_json().contains("boardDirty"));
    assert_eq!(life.occupancy_len(), 256);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(Life::from_config("{\"workers\":0}".to_string()).is_err());
    let life = Life::from_config("{\"boardSize\":8}".to_string()).ok().unwrap();
    assert_eq!(life.size(), 8);
}

fn occupied_cells(life: &Life) -> Vec<(u32, u32)> {
    let size = life.size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| life.is_occupied(row, col))
        .collect()
}

fn seeded(mode: &str, workers: u32) -> Life {
    let mut life = Life::new(24);
    life.set_seed(0xBEEF);
    life.randomize();
    life.set_parallelism(mode.to_string(), workers).ok().unwrap();
    life
}

#[cfg(feature = "parallel")]
#[wasm_bindgen_test]
fn thread_pool_mode_steps_like_sequential() {
    let mut pooled = seeded("threadPool", 3);
    let mut plain = seeded("sequential", 1);
    for _ in 0..4 {
        pooled.advance();
        plain.advance();
    }
    assert_eq!(pooled.generation(), 4);
    assert_eq!(occupied_cells(&pooled), occupied_cells(&plain));
}

#[wasm_bindgen_test]
fn scoped_threads_run_inline_in_the_browser() {
    let mut life = seeded("scopedThreads", 3);
    life.start();
    life.advance();
    life.pause();
    let report = life.last_run_report_json();
    assert!(report.contains("\"executor\":\"Inline\""), "{report}");
    assert!(report.contains("\"workers\":3"), "{report}");
}
