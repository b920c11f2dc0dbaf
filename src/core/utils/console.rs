//! Host-visible log lines.
//!
//! In the browser nothing listens to `tracing` unless the host installs a
//! subscriber, so the few lines a user actually wants to see (engine banner,
//! run reports, executor fallbacks) go to the JS console there. Native hosts
//! get them as ordinary `tracing` events.

#[inline]
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(target: "life_engine", "{message}");
}

#[inline]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!(target: "life_engine", "{message}");
}
