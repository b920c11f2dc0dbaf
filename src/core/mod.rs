//! Cross-cutting helpers shared by every layer.

#[macro_use]
pub mod utils;
