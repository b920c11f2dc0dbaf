pub mod rule;
pub mod executor;
