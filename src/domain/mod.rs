pub mod cell;
pub mod formations;
