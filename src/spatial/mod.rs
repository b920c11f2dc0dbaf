pub mod board;
pub mod double_buffer;
