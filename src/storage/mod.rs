pub mod errors;
pub mod read_gif;
pub mod write_atomic;
