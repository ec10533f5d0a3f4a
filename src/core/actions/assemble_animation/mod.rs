pub mod animation_assembler;
pub mod errors;
pub mod iteration_schedule;
pub mod ports;
