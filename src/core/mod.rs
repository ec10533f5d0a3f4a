pub mod actions;
pub mod data;
pub mod explanations;
pub mod fractals;
pub mod palettes;
pub mod util;
