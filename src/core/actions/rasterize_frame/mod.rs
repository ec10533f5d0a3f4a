#[allow(clippy::module_inception)]
pub mod rasterize_frame;
