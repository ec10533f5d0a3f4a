pub mod assemble_animation;
pub mod compose_explanation;
pub mod generate_fractal;
pub mod rasterize_frame;
pub mod render_frame;
