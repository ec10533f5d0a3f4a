pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod frame;
pub mod grid_size;
pub mod intensity_matrix;
pub mod point;
