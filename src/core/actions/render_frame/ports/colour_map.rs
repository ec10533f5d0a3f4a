use crate::core::data::colour::Colour;

/// Continuous colour ramp sampled at a normalized position.
pub trait ColourMap {
    /// `t` is expected in [0, 1]; implementations clamp anything outside.
    fn map(&self, t: f64) -> Colour;

    fn display_name(&self) -> &str;
}
