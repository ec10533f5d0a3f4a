//! Progressive-detail Mandelbrot animations.
//!
//! Each animation steps the escape-time cap upward (2, 12, 22, ...) and
//! renders one palette-mapped frame per cap into a looping GIF whose name is
//! derived from the request parameters. An annotated variant places a text
//! panel beside every frame.
mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::mandelbrot::{
    ControllerError, MandelbrotController, MandelbrotRequest, RequestError,
};
pub use crate::core::actions::assemble_animation::animation_assembler::AnimationAssembler;
pub use crate::core::actions::assemble_animation::errors::AnimationError;
pub use crate::core::actions::assemble_animation::iteration_schedule::IterationSchedule;
pub use crate::core::actions::assemble_animation::ports::animation_presenter::AnimationPresenterPort;
pub use crate::core::actions::compose_explanation::explanation_compositor::ExplanationCompositor;
pub use crate::core::actions::rasterize_frame::rasterize_frame::{escape_to_intensity, rasterize_frame};
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, MANDELBROT_VIEWPORT};
pub use crate::core::data::frame::Frame;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::intensity_matrix::IntensityMatrix;
pub use crate::core::explanations::errors::ExplanationError;
pub use crate::core::explanations::explanation_config::ExplanationConfig;
pub use crate::core::explanations::topics::ExplanationTopic;
pub use crate::core::fractals::mandelbrot::algorithm::compute_escape;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig, RequestLimits};
pub use crate::core::palettes::errors::InvalidPaletteError;
pub use crate::core::palettes::factory::palette_factory;
pub use crate::core::palettes::kinds::{Palette, PaletteKind};
pub use crate::core::palettes::ramp::ColourRamp;
pub use crate::presenters::file::gif::GifFilePresenter;
pub use crate::storage::errors::StorageError;
pub use crate::storage::read_gif::read_gif_frames;
