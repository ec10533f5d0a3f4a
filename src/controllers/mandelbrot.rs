use std::path::PathBuf;

use thiserror::Error;

use crate::core::actions::assemble_animation::animation_assembler::AnimationAssembler;
use crate::core::actions::assemble_animation::errors::AnimationError;
use crate::core::actions::assemble_animation::ports::animation_presenter::AnimationPresenterPort;
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, RequestLimits};
use crate::core::palettes::errors::InvalidPaletteError;
use crate::core::palettes::kinds::Palette;
use crate::presenters::file::gif::GifFilePresenter;

pub const MIN_ANIMATION_ITERATIONS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("{field} {value} exceeds the limit of {limit}")]
    AboveLimit {
        field: &'static str,
        value: u32,
        limit: u32,
    },

    #[error("max_iterations must be at least 2, got {0}")]
    TooFewIterations(u32),

    #[error(transparent)]
    InvalidPalette(#[from] InvalidPaletteError),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Query parameters of a Mandelbrot animation request, checked against the limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandelbrotRequest {
    width: u32,
    height: u32,
    max_iterations: u32,
    colour: String,
    explain: bool,
}

fn check_bound(field: &'static str, value: u32, limit: u32) -> Result<(), RequestError> {
    if value == 0 {
        return Err(RequestError::NotPositive { field });
    }
    if value > limit {
        return Err(RequestError::AboveLimit { field, value, limit });
    }
    Ok(())
}

impl MandelbrotRequest {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        colour: impl Into<String>,
        explain: bool,
        limits: &RequestLimits,
    ) -> Result<Self, RequestError> {
        let colour = colour.into();

        check_bound("width", width, limits.max_width)?;
        check_bound("height", height, limits.max_height)?;
        if max_iterations < MIN_ANIMATION_ITERATIONS {
            return Err(RequestError::TooFewIterations(max_iterations));
        }
        check_bound("max_iterations", max_iterations, limits.max_iterations)?;
        colour.parse::<Palette>()?;

        Ok(Self {
            width,
            height,
            max_iterations,
            colour,
            explain,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    #[must_use]
    pub fn explain(&self) -> bool {
        self.explain
    }
}

/// Entry point the service layer calls for `/mandelbrot` requests.
#[derive(Debug)]
pub struct MandelbrotController<P: AnimationPresenterPort = GifFilePresenter> {
    assembler: AnimationAssembler<P>,
}

impl MandelbrotController<GifFilePresenter> {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self::with_assembler(AnimationAssembler::new(config))
    }
}

impl<P: AnimationPresenterPort> MandelbrotController<P> {
    #[must_use]
    pub fn with_assembler(assembler: AnimationAssembler<P>) -> Self {
        Self { assembler }
    }

    #[must_use]
    pub fn assembler(&self) -> &AnimationAssembler<P> {
        &self.assembler
    }

    pub fn request(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
        colour: &str,
        explain: bool,
    ) -> Result<MandelbrotRequest, RequestError> {
        MandelbrotRequest::new(
            width,
            height,
            max_iterations,
            colour,
            explain,
            &self.assembler.config().limits,
        )
    }

    pub fn handle(&self, request: &MandelbrotRequest) -> Result<PathBuf, ControllerError> {
        let path = if request.explain() {
            self.assembler.build_animation_with_explanation(
                request.width(),
                request.height(),
                request.max_iterations(),
                request.colour(),
            )?
        } else {
            self.assembler.build_animation(
                request.width(),
                request.height(),
                request.max_iterations(),
                request.colour(),
            )?
        };

        Ok(path)
    }
}
