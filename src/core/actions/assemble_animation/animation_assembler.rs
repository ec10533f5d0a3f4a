use std::path::PathBuf;
use std::time::Instant;

use crate::core::actions::assemble_animation::errors::AnimationError;
use crate::core::actions::assemble_animation::ports::animation_presenter::AnimationPresenterPort;
use crate::core::actions::compose_explanation::explanation_compositor::ExplanationCompositor;
use crate::core::actions::rasterize_frame::rasterize_frame::rasterize_frame;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::palettes::factory::palette_factory;
use crate::core::palettes::kinds::Palette;
use crate::presenters::file::gif::GifFilePresenter;

const EXPLAINED_SUFFIX: &str = "_text";

/// Builds progressive-detail Mandelbrot animations into the resource directory.
///
/// Each frame raises the escape-time cap along the configured schedule while
/// keeping `max_iterations` as the brightness reference, so detail fills in
/// frame by frame.
#[derive(Debug)]
pub struct AnimationAssembler<P: AnimationPresenterPort = GifFilePresenter> {
    config: MandelbrotConfig,
    presenter: P,
    compositor: ExplanationCompositor,
}

impl AnimationAssembler<GifFilePresenter> {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self::with_presenter(config, GifFilePresenter::new())
    }
}

impl<P: AnimationPresenterPort> AnimationAssembler<P> {
    #[must_use]
    pub fn with_presenter(config: MandelbrotConfig, presenter: P) -> Self {
        let compositor = ExplanationCompositor::new(config.explanation.clone(), config.frame_delay());

        Self {
            config,
            presenter,
            compositor,
        }
    }

    #[must_use]
    pub fn with_compositor(self, compositor: ExplanationCompositor) -> Self {
        Self { compositor, ..self }
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn animation_path(&self, width: u32, height: u32, max_iterations: u32, colour: &str) -> PathBuf {
        self.config.resource_dir.join(format!(
            "mandelbrot_iter_{width}_{height}_{max_iterations}_{colour}.gif"
        ))
    }

    #[must_use]
    pub fn explained_animation_path(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
        colour: &str,
    ) -> PathBuf {
        self.config.resource_dir.join(format!(
            "mandelbrot_iter_{width}_{height}_{max_iterations}_{colour}{EXPLAINED_SUFFIX}.gif"
        ))
    }

    /// One frame per scheduled cap, in increasing order.
    pub fn render_frames(
        &self,
        grid: GridSize,
        max_iterations: u32,
        palette: Palette,
    ) -> Result<Vec<Frame>, AnimationError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations.into());
        }

        let colour_map = palette_factory(palette);
        let delay = self.config.frame_delay();
        let mut frames = Vec::with_capacity(self.config.schedule.frame_count(max_iterations));

        for iteration in self.config.schedule.iterations(max_iterations) {
            let matrix = rasterize_frame(grid, self.config.viewport, iteration, max_iterations)?;
            frames.push(render_frame(&matrix, &colour_map).with_delay(delay));
            tracing::debug!(iteration, max_iterations, "rendered frame");
        }

        if frames.is_empty() {
            return Err(AnimationError::EmptyAnimation {
                start: self.config.schedule.start,
                max_iterations,
            });
        }

        Ok(frames)
    }

    /// Renders the animation and returns the path of the written GIF.
    ///
    /// The path depends only on the arguments, so repeated calls land on the
    /// same file.
    #[tracing::instrument(skip(self))]
    pub fn build_animation(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
        colour: &str,
    ) -> Result<PathBuf, AnimationError> {
        let palette: Palette = colour.parse()?;
        let path = self.animation_path(width, height, max_iterations, colour);

        if self.config.reuse_existing && path.is_file() {
            tracing::info!(path = %path.display(), "reusing existing animation");
            return Ok(path);
        }

        let start = Instant::now();
        let frames = self.render_frames(GridSize::new(width, height), max_iterations, palette)?;
        let frame_count = frames.len();
        self.presenter.present(frames, &path)?;

        tracing::info!(
            path = %path.display(),
            frames = frame_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built animation"
        );
        Ok(path)
    }

    /// Builds the animation, then writes a copy with the explanation panel beside it.
    #[tracing::instrument(skip(self))]
    pub fn build_animation_with_explanation(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
        colour: &str,
    ) -> Result<PathBuf, AnimationError> {
        let topic = self.config.explanation.topic.as_str();
        self.compositor.topic_body(topic)?;

        let path = self.explained_animation_path(width, height, max_iterations, colour);
        if self.config.reuse_existing && path.is_file() {
            tracing::info!(path = %path.display(), "reusing existing explained animation");
            return Ok(path);
        }

        let source = self.build_animation(width, height, max_iterations, colour)?;
        let frames = self.compositor.compose(&source, topic)?;
        let frame_count = frames.len();
        self.presenter.present(frames, &path)?;

        tracing::info!(path = %path.display(), frames = frame_count, topic, "built explained animation");
        Ok(path)
    }
}
