use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use image::RgbaImage;
use image::imageops;

use crate::core::data::frame::Frame;
use crate::core::explanations::errors::ExplanationError;
use crate::core::explanations::explanation_config::ExplanationConfig;
use crate::core::explanations::text_panel::{load_font_database, render_text_panel};
use crate::storage::read_gif::read_gif_frames;

/// Places a static text panel to the right of every frame of an animation.
pub struct ExplanationCompositor {
    config: ExplanationConfig,
    fallback_delay: Duration,
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl fmt::Debug for ExplanationCompositor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplanationCompositor")
            .field("config", &self.config)
            .field("fallback_delay", &self.fallback_delay)
            .field("fonts_loaded", &self.fontdb.get().is_some())
            .finish()
    }
}

impl ExplanationCompositor {
    /// `fallback_delay` applies when the source carries no usable frame delays.
    #[must_use]
    pub fn new(config: ExplanationConfig, fallback_delay: Duration) -> Self {
        Self {
            config,
            fallback_delay,
            fontdb: OnceLock::new(),
        }
    }

    /// Shares an already loaded font database instead of scanning the system fonts.
    #[must_use]
    pub fn with_font_database(self, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fontdb: OnceLock::from(fontdb),
            ..self
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExplanationConfig {
        &self.config
    }

    fn font_database(&self) -> Arc<usvg::fontdb::Database> {
        Arc::clone(self.fontdb.get_or_init(|| load_font_database(&self.config)))
    }

    pub fn topic_body(&self, topic: &str) -> Result<&str, ExplanationError> {
        self.config
            .body(topic)
            .ok_or_else(|| ExplanationError::UnknownTopic {
                topic: topic.to_string(),
            })
    }

    pub fn text_panel(&self, height: u32, body: &str) -> Result<RgbaImage, ExplanationError> {
        render_text_panel(&self.config, self.font_database(), height, body)
    }

    /// Re-opens the GIF at `source` and annotates each of its frames.
    pub fn compose(&self, source: &Path, topic: &str) -> Result<Vec<Frame>, ExplanationError> {
        let body = self.topic_body(topic)?;
        let frames = read_gif_frames(source)?;

        if frames.is_empty() {
            return Err(ExplanationError::SourceAnimationEmpty {
                path: source.to_path_buf(),
            });
        }

        let panel = self.text_panel(frames[0].height(), body)?;
        Ok(self.compose_frames(frames, &panel))
    }

    /// Widens every frame by the panel width and draws `panel` at its right edge.
    ///
    /// Frames keep their own delay; zero delays take the first non-zero delay
    /// in the sequence, or the fallback when there is none.
    #[must_use]
    pub fn compose_frames(&self, frames: Vec<Frame>, panel: &RgbaImage) -> Vec<Frame> {
        let default_delay = frames
            .iter()
            .map(Frame::delay)
            .find(|delay| !delay.is_zero())
            .unwrap_or(self.fallback_delay);

        frames
            .into_iter()
            .map(|frame| {
                let delay = if frame.delay().is_zero() {
                    default_delay
                } else {
                    frame.delay()
                };
                let mut canvas =
                    RgbaImage::new(frame.width() + panel.width(), frame.height().max(panel.height()));
                imageops::replace(&mut canvas, frame.image(), 0, 0);
                imageops::replace(&mut canvas, panel, i64::from(frame.width()), 0);

                Frame::new(canvas, delay)
            })
            .collect()
    }
}
