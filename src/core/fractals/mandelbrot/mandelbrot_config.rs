use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::core::actions::assemble_animation::iteration_schedule::IterationSchedule;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::explanations::explanation_config::ExplanationConfig;

const DEFAULT_RESOURCE_DIR: &str = "resources";
const DEFAULT_FRAME_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Upper bounds a caller enforces before asking for an animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_iterations: u32,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
            max_iterations: 1000,
        }
    }
}

/// Everything an animation build needs besides the request parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MandelbrotConfig {
    /// Directory receiving the generated assets.
    pub resource_dir: PathBuf,
    pub viewport: ComplexRect,
    pub schedule: IterationSchedule,
    pub frame_delay_ms: u64,
    /// Return an asset already at the target path instead of regenerating it.
    pub reuse_existing: bool,
    pub explanation: ExplanationConfig,
    pub limits: RequestLimits,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            viewport: ComplexRect::default(),
            schedule: IterationSchedule::default(),
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            reuse_existing: false,
            explanation: ExplanationConfig::default(),
            limits: RequestLimits::default(),
        }
    }
}

impl MandelbrotConfig {
    /// Loads a JSON config; absent fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_resource_dir(self, resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.start == 0 {
            return Err(ConfigError::Invalid("schedule.start must be at least 1".into()));
        }
        if self.schedule.step == 0 {
            return Err(ConfigError::Invalid("schedule.step must be at least 1".into()));
        }
        if self.explanation.panel_width == 0 {
            return Err(ConfigError::Invalid(
                "explanation.panel_width must be positive".into(),
            ));
        }
        if self.explanation.wrap_width == 0 {
            return Err(ConfigError::Invalid(
                "explanation.wrap_width must be positive".into(),
            ));
        }
        if self.explanation.body(&self.explanation.topic).is_none() {
            return Err(ConfigError::Invalid(format!(
                "explanation.topic '{}' has no text",
                self.explanation.topic
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}
