use std::path::PathBuf;

use thiserror::Error;

use crate::storage::errors::StorageError;

#[derive(Debug, Error)]
pub enum ExplanationError {
    #[error("unknown explanation topic '{topic}'")]
    UnknownTopic { topic: String },

    #[error("source animation '{}' has no frames", path.display())]
    SourceAnimationEmpty { path: PathBuf },

    #[error("text panel must have a positive size, got {width}x{height}")]
    PanelSize { width: u32, height: u32 },

    #[error("failed to lay out text panel: {0}")]
    Svg(#[from] usvg::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
