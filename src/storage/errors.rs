use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("gif codec error for '{}': {source}", path.display())]
    Gif {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("refusing to encode '{}' with no frames", path.display())]
    NoFrames { path: PathBuf },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn gif(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Gif {
            path: path.into(),
            source,
        }
    }
}
