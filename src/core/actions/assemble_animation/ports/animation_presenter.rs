use std::path::Path;

use crate::core::data::frame::Frame;
use crate::storage::errors::StorageError;

/// Destination for a finished frame sequence.
pub trait AnimationPresenterPort {
    /// Consumes `frames` in display order and persists them at `filepath`.
    fn present(&self, frames: Vec<Frame>, filepath: &Path) -> Result<(), StorageError>;
}
