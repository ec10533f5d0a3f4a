use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};

use crate::core::actions::assemble_animation::ports::animation_presenter::AnimationPresenterPort;
use crate::core::data::frame::Frame;
use crate::storage::errors::StorageError;
use crate::storage::write_atomic::write_atomic;

/// Writes frames as an infinitely looping GIF.
#[derive(Debug, Clone, Copy, Default)]
pub struct GifFilePresenter {}

impl GifFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn encode(frames: Vec<Frame>, filepath: &Path) -> Result<Vec<u8>, StorageError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|err| StorageError::gif(filepath, err))?;
            encoder
                .encode_frames(frames.into_iter().map(image::Frame::from))
                .map_err(|err| StorageError::gif(filepath, err))?;
        }

        Ok(bytes)
    }
}

impl AnimationPresenterPort for GifFilePresenter {
    fn present(&self, frames: Vec<Frame>, filepath: &Path) -> Result<(), StorageError> {
        if frames.is_empty() {
            return Err(StorageError::NoFrames {
                path: filepath.to_path_buf(),
            });
        }

        let frame_count = frames.len();
        let bytes = Self::encode(frames, filepath)?;
        write_atomic(filepath, &bytes)?;

        tracing::debug!(
            path = %filepath.display(),
            frames = frame_count,
            bytes = bytes.len(),
            "wrote gif"
        );
        Ok(())
    }
}
