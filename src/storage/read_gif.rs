use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use crate::core::data::frame::Frame;
use crate::storage::errors::StorageError;

/// Decodes every frame of a GIF, fully composited, in display order.
pub fn read_gif_frames(path: &Path) -> Result<Vec<Frame>, StorageError> {
    let file = File::open(path).map_err(|err| StorageError::io(path, err))?;
    let decoder =
        GifDecoder::new(BufReader::new(file)).map_err(|err| StorageError::gif(path, err))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|err| StorageError::gif(path, err))?;

    Ok(frames.into_iter().map(Frame::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_gif_frames(Path::new("/definitely/not/here.gif"));

        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_garbage_is_codec_error() {
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_animator_read_gif_garbage_{}.gif",
            std::process::id()
        ));
        std::fs::write(&path, b"not a gif at all").unwrap();

        let result = read_gif_frames(&path);

        assert!(matches!(result, Err(StorageError::Gif { .. })));
        let _ = std::fs::remove_file(&path);
    }
}
