use std::time::Duration;

use image::RgbaImage;

/// One raster of an animation plus how long it stays on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbaImage,
    delay: Duration,
}

impl Frame {
    #[must_use]
    pub fn new(image: RgbaImage, delay: Duration) -> Self {
        Self { image, delay }
    }

    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl From<Frame> for image::Frame {
    fn from(frame: Frame) -> Self {
        image::Frame::from_parts(
            frame.image,
            0,
            0,
            image::Delay::from_saturating_duration(frame.delay),
        )
    }
}

impl From<image::Frame> for Frame {
    fn from(frame: image::Frame) -> Self {
        let (numer, denom) = frame.delay().numer_denom_ms();
        let delay = Duration::from_millis(u64::from(numer / denom.max(1)));

        Self {
            image: frame.into_buffer(),
            delay,
        }
    }
}
