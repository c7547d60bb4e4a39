use std::sync::*;
use std::time::{Duration};

///
/// A single frame of a sequence: an image and how long it is displayed for
///
/// The image is shared: cloning a frame produces a new frame that refers to the same image.
///
pub struct Frame<TImage> {
    /// The image displayed for this frame
    image: Arc<TImage>,

    /// How long this frame is displayed for
    duration: Duration
}

impl<TImage> Frame<TImage> {
    ///
    /// Creates a new frame
    ///
    pub fn new(image: Arc<TImage>, duration: Duration) -> Frame<TImage> {
        Frame { image, duration }
    }

    ///
    /// The image displayed by this frame
    ///
    #[inline]
    pub fn image(&self) -> &Arc<TImage> {
        &self.image
    }

    ///
    /// The length of time this frame is displayed for
    ///
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    ///
    /// True if this frame displays the same image (by identity, not content) as another frame
    ///
    #[inline]
    pub fn shares_image_with(&self, other: &Frame<TImage>) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl<TImage> Clone for Frame<TImage> {
    fn clone(&self) -> Self {
        Frame {
            image:      Arc::clone(&self.image),
            duration:   self.duration
        }
    }
}
