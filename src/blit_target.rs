use serde::{Serialize, Deserialize};

use std::sync::*;

///
/// The position on a target surface where the top-left corner of a frame image is placed
///
/// Positions outside of the target are valid: the target is expected to clip anything that doesn't fit.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlitPosition(pub i32, pub i32);

///
/// A surface that frame images can be copied on to
///
/// Composition is entirely the target's concern: a frame sequence only decides which image to
/// copy, and passes it on unchanged.
///
pub trait BlitTarget<TImage> {
    ///
    /// The width and height of this target, in pixels
    ///
    fn size(&self) -> (u32, u32);

    ///
    /// Copies an image on to this target at the specified position
    ///
    fn blit(&mut self, image: &Arc<TImage>, position: BlitPosition);
}

///
/// A blit operation recorded by a `Vec<Blit<_>>` target
///
pub struct Blit<TImage> {
    /// The image that was copied
    pub image: Arc<TImage>,

    /// Where the image was copied to
    pub position: BlitPosition
}

impl<TImage> Clone for Blit<TImage> {
    fn clone(&self) -> Self {
        Blit {
            image:      Arc::clone(&self.image),
            position:   self.position
        }
    }
}

impl From<(i32, i32)> for BlitPosition {
    #[inline]
    fn from((x, y): (i32, i32)) -> BlitPosition {
        BlitPosition(x, y)
    }
}

///
/// A vector of blits can be used as a target that records what was drawn (it has no pixels, so its size is 0x0)
///
impl<TImage> BlitTarget<TImage> for Vec<Blit<TImage>> {
    #[inline] fn size(&self) -> (u32, u32) { (0, 0) }

    #[inline] fn blit(&mut self, image: &Arc<TImage>, position: BlitPosition) {
        self.push(Blit { image: Arc::clone(image), position });
    }
}
