use crate::error::*;

use std::sync::*;
use std::path::{Path, PathBuf};

///
/// Where the image for a frame comes from when a sequence is constructed
///
/// Path sources are resolved once, at construction time, by an `ImageProvider`. Handle
/// sources are stored as-is: the sequence keeps a reference to the image and never
/// duplicates it.
///
pub enum ImageSource<TImage> {
    /// An image that should be loaded from a file by the image provider
    Path(PathBuf),

    /// An image that has already been loaded
    Handle(Arc<TImage>)
}

///
/// Supplies images for the path sources used when creating a frame sequence
///
/// Decoding is entirely up to the provider: the sequence only stores the handles it returns.
///
pub trait ImageProvider {
    /// The type of image handle this provider returns
    type Image;

    ///
    /// Loads (or retrieves) the image at the specified path
    ///
    fn load_image(&mut self, path: &Path) -> Result<Arc<Self::Image>, SequenceError>;
}

///
/// An image whose pixel dimensions are known
///
pub trait FrameImage {
    ///
    /// The width and height of this image, in pixels
    ///
    fn size(&self) -> (u32, u32);
}

impl<TImage> ImageSource<TImage> {
    ///
    /// Resolves this source to an image handle, using the provider for path sources
    ///
    pub fn resolve<TProvider>(self, provider: &mut TProvider) -> Result<Arc<TImage>, SequenceError>
    where TProvider: ImageProvider<Image=TImage> {
        match self {
            ImageSource::Path(path)     => provider.load_image(&path),
            ImageSource::Handle(image)  => Ok(image)
        }
    }
}

impl<TImage> Clone for ImageSource<TImage> {
    fn clone(&self) -> Self {
        match self {
            ImageSource::Path(path)     => ImageSource::Path(path.clone()),
            ImageSource::Handle(image)  => ImageSource::Handle(Arc::clone(image))
        }
    }
}

impl<TImage> From<PathBuf> for ImageSource<TImage> {
    #[inline]
    fn from(path: PathBuf) -> ImageSource<TImage> {
        ImageSource::Path(path)
    }
}

impl<TImage> From<&Path> for ImageSource<TImage> {
    #[inline]
    fn from(path: &Path) -> ImageSource<TImage> {
        ImageSource::Path(path.to_path_buf())
    }
}

impl<TImage> From<&str> for ImageSource<TImage> {
    #[inline]
    fn from(path: &str) -> ImageSource<TImage> {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl<TImage> From<Arc<TImage>> for ImageSource<TImage> {
    #[inline]
    fn from(image: Arc<TImage>) -> ImageSource<TImage> {
        ImageSource::Handle(image)
    }
}
