use serde::{Serialize, Deserialize};

use std::fmt;
use std::error::Error;
use std::path::{PathBuf};

///
/// Errors that can occur when building or querying a frame sequence
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SequenceError {
    /// A time or frame query was made against a sequence with no frames
    EmptySequence,

    /// A frame was given a negative (or non-finite) duration, in seconds
    InvalidDuration(f64),

    /// A frame index was outside of the range of frames in the sequence
    IndexOutOfRange { index: usize, frame_count: usize },

    /// The image provider could not supply an image for a path (the string is the reason it gave)
    ImageNotAvailable(PathBuf, String),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::SequenceError::*;

        match self {
            EmptySequence                           => write!(f, "the frame sequence is empty"),
            InvalidDuration(duration)               => write!(f, "invalid frame duration: {}s", duration),
            IndexOutOfRange { index, frame_count }  => write!(f, "frame index {} is out of range (sequence has {} frames)", index, frame_count),
            ImageNotAvailable(path, reason)         => write!(f, "could not load image '{}': {}", path.display(), reason),
        }
    }
}

impl Error for SequenceError { }
