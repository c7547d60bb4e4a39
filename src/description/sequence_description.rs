use super::playback_settings::*;

use serde::{Serialize, Deserialize};
use serde_json as json;

use std::path::{PathBuf};

///
/// Describes a single frame by the path of its image and its duration in seconds
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameDescription {
    pub image:      PathBuf,
    pub duration:   f64
}

///
/// Describes the frames that make up a sequence
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FramesDescription {
    /// Every frame has its own duration
    PerFrame(Vec<FrameDescription>),

    /// Every image is displayed for the same length of time (in seconds)
    Uniform { images: Vec<PathBuf>, duration: f64 }
}

///
/// Describes a frame sequence that can be created later on using an image provider
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceDescription {
    /// The frames in the sequence
    pub frames: FramesDescription,

    /// How the sequence should play back
    #[serde(default)]
    pub playback: PlaybackSettings
}

impl SequenceDescription {
    ///
    /// Reads a sequence description from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<SequenceDescription, json::Error> {
        json::from_str(json)
    }

    ///
    /// Writes this sequence description as JSON
    ///
    pub fn to_json(&self) -> Result<String, json::Error> {
        json::to_string_pretty(self)
    }

    ///
    /// The image path and duration of every frame in this description
    ///
    pub fn frame_list(&self) -> Vec<(PathBuf, f64)> {
        match &self.frames {
            FramesDescription::PerFrame(frames)             => frames.iter().map(|frame| (frame.image.clone(), frame.duration)).collect(),
            FramesDescription::Uniform { images, duration } => images.iter().map(|image| (image.clone(), *duration)).collect()
        }
    }
}
