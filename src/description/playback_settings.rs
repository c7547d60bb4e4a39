use serde::{Serialize, Deserialize};

///
/// The playback options for a frame sequence
///
/// Fields missing from a serialized description take their default values.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// True if the sequence returns to the first frame after the last one
    pub looping: bool,

    /// Multiplier applied to real time (negative to play backwards)
    pub rate: f64,

    /// Whether or not the current frame is drawn
    pub visible: bool
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        PlaybackSettings {
            looping:    true,
            rate:       1.0,
            visible:    true
        }
    }
}
