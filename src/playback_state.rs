use serde::{Serialize, Deserialize};

///
/// The playback state of a frame sequence
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Not playing, and showing the first frame (this is the initial state)
    Stopped,

    /// Time is passing and the frames are advancing
    Playing,

    /// Time is frozen at a particular point in the sequence
    Paused
}

impl Default for PlaybackState {
    #[inline]
    fn default() -> Self {
        PlaybackState::Stopped
    }
}
