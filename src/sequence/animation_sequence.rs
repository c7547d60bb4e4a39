use crate::time::*;
use crate::image::*;
use crate::frame::*;
use crate::error::*;
use crate::frame_table::*;
use crate::playback_state::*;

use std::sync::*;
use std::time::{Duration, Instant};

///
/// A sequence of frames that can be played back over time
///
/// The frame that should be displayed is worked out from the time passed in by the caller: nothing in here
/// runs on a timer. Copies of a sequence (see `get_copy()`) share the frame images, but each has its own
/// frame order and playback state.
///
pub struct AnimationSequence<TImage> {
    /// The frames in this sequence
    pub (super) frames: FrameTable<TImage>,

    /// Whether or not the sequence is currently playing
    pub (super) state: PlaybackState,

    /// True if the sequence starts again from the beginning after the last frame
    pub (crate) looping: bool,

    /// Multiplier applied to real time to get the local time of the sequence (negative values play backwards)
    pub (crate) rate: f64,

    /// Whether or not the current frame should be drawn
    pub (crate) visible: bool,

    /// The time that the playback clock was last anchored (None unless the sequence is playing)
    pub (super) playback_start_time: Option<Instant>,

    /// The local time when the sequence was paused, or the local time at `playback_start_time` while playing
    pub (super) elapsed_at_pause: Duration
}

impl<TImage> AnimationSequence<TImage> {
    ///
    /// Creates a stopped sequence from an existing frame table
    ///
    pub fn from_frame_table(frames: FrameTable<TImage>) -> AnimationSequence<TImage> {
        AnimationSequence {
            frames:                 frames,
            state:                  PlaybackState::Stopped,
            looping:                true,
            rate:                   1.0,
            visible:                true,
            playback_start_time:    None,
            elapsed_at_pause:       Duration::from_nanos(0)
        }
    }

    ///
    /// Creates a sequence from a list of images and their durations in seconds
    ///
    pub fn from_frames<FrameIter>(frames: FrameIter) -> Result<AnimationSequence<TImage>, SequenceError>
    where FrameIter: IntoIterator<Item=(Arc<TImage>, f64)> {
        let frames = frames.into_iter()
            .map(|(image, duration)| duration_from_seconds(duration).map(|duration| Frame::new(image, duration)))
            .collect::<Result<Vec<_>, SequenceError>>()?;

        Ok(Self::from_frame_table(FrameTable::new(frames)))
    }

    ///
    /// Creates a sequence from a list of images that are all displayed for the same length of time (in seconds)
    ///
    pub fn from_images<ImageIter>(images: ImageIter, duration: f64) -> Result<AnimationSequence<TImage>, SequenceError>
    where ImageIter: IntoIterator<Item=Arc<TImage>> {
        let duration = duration_from_seconds(duration)?;

        Ok(Self::from_frame_table(FrameTable::new(images.into_iter().map(|image| Frame::new(image, duration)))))
    }

    ///
    /// Creates a sequence from a list of image sources and their durations in seconds
    ///
    /// Sources that are paths are loaded using the image provider. Sources that are already images are used directly.
    ///
    pub fn from_sources<FrameIter, TSource, TProvider>(frames: FrameIter, provider: &mut TProvider) -> Result<AnimationSequence<TImage>, SequenceError>
    where
    FrameIter:  IntoIterator<Item=(TSource, f64)>,
    TSource:    Into<ImageSource<TImage>>,
    TProvider:  ImageProvider<Image=TImage> {
        let mut table = vec![];

        for (source, duration) in frames {
            let duration    = duration_from_seconds(duration)?;
            let image       = source.into().resolve(provider)?;

            table.push(Frame::new(image, duration));
        }

        Ok(Self::from_frame_table(FrameTable::new(table)))
    }

    ///
    /// Creates a sequence from a list of image sources which are all displayed for the same length of time (in seconds)
    ///
    pub fn with_uniform_duration<SourceIter, TSource, TProvider>(sources: SourceIter, duration: f64, provider: &mut TProvider) -> Result<AnimationSequence<TImage>, SequenceError>
    where
    SourceIter: IntoIterator<Item=TSource>,
    TSource:    Into<ImageSource<TImage>>,
    TProvider:  ImageProvider<Image=TImage> {
        Self::from_sources(sources.into_iter().map(|source| (source, duration)), provider)
    }

    ///
    /// The table of frames for this sequence
    ///
    #[inline]
    pub fn frame_table(&self) -> &FrameTable<TImage> {
        &self.frames
    }

    ///
    /// The frames in this sequence, in the order they're displayed
    ///
    #[inline]
    pub fn frames(&self) -> &[Frame<TImage>] {
        self.frames.frames()
    }

    ///
    /// Retrieves the frame with the specified index
    ///
    #[inline]
    pub fn frame(&self, index: usize) -> Result<&Frame<TImage>, SequenceError> {
        self.frames.frame(index)
    }

    ///
    /// The number of frames in this sequence
    ///
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    ///
    /// The durations of each frame, in order
    ///
    pub fn durations(&self) -> Vec<Duration> {
        self.frames.iter().map(|frame| frame.duration()).collect()
    }

    ///
    /// The images for each frame, in order
    ///
    pub fn images(&self) -> impl '_+Iterator<Item=&Arc<TImage>> {
        self.frames.iter().map(|frame| frame.image())
    }

    ///
    /// The time taken to play every frame once (at a rate of 1.0)
    ///
    #[inline]
    pub fn total_duration(&self) -> Duration {
        self.frames.total_duration()
    }

    ///
    /// Adds a frame to the end of this sequence, with a duration in seconds
    ///
    pub fn push_frame(&mut self, image: Arc<TImage>, duration: f64) -> Result<(), SequenceError> {
        let duration = duration_from_seconds(duration)?;
        self.frames.push(Frame::new(image, duration));

        Ok(())
    }

    ///
    /// Removes frames from the end of this sequence so there are at most `len` remaining
    ///
    pub fn truncate(&mut self, len: usize) {
        self.frames.truncate(len);
    }

    ///
    /// The current playback state
    ///
    #[inline] pub fn state(&self) -> PlaybackState { self.state }

    /// True if the sequence is playing (including a non-looping sequence that has finished)
    #[inline] pub fn is_playing(&self) -> bool { self.state == PlaybackState::Playing }

    /// True if the sequence is paused
    #[inline] pub fn is_paused(&self) -> bool { self.state == PlaybackState::Paused }

    /// True if the sequence is stopped
    #[inline] pub fn is_stopped(&self) -> bool { self.state == PlaybackState::Stopped }

    ///
    /// True if this sequence returns to the first frame after the last one
    ///
    #[inline]
    pub fn looping(&self) -> bool {
        self.looping
    }

    ///
    /// The rate that this sequence plays back at
    ///
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    ///
    /// True if the current frame should be drawn
    ///
    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    ///
    /// Sets whether or not `draw_current_frame()` should draw anything (time still passes while the sequence is invisible)
    ///
    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    ///
    /// Flips the visibility of this sequence
    ///
    #[inline]
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    ///
    /// The time when the playback clock was last anchored, if the sequence is playing
    ///
    #[inline]
    pub fn playback_start_time(&self) -> Option<Instant> {
        self.playback_start_time
    }

    ///
    /// The local time stored with the playback clock (where the sequence is paused, or where it was when the clock was anchored)
    ///
    #[inline]
    pub fn elapsed_at_pause(&self) -> Duration {
        self.elapsed_at_pause
    }

    ///
    /// Creates a copy of this sequence
    ///
    /// The copy displays the same images and is in the same playback state, but changes to one
    /// sequence do not affect the other.
    ///
    pub fn get_copy(&self) -> AnimationSequence<TImage> {
        AnimationSequence {
            frames:                 self.frames.get_copy(),
            state:                  self.state,
            looping:                self.looping,
            rate:                   self.rate,
            visible:                self.visible,
            playback_start_time:    self.playback_start_time,
            elapsed_at_pause:       self.elapsed_at_pause
        }
    }

    ///
    /// Creates `count` independent copies of this sequence
    ///
    pub fn get_copies(&self, count: usize) -> Vec<AnimationSequence<TImage>> {
        (0..count).map(|_| self.get_copy()).collect()
    }
}

impl<TImage: FrameImage> AnimationSequence<TImage> {
    ///
    /// The largest width and the largest height of any of the frames in this sequence
    ///
    pub fn max_size(&self) -> (u32, u32) {
        self.frames.iter()
            .map(|frame| frame.image().size())
            .fold((0, 0), |(max_w, max_h), (w, h)| (max_w.max(w), max_h.max(h)))
    }
}

impl<TImage> Clone for AnimationSequence<TImage> {
    #[inline]
    fn clone(&self) -> Self {
        self.get_copy()
    }
}
