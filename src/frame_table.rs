use crate::frame::*;
use crate::error::*;

use std::slice;
use std::time::{Duration};

///
/// An ordered list of frames, along with the time at which each frame starts
///
/// Frames are identified by their position: the same image can appear many times. The start
/// times are recalculated whenever the list of frames changes.
///
pub struct FrameTable<TImage> {
    /// The frames in this table, in display order
    frames: Vec<Frame<TImage>>,

    /// `start_times[n]` is the time at which frame `n` starts. There is one extra entry at the end, which is the total duration
    start_times: Vec<Duration>
}

impl<TImage> FrameTable<TImage> {
    ///
    /// Creates a frame table from a list of frames
    ///
    pub fn new<FrameIter: IntoIterator<Item=Frame<TImage>>>(frames: FrameIter) -> FrameTable<TImage> {
        let mut table = FrameTable {
            frames:         frames.into_iter().collect(),
            start_times:    vec![]
        };

        table.recalculate_start_times();
        table
    }

    ///
    /// Creates a frame table with no frames in it
    ///
    pub fn empty() -> FrameTable<TImage> {
        Self::new(vec![])
    }

    ///
    /// Regenerates the start times after the frame list has changed
    ///
    fn recalculate_start_times(&mut self) {
        let mut time = Duration::from_nanos(0);

        self.start_times.clear();
        self.start_times.reserve(self.frames.len() + 1);

        for frame in self.frames.iter() {
            self.start_times.push(time);
            time += frame.duration();
        }

        self.start_times.push(time);
    }

    ///
    /// The number of frames in this table
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    ///
    /// True if this table has no frames
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    ///
    /// The frames in this table
    ///
    #[inline]
    pub fn frames(&self) -> &[Frame<TImage>] {
        &self.frames
    }

    ///
    /// Iterates over the frames in this table
    ///
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Frame<TImage>> {
        self.frames.iter()
    }

    ///
    /// Retrieves the frame at the specified index
    ///
    pub fn frame(&self, index: usize) -> Result<&Frame<TImage>, SequenceError> {
        self.frames.get(index)
            .ok_or(SequenceError::IndexOutOfRange { index, frame_count: self.frames.len() })
    }

    ///
    /// Retrieves the local time at which the frame with the specified index starts
    ///
    pub fn start_time(&self, index: usize) -> Result<Duration, SequenceError> {
        if index < self.frames.len() {
            Ok(self.start_times[index])
        } else {
            Err(SequenceError::IndexOutOfRange { index, frame_count: self.frames.len() })
        }
    }

    ///
    /// The sum of the durations of all of the frames in this table
    ///
    #[inline]
    pub fn total_duration(&self) -> Duration {
        self.start_times.last().copied().unwrap_or_default()
    }

    ///
    /// Finds the index of the frame that is displayed at a particular local time
    ///
    /// Frames with a zero duration are never found by this lookup, except that any time at or after
    /// the total duration resolves to the last frame, and every time resolves to the first frame if the
    /// whole table has no duration.
    ///
    pub fn frame_index_at_local_time(&self, time: Duration) -> Result<usize, SequenceError> {
        if self.frames.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let total_duration = self.total_duration();

        if total_duration == Duration::from_nanos(0) {
            // Every frame is instantaneous
            Ok(0)
        } else if time >= total_duration {
            Ok(self.frames.len() - 1)
        } else {
            // The frame is the first one that ends after the requested time (zero-length frames end where they start, so are skipped)
            let end_times = &self.start_times[1..];
            Ok(end_times.partition_point(|end_time| *end_time <= time))
        }
    }

    ///
    /// Reverses the order of the frames in this table
    ///
    pub fn reverse(&mut self) {
        self.frames.reverse();
        self.recalculate_start_times();
    }

    ///
    /// Adds a frame to the end of this table
    ///
    pub fn push(&mut self, frame: Frame<TImage>) {
        self.frames.push(frame);
        self.recalculate_start_times();
    }

    ///
    /// Removes frames from the end of this table so that it has at most `len` frames
    ///
    pub fn truncate(&mut self, len: usize) {
        self.frames.truncate(len);
        self.recalculate_start_times();
    }

    ///
    /// Creates a copy of this table that refers to the same images
    ///
    pub fn get_copy(&self) -> FrameTable<TImage> {
        FrameTable {
            frames:         self.frames.clone(),
            start_times:    self.start_times.clone()
        }
    }

    ///
    /// Creates `count` independent copies of this table, all referring to the same images
    ///
    pub fn get_copies(&self, count: usize) -> Vec<FrameTable<TImage>> {
        (0..count).map(|_| self.get_copy()).collect()
    }
}

impl<TImage> Clone for FrameTable<TImage> {
    #[inline]
    fn clone(&self) -> Self {
        self.get_copy()
    }
}
