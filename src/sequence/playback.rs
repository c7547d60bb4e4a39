use super::animation_sequence::*;
use crate::time::*;
use crate::error::*;
use crate::playback_state::*;

use log::{debug, warn};

use std::time::{Duration, Instant};

impl<TImage> AnimationSequence<TImage> {
    ///
    /// The local time of the sequence before it's wrapped or clamped, in nanoseconds
    ///
    fn unbounded_local_time(&self, now: Instant) -> i128 {
        let anchor_time = self.elapsed_at_pause.as_nanos() as i128;

        match (self.state, self.playback_start_time) {
            (PlaybackState::Stopped, _)             => 0,
            (PlaybackState::Playing, Some(start))   => anchor_time + scale_elapsed(now.saturating_duration_since(start), self.rate),
            (PlaybackState::Playing, None)          |
            (PlaybackState::Paused, _)              => anchor_time
        }
    }

    ///
    /// Wraps (when looping) or clamps (when not) a local time so that it's within the sequence
    ///
    fn bound_local_time(&self, local_time: i128) -> Duration {
        let total_duration = self.frames.total_duration();

        if self.looping {
            wrap_local_time(local_time, total_duration)
        } else {
            clamp_local_time(local_time, total_duration)
        }
    }

    ///
    /// Moves the playback clock so the local time at `now` is `local_time`, without changing the playback state
    ///
    fn reanchor(&mut self, local_time: Duration, now: Instant) {
        match self.state {
            PlaybackState::Stopped  => { }
            PlaybackState::Paused   => { self.elapsed_at_pause = local_time; }
            PlaybackState::Playing  => {
                self.playback_start_time    = Some(now);
                self.elapsed_at_pause       = local_time;
            }
        }
    }

    ///
    /// Moves to a particular local time. Playing sequences keep playing from there, and others are paused there.
    ///
    fn move_to_local_time(&mut self, local_time: i128, now: Instant) {
        let local_time = self.bound_local_time(local_time);

        if self.state != PlaybackState::Playing {
            self.state                  = PlaybackState::Paused;
            self.playback_start_time    = None;
        }

        self.reanchor(local_time, now);
    }

    ///
    /// Starts playing the sequence, or resumes it from where it was paused
    ///
    pub fn play(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Playing  => { }

            PlaybackState::Stopped  => {
                debug!("Playing frame sequence from the start");

                self.state                  = PlaybackState::Playing;
                self.playback_start_time    = Some(now);
                self.elapsed_at_pause       = Duration::from_nanos(0);
            }

            PlaybackState::Paused   => {
                debug!("Resuming frame sequence at {:?}", self.elapsed_at_pause);

                self.state                  = PlaybackState::Playing;
                self.playback_start_time    = Some(now);
            }
        }
    }

    ///
    /// Pauses the sequence at the frame it's currently displaying (a stopped sequence is paused on its first frame)
    ///
    pub fn pause(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Paused   => { }

            PlaybackState::Stopped  => {
                debug!("Pausing stopped frame sequence at the start");

                self.state                  = PlaybackState::Paused;
                self.playback_start_time    = None;
                self.elapsed_at_pause       = Duration::from_nanos(0);
            }

            PlaybackState::Playing  => {
                let local_time = self.current_local_elapsed_time(now);
                debug!("Pausing frame sequence at {:?}", local_time);

                self.state                  = PlaybackState::Paused;
                self.playback_start_time    = None;
                self.elapsed_at_pause       = local_time;
            }
        }
    }

    ///
    /// Stops the sequence and returns it to the first frame
    ///
    pub fn stop(&mut self) {
        if self.state != PlaybackState::Stopped {
            debug!("Stopping frame sequence");
        }

        self.state                  = PlaybackState::Stopped;
        self.playback_start_time    = None;
        self.elapsed_at_pause       = Duration::from_nanos(0);
    }

    ///
    /// Pauses the sequence if it's playing, or plays it if it's paused or stopped
    ///
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.state == PlaybackState::Playing {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    ///
    /// The time within the sequence at the specified time
    ///
    /// This is 0 while stopped. While playing, this is the real time since playback started, multiplied by the rate and
    /// then wrapped around the total duration (when looping) or clamped to it (when not).
    ///
    pub fn current_local_elapsed_time(&self, now: Instant) -> Duration {
        match self.state {
            PlaybackState::Stopped  => Duration::from_nanos(0),
            _                       => self.bound_local_time(self.unbounded_local_time(now))
        }
    }

    ///
    /// True if this is a non-looping sequence that has played all the way through
    ///
    /// Finishing does not stop the sequence: it remains in the playing state, showing the last frame, until it's stopped.
    ///
    pub fn is_finished(&self, now: Instant) -> bool {
        if self.looping || self.state != PlaybackState::Playing {
            false
        } else {
            self.unbounded_local_time(now) >= self.frames.total_duration().as_nanos() as i128
        }
    }

    ///
    /// The index of the frame that should be displayed at the specified time
    ///
    pub fn current_frame_index(&self, now: Instant) -> Result<usize, SequenceError> {
        self.frames.frame_index_at_local_time(self.current_local_elapsed_time(now))
    }

    ///
    /// The index of the frame at a particular local time, ignoring the playback state
    ///
    /// The time is wrapped or clamped according to whether or not the sequence is looping, but the rate is not applied.
    ///
    pub fn frame_index_at_time(&self, local_time: Duration) -> Result<usize, SequenceError> {
        let local_time = self.bound_local_time(local_time.as_nanos() as i128);

        self.frames.frame_index_at_local_time(local_time)
    }

    ///
    /// Changes the playback rate, carrying on from the current position
    ///
    pub fn set_rate(&mut self, rate: f64, now: Instant) {
        if !rate.is_finite() {
            warn!("Ignoring invalid playback rate {}", rate);
            return;
        }

        let local_time = self.current_local_elapsed_time(now);

        self.rate = rate;
        self.reanchor(local_time, now);
    }

    ///
    /// Changes whether or not this sequence loops, carrying on from the current position
    ///
    pub fn set_looping(&mut self, looping: bool, now: Instant) {
        let local_time = self.current_local_elapsed_time(now);

        self.looping = looping;
        self.reanchor(local_time, now);
    }

    ///
    /// Moves to a particular time within the sequence
    ///
    /// Times beyond the end of the sequence are wrapped or clamped. A stopped or paused sequence is paused at the new time.
    ///
    pub fn seek(&mut self, local_time: Duration, now: Instant) {
        self.move_to_local_time(local_time.as_nanos() as i128, now);
    }

    ///
    /// Moves forward through the sequence by a length of local time
    ///
    pub fn fast_forward(&mut self, amount: Duration, now: Instant) {
        let local_time = self.current_local_elapsed_time(now).as_nanos() as i128;

        self.move_to_local_time(local_time + amount.as_nanos() as i128, now);
    }

    ///
    /// Moves backward through the sequence by a length of local time
    ///
    pub fn rewind(&mut self, amount: Duration, now: Instant) {
        let local_time = self.current_local_elapsed_time(now).as_nanos() as i128;

        self.move_to_local_time(local_time - amount.as_nanos() as i128, now);
    }

    ///
    /// Moves to the start of the frame with the specified index
    ///
    pub fn seek_to_frame(&mut self, index: usize, now: Instant) -> Result<(), SequenceError> {
        if self.frames.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let start_time = self.frames.start_time(index)?;
        self.move_to_local_time(start_time.as_nanos() as i128, now);

        Ok(())
    }

    ///
    /// The next frame in a particular direction (1 or -1) that has a duration, or None if there isn't one
    ///
    /// Frames with no duration are never displayed, so they're skipped over.
    ///
    fn displayed_frame_after(&self, index: isize, direction: isize) -> Option<isize> {
        let frame_count = self.frames.len() as isize;
        let mut next    = index;

        for _ in 1..frame_count {
            next += direction;

            if self.looping {
                next = next.rem_euclid(frame_count);
            } else if next < 0 || next >= frame_count {
                return None;
            }

            let has_duration = self.frames.frame(next as usize)
                .map(|frame| frame.duration() > Duration::from_nanos(0))
                .unwrap_or(false);

            if has_duration { return Some(next); }
        }

        None
    }

    ///
    /// Moves forwards (or backwards, for negative values) by a number of frames
    ///
    /// The new frame wraps around if the sequence is looping, or stops at the first or last frame if it is not.
    /// Frames with no duration are not counted.
    ///
    pub fn step_frames(&mut self, jump: isize, now: Instant) {
        if self.frames.is_empty() { return; }

        let direction   = jump.signum();
        let mut target  = self.current_frame_index(now).unwrap_or(0) as isize;

        for _ in 0..jump.abs() {
            match self.displayed_frame_after(target, direction) {
                Some(next)  => { target = next; }
                None        => { break; }
            }
        }

        let start_time = self.frames.start_time(target as usize).unwrap_or_default();
        self.move_to_local_time(start_time.as_nanos() as i128, now);
    }

    ///
    /// Moves to the next frame
    ///
    #[inline]
    pub fn next_frame(&mut self, now: Instant) {
        self.step_frames(1, now);
    }

    ///
    /// Moves to the previous frame
    ///
    #[inline]
    pub fn prev_frame(&mut self, now: Instant) {
        self.step_frames(-1, now);
    }

    ///
    /// Reverses the order of the frames in this sequence
    ///
    /// The frame on display stays on display: the clock is moved to the same point within the frame at its
    /// new position, so the sequence carries on from there in the new order. Stopped and finished sequences
    /// just have their frames reversed.
    ///
    pub fn reverse(&mut self, now: Instant) {
        let frame_count = self.frames.len();

        if frame_count == 0 || self.frames.total_duration() == Duration::from_nanos(0) || self.state == PlaybackState::Stopped || self.is_finished(now) {
            self.frames.reverse();
            return;
        }

        let local_time  = self.current_local_elapsed_time(now);
        let index       = self.frames.frame_index_at_local_time(local_time).unwrap_or(0);
        let duration    = self.frames.frame(index).map(|frame| frame.duration()).unwrap_or_default();
        let offset      = local_time - self.frames.start_time(index).unwrap_or_default();

        // A sequence held at the very end is on the last instant of its frame
        let offset      = offset.min(duration.saturating_sub(Duration::from_nanos(1)));

        self.frames.reverse();

        let new_index   = frame_count - 1 - index;
        let new_time    = self.frames.start_time(new_index).unwrap_or_default() + offset;

        self.reanchor(new_time, now);
    }
}
