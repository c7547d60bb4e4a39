use super::animation_sequence::*;
use crate::error::*;
use crate::blit_target::*;

use log::{trace};

use std::time::{Duration, Instant};

impl<TImage> AnimationSequence<TImage> {
    ///
    /// Draws the frame that should be displayed at the specified time onto a target
    ///
    /// Nothing is drawn while the sequence is invisible.
    ///
    pub fn draw_current_frame<TTarget>(&self, target: &mut TTarget, position: BlitPosition, now: Instant) -> Result<(), SequenceError>
    where TTarget: ?Sized+BlitTarget<TImage> {
        if !self.visible {
            trace!("Frame sequence is invisible: not drawing");
            return Ok(());
        }

        let index = self.current_frame_index(now)?;
        self.draw_frame_at_index(index, target, position)
    }

    ///
    /// Draws the frame with the specified index onto a target
    ///
    pub fn draw_frame_at_index<TTarget>(&self, index: usize, target: &mut TTarget, position: BlitPosition) -> Result<(), SequenceError>
    where TTarget: ?Sized+BlitTarget<TImage> {
        if self.frames.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let frame = self.frames.frame(index)?;

        trace!("Drawing frame {} at {:?}", index, position);
        target.blit(frame.image(), position);

        Ok(())
    }

    ///
    /// Draws the frame found at a particular local time onto a target, ignoring the playback state
    ///
    pub fn draw_frame_at_time<TTarget>(&self, local_time: Duration, target: &mut TTarget, position: BlitPosition) -> Result<(), SequenceError>
    where TTarget: ?Sized+BlitTarget<TImage> {
        let index = self.frame_index_at_time(local_time)?;
        self.draw_frame_at_index(index, target, position)
    }
}
