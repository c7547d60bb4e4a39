use super::playback_settings::*;
use super::sequence_description::*;
use crate::image::*;
use crate::error::*;
use crate::sequence::*;

use log::{warn};

use std::time::{Instant};

impl<TImage> AnimationSequence<TImage> {
    ///
    /// Creates a stopped sequence from a description, loading its images from an image provider
    ///
    pub fn from_description<TProvider>(description: &SequenceDescription, provider: &mut TProvider) -> Result<AnimationSequence<TImage>, SequenceError>
    where TProvider: ImageProvider<Image=TImage> {
        let mut sequence    = Self::from_sources(description.frame_list(), provider)?;
        let settings        = &description.playback;

        // The sequence is stopped, so there's no clock to carry on from
        sequence.looping    = settings.looping;
        sequence.visible    = settings.visible;

        if settings.rate.is_finite() {
            sequence.rate   = settings.rate;
        } else {
            warn!("Ignoring invalid playback rate {}", settings.rate);
        }

        Ok(sequence)
    }

    ///
    /// The current playback settings for this sequence
    ///
    pub fn playback_settings(&self) -> PlaybackSettings {
        PlaybackSettings {
            looping:    self.looping(),
            rate:       self.rate(),
            visible:    self.visible()
        }
    }

    ///
    /// Updates the playback settings for this sequence, carrying on from the current position
    ///
    pub fn apply_playback_settings(&mut self, settings: &PlaybackSettings, now: Instant) {
        self.set_looping(settings.looping, now);
        self.set_rate(settings.rate, now);
        self.set_visible(settings.visible);
    }
}
