//!
//! `flo_frame_sequence` works out which frame of a sprite animation should be on display at
//! any particular time.
//!
//! A sequence is an ordered list of images, each with a duration. Sequences can be played, paused,
//! stopped, stepped frame-by-frame, reversed and played at different rates (including backwards).
//! There's no timer: every call that depends on time takes the current time as a parameter, so the
//! caller decides when frames advance (usually once per redraw).
//!
//! Images are never decoded or composited here: they're supplied by an `ImageProvider`, and drawing
//! a frame passes its image to a `BlitTarget`. Copies of a sequence share the same images, but have
//! their own playback state.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate strum_macros;

mod time;
mod error;
mod image;
mod frame;
mod frame_table;
mod blit_target;
mod playback_state;
mod sequence;
pub mod description;

pub use self::time::*;
pub use self::error::*;
pub use self::image::*;
pub use self::frame::*;
pub use self::frame_table::*;
pub use self::blit_target::*;
pub use self::playback_state::*;
pub use self::sequence::*;
