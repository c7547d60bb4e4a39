mod animation_sequence;
mod playback;
mod draw;

pub use self::animation_sequence::*;
