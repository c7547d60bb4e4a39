mod playback_settings;
mod sequence_description;
mod convert;

pub use self::playback_settings::*;
pub use self::sequence_description::*;
