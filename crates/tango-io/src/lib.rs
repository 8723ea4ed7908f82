pub mod lookup;
pub mod speech;

pub use lookup::{CommandLookup, lookup_from_config};
pub use speech::{CommandSpeaker, SilentSpeaker, speaker_from_config};
