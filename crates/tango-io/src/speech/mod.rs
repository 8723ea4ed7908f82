mod command;
mod silent;

pub use command::CommandSpeaker;
pub use silent::SilentSpeaker;

use tango_config::speech::SpeechConfig;
use tango_core::Speaker;

/// Pick the speaker for the given config
pub fn speaker_from_config(config: &SpeechConfig) -> Box<dyn Speaker> {
    if config.enabled {
        tracing::info!("Speech enabled via '{}'", config.program);
        Box::new(CommandSpeaker::new(config.program.clone(), config.args.clone()))
    } else {
        tracing::info!("Speech disabled");
        Box::new(SilentSpeaker)
    }
}
