pub mod catalog;
pub mod lookup;
pub mod mistakes;
pub mod quiz;
pub mod score;
pub mod session;
pub mod speech;

pub use catalog::{CatalogLoader, LoadError, WordCatalog};
pub use lookup::{Lookup, LookupError, entry_summary};
pub use mistakes::{MistakeError, MistakeLog};
pub use quiz::QuizEngine;
pub use score::ScoreTracker;
pub use session::{AnswerLock, QuizSession, SelectOutcome};
pub use speech::{SpeechError, Speaker};
