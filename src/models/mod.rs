pub mod language;
pub mod translation;

pub use language::Language;
pub use translation::{SwitchPhase, TranslationSnapshot, TranslationState};
