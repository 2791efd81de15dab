// ============================================================================
// PAGE TRANSLATOR - Orquestación del widget de traducción (RUST PURO)
// ============================================================================
// Capas:
// - Platform: capacidades del navegador detrás de traits (web / memoria)
// - Services: carga del script, init del widget, banner, cambio de idioma
// - State: store reactivo, único dueño del estado de traducción
// - Context/Components: provider, hook y botones de Yew
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod platform;
pub mod services;
pub mod state;
pub mod context;
pub mod components;
pub mod utils;

pub use components::{App, Translator};
pub use config::{RetryPolicy, TranslatorConfig, CONFIG};
pub use context::{use_translation, TranslationContext, TranslationProvider};
pub use error::TranslatorError;
pub use models::{Language, SwitchPhase, TranslationSnapshot, TranslationState};
pub use services::{SwitchOutcome, TranslationSession};
pub use state::TranslationStore;
