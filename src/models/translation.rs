use serde::{Deserialize, Serialize};
use super::Language;

/// Fase del cambio de idioma
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchPhase {
    #[default]
    Idle,
    /// Un único cambio en vuelo (el "transition lock")
    Switching,
    /// Último cambio fallido, con mensaje para el usuario
    Error(String),
}

/// Estado completo de traducción (propiedad exclusiva del store)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationState {
    pub current_language: Language,
    pub phase: SwitchPhase,
    pub initialized: bool,
}

impl TranslationState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, SwitchPhase::Switching)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SwitchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> TranslationSnapshot {
        TranslationSnapshot {
            current_language: self.current_language,
            is_transitioning: self.is_transitioning(),
            initialized: self.initialized,
            error: self.error().map(str::to_string),
        }
    }
}

/// Vista de solo lectura que reciben los consumidores de UI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TranslationSnapshot {
    pub current_language: Language,
    pub is_transitioning: bool,
    pub initialized: bool,
    pub error: Option<String>,
}
