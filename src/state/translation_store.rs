// ============================================================================
// TRANSLATION STORE - Dueño único del estado de traducción
// ============================================================================
// Los consumidores solo leen snapshots; las mutaciones vienen del
// inicializador del widget y del controlador de cambio de idioma.
// ============================================================================

use crate::models::{Language, TranslationSnapshot, TranslationState};
use super::reactivity::{ReactiveState, Subscription};

#[derive(Clone, Default)]
pub struct TranslationStore {
    state: ReactiveState<TranslationState>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TranslationSnapshot {
        self.state.with(|state| state.snapshot())
    }

    pub fn state(&self) -> TranslationState {
        self.state.get()
    }

    pub fn current_language(&self) -> Language {
        self.state.with(|state| state.current_language)
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.with(|state| state.is_transitioning())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.with(|state| state.initialized)
    }

    /// Cada listener recibe el snapshot completo tras cada cambio confirmado
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&TranslationSnapshot) + 'static,
    {
        self.state.subscribe(move |state| listener(&state.snapshot()))
    }

    pub(crate) fn update<F>(&self, updater: F) -> bool
    where
        F: FnOnce(&mut TranslationState),
    {
        self.state.update(updater)
    }
}
