// ============================================================================
// LANGUAGE SWITCH CONTROLLER - Máquina de estados del cambio de idioma
// ============================================================================
// Idle --set_language--> Switching --(settle)--> Idle
//                            |--(sin select)--> recarga (no vuelve a Idle)
//                            '--(error)-------> Error (libera el lock)
//
// El idioma se aplica de forma optimista al entrar en Switching y se revierte
// al anterior si el cambio falla.
// ============================================================================

use std::rc::Rc;

use crate::config::TranslatorConfig;
use crate::error::{Result, TranslatorError};
use crate::models::{Language, SwitchPhase};
use crate::platform::{CookieJar, SelectOutcome, TimerScope, TranslateWidget};
use crate::state::TranslationStore;
use crate::utils::{language_cookie, SWITCH_ERROR_MESSAGE};
use super::banner_suppressor::BannerSuppressor;

/// Qué decidió el controlador ante una petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Ya era el idioma actual
    Unchanged,
    /// Otro cambio en vuelo; petición descartada
    Busy,
    /// Select del widget actualizado; vuelve a Idle tras el settle
    Applied,
    /// Cookie escrita y recarga solicitada
    Reloading,
    Failed,
}

#[derive(Clone)]
pub struct LanguageSwitchController {
    store: TranslationStore,
    widget: Rc<dyn TranslateWidget>,
    cookies: Rc<dyn CookieJar>,
    suppressor: BannerSuppressor,
    timers: TimerScope,
    settle_delay_ms: u32,
    suppress_delay_ms: u32,
}

impl LanguageSwitchController {
    pub fn new(
        store: TranslationStore,
        widget: Rc<dyn TranslateWidget>,
        cookies: Rc<dyn CookieJar>,
        suppressor: BannerSuppressor,
        timers: TimerScope,
        config: &TranslatorConfig,
    ) -> Self {
        Self {
            store,
            widget,
            cookies,
            suppressor,
            timers,
            settle_delay_ms: config.settle_delay_ms,
            suppress_delay_ms: config.suppress_delay_ms,
        }
    }

    pub fn set_language(&self, language: Language) -> SwitchOutcome {
        let state = self.store.state();
        if state.current_language == language {
            return SwitchOutcome::Unchanged;
        }
        if state.is_transitioning() {
            log::debug!("⏳ [SWITCH] Cambio a {} ignorado: hay otro en curso", language);
            return SwitchOutcome::Busy;
        }

        let previous = state.current_language;
        self.store.update(|state| {
            state.current_language = language;
            state.phase = SwitchPhase::Switching;
        });
        log::info!("🔄 [SWITCH] {} -> {}", previous, language);

        match self.drive_widget(language, previous) {
            Ok(outcome) => {
                self.suppressor.schedule_pass(self.suppress_delay_ms);
                outcome
            }
            Err(e) => {
                let error = match e {
                    TranslatorError::Switch(_) => e,
                    other => TranslatorError::Switch(other.to_string()),
                };
                log::error!("❌ [SWITCH] {}", error);
                self.store.update(|state| {
                    state.current_language = previous;
                    state.phase = SwitchPhase::Error(SWITCH_ERROR_MESSAGE.to_string());
                });
                SwitchOutcome::Failed
            }
        }
    }

    /// Cerrar el mensaje de error
    pub fn dismiss_error(&self) {
        self.store.update(|state| {
            if matches!(state.phase, SwitchPhase::Error(_)) {
                state.phase = SwitchPhase::Idle;
            }
        });
    }

    fn drive_widget(&self, language: Language, previous: Language) -> Result<SwitchOutcome> {
        match self.widget.select_language(language.code())? {
            SelectOutcome::Applied => {
                // El widget no avisa cuando termina: esperar un tiempo fijo
                let store = self.store.clone();
                self.timers.schedule(self.settle_delay_ms, move || {
                    store.update(|state| {
                        if state.is_transitioning() {
                            state.phase = SwitchPhase::Idle;
                        }
                    });
                    log::info!("✅ [SWITCH] Cambio de idioma asentado");
                });
                Ok(SwitchOutcome::Applied)
            }
            SelectOutcome::ControlMissing => {
                log::warn!("⚠️ [SWITCH] Select del widget no encontrado, usando cookie + recarga");
                let hostname = self.cookies.hostname()?;
                self.cookies.write(&language_cookie(language, &hostname))?;
                if let Err(e) = self.widget.reload_page() {
                    // Sin recarga el cambio se revierte: la cookie vuelve al idioma anterior
                    if let Err(restore) = self.cookies.write(&language_cookie(previous, &hostname)) {
                        log::warn!("⚠️ [SWITCH] No se pudo restaurar la cookie de idioma: {}", restore);
                    }
                    return Err(e);
                }
                Ok(SwitchOutcome::Reloading)
            }
        }
    }
}
