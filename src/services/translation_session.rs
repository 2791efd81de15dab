// ============================================================================
// TRANSLATION SESSION - Ciclo de vida de la orquestación
// ============================================================================
// Una sesión por provider montado: activate() arranca script + observer,
// teardown() cancela todos los timers, desarma el callback del script y
// desconecta el observer.
// ============================================================================

use std::cell::Cell;

use crate::config::TranslatorConfig;
use crate::models::Language;
use crate::platform::{Platform, TimerScope};
use crate::state::TranslationStore;
use super::banner_suppressor::BannerSuppressor;
use super::callback_registry::CallbackRegistry;
use super::language_switch::{LanguageSwitchController, SwitchOutcome};
use super::script_loader::{LoadStatus, ScriptLoader};
use super::widget_initializer::WidgetInitializer;

pub struct TranslationSession {
    store: TranslationStore,
    timers: TimerScope,
    loader: ScriptLoader,
    initializer: WidgetInitializer,
    suppressor: BannerSuppressor,
    controller: LanguageSwitchController,
    active: Cell<bool>,
    torn_down: Cell<bool>,
}

impl TranslationSession {
    pub fn new(platform: &Platform, config: &TranslatorConfig, registry: CallbackRegistry) -> Self {
        let store = TranslationStore::new();
        let timers = TimerScope::new(platform.scheduler.clone());
        let suppressor = BannerSuppressor::new(platform.janitor.clone(), timers.clone());
        let loader = ScriptLoader::new(platform.scripts.clone(), timers.clone(), registry, config);
        let initializer = WidgetInitializer::new(
            platform.widget.clone(),
            platform.cookies.clone(),
            store.clone(),
            suppressor.clone(),
            config,
        );
        let controller = LanguageSwitchController::new(
            store.clone(),
            platform.widget.clone(),
            platform.cookies.clone(),
            suppressor.clone(),
            timers.clone(),
            config,
        );

        Self {
            store,
            timers,
            loader,
            initializer,
            suppressor,
            controller,
            active: Cell::new(false),
            torn_down: Cell::new(false),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn load_status(&self) -> LoadStatus {
        self.loader.status()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    /// Arrancar la carga del widget y el observer del banner (idempotente)
    pub fn activate(&self) {
        if self.torn_down.get() || self.active.replace(true) {
            return;
        }
        log::info!("🚀 [SESSION] Activando traductor");

        if !self.store.is_initialized() {
            let initializer = self.initializer.clone();
            self.loader.load(move || {
                if let Err(e) = initializer.initialize() {
                    log::warn!("⚠️ [SESSION] Widget no disponible, modo degradado: {}", e);
                }
            });
        }

        if let Err(e) = self.suppressor.start() {
            log::warn!("⚠️ [SESSION] No se pudo observar el DOM: {}", e);
        }
    }

    pub fn set_language(&self, language: Language) -> SwitchOutcome {
        if self.torn_down.get() {
            log::debug!("🔕 [SESSION] set_language tras teardown ignorado");
            return SwitchOutcome::Unchanged;
        }
        self.controller.set_language(language)
    }

    pub fn dismiss_error(&self) {
        self.controller.dismiss_error();
    }

    pub fn teardown(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        self.timers.cancel_all();
        self.loader.abandon();
        self.suppressor.stop();
        log::info!("🧹 [SESSION] Traductor desmontado");
    }
}

impl Drop for TranslationSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
