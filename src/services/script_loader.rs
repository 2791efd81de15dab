// ============================================================================
// SCRIPT LOADER - Carga del script del widget con reintentos acotados
// ============================================================================
// Un fallo definitivo no es un error para quien llama: se registra en el log y
// la funcionalidad queda en "sin traducción disponible".
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{RetryPolicy, TranslatorConfig};
use crate::platform::{ScriptInjector, ScriptRequest, TimerId, TimerScope};
use super::callback_registry::CallbackRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading { attempt: u32 },
    Ready,
    Failed,
}

struct LoaderState {
    injector: Rc<dyn ScriptInjector>,
    timers: TimerScope,
    registry: CallbackRegistry,
    policy: RetryPolicy,
    script_url: String,
    callback_prefix: String,
    status: Cell<LoadStatus>,
    attempts: Cell<u32>,
    callback_name: RefCell<Option<String>>,
    retry_timer: Cell<Option<TimerId>>,
    abandoned: Cell<bool>,
}

#[derive(Clone)]
pub struct ScriptLoader {
    state: Rc<LoaderState>,
}

impl ScriptLoader {
    pub fn new(
        injector: Rc<dyn ScriptInjector>,
        timers: TimerScope,
        registry: CallbackRegistry,
        config: &TranslatorConfig,
    ) -> Self {
        Self {
            state: Rc::new(LoaderState {
                injector,
                timers,
                registry,
                policy: config.script_retry,
                script_url: config.script_url.clone(),
                callback_prefix: config.callback_prefix.clone(),
                status: Cell::new(LoadStatus::Idle),
                attempts: Cell::new(0),
                callback_name: RefCell::new(None),
                retry_timer: Cell::new(None),
                abandoned: Cell::new(false),
            }),
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.state.status.get()
    }

    /// Número de inyecciones realizadas
    pub fn attempts(&self) -> u32 {
        self.state.attempts.get()
    }

    pub fn callback_name(&self) -> Option<String> {
        self.state.callback_name.borrow().clone()
    }

    /// Iniciar la carga; `on_ready` se ejecuta cuando el script invoca su callback.
    /// No-op si ya hay una carga en curso o terminada.
    pub fn load<F>(&self, on_ready: F)
    where
        F: FnOnce() + 'static,
    {
        let state = &self.state;
        if state.abandoned.get() || state.status.get() != LoadStatus::Idle {
            log::debug!("🔁 [SCRIPT] load() ignorado, estado actual {:?}", state.status.get());
            return;
        }

        let name = {
            let ready_state = state.clone();
            state.registry.register(&state.callback_prefix, move || {
                if ready_state.abandoned.get() {
                    return;
                }
                ready_state.status.set(LoadStatus::Ready);
                log::info!("✅ [SCRIPT] Widget listo tras {} intento(s)", ready_state.attempts.get());
                on_ready();
            })
        };
        *state.callback_name.borrow_mut() = Some(name);

        Self::attempt(state);
    }

    /// Cancelar el reintento pendiente y desarmar el callback (teardown).
    /// Una carga en vuelo no se cancela: simplemente ya no tiene efecto.
    pub fn abandon(&self) {
        let state = &self.state;
        if state.abandoned.replace(true) {
            return;
        }
        if let Some(timer) = state.retry_timer.take() {
            state.timers.cancel(timer);
        }
        Self::disarm(state);
    }

    fn attempt(state: &Rc<LoaderState>) {
        if state.abandoned.get() {
            return;
        }
        let callback_name = match state.callback_name.borrow().clone() {
            Some(name) => name,
            None => return,
        };

        let attempt = state.attempts.get() + 1;
        state.attempts.set(attempt);
        state.status.set(LoadStatus::Loading { attempt });
        log::info!("📥 [SCRIPT] Cargando script del widget (intento {}/{})", attempt, state.policy.max_attempts);

        let request = ScriptRequest {
            src: format!("{}?cb={}", state.script_url, callback_name),
            callback_name,
            registry: state.registry.clone(),
        };
        let on_error = {
            let state = state.clone();
            Box::new(move || Self::handle_failure(&state, attempt))
        };

        if let Err(e) = state.injector.inject(&request, on_error) {
            log::warn!("⚠️ [SCRIPT] No se pudo inyectar el script: {}", e);
            Self::handle_failure(state, attempt);
        }
    }

    fn handle_failure(state: &Rc<LoaderState>, attempt: u32) {
        // Ignorar errores tardíos o duplicados de un intento ya resuelto
        if state.abandoned.get() || state.status.get() != (LoadStatus::Loading { attempt }) {
            return;
        }
        log::warn!("⚠️ [SCRIPT] Falló la carga del script, intento {}", attempt);

        if state.policy.allows_retry(attempt) {
            let retry_state = state.clone();
            let timer = state.timers.schedule(state.policy.delay_ms, move || {
                retry_state.retry_timer.set(None);
                Self::attempt(&retry_state);
            });
            state.retry_timer.set(Some(timer));
        } else {
            state.status.set(LoadStatus::Failed);
            log::error!("❌ [SCRIPT] Script del widget no disponible tras {} intentos", attempt);
            Self::disarm(state);
        }
    }

    fn disarm(state: &LoaderState) {
        if let Some(name) = state.callback_name.borrow_mut().take() {
            state.registry.unregister(&name);
            state.injector.retract(&name);
        }
    }
}
