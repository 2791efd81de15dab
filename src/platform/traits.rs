use serde::Serialize;
use crate::error::Result;
use crate::services::callback_registry::CallbackRegistry;

/// Identificador de un timer programado
pub type TimerId = u64;

/// Tarea diferida de un solo uso
pub type Task = Box<dyn FnOnce()>;

/// Reloj/timers inyectable (setTimeout en web, reloj manual en tests)
pub trait Scheduler {
    /// Programar `task` para dentro de `delay_ms`. Nunca se ejecuta de forma síncrona.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId;

    /// Cancelar un timer pendiente (no-op si ya se ejecutó)
    fn cancel(&self, id: TimerId);
}

/// Petición de carga del script de arranque
#[derive(Clone)]
pub struct ScriptRequest {
    pub src: String,
    /// Nombre con el que el script invocará el callback de arranque
    pub callback_name: String,
    pub registry: CallbackRegistry,
}

pub trait ScriptInjector {
    /// Inyectar el script. `on_error` se invoca si la carga falla.
    fn inject(&self, request: &ScriptRequest, on_error: Task) -> Result<()>;

    /// Retirar el hook expuesto para `callback_name`
    fn retract(&self, _callback_name: &str) {}
}

pub trait CookieJar {
    /// Cabecera completa de cookies (`name=value; name2=value2`)
    fn read(&self) -> Result<String>;

    fn write(&self, cookie: &str) -> Result<()>;

    fn hostname(&self) -> Result<String>;
}

/// Configuración que recibe el constructor del widget.
/// El layout (SIMPLE) lo resuelve cada implementación.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub page_language: String,
    pub auto_display: bool,
    pub included_languages: String,
}

/// Resultado de intentar mover el select interno del widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Valor cambiado y un evento `change` despachado
    Applied,
    /// El select no existe en el DOM
    ControlMissing,
}

/// Widget de traducción externo y el DOM que lo rodea
pub trait TranslateWidget {
    fn install_styles(&self, css: &str) -> Result<()>;

    /// Montar el elemento oculto que aloja el widget (idempotente)
    fn mount_host(&self, element_id: &str) -> Result<()>;

    fn construct(&self, options: &WidgetOptions, element_id: &str) -> Result<()>;

    fn select_language(&self, code: &str) -> Result<SelectOutcome>;

    fn reload_page(&self) -> Result<()>;
}

/// "Conserje" del DOM: mantiene oculto el banner del widget
pub trait DomJanitor {
    /// Pasada única: ocultar banner y resetear el offset del body
    fn suppress(&self);

    /// Observar mutaciones del body y llamar a `suppress` en cada lote
    fn start(&self) -> Result<Disposable>;
}

/// Recurso que se libera al llamar `dispose` o al hacer drop
pub struct Disposable {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposable {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Disposable {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Disposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposable")
            .field("released", &self.release.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_disposable_releases_once() {
        let count = Rc::new(Cell::new(0));
        let disposable = {
            let count = count.clone();
            Disposable::new(move || count.set(count.get() + 1))
        };
        disposable.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disposable_releases_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            let _disposable = Disposable::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_widget_options_serialize_camel_case() {
        let options = WidgetOptions {
            page_language: "en".to_string(),
            auto_display: false,
            included_languages: "en,hi".to_string(),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["pageLanguage"], "en");
        assert_eq!(json["autoDisplay"], false);
        assert_eq!(json["includedLanguages"], "en,hi");
    }
}
