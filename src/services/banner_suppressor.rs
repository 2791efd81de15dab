// ============================================================================
// BANNER SUPPRESSOR - Bucle de corrección sobre el chrome del widget
// ============================================================================
// El widget puede volver a insertar o redimensionar su banner en cualquier
// momento, así que no basta con ocultarlo una vez: se re-aplica en cada lote
// de mutaciones del body mientras la sesión viva.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::platform::{Disposable, DomJanitor, TimerId, TimerScope};

#[derive(Clone)]
pub struct BannerSuppressor {
    janitor: Rc<dyn DomJanitor>,
    timers: TimerScope,
    observer: Rc<RefCell<Option<Disposable>>>,
}

impl BannerSuppressor {
    pub fn new(janitor: Rc<dyn DomJanitor>, timers: TimerScope) -> Self {
        Self {
            janitor,
            timers,
            observer: Rc::new(RefCell::new(None)),
        }
    }

    /// Pasada inmediata
    pub fn suppress(&self) {
        self.janitor.suppress();
    }

    /// Empezar a observar el DOM (no-op si ya está corriendo)
    pub fn start(&self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let observer = self.janitor.start()?;
        *self.observer.borrow_mut() = Some(observer);
        log::info!("👁️ [BANNER] Observando mutaciones del body");
        Ok(())
    }

    /// Desconectar el observer
    pub fn stop(&self) {
        let observer = self.observer.borrow_mut().take();
        if let Some(observer) = observer {
            observer.dispose();
            log::info!("🔌 [BANNER] Observer desconectado");
        }
    }

    pub fn is_running(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Programar una pasada diferida (el widget suele re-mostrar el banner tras init/cambio)
    pub fn schedule_pass(&self, delay_ms: u32) -> TimerId {
        let janitor = self.janitor.clone();
        self.timers.schedule(delay_ms, move || janitor.suppress())
    }
}
