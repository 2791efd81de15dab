// ============================================================================
// PLATFORM - Capacidades del navegador detrás de traits
// ============================================================================
// La orquestación solo habla con estos traits: en producción `web`,
// en tests un DOM en memoria con reloj manual.
// ============================================================================

pub mod traits;
pub mod timers;
pub mod web;

#[cfg(test)]
pub mod memory;

use std::rc::Rc;

pub use traits::*;
pub use timers::TimerScope;

/// Conjunto de capacidades que necesita una sesión de traducción
#[derive(Clone)]
pub struct Platform {
    pub scheduler: Rc<dyn Scheduler>,
    pub scripts: Rc<dyn ScriptInjector>,
    pub cookies: Rc<dyn CookieJar>,
    pub widget: Rc<dyn TranslateWidget>,
    pub janitor: Rc<dyn DomJanitor>,
}

impl Platform {
    /// Capacidades reales del navegador
    pub fn web() -> Self {
        Self {
            scheduler: Rc::new(web::WebScheduler::new()),
            scripts: Rc::new(web::WebScriptInjector::new()),
            cookies: Rc::new(web::WebCookieJar),
            widget: Rc::new(web::WebTranslateWidget),
            janitor: Rc::new(web::WebDomJanitor),
        }
    }
}
