// ============================================================================
// WIDGET INITIALIZER - Construcción del widget cuando el script está listo
// ============================================================================

use std::rc::Rc;

use crate::config::TranslatorConfig;
use crate::error::{Result, TranslatorError};
use crate::models::Language;
use crate::platform::{CookieJar, TranslateWidget, WidgetOptions};
use crate::state::TranslationStore;
use crate::utils::{parse_language_cookie, SOURCE_LANGUAGE, WIDGET_CHROME_CSS};
use super::banner_suppressor::BannerSuppressor;

#[derive(Clone)]
pub struct WidgetInitializer {
    widget: Rc<dyn TranslateWidget>,
    cookies: Rc<dyn CookieJar>,
    store: TranslationStore,
    suppressor: BannerSuppressor,
    options: WidgetOptions,
    host_element_id: String,
    suppress_delay_ms: u32,
}

impl WidgetInitializer {
    pub fn new(
        widget: Rc<dyn TranslateWidget>,
        cookies: Rc<dyn CookieJar>,
        store: TranslationStore,
        suppressor: BannerSuppressor,
        config: &TranslatorConfig,
    ) -> Self {
        Self {
            widget,
            cookies,
            store,
            suppressor,
            options: WidgetOptions {
                page_language: SOURCE_LANGUAGE.to_string(),
                auto_display: false,
                included_languages: Language::included_codes(),
            },
            host_element_id: config.host_element_id.clone(),
            suppress_delay_ms: config.suppress_delay_ms,
        }
    }

    /// Construir el widget y sembrar el idioma desde la cookie.
    /// Si falla, el estado queda en `initialized = false` (modo degradado).
    pub fn initialize(&self) -> Result<Language> {
        if let Err(e) = self.construct() {
            log::error!("❌ [WIDGET] Error inicializando el widget: {}", e);
            self.store.update(|state| state.initialized = false);
            return Err(e);
        }

        let recovered = self.recover_language();
        self.store.update(|state| {
            if let Some(language) = recovered {
                state.current_language = language;
            }
            state.initialized = true;
        });

        let language = self.store.current_language();
        log::info!("🌐 [WIDGET] Widget inicializado, idioma actual: {}", language);

        self.suppressor.schedule_pass(self.suppress_delay_ms);
        Ok(language)
    }

    fn construct(&self) -> Result<()> {
        let as_init_error = |e: TranslatorError| match e {
            TranslatorError::WidgetInit(_) => e,
            other => TranslatorError::WidgetInit(other.to_string()),
        };

        self.widget
            .install_styles(WIDGET_CHROME_CSS)
            .map_err(as_init_error)?;
        self.widget
            .mount_host(&self.host_element_id)
            .map_err(as_init_error)?;
        self.widget
            .construct(&self.options, &self.host_element_id)
            .map_err(as_init_error)
    }

    fn recover_language(&self) -> Option<Language> {
        match self.cookies.read() {
            Ok(cookies) => parse_language_cookie(&cookies),
            Err(e) => {
                log::warn!("⚠️ [WIDGET] No se pudo leer la cookie de idioma: {}", e);
                None
            }
        }
    }
}
