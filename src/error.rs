// ============================================================================
// ERRORS - Fallos del subsistema de traducción
// ============================================================================
// Ningún error aquí es fatal para la aplicación: cada variante degrada la
// funcionalidad (sin widget, recarga, mensaje en línea) en lugar de propagarse.
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslatorError {
    /// El script de arranque no se pudo cargar
    #[error("script load failed: {0}")]
    ScriptLoad(String),

    /// El constructor del widget lanzó una excepción o no existe
    #[error("widget initialization failed: {0}")]
    WidgetInit(String),

    /// Falló la manipulación del widget (o del fallback por cookie) durante un cambio
    #[error("language switch failed: {0}")]
    Switch(String),

    #[error("dom error: {0}")]
    Dom(String),
}

impl TranslatorError {
    /// Convierte un error JS en un error DOM legible
    pub fn from_js(context: &str, value: &JsValue) -> Self {
        TranslatorError::Dom(format!("{}: {:?}", context, value))
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
