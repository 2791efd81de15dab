use serde::{Deserialize, Serialize};
use crate::utils::constants::{WIDGET_HOST_ID, WIDGET_SCRIPT_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub script_url: String,
    pub host_element_id: String,
    pub callback_prefix: String,
    pub script_retry: RetryPolicy,
    pub settle_delay_ms: u32,
    pub suppress_delay_ms: u32,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            script_url: WIDGET_SCRIPT_URL.to_string(),
            host_element_id: WIDGET_HOST_ID.to_string(),
            callback_prefix: "translateWidgetReady".to_string(),
            script_retry: RetryPolicy::default(),
            settle_delay_ms: 1000,
            suppress_delay_ms: 300,
        }
    }
}

/// Política de reintentos con espera fija
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Intentos totales, incluido el primero
    pub max_attempts: u32,
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// ¿Queda otro intento después de `attempts` fallidos?
    pub fn allows_retry(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }
}

impl TranslatorConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            script_url: defaults.script_url,
            host_element_id: defaults.host_element_id,
            callback_prefix: option_env!("TRANSLATOR_CALLBACK_PREFIX")
                .unwrap_or("translateWidgetReady").to_string(),
            script_retry: RetryPolicy {
                max_attempts: option_env!("TRANSLATOR_SCRIPT_MAX_ATTEMPTS")
                    .unwrap_or("3").parse().unwrap_or(3),
                delay_ms: option_env!("TRANSLATOR_SCRIPT_RETRY_DELAY_MS")
                    .unwrap_or("1000").parse().unwrap_or(1000),
            },
            settle_delay_ms: option_env!("TRANSLATOR_SETTLE_DELAY_MS")
                .unwrap_or("1000").parse().unwrap_or(1000),
            suppress_delay_ms: option_env!("TRANSLATOR_SUPPRESS_DELAY_MS")
                .unwrap_or("300").parse().unwrap_or(300),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: TranslatorConfig = TranslatorConfig::from_env();
}
