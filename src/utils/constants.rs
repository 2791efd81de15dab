/// Idioma original de la página
pub const SOURCE_LANGUAGE: &str = "en";

/// Cookie que lee el widget al cargar la página
pub const LANGUAGE_COOKIE: &str = "googtrans";

/// URL del script de arranque del widget
/// Se puede sobreescribir en tiempo de compilación con TRANSLATOR_SCRIPT_URL
pub const WIDGET_SCRIPT_URL: &str = match option_env!("TRANSLATOR_SCRIPT_URL") {
    Some(url) => url,
    None => "https://translate.google.com/translate_a/element.js",
};

/// Elemento oculto donde se monta el widget
pub const WIDGET_HOST_ID: &str = "google_translate_element";

/// Select interno del widget
pub const LANGUAGE_SELECT_SELECTOR: &str = ".goog-te-combo";

/// Banner que el widget inyecta arriba de la página
pub const BANNER_FRAME_SELECTOR: &str = ".goog-te-banner-frame";

/// Estilos que ocultan el "chrome" del widget
pub const WIDGET_CHROME_CSS: &str = r#"
.goog-te-banner-frame {
  display: none !important;
}
.goog-te-menu-value:hover {
  text-decoration: none !important;
}
body {
  top: 0 !important;
}
.skiptranslate {
  display: none !important;
}
.goog-te-gadget {
  display: none !important;
}
"#;

/// Mensaje mostrado al usuario cuando falla un cambio
pub const SWITCH_ERROR_MESSAGE: &str = "Failed to change language. Please try again.";
