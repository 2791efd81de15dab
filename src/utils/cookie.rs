// ============================================================================
// COOKIE googtrans - Persistencia del idioma elegido
// ============================================================================
// Formato que entiende el widget: googtrans=/en/<código de 2 letras>
// ============================================================================

use crate::models::Language;
use crate::utils::constants::{LANGUAGE_COOKIE, SOURCE_LANGUAGE};

/// Extrae el idioma persistido de una cabecera `document.cookie`.
/// Devuelve `None` si la cookie no existe, está mal formada o el idioma no es soportado.
pub fn parse_language_cookie(cookies: &str) -> Option<Language> {
    let value = cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANGUAGE_COOKIE)
        .map(|(_, value)| value)?;

    let code = value
        .strip_prefix('/')?
        .strip_prefix(SOURCE_LANGUAGE)?
        .strip_prefix('/')?;

    let code = code.get(..2)?;
    if !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Language::from_code(code)
}

/// Valor completo a escribir en `document.cookie` para el fallback por recarga
pub fn language_cookie(language: Language, hostname: &str) -> String {
    format!(
        "{}=/{}/{};path=/;domain={}",
        LANGUAGE_COOKIE,
        SOURCE_LANGUAGE,
        language.code(),
        hostname
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_hindi() {
        assert_eq!(parse_language_cookie("googtrans=/en/hi"), Some(Language::Hi));
    }

    #[test]
    fn test_finds_cookie_among_others() {
        let header = "session=abc; googtrans=/en/kn; theme=dark";
        assert_eq!(parse_language_cookie(header), Some(Language::Kn));
    }

    #[test]
    fn test_malformed_or_absent_cookie() {
        assert_eq!(parse_language_cookie(""), None);
        assert_eq!(parse_language_cookie("theme=dark"), None);
        assert_eq!(parse_language_cookie("googtrans=/fr/hi"), None);
        assert_eq!(parse_language_cookie("googtrans=/en/h"), None);
        assert_eq!(parse_language_cookie("googtrans=/en/HI"), None);
        assert_eq!(parse_language_cookie("googtrans=en/hi"), None);
    }

    #[test]
    fn test_unsupported_language_is_ignored() {
        assert_eq!(parse_language_cookie("googtrans=/en/fr"), None);
    }

    #[test]
    fn test_cookie_value_scoped_to_host() {
        assert_eq!(
            language_cookie(Language::Mr, "example.org"),
            "googtrans=/en/mr;path=/;domain=example.org"
        );
    }
}
