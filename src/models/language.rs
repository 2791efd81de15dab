use serde::{Deserialize, Serialize};

/// Idiomas soportados por el widget (conjunto cerrado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "hi")]
    Hi,
    #[serde(rename = "mr")]
    Mr,
    #[serde(rename = "kn")]
    Kn,
}

impl Language {
    /// Orden de presentación de los botones
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Mr, Language::Kn];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Kn => "kn",
        }
    }

    /// Nombre nativo mostrado en el botón
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
            Language::Kn => "ಕನ್ನಡ",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Language::En => "Switch to English",
            Language::Hi => "Switch to Hindi",
            Language::Mr => "Switch to Marathi",
            Language::Kn => "Switch to Kannada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Lista separada por comas para `includedLanguages`
    pub fn included_codes() -> String {
        Language::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
