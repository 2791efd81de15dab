use yew::prelude::*;

use crate::context::{use_translation, TranslationProvider};
use super::Translator;

/// Página de demostración: traductor arriba a la derecha + contenido traducible
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <TranslationProvider>
            <header class="app-header">
                <Translator />
            </header>
            <main class="app-content">
                <LanguageBadge />
                <h1>{"Welcome"}</h1>
                <p>{"Pick a language above and this page will be translated in place."}</p>
            </main>
        </TranslationProvider>
    }
}

/// Muestra el idioma activo (consumidor de solo lectura del contexto)
#[function_component(LanguageBadge)]
fn language_badge() -> Html {
    let translation = use_translation();
    let language = translation.current_language();

    html! {
        <span class="language-badge notranslate" title={language.aria_label()}>
            {language.code().to_uppercase()}
        </span>
    }
}
