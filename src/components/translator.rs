// ============================================================================
// TRANSLATOR - Botones de idioma, spinner y error en línea
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::context::use_translation;
use crate::models::Language;

/// Retraso antes de resaltar el botón activo tras un cambio
const ACTIVE_HIGHLIGHT_DELAY_MS: u32 = 400;

#[function_component(Translator)]
pub fn translator() -> Html {
    let translation = use_translation();
    let transitioning = translation.is_transitioning();
    let delayed_active = use_state(|| false);

    {
        let delayed_active = delayed_active.clone();
        use_effect_with(transitioning, move |transitioning| {
            let timeout = if *transitioning {
                delayed_active.set(false);
                None
            } else {
                Some(Timeout::new(ACTIVE_HIGHLIGHT_DELAY_MS, move || delayed_active.set(true)))
            };
            move || drop(timeout)
        });
    }

    let buttons = Language::ALL
        .iter()
        .map(|language| {
            let language = *language;
            let is_current = translation.current_language() == language;
            let onclick = {
                let set_language = translation.set_language.clone();
                let current = translation.current_language();
                Callback::from(move |_e: MouseEvent| {
                    if !transitioning && language != current {
                        set_language.emit(language);
                    }
                })
            };
            let class = classes!(
                "translator-button",
                (is_current && *delayed_active).then_some("active"),
                transitioning.then_some("disabled"),
            );

            html! {
                <button
                    class={class}
                    onclick={onclick}
                    disabled={transitioning}
                    aria-label={language.aria_label()}
                >
                    {language.label()}
                </button>
            }
        })
        .collect::<Html>();

    let dismiss = {
        let dismiss_error = translation.dismiss_error.clone();
        Callback::from(move |_e: MouseEvent| dismiss_error.emit(()))
    };

    html! {
        <div class="translator">
            <div class="translator-buttons">
                {buttons}
                if transitioning {
                    <div class="translator-spinner" role="status" aria-label="Changing language"></div>
                }
            </div>
            if let Some(message) = translation.error() {
                <div class="translator-error" role="alert">
                    <span>{message.to_string()}</span>
                    <button class="translator-error-dismiss" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
                </div>
            }
        </div>
    }
}
