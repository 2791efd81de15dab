// ============================================================================
// TRANSLATION CONTEXT - Provider + hook para la UI
// ============================================================================
// El provider crea una TranslationSession al montarse, refleja cada snapshot
// del store en estado de Yew y desmonta la sesión al desmontarse.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::{Language, TranslationSnapshot};
use crate::platform::Platform;
use crate::services::{CallbackRegistry, TranslationSession};

/// Lo que ve cualquier descendiente del provider
#[derive(Clone, PartialEq)]
pub struct TranslationContext {
    pub snapshot: TranslationSnapshot,
    pub set_language: Callback<Language>,
    pub dismiss_error: Callback<()>,
}

impl TranslationContext {
    pub fn current_language(&self) -> Language {
        self.snapshot.current_language
    }

    pub fn is_transitioning(&self) -> bool {
        self.snapshot.is_transitioning
    }

    pub fn error(&self) -> Option<&str> {
        self.snapshot.error.as_deref()
    }
}

impl Default for TranslationContext {
    fn default() -> Self {
        Self {
            snapshot: TranslationSnapshot::default(),
            set_language: Callback::from(|_| ()),
            dismiss_error: Callback::from(|_| ()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TranslationProviderProps {
    pub children: Children,
}

#[function_component]
pub fn TranslationProvider(props: &TranslationProviderProps) -> Html {
    let snapshot = use_state(TranslationSnapshot::default);
    let session = use_mut_ref(|| None::<Rc<TranslationSession>>);

    {
        let snapshot = snapshot.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let created = Rc::new(TranslationSession::new(
                &Platform::web(),
                &CONFIG,
                CallbackRegistry::new(),
            ));
            let subscription = {
                let snapshot = snapshot.clone();
                created.store().subscribe(move |next| snapshot.set(next.clone()))
            };
            snapshot.set(created.store().snapshot());
            created.activate();
            *session.borrow_mut() = Some(created.clone());

            move || {
                drop(subscription);
                created.teardown();
                session.borrow_mut().take();
            }
        });
    }

    let set_language = {
        let session = session.clone();
        Callback::from(move |language: Language| {
            let current = session.borrow().clone();
            match current {
                Some(session) => {
                    session.set_language(language);
                }
                None => log::warn!("⚠️ [PROVIDER] set_language antes de montar la sesión"),
            }
        })
    };

    let dismiss_error = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let current = session.borrow().clone();
            if let Some(session) = current {
                session.dismiss_error();
            }
        })
    };

    let context = TranslationContext {
        snapshot: (*snapshot).clone(),
        set_language,
        dismiss_error,
    };

    html! {
        <ContextProvider<TranslationContext> context={context}>
            {props.children.clone()}
        </ContextProvider<TranslationContext>>
    }
}

/// Acceso al contexto de traducción desde cualquier componente descendiente
#[hook]
pub fn use_translation() -> TranslationContext {
    use_context::<TranslationContext>().unwrap_or_default()
}
