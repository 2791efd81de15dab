// ============================================================================
// PLATAFORMA WEB - Implementaciones sobre web-sys / js-sys
// ============================================================================
// Solo wrappers sobre el navegador - sin estado de traducción, sin lógica
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Event, HtmlDocument, HtmlElement, HtmlScriptElement, HtmlSelectElement,
    MutationObserver, MutationObserverInit, Window,
};

use super::traits::{
    CookieJar, Disposable, DomJanitor, Scheduler, ScriptInjector, ScriptRequest, SelectOutcome,
    Task, TimerId, TranslateWidget, WidgetOptions,
};
use crate::error::{Result, TranslatorError};
use crate::utils::constants::{BANNER_FRAME_SELECTOR, LANGUAGE_SELECT_SELECTOR};

fn get_window() -> Result<Window> {
    window().ok_or_else(|| TranslatorError::Dom("window no disponible".to_string()))
}

fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| TranslatorError::Dom("document no disponible".to_string()))
}

fn get_body() -> Result<HtmlElement> {
    get_document()?
        .body()
        .ok_or_else(|| TranslatorError::Dom("document.body no disponible".to_string()))
}

// ----------------------------------------------------------------------------
// Timers
// ----------------------------------------------------------------------------

/// Scheduler basado en `gloo_timers::callback::Timeout`.
/// Los Timeout ya ejecutados se liberan en la siguiente llamada (nunca dentro de su propio callback).
pub struct WebScheduler {
    next_id: Cell<TimerId>,
    timers: RefCell<HashMap<TimerId, Timeout>>,
    fired: Rc<RefCell<Vec<TimerId>>>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            timers: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn prune(&self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        let mut timers = self.timers.borrow_mut();
        for id in fired {
            timers.remove(&id);
        }
    }
}

impl Default for WebScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        self.prune();

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let fired = self.fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            task();
            fired.borrow_mut().push(id);
        });
        self.timers.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        // Drop del Timeout = clearTimeout
        let timeout = self.timers.borrow_mut().remove(&id);
        drop(timeout);
    }
}

// ----------------------------------------------------------------------------
// Script de arranque
// ----------------------------------------------------------------------------

/// Inyector de `<script>`. Guarda los hooks expuestos en `window` para
/// liberarlos en `retract`.
#[derive(Default)]
pub struct WebScriptInjector {
    hooks: RefCell<HashMap<String, Closure<dyn FnMut()>>>,
}

impl WebScriptInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exponer `window[callback_name]` reenviando al registro
    fn expose_hook(&self, window: &Window, request: &ScriptRequest) -> Result<()> {
        if self.hooks.borrow().contains_key(&request.callback_name) {
            return Ok(());
        }

        let registry = request.registry.clone();
        let name = request.callback_name.clone();
        let hook = Closure::wrap(Box::new(move || {
            if !registry.invoke(&name) {
                log::debug!("🔕 [SCRIPT] Callback {} ya no está registrado", name);
            }
        }) as Box<dyn FnMut()>);

        let key = JsValue::from_str(&request.callback_name);
        js_sys::Reflect::set(window, &key, hook.as_ref())
            .map_err(|e| TranslatorError::from_js("registrando callback de arranque", &e))?;
        self.hooks
            .borrow_mut()
            .insert(request.callback_name.clone(), hook);
        Ok(())
    }
}

impl ScriptInjector for WebScriptInjector {
    fn inject(&self, request: &ScriptRequest, on_error: Task) -> Result<()> {
        let window = get_window()?;
        self.expose_hook(&window, request)?;

        let document = get_document()?;
        let script = document
            .create_element("script")
            .map_err(|e| TranslatorError::from_js("creando <script>", &e))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| TranslatorError::Dom("el elemento creado no es un <script>".to_string()))?;
        script.set_src(&request.src);
        script.set_async(true);

        let on_error = Closure::once_into_js(move |_event: Event| on_error());
        script.set_onerror(Some(on_error.unchecked_ref()));

        get_body()?
            .append_child(&script)
            .map_err(|e| TranslatorError::from_js("insertando <script>", &e))?;
        Ok(())
    }

    fn retract(&self, callback_name: &str) {
        if let Some(window) = window() {
            if let Err(e) = js_sys::Reflect::delete_property(&window, &JsValue::from_str(callback_name)) {
                log::debug!("🔕 [SCRIPT] No se pudo borrar window.{}: {:?}", callback_name, e);
            }
        }
        // Fuera de window ya nadie puede llamarlo: liberar el closure
        let hook = self.hooks.borrow_mut().remove(callback_name);
        drop(hook);
    }
}

// ----------------------------------------------------------------------------
// Cookies
// ----------------------------------------------------------------------------

pub struct WebCookieJar;

impl WebCookieJar {
    fn html_document() -> Result<HtmlDocument> {
        get_document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| TranslatorError::Dom("document sin soporte de cookies".to_string()))
    }
}

impl CookieJar for WebCookieJar {
    fn read(&self) -> Result<String> {
        Self::html_document()?
            .cookie()
            .map_err(|e| TranslatorError::from_js("leyendo document.cookie", &e))
    }

    fn write(&self, cookie: &str) -> Result<()> {
        Self::html_document()?
            .set_cookie(cookie)
            .map_err(|e| TranslatorError::from_js("escribiendo document.cookie", &e))
    }

    fn hostname(&self) -> Result<String> {
        get_window()?
            .location()
            .hostname()
            .map_err(|e| TranslatorError::from_js("leyendo location.hostname", &e))
    }
}

// ----------------------------------------------------------------------------
// Widget
// ----------------------------------------------------------------------------

pub struct WebTranslateWidget;

impl WebTranslateWidget {
    /// Recorrer una ruta de propiedades JS (`google.translate.TranslateElement`)
    fn lookup(root: &JsValue, path: &[&str]) -> Result<JsValue> {
        path.iter().try_fold(root.clone(), |current, key| {
            let next = js_sys::Reflect::get(&current, &JsValue::from_str(key))
                .map_err(|e| TranslatorError::WidgetInit(format!("{}: {:?}", key, e)))?;
            if next.is_undefined() || next.is_null() {
                return Err(TranslatorError::WidgetInit(format!("{} no está definido", path.join("."))));
            }
            Ok(next)
        })
    }
}

impl TranslateWidget for WebTranslateWidget {
    fn install_styles(&self, css: &str) -> Result<()> {
        let document = get_document()?;
        let style = document
            .create_element("style")
            .map_err(|e| TranslatorError::from_js("creando <style>", &e))?;
        style.set_text_content(Some(css));

        let head = document
            .head()
            .ok_or_else(|| TranslatorError::Dom("document.head no disponible".to_string()))?;
        head.append_child(&style)
            .map_err(|e| TranslatorError::from_js("insertando <style>", &e))?;
        Ok(())
    }

    fn mount_host(&self, element_id: &str) -> Result<()> {
        let document = get_document()?;
        if document.get_element_by_id(element_id).is_some() {
            return Ok(());
        }

        let host = document
            .create_element("div")
            .map_err(|e| TranslatorError::from_js("creando host del widget", &e))?;
        host.set_id(element_id);
        host.set_attribute("style", "display: none")
            .map_err(|e| TranslatorError::from_js("ocultando host del widget", &e))?;
        get_body()?
            .append_child(&host)
            .map_err(|e| TranslatorError::from_js("insertando host del widget", &e))?;
        Ok(())
    }

    fn construct(&self, options: &WidgetOptions, element_id: &str) -> Result<()> {
        let window: JsValue = get_window()?.into();
        let constructor = Self::lookup(&window, &["google", "translate", "TranslateElement"])?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| TranslatorError::WidgetInit("TranslateElement no es un constructor".to_string()))?;

        let options_json = serde_json::to_string(options)
            .map_err(|e| TranslatorError::WidgetInit(e.to_string()))?;
        let js_options = js_sys::JSON::parse(&options_json)
            .map_err(|e| TranslatorError::WidgetInit(format!("{:?}", e)))?;

        let layout = Self::lookup(&constructor, &["InlineLayout", "SIMPLE"])?;
        js_sys::Reflect::set(&js_options, &JsValue::from_str("layout"), &layout)
            .map_err(|e| TranslatorError::WidgetInit(format!("{:?}", e)))?;

        let args = js_sys::Array::of2(&js_options, &JsValue::from_str(element_id));
        js_sys::Reflect::construct(&constructor, &args)
            .map_err(|e| TranslatorError::WidgetInit(format!("{:?}", e)))?;
        Ok(())
    }

    fn select_language(&self, code: &str) -> Result<SelectOutcome> {
        let document = get_document()?;
        let element = match document
            .query_selector(LANGUAGE_SELECT_SELECTOR)
            .map_err(|e| TranslatorError::from_js("buscando select del widget", &e))?
        {
            Some(element) => element,
            None => return Ok(SelectOutcome::ControlMissing),
        };

        let select = element
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| TranslatorError::Dom("el control del widget no es un <select>".to_string()))?;
        select.set_value(code);

        let change = Event::new("change")
            .map_err(|e| TranslatorError::from_js("creando evento change", &e))?;
        select
            .dispatch_event(&change)
            .map_err(|e| TranslatorError::from_js("despachando evento change", &e))?;
        Ok(SelectOutcome::Applied)
    }

    fn reload_page(&self) -> Result<()> {
        get_window()?
            .location()
            .reload()
            .map_err(|e| TranslatorError::from_js("recargando la página", &e))
    }
}

// ----------------------------------------------------------------------------
// Banner
// ----------------------------------------------------------------------------

/// Ocultar el banner del widget y devolver el body a top: 0
fn suppress_banner() {
    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    if let Ok(Some(frame)) = document.query_selector(BANNER_FRAME_SELECTOR) {
        if let Err(e) = frame.set_attribute("style", "display: none !important") {
            log::debug!("🙈 [BANNER] No se pudo ocultar el banner: {:?}", e);
        }
    }
    if let Some(body) = document.body() {
        if let Err(e) = body.style().set_property("top", "0px") {
            log::debug!("🙈 [BANNER] No se pudo resetear body.top: {:?}", e);
        }
    }
}

pub struct WebDomJanitor;

impl DomJanitor for WebDomJanitor {
    fn suppress(&self) {
        suppress_banner();
    }

    fn start(&self) -> Result<Disposable> {
        let body = get_body()?;

        let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
            suppress_banner();
        }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| TranslatorError::from_js("creando MutationObserver", &e))?;

        // Solo childList: nuestras escrituras de estilo no vuelven a disparar el observer
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer
            .observe_with_options(&body, &options)
            .map_err(|e| TranslatorError::from_js("observando document.body", &e))?;

        Ok(Disposable::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
