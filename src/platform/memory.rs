// ============================================================================
// PLATAFORMA EN MEMORIA - Reloj manual + modelo de DOM para tests
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::traits::{
    CookieJar, Disposable, DomJanitor, Scheduler, ScriptInjector, ScriptRequest, SelectOutcome,
    Task, TimerId, TranslateWidget, WidgetOptions,
};
use super::Platform;
use crate::error::{Result, TranslatorError};

// ----------------------------------------------------------------------------
// Reloj manual
// ----------------------------------------------------------------------------

struct PendingTimer {
    due_ms: u64,
    id: TimerId,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: TimerId,
    queue: Vec<PendingTimer>,
}

/// Scheduler determinista: el tiempo solo avanza con `advance`
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ClockState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Avanzar el reloj ejecutando en orden los timers que vencen
    /// (incluidos los que se programen durante el avance)
    pub fn advance(&self, ms: u32) {
        let target = self.now() + u64::from(ms);
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
                    .map(|(index, _)| index);

                match next {
                    Some(index) => {
                        let timer = state.queue.remove(index);
                        state.now_ms = timer.due_ms;
                        timer.task
                    }
                    None => {
                        state.now_ms = target;
                        break;
                    }
                }
            };
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.queue.push(PendingTimer { due_ms, id, task });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.state.borrow_mut().queue.retain(|timer| timer.id != id);
    }
}

// ----------------------------------------------------------------------------
// Página en memoria
// ----------------------------------------------------------------------------

/// Modelo mínimo del DOM que toca el subsistema
#[derive(Default)]
pub struct PageModel {
    pub hostname: String,
    pub cookies: String,
    pub cookie_writes: Vec<String>,
    pub scripts: Vec<String>,
    pub retracted_hooks: Vec<String>,
    pub styles: Vec<String>,
    pub host_mounted: bool,
    pub widget: Option<(WidgetOptions, String)>,
    pub fail_construct: bool,
    /// Valor del select `.goog-te-combo` si existe
    pub select: Option<String>,
    pub fail_select: bool,
    pub change_events: u32,
    pub reloads: u32,
    pub fail_reload: bool,
    /// Atributo style del banner si existe
    pub banner_style: Option<String>,
    pub body_top: String,
    observers: Vec<u64>,
    next_observer: u64,
    pending_errors: Vec<Task>,
    last_request: Option<ScriptRequest>,
}

#[derive(Clone)]
pub struct MemoryPage {
    model: Rc<RefCell<PageModel>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        let page = Self {
            model: Rc::new(RefCell::new(PageModel::default())),
        };
        page.model.borrow_mut().hostname = "localhost".to_string();
        page
    }

    pub fn model(&self) -> Ref<'_, PageModel> {
        self.model.borrow()
    }

    pub fn edit<F>(&self, edit: F)
    where
        F: FnOnce(&mut PageModel),
    {
        edit(&mut *self.model.borrow_mut());
    }

    pub fn platform(&self, scheduler: Rc<ManualScheduler>) -> Platform {
        Platform {
            scheduler,
            scripts: Rc::new(self.clone()),
            cookies: Rc::new(self.clone()),
            widget: Rc::new(self.clone()),
            janitor: Rc::new(self.clone()),
        }
    }

    /// Simular el `onerror` del script más antiguo pendiente
    pub fn fail_script(&self) -> bool {
        let on_error = {
            let mut model = self.model.borrow_mut();
            if model.pending_errors.is_empty() {
                None
            } else {
                Some(model.pending_errors.remove(0))
            }
        };
        match on_error {
            Some(on_error) => {
                on_error();
                true
            }
            None => false,
        }
    }

    /// Simular que el script cargó e invocó su callback de arranque
    pub fn complete_script(&self) -> bool {
        let request = {
            let mut model = self.model.borrow_mut();
            model.pending_errors.clear();
            model.last_request.clone()
        };
        match request {
            Some(request) => request.registry.invoke(&request.callback_name),
            None => false,
        }
    }

    /// Mutación del DOM hecha por el widget: notifica a los observers activos
    pub fn mutate<F>(&self, change: F)
    where
        F: FnOnce(&mut PageModel),
    {
        let observers = {
            let mut model = self.model.borrow_mut();
            change(&mut *model);
            model.observers.len()
        };
        for _ in 0..observers {
            self.suppress();
        }
    }

    pub fn observer_count(&self) -> usize {
        self.model.borrow().observers.len()
    }
}

impl ScriptInjector for MemoryPage {
    fn inject(&self, request: &ScriptRequest, on_error: Task) -> Result<()> {
        let mut model = self.model.borrow_mut();
        model.scripts.push(request.src.clone());
        model.pending_errors.push(on_error);
        model.last_request = Some(request.clone());
        Ok(())
    }

    fn retract(&self, callback_name: &str) {
        self.model
            .borrow_mut()
            .retracted_hooks
            .push(callback_name.to_string());
    }
}

impl CookieJar for MemoryPage {
    fn read(&self) -> Result<String> {
        Ok(self.model.borrow().cookies.clone())
    }

    /// Igual que `document.cookie = ...`: reemplaza la cookie del mismo nombre
    fn write(&self, cookie: &str) -> Result<()> {
        let mut model = self.model.borrow_mut();
        model.cookie_writes.push(cookie.to_string());

        let pair = cookie.split(';').next().unwrap_or_default().trim().to_string();
        let name = pair.split('=').next().unwrap_or_default().to_string();
        let mut pairs: Vec<String> = model
            .cookies
            .split(';')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && p.split('=').next() != Some(name.as_str()))
            .collect();
        pairs.push(pair);
        model.cookies = pairs.join("; ");
        Ok(())
    }

    fn hostname(&self) -> Result<String> {
        Ok(self.model.borrow().hostname.clone())
    }
}

impl TranslateWidget for MemoryPage {
    fn install_styles(&self, css: &str) -> Result<()> {
        self.model.borrow_mut().styles.push(css.to_string());
        Ok(())
    }

    fn mount_host(&self, _element_id: &str) -> Result<()> {
        self.model.borrow_mut().host_mounted = true;
        Ok(())
    }

    fn construct(&self, options: &WidgetOptions, element_id: &str) -> Result<()> {
        let mut model = self.model.borrow_mut();
        if model.fail_construct {
            return Err(TranslatorError::WidgetInit(
                "google.translate.TranslateElement is not a constructor".to_string(),
            ));
        }
        model.widget = Some((options.clone(), element_id.to_string()));
        Ok(())
    }

    fn select_language(&self, code: &str) -> Result<SelectOutcome> {
        let mut guard = self.model.borrow_mut();
        let model = &mut *guard;
        if model.fail_select {
            return Err(TranslatorError::Dom("select detached while switching".to_string()));
        }
        match model.select.as_mut() {
            Some(value) => {
                *value = code.to_string();
                model.change_events += 1;
                Ok(SelectOutcome::Applied)
            }
            None => Ok(SelectOutcome::ControlMissing),
        }
    }

    fn reload_page(&self) -> Result<()> {
        let mut model = self.model.borrow_mut();
        if model.fail_reload {
            return Err(TranslatorError::Dom("location.reload blocked".to_string()));
        }
        model.reloads += 1;
        Ok(())
    }
}

impl DomJanitor for MemoryPage {
    fn suppress(&self) {
        let mut model = self.model.borrow_mut();
        if model.banner_style.is_some() {
            model.banner_style = Some("display: none !important".to_string());
        }
        model.body_top = "0px".to_string();
    }

    fn start(&self) -> Result<Disposable> {
        let id = {
            let mut model = self.model.borrow_mut();
            model.next_observer += 1;
            let id = model.next_observer;
            model.observers.push(id);
            id
        };
        let model = self.model.clone();
        Ok(Disposable::new(move || {
            model.borrow_mut().observers.retain(|observer| *observer != id);
        }))
    }
}

/// Plataforma en memoria lista para usar en tests
pub fn test_platform() -> (Platform, Rc<ManualScheduler>, MemoryPage) {
    let clock = Rc::new(ManualScheduler::new());
    let page = MemoryPage::new();
    let platform = page.platform(clock.clone());
    (platform, clock, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_runs_timers_in_order() {
        let clock = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(1000, "settle"), (300, "suppress")] {
            let order = order.clone();
            clock.schedule(delay, Box::new(move || order.borrow_mut().push(tag)));
        }
        clock.advance(299);
        assert!(order.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*order.borrow(), vec!["suppress"]);
        clock.advance(700);
        assert_eq!(*order.borrow(), vec!["suppress", "settle"]);
        assert_eq!(clock.now(), 1000);
    }

    #[test]
    fn test_cookie_write_replaces_same_name() {
        let page = MemoryPage::new();
        page.edit(|model| model.cookies = "theme=dark; googtrans=/en/hi".to_string());
        page.write("googtrans=/en/mr;path=/;domain=localhost").unwrap();
        assert_eq!(page.read().unwrap(), "theme=dark; googtrans=/en/mr");
    }
}
