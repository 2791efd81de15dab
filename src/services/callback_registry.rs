// ============================================================================
// CALLBACK REGISTRY - Callbacks de arranque por id de petición
// ============================================================================
// El script externo solo sabe invocar una función por nombre. En lugar de un
// global fijo, cada carga registra aquí su callback con un id generado y la
// plataforma expone ese id.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::platform::Task;

// Ids únicos en todo el proceso: dos registros nunca comparten nombre en window
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Rc<RefCell<HashMap<String, Task>>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar un callback de un solo uso; devuelve su nombre (`<prefix>_<id>`)
    pub fn register<F>(&self, prefix: &str, callback: F) -> String
    where
        F: FnOnce() + 'static,
    {
        let id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        let name = format!("{}_{}", prefix, id);
        self.callbacks
            .borrow_mut()
            .insert(name.clone(), Box::new(callback));
        name
    }

    /// Ejecutar y consumir el callback. `false` si no existe (ya usado o retirado).
    pub fn invoke(&self, name: &str) -> bool {
        let callback = self.callbacks.borrow_mut().remove(name);
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.callbacks.borrow_mut().remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_callback_runs_once() {
        let registry = CallbackRegistry::new();
        let calls = Rc::new(Cell::new(0));
        let name = {
            let calls = calls.clone();
            registry.register("ready", move || calls.set(calls.get() + 1))
        };

        assert!(name.starts_with("ready_"));
        assert!(registry.invoke(&name));
        assert!(!registry.invoke(&name));
        assert_eq!(calls.get(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_generated_names_are_unique() {
        let registry = CallbackRegistry::new();
        let first = registry.register("ready", || {});
        let second = CallbackRegistry::new().register("ready", || {});
        assert_ne!(first, second);
    }

    #[test]
    fn test_unregistered_callback_never_runs() {
        let registry = CallbackRegistry::new();
        let ran = Rc::new(Cell::new(false));
        let name = {
            let ran = ran.clone();
            registry.register("ready", move || ran.set(true))
        };

        assert!(registry.unregister(&name));
        assert!(!registry.invoke(&name));
        assert!(!ran.get());
    }
}
