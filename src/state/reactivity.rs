// ============================================================================
// REACTIVITY - Estado compartido con notificación a suscriptores
// ============================================================================
// Un solo escritor, varios lectores: cada cambio confirmado se difunde con el
// mismo valor completo a todos los suscriptores, ya liberado el borrow interno.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::platform::Disposable;

type Listener<T> = Rc<dyn Fn(&T)>;

/// Suscripción activa; se cancela al hacer drop
pub type Subscription = Disposable;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(u64, Listener<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: Clone + PartialEq + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Leer sin clonar
    pub fn with<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&*self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) -> bool {
        self.update(|value| *value = new_value)
    }

    /// Actualizar valor usando closure y notificar.
    /// Devuelve `false` (sin notificar) si el valor no cambió.
    pub fn update<F>(&self, updater: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let committed = {
            let mut value = self.value.borrow_mut();
            let before = value.clone();
            updater(&mut *value);
            if *value == before {
                None
            } else {
                Some(value.clone())
            }
        };

        match committed {
            Some(value) => {
                self.notify(&value);
                true
            }
            None => false,
        }
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));

        let subscribers = Rc::downgrade(&self.subscribers);
        Disposable::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers
    fn notify(&self, value: &T) {
        // Copia de la lista: un listener puede suscribirse o cancelar durante la notificación
        let listeners: Vec<Listener<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
