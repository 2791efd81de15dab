// ============================================================================
// TIMER SCOPE - Timers agrupados por sesión
// ============================================================================
// Todos los timers (reintento, settle, supresión) pasan por aquí para que el
// teardown pueda cancelarlos de una vez.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use super::traits::{Scheduler, TimerId};

#[derive(Clone)]
pub struct TimerScope {
    scheduler: Rc<dyn Scheduler>,
    pending: Rc<RefCell<HashSet<TimerId>>>,
}

impl TimerScope {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            pending: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    pub fn schedule<F>(&self, delay_ms: u32, task: F) -> TimerId
    where
        F: FnOnce() + 'static,
    {
        let pending = self.pending.clone();
        let own_id: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));

        let id = {
            let own_id = own_id.clone();
            self.scheduler.schedule(
                delay_ms,
                Box::new(move || {
                    if let Some(id) = own_id.get() {
                        pending.borrow_mut().remove(&id);
                    }
                    task();
                }),
            )
        };

        own_id.set(Some(id));
        self.pending.borrow_mut().insert(id);
        id
    }

    pub fn cancel(&self, id: TimerId) {
        if self.pending.borrow_mut().remove(&id) {
            self.scheduler.cancel(id);
        }
    }

    /// Cancelar todos los timers pendientes
    pub fn cancel_all(&self) {
        let ids: Vec<TimerId> = self.pending.borrow_mut().drain().collect();
        if !ids.is_empty() {
            log::debug!("⏹️ [TIMERS] Cancelando {} timers pendientes", ids.len());
        }
        for id in ids {
            self.scheduler.cancel(id);
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::ManualScheduler;

    #[test]
    fn test_fired_timers_leave_scope() {
        let clock = Rc::new(ManualScheduler::new());
        let scope = TimerScope::new(clock.clone());
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            scope.schedule(300, move || fired.set(true));
        }
        assert_eq!(scope.pending_count(), 1);

        clock.advance(300);
        assert!(fired.get());
        assert_eq!(scope.pending_count(), 0);
    }

    #[test]
    fn test_cancel_all_clears_every_timer() {
        let clock = Rc::new(ManualScheduler::new());
        let scope = TimerScope::new(clock.clone());
        let fired = Rc::new(Cell::new(0));
        for delay in [300, 1000, 1000] {
            let fired = fired.clone();
            scope.schedule(delay, move || fired.set(fired.get() + 1));
        }

        scope.cancel_all();
        clock.advance(5000);
        assert_eq!(fired.get(), 0);
        assert_eq!(scope.pending_count(), 0);
        assert_eq!(clock.pending(), 0);
    }
}
