// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod translation_store;

pub use reactivity::*;
pub use translation_store::*;
