pub mod callback_registry;
pub mod script_loader;
pub mod widget_initializer;
pub mod banner_suppressor;
pub mod language_switch;
pub mod translation_session;

pub use callback_registry::*;
pub use script_loader::*;
pub use widget_initializer::*;
pub use banner_suppressor::*;
pub use language_switch::*;
pub use translation_session::*;
