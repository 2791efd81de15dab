pub mod app;
pub mod translator;

pub use app::App;
pub use translator::Translator;
