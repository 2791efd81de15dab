// Utils compartidos

pub mod constants;
pub mod cookie;

pub use constants::*;
pub use cookie::*;
