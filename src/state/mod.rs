//! Application state module

mod app_state;
pub mod content;
mod forms;
mod locale;
mod rotator;
mod splash_state;
mod wizard;

pub use app_state::*;
pub use forms::*;
pub use locale::*;
pub use rotator::*;
pub use splash_state::*;
pub use wizard::*;
