//! Dialog components for TUI

mod base;
mod error_dialog;
mod success_dialog;

pub use base::centered_rect;
pub use error_dialog::render_error_dialog;
pub use success_dialog::render_success_dialog;
