//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Locale toggle shortcut display
pub const LOCALE_SHORTCUT: &str = "Ctrl+L";
