//! UI layer for desktop GUI: app shell, user table, detail overlay, and theme.

pub mod app;
pub mod overlay;
pub mod table;
pub mod theme;

pub use app::{DesktopGuiApp, StartupConfig, APP_TITLE};
