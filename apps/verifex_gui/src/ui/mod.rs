//! UI layer for the desktop GUI: app shell, report panels, and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::{StartupConfig, VerifexApp};
