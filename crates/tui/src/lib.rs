//! Interactive terminal UI for searching a repository's issues.
//!
//! This crate contains the full TUI application including the event loop,
//! rendering pipeline, state management, and the reusable widgets/style
//! definitions that power the terminal application.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, AppOutcome, Focus, LinkOpener, open_in_browser};
pub use config::{FieldLabels, UiLabels};
pub use runtime::run;

pub use crate::input::TextInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
