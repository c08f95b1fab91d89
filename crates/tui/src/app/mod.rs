//! Core application state and behavior for the search screen.
//!
//! The [`App`] type aggregates the form, the search session and rendering
//! logic. Supporting modules partition the implementation into focused pieces:
//! actions (input handling), rendering, search coordination, and links.

mod actions;
mod form;
mod links;
mod notice;
mod render;
mod results;
mod search;
pub(crate) mod state;

pub use form::Focus;
pub use links::{LinkOpener, open_in_browser};
pub use state::{App, AppOutcome};
