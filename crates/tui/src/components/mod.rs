//! UI building blocks shared across rendering and state modules.

/// Heading, form fields and status line.
pub mod prompt;
/// Result list rendering.
pub mod results;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use prompt::{FieldContext, StatusContext, render_field, render_heading, render_status};
pub use results::{HIGHLIGHT_SYMBOL, ResultsContext, render_results, wrap_to_width};
pub use scrollbar::render_scrollbar;
