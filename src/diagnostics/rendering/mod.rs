//! Rendering of diagnostics for human and machine consumption.

pub mod colors;
pub mod formatter;
pub mod json;

pub use colors::Colors;
pub use formatter::{
    render_diagnostic, render_diagnostics, render_error_limit_notice, render_summary,
};
pub use json::render_json;
