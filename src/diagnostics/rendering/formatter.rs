//! Colorless text formatting for diagnostics.

use crate::diagnostics::{
    diagnostic::{Diagnostic, Severity},
    files::FileTable,
};

/// Render one diagnostic as a single line: `file(line,column): error: message`.
///
/// An unknown location degrades to the bare `error: message` form. Gagged
/// diagnostics that reach rendering (the show-gagged-errors override) are
/// flagged as speculative.
pub fn render_diagnostic(diagnostic: &Diagnostic, files: &FileTable, show_columns: bool) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    let location = diagnostic.location.render(files, show_columns);
    let mut out = if location.is_empty() {
        format!("{}: {}", severity, diagnostic.message)
    } else {
        format!("{}: {}: {}", location, severity, diagnostic.message)
    };
    if diagnostic.gagged {
        out.push_str(" (speculative)");
    }
    out
}

/// Render multiple diagnostics, one line each.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    files: &FileTable,
    show_columns: bool,
) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| render_diagnostic(diagnostic, files, show_columns))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary counts line for the end of a compilation.
///
/// Returns `None` when there is nothing worth saying (at most one
/// diagnostic of a single kind).
pub fn render_summary(errors: u32, warnings: u32) -> Option<String> {
    let total = errors + warnings;
    if total <= 1 && !(errors > 0 && warnings > 0) {
        return None;
    }

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{} error{}", errors, plural(errors)));
    }
    if warnings > 0 {
        parts.push(format!("{} warning{}", warnings, plural(warnings)));
    }
    Some(format!("Found {}.", parts.join(" and ")))
}

/// Notice printed when the error limit aborted the compilation.
pub fn render_error_limit_notice(limit: u32) -> String {
    format!(
        "stopped after {} error{} (use --max-errors to increase the limit).",
        limit,
        plural(limit)
    )
}

fn plural(count: u32) -> &'static str {
    if count == 1 { "" } else { "s" }
}
