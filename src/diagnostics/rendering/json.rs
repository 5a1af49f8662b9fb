//! Machine-readable diagnostic output for the driver's JSON mode.

use serde::Serialize;

use crate::diagnostics::{
    diagnostic::{Diagnostic, Severity},
    files::FileTable,
};

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    severity: Severity,
    file: Option<&'a str>,
    line: u32,
    column: u32,
    message: &'a str,
    gagged: bool,
}

/// Render diagnostics as a JSON array, one object per diagnostic, with
/// file ids resolved back to path text.
pub fn render_json(diagnostics: &[Diagnostic], files: &FileTable) -> String {
    let rows: Vec<JsonDiagnostic<'_>> = diagnostics
        .iter()
        .map(|diagnostic| JsonDiagnostic {
            severity: diagnostic.severity,
            file: diagnostic.location.file().map(|id| files.resolve(id)),
            line: diagnostic.location.line(),
            column: diagnostic.location.column(),
            message: &diagnostic.message,
            gagged: diagnostic.gagged,
        })
        .collect();
    serde_json::to_string_pretty(&rows).expect("diagnostic rows always serialize")
}
