use serde::Serialize;

use crate::diagnostics::location::SourceLocation;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks successful compilation.
    Error,
    /// Advisory; may be promoted to an error by configuration.
    Warning,
}

/// A single diagnostic as handed to the output sink.
///
/// Gagged diagnostics are normally suppressed and exist only as counter
/// movement; when the configuration asks for gagged errors to be shown
/// anyway, the record reaches the sink with `gagged` set so the rendering
/// can flag it as speculative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
    pub gagged: bool,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: SourceLocation::UNKNOWN,
            gagged: false,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: SourceLocation::UNKNOWN,
            gagged: false,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub(crate) fn as_gagged(mut self) -> Self {
        self.gagged = true;
        self
    }
}
