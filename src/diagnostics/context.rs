use std::fmt;

use crate::config::{CompilationConfig, WarningMode};
use crate::diagnostics::{
    diagnostic::Diagnostic,
    emitter::{CollectingEmitter, Emitter},
    files::{FileId, FileTable},
    location::SourceLocation,
};

/// Fatal signal raised when accumulated errors reach the configured limit.
///
/// This travels up the normal control path; the driver observes it and
/// stops further compilation phases. It is not an unwinding condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyErrors {
    pub limit: u32,
}

impl fmt::Display for TooManyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error limit of {} reached, aborting compilation",
            self.limit
        )
    }
}

impl std::error::Error for TooManyErrors {}

/// Per-compilation diagnostic accounting.
///
/// One context is constructed per compilation invocation and threaded
/// `&mut` through the pipeline; the borrow checker enforces the
/// one-writer-at-a-time discipline the design assumes. The context owns
/// the file table locations borrow their identity from, and the sink
/// diagnostics are printed through.
///
/// Counters are monotonically non-decreasing, with a single sanctioned
/// exception: discarding a speculative attempt rolls its gagged errors
/// back out of `error_count` (see the gagging protocol in
/// [`crate::diagnostics::gag`]).
pub struct DiagnosticContext {
    pub(super) errors: u32,
    pub(super) warnings: u32,
    pub(super) gag_depth: u32,
    pub(super) gagged_errors: u32,
    pub(super) rolled_back: u32,
    error_limit: u32,
    warning_mode: WarningMode,
    show_gagged_errors: bool,
    files: FileTable,
    emitter: Box<dyn Emitter>,
}

impl Default for DiagnosticContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticContext {
    /// A context with no error limit, informational warnings, and a
    /// collecting sink.
    pub fn new() -> Self {
        Self {
            errors: 0,
            warnings: 0,
            gag_depth: 0,
            gagged_errors: 0,
            rolled_back: 0,
            error_limit: 0,
            warning_mode: WarningMode::Informational,
            show_gagged_errors: false,
            files: FileTable::new(),
            emitter: Box::new(CollectingEmitter::new()),
        }
    }

    /// A context wired from the policy fields of the configuration record:
    /// `error_limit`, `warnings`, `show_gagged_errors`.
    pub fn with_config(config: &CompilationConfig) -> Self {
        Self {
            error_limit: config.error_limit,
            warning_mode: config.warnings,
            show_gagged_errors: config.show_gagged_errors,
            ..Self::new()
        }
    }

    /// Replaces the sink diagnostics are printed through.
    pub fn with_emitter(mut self, emitter: Box<dyn Emitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileTable {
        &mut self.files
    }

    /// Interns a file name into the context's table.
    pub fn intern_file(&mut self, path: &str) -> FileId {
        self.files.intern(path)
    }

    /// Errors reported so far, including gagged ones not yet rolled back.
    /// Idempotent.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Warnings reported so far. Idempotent.
    pub fn warning_count(&self) -> u32 {
        self.warnings
    }

    /// Current speculative nesting depth; 0 means diagnostics surface
    /// normally.
    pub fn gag_depth(&self) -> u32 {
        self.gag_depth
    }

    /// Reports an error attributed to `location`.
    ///
    /// The error count always advances. While gagged, the message is
    /// suppressed (emitted flagged as speculative if the configuration says
    /// to show gagged errors) and the gagged total advances. Ungagged, the
    /// message goes to the sink and the error limit is checked; reaching it
    /// returns the fatal [`TooManyErrors`] signal for the caller to
    /// propagate. Gagged errors never trip the limit, since a later discard
    /// may roll them back.
    pub fn report_error(
        &mut self,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Result<(), TooManyErrors> {
        self.errors += 1;
        if self.gag_depth > 0 {
            self.gagged_errors += 1;
            if self.show_gagged_errors {
                let diagnostic = Diagnostic::error(message)
                    .with_location(location)
                    .as_gagged();
                self.emitter.emit(&diagnostic, &self.files);
            }
            return Ok(());
        }

        let diagnostic = Diagnostic::error(message).with_location(location);
        self.emitter.emit(&diagnostic, &self.files);

        if self.error_limit != 0 && self.errors >= self.error_limit {
            return Err(TooManyErrors {
                limit: self.error_limit,
            });
        }
        Ok(())
    }

    /// Reports a warning attributed to `location`.
    ///
    /// `WarningMode::Disabled` drops it entirely; `AsErrors` promotes it
    /// and behaves exactly as [`report_error`](Self::report_error);
    /// `Informational` counts and emits it. Gagged informational warnings
    /// are dropped uncounted: warnings have no rollback channel, and a
    /// discarded attempt must not leave its warnings in the totals.
    pub fn report_warning(
        &mut self,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Result<(), TooManyErrors> {
        match self.warning_mode {
            WarningMode::Disabled => Ok(()),
            WarningMode::AsErrors => self.report_error(location, message),
            WarningMode::Informational => {
                if self.gag_depth > 0 {
                    return Ok(());
                }
                self.warnings += 1;
                let diagnostic = Diagnostic::warning(message).with_location(location);
                self.emitter.emit(&diagnostic, &self.files);
                Ok(())
            }
        }
    }

    /// Records that an error occurred in the current context without
    /// emitting any message. Gag-aware like
    /// [`report_error`](Self::report_error).
    pub fn increase_error_count(&mut self) {
        self.errors += 1;
        if self.gag_depth > 0 {
            self.gagged_errors += 1;
        }
    }
}

impl fmt::Debug for DiagnosticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticContext")
            .field("errors", &self.errors)
            .field("warnings", &self.warnings)
            .field("gag_depth", &self.gag_depth)
            .field("gagged_errors", &self.gagged_errors)
            .field("rolled_back", &self.rolled_back)
            .finish_non_exhaustive()
    }
}
