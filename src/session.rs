//! One compilation invocation: configuration plus diagnostic state.

use crate::config::CompilationConfig;
use crate::diagnostics::{DiagnosticContext, Emitter, FileTable};

/// Compiler version, taken from the build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extensions the driver consults when classifying inputs and naming
/// outputs.
pub const SOURCE_EXT: &str = "mi";
pub const OBJECT_EXT: &str = "o";
pub const LIB_EXT: &str = "a";
pub const DOC_EXT: &str = "html";
pub const HEADER_EXT: &str = "mih";
pub const JSON_EXT: &str = "json";
pub const MAP_EXT: &str = "map";

/// [`VERSION`] as a single comparable number: each dotted component takes
/// two decimal digits, so `1.2.3` becomes 10203.
pub fn version_number() -> u32 {
    VERSION
        .split('.')
        .take(3)
        .fold(0, |acc, part| acc * 100 + part.parse::<u32>().unwrap_or(0))
}

/// State for one compilation invocation.
///
/// The driver constructs one session per run; the configuration is
/// immutable from then on, and the diagnostic context is threaded through
/// the pipeline. Repeated or parallel compilations in one process each get
/// their own session, with no cross-talk.
#[derive(Debug)]
pub struct CompileSession {
    pub config: CompilationConfig,
    pub diagnostics: DiagnosticContext,
}

impl CompileSession {
    /// A session whose diagnostic context is wired from the policy fields
    /// of `config`.
    pub fn new(config: CompilationConfig) -> Self {
        let diagnostics = DiagnosticContext::with_config(&config);
        Self {
            config,
            diagnostics,
        }
    }

    /// A session printing diagnostics through `emitter`.
    pub fn with_emitter(config: CompilationConfig, emitter: Box<dyn Emitter>) -> Self {
        let diagnostics = DiagnosticContext::with_config(&config).with_emitter(emitter);
        Self {
            config,
            diagnostics,
        }
    }

    /// The file table locations borrow their identity from.
    pub fn files(&self) -> &FileTable {
        self.diagnostics.files()
    }

    pub fn files_mut(&mut self) -> &mut FileTable {
        self.diagnostics.files_mut()
    }

    /// Success is the absence of errors once every phase has run.
    pub fn succeeded(&self) -> bool {
        self.diagnostics.error_count() == 0
    }
}
