use std::{cell::RefCell, io, rc::Rc};

use crate::diagnostics::{
    diagnostic::{Diagnostic, Severity},
    files::FileTable,
    rendering::{Colors, render_diagnostic},
};

/// The sink diagnostics are printed through.
///
/// The driver configures one per compilation; everything the user sees
/// flows through `emit`. Gagged diagnostics never reach the sink unless the
/// configuration asks for them to be shown.
pub trait Emitter {
    fn emit(&mut self, diagnostic: &Diagnostic, files: &FileTable);
}

/// Sink that collects diagnostics for end-of-run rendering.
///
/// The handle is cheaply cloneable: the driver keeps one clone to read from
/// while the diagnostic context owns the other as its sink.
#[derive(Debug, Clone, Default)]
pub struct CollectingEmitter {
    collected: Rc<RefCell<Vec<Diagnostic>>>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn collected(&self) -> Vec<Diagnostic> {
        self.collected.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }
}

impl Emitter for CollectingEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic, _files: &FileTable) {
        self.collected.borrow_mut().push(diagnostic.clone());
    }
}

/// Sink that writes one rendered line per diagnostic.
pub struct WriteEmitter<W: io::Write> {
    writer: W,
    colors: Colors,
    show_columns: bool,
}

impl<W: io::Write> WriteEmitter<W> {
    /// Color handling follows the `NO_COLOR` environment variable.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: Colors::new(),
            show_columns: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.colors = if color {
            Colors::with_color()
        } else {
            Colors::no_color()
        };
        self
    }

    pub fn with_columns(mut self, show_columns: bool) -> Self {
        self.show_columns = show_columns;
        self
    }
}

impl<W: io::Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, files: &FileTable) {
        let line = render_diagnostic(diagnostic, files, self.show_columns);
        let color = match diagnostic.severity {
            Severity::Error => self.colors.red,
            Severity::Warning => self.colors.yellow,
        };
        // A failing sink must not turn reporting into a failure.
        let _ = writeln!(self.writer, "{}{}{}", color, line, self.colors.reset);
    }
}
