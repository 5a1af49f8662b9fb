use crate::diagnostics::files::{FileId, FileTable};

/// A point in a source file, attached to every reported diagnostic.
///
/// Lines and columns are 1-based; 0 means "absent". The default value has
/// no file and line/column 0, representing an unknown location. Locations
/// are immutable values compared structurally; many call sites sharing the
/// same value implies nothing beyond textual coincidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    file: Option<FileId>,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// The unknown location: no file, no line, no column.
    pub const UNKNOWN: SourceLocation = SourceLocation {
        file: None,
        line: 0,
        column: 0,
    };

    pub fn new(file: FileId, line: u32, column: u32) -> Self {
        Self {
            file: Some(file),
            line,
            column,
        }
    }

    /// A location known only down to a line.
    pub fn at_line(file: FileId, line: u32) -> Self {
        Self::new(file, line, 0)
    }

    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// True when any component of the location is known.
    pub fn is_known(&self) -> bool {
        self.file.is_some() || self.line != 0
    }

    /// Human-readable rendering: `file(line,column)`.
    ///
    /// Absent parts are omitted, degrading through `file(line)` and bare
    /// `file` down to the empty string for the unknown location. Column
    /// display is additionally gated by `show_columns`, the
    /// configuration's column toggle.
    pub fn render(&self, files: &FileTable, show_columns: bool) -> String {
        let mut out = String::new();
        if let Some(file) = self.file {
            out.push_str(files.resolve(file));
        }
        if self.line != 0 {
            if show_columns && self.column != 0 {
                out.push_str(&format!("({},{})", self.line, self.column));
            } else {
                out.push_str(&format!("({})", self.line));
            }
        }
        out
    }
}
