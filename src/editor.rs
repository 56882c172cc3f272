//! Editor capability interface and a file-backed implementation
//!
//! Lookups only need a handful of things from an editor: the text of the
//! line under the cursor, a range of surrounding lines, and the name of the
//! active file. [`FileBuffer`] provides these for a build file on disk.

use crate::error::LookupError;
use std::path::{Path, PathBuf};

/// Read-only view of the active document and cursor
pub trait EditorContext {
    /// Trimmed text of the cursor line, if there is one
    fn current_selection_text(&self) -> Option<String>;

    /// Trimmed lines `start..=end`, clamped to the document
    fn line_range(&self, start: usize, end: usize) -> Vec<String>;

    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// 0-based cursor line
    fn cursor_line(&self) -> usize;

    /// File name of the active document
    fn active_file_name(&self) -> Option<String>;
}

/// A document loaded into memory with a cursor position
#[derive(Debug, Clone)]
pub struct FileBuffer {
    path: PathBuf,
    lines: Vec<String>,
    cursor: usize,
}

impl FileBuffer {
    /// Read a file and place the cursor on a 1-based line
    pub fn open(path: impl Into<PathBuf>, line: usize) -> Result<Self, LookupError> {
        let path = path.into();
        let content =
            std::fs::read_to_string(&path).map_err(|e| LookupError::read_error(&path, e))?;
        Self::from_text(path, &content, line)
    }

    /// Build a buffer from text and place the cursor on a 1-based line
    pub fn from_text(
        path: impl Into<PathBuf>,
        content: &str,
        line: usize,
    ) -> Result<Self, LookupError> {
        let path = path.into();
        let lines: Vec<String> = content.lines().map(String::from).collect();

        if line == 0 || line > lines.len() {
            return Err(LookupError::LineOutOfRange {
                path,
                line,
                total: lines.len(),
            });
        }

        Ok(Self {
            path,
            lines,
            cursor: line - 1,
        })
    }

    /// Returns the document path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditorContext for FileBuffer {
    fn current_selection_text(&self) -> Option<String> {
        self.lines.get(self.cursor).map(|l| l.trim().to_string())
    }

    fn line_range(&self, start: usize, end: usize) -> Vec<String> {
        if self.lines.is_empty() || start >= self.lines.len() || start > end {
            return Vec::new();
        }
        let end = end.min(self.lines.len() - 1);
        self.lines[start..=end]
            .iter()
            .map(|l| l.trim().to_string())
            .collect()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn active_file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
    }
}
