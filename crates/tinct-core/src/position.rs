//! Offset to line/column translation.
//!
//! Parsers report absolute byte offsets into the document. Highlight spans
//! are placed by zero-based line and column, so every emitted span passes
//! through a [`LineTable`] built once per classification call.

use serde::{Deserialize, Serialize};

/// A zero-based line and column position within a document.
///
/// Columns count bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed byte column within the line.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Per-document table of line widths.
///
/// Each entry is the byte width of one line including its terminator. The
/// final line has no terminator but still counts one extra byte, so an
/// offset at end-of-file always lands inside the table.
///
/// # Example
///
/// ```
/// use tinct_core::{LineTable, Position};
///
/// let table = LineTable::build("object A\n  val x = 1\n");
/// assert_eq!(table.locate(13), Position::new(1, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    widths: Vec<u32>,
    starts: Vec<u32>,
}

impl LineTable {
    /// Splits `text` on `\r\n`, `\r`, and `\n` and records each line's width.
    #[must_use]
    pub fn build(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut widths = Vec::new();
        let mut line_start = 0_usize;
        let mut cursor = 0_usize;

        while let Some(&byte) = bytes.get(cursor) {
            let terminator = match byte {
                b'\r' if bytes.get(cursor + 1) == Some(&b'\n') => 2,
                b'\n' | b'\r' => 1,
                _ => {
                    cursor += 1;
                    continue;
                }
            };
            cursor += terminator;
            widths.push(clamp_u32(cursor - line_start));
            line_start = cursor;
        }
        widths.push(clamp_u32(bytes.len() - line_start).saturating_add(1));

        let mut starts = Vec::with_capacity(widths.len());
        let mut running = 0_u32;
        for width in &widths {
            starts.push(running);
            running = running.saturating_add(*width);
        }

        Self { widths, starts }
    }

    /// Translates an absolute byte offset into a line/column position.
    ///
    /// Offsets past the last line resolve against the last line. The parser
    /// is trusted to stay within the text, so this only asserts in debug
    /// builds.
    #[must_use]
    pub fn locate(&self, offset: u32) -> Position {
        debug_assert!(
            offset <= self.total_width(),
            "offset {offset} lies outside the document ({} bytes)",
            self.total_width()
        );
        let line = self
            .starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let start = self.starts.get(line).copied().unwrap_or_default();
        Position::new(clamp_u32(line), offset.saturating_sub(start))
    }

    /// Reconstructs the absolute offset of a position.
    ///
    /// This is the inverse of [`LineTable::locate`] for in-range offsets.
    #[must_use]
    pub fn offset_of(&self, position: Position) -> Option<u32> {
        self.line_start(position.line)
            .map(|start| start.saturating_add(position.column))
    }

    /// Returns the absolute offset of the first byte of `line`.
    #[must_use]
    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.starts.get(usize::try_from(line).ok()?).copied()
    }

    /// Returns the content of `line` in `text`, without its terminator.
    ///
    /// `text` must be the document the table was built from.
    #[must_use]
    pub fn line_text<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let start = usize::try_from(self.line_start(line)?).ok()?;
        let rest = text.get(start..)?;
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        rest.get(..end)
    }

    /// Returns the number of lines in the table.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.widths.len()
    }

    /// Returns the recorded width of every line.
    #[must_use]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    fn total_width(&self) -> u32 {
        self.widths
            .iter()
            .fold(0_u32, |sum, width| sum.saturating_add(*width))
    }
}

pub(crate) fn clamp_u32(value: usize) -> u32 {
    // Documents larger than 4 GiB are not highlighted meaningfully anyway.
    u32::try_from(value).unwrap_or(u32::MAX)
}
