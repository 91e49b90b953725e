//! Source location tracking for tokens and AST nodes.

use serde::Serialize;

/// Represents a span in the source code.
///
/// Offsets are byte offsets into the decoded UTF-8 source; `line` is the
/// 1-based line of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number of the start offset.
    pub line: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let (start, line) = if self.start <= other.start {
            (self.start, self.line)
        } else {
            (other.start, other.line)
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end, line }
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the source text covered by this span.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}

/// Maps byte offsets to line and column numbers.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Builds the index for the given source.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Returns the number of lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the 1-based `(line, column)` of a byte offset.
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to
    /// the end of the source.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        (line + 1, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(5, 10, 2);
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 10);
        assert_eq!(span.line, 2);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10, 1);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5, 1).is_empty());
    }

    #[test]
    fn test_span_merge_keeps_first_line() {
        let first = Span::new(5, 10, 1);
        let second = Span::new(12, 15, 3);
        let merged = second.merge(first);
        assert_eq!(merged, Span::new(5, 15, 1));
    }

    #[test]
    fn test_span_contains() {
        let outer = Span::new(0, 20, 1);
        assert!(outer.contains(&Span::new(0, 20, 1)));
        assert!(outer.contains(&Span::new(4, 8, 1)));
        assert!(!outer.contains(&Span::new(15, 21, 1)));
    }

    #[test]
    fn test_line_index() {
        let source = "SELECT 1\nGO\n  SELECT 'é', 2";
        let index = LineIndex::new(source);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(9), (2, 1));
        let comma = source.find(',').unwrap();
        // 'é' is two bytes but one column.
        assert_eq!(index.line_col(comma), (3, 13));
    }

    #[test]
    fn test_line_index_clamps() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(100), (1, 3));
    }
}
