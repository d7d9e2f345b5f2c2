//! # Line Reader
//!
//! Line cursor for the OFF parser. Tracks the 1-based line number of every
//! line it hands out so errors can point at the exact source line.
//!
//! ## Example
//!
//! ```rust
//! use off_parser::reader::LineReader;
//!
//! let mut reader = LineReader::new("OFF\n3 1 0\n");
//! let header = reader.next_line().unwrap();
//! assert_eq!(header.number, 1);
//! assert_eq!(reader.next_line().unwrap().tokens().count(), 3);
//! assert!(reader.next_line().is_none());
//! assert_eq!(reader.line_number(), 3);
//! ```

use std::str::{Lines, SplitWhitespace};

/// A single source line together with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line text without the terminator.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Whitespace-separated tokens; runs of whitespace never yield empty tokens.
    pub fn tokens(&self) -> SplitWhitespace<'a> {
        self.text.split_whitespace()
    }
}

/// Line cursor over OFF source text.
///
/// Accepts both `\n` and `\r\n` terminators. A leading UTF-8 byte order
/// mark is skipped.
pub struct LineReader<'a> {
    /// Remaining lines.
    lines: Lines<'a>,
    /// Number of the next line to be returned.
    next: usize,
}

impl<'a> LineReader<'a> {
    /// Create a new reader positioned at line 1.
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            lines: source.lines(),
            next: 1,
        }
    }

    /// Number the next call to [`next_line`](Self::next_line) will carry.
    ///
    /// After the input is exhausted this is the number a missing line would
    /// have had, which is what errors about truncated files report.
    pub fn line_number(&self) -> usize {
        self.next
    }

    /// Advance to the next line.
    ///
    /// ## Returns
    ///
    /// The line, or None at end of input.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let text = self.lines.next()?;
        let line = Line {
            number: self.next,
            text,
        };
        self.next += 1;
        Some(line)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_lines_from_one() {
        let mut reader = LineReader::new("a\nb\r\nc");
        let numbers: Vec<usize> = std::iter::from_fn(|| reader.next_line())
            .map(|line| line.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut reader = LineReader::new("OFF\r\n");
        assert_eq!(reader.next_line().unwrap().text, "OFF");
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let mut reader = LineReader::new("\u{feff}OFF\n");
        assert_eq!(reader.next_line().unwrap().text, "OFF");
    }

    #[test]
    fn test_tokens_skip_repeated_whitespace() {
        let mut reader = LineReader::new("  1   2\t3  ");
        let tokens: Vec<&str> = reader.next_line().unwrap().tokens().collect();
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_line_number_after_exhaustion() {
        let mut reader = LineReader::new("only");
        assert!(reader.next_line().is_some());
        assert!(reader.next_line().is_none());
        assert_eq!(reader.line_number(), 2);
    }
}
