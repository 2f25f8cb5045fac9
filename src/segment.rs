//! Splitting a hand history export into one block of text per hand.
//!
//! Hands are separated by one or more blank lines. A line only counts as
//! blank when nothing is left once its `\n` or `\r\n` terminator has been
//! removed; a line holding only spaces is content.
use std::io::{self, BufRead};

use tracing::{debug, trace};

/// The non-blank lines of a single hand, in the order they were read.
///
/// Line terminators are stripped, anything else on the line is kept
/// as-is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawBlock {
    lines: Vec<String>,
}

impl RawBlock {
    /// Create a block from already split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a block from a chunk of text, one line per `\n`.
    /// Blank lines are dropped so the result matches what the reader
    /// would have produced for the same hand.
    pub fn from_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// The first line of the hand. Empty for an empty block.
    pub fn first_line(&self) -> &str {
        self.line(0).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Lazily reads hand blocks out of a buffered character stream.
///
/// A trailing hand that is not followed by a blank line is still
/// returned once the stream runs out.
#[derive(Debug)]
pub struct HandHistoryReader<R> {
    reader: R,
    buf: String,
    blocks_read: usize,
}

impl<R: BufRead> HandHistoryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            blocks_read: 0,
        }
    }

    /// How many non-empty blocks have been handed out so far.
    pub fn blocks_read(&self) -> usize {
        self.blocks_read
    }

    /// Read the next hand block.
    ///
    /// Returns `Ok(None)` once the stream holds no more content. Errors
    /// come straight from the underlying reader, including invalid UTF-8.
    pub fn next_block(&mut self) -> io::Result<Option<RawBlock>> {
        let mut lines = Vec::new();
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                break;
            }

            let line = strip_terminator(&self.buf);
            if line.is_empty() {
                if lines.is_empty() {
                    trace!("Skipping blank line before hand");
                    continue;
                }
                break;
            }
            lines.push(line.to_string());
        }

        if lines.is_empty() {
            return Ok(None);
        }

        self.blocks_read += 1;
        debug!(
            block = self.blocks_read,
            line_count = lines.len(),
            "Read hand block"
        );
        Ok(Some(RawBlock::new(lines)))
    }
}

impl<R: BufRead> Iterator for HandHistoryReader<R> {
    type Item = io::Result<RawBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn blocks(input: &str) -> Vec<Vec<String>> {
        HandHistoryReader::new(Cursor::new(input))
            .map(|block| block.unwrap().into_lines())
            .collect()
    }

    #[test]
    fn test_empty_stream() {
        let mut reader = HandHistoryReader::new(Cursor::new(""));
        assert!(reader.next_block().unwrap().is_none());
        assert_eq!(reader.blocks_read(), 0);
    }

    #[test]
    fn test_only_blank_lines() {
        let mut reader = HandHistoryReader::new(Cursor::new("\n\r\n\n"));
        assert!(reader.next_block().unwrap().is_none());
        assert_eq!(reader.blocks_read(), 0);
    }

    #[test]
    fn test_splits_on_blank_lines() {
        let result = blocks("a\nb\n\nc\nd\n\n");
        assert_eq!(result, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let result = blocks("\n\n\na\nb\n\n");
        assert_eq!(result, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_runs_of_separators_end_one_block() {
        let result = blocks("a\n\n\n\n\nb\n\n\n");
        assert_eq!(result, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_crlf_blank_lines_are_separators() {
        let result = blocks("a\r\nb\r\n\r\nc\r\n\r\n");
        assert_eq!(result, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_final_block_without_separator_is_kept() {
        let mut reader = HandHistoryReader::new(Cursor::new("a\n\nb\nc"));
        assert_eq!(reader.next_block().unwrap().unwrap().lines(), ["a"]);
        assert_eq!(reader.next_block().unwrap().unwrap().lines(), ["b", "c"]);
        assert!(reader.next_block().unwrap().is_none());
        assert_eq!(reader.blocks_read(), 2);
    }

    #[test]
    fn test_whitespace_line_is_content() {
        let result = blocks("a\n  \nb\n\n");
        assert_eq!(result, vec![vec!["a", "  ", "b"]]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let input: &[u8] = b"a\n\xff\xfe\n\n";
        let mut reader = HandHistoryReader::new(input);
        let err = reader.next_block().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_text_drops_blank_lines() {
        let block = RawBlock::from_text("first\n\nsecond\r\nthird\n");
        assert_eq!(block.lines(), ["first", "second", "third"]);
        assert_eq!(block.first_line(), "first");
        assert_eq!(block.line(3), None);
        assert_eq!(block.len(), 3);
    }

    #[test]
    fn test_empty_block_first_line() {
        let block = RawBlock::new(vec![]);
        assert!(block.is_empty());
        assert_eq!(block.first_line(), "");
    }
}
