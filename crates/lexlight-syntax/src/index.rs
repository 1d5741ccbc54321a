//! Offset lookup over lines and spans.
//!
//! The tokenizer works on global byte offsets. Display code works per line,
//! so it needs two questions answered quickly: where does line `n` live, and
//! which spans touch a given range. Both are answered by binary search over
//! data built once per tokenize call.

use std::ops::Range;

use crate::Span;

/// Start offsets of every line in a text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first char of each line; always starts with 0
    starts: Vec<usize>,
    /// Total length of the text
    len: usize,
    /// Byte length of each line's terminator (`\n` or `\r\n`, 0 for the last)
    terminators: Vec<u8>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut starts = vec![0];
        let mut terminators = Vec::new();
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                let crlf = i > 0 && bytes[i - 1] == b'\r';
                terminators.push(if crlf { 2 } else { 1 });
                starts.push(i + 1);
            }
        }
        terminators.push(0);
        Self {
            starts,
            len: text.len(),
            terminators,
        }
    }

    /// Number of lines. An empty text has one empty line, and a trailing
    /// newline opens a final empty line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte range of line `line` (0-based) without its line terminator.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        let start = *self.starts.get(line)?;
        let next = self.starts.get(line + 1).copied().unwrap_or(self.len);
        let end = next - usize::from(self.terminators[line]);
        Some(start..end.max(start))
    }

    /// The 0-based line containing `offset`; offsets past the end map to the
    /// last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    pub fn lines(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.line_count()).filter_map(|line| self.line_range(line))
    }
}

/// Random-access lookup of spans intersecting an offset range.
///
/// Relies on the tokenizer's output being sorted and non-overlapping, which
/// makes the span ends sorted as well.
#[derive(Debug, Clone, Default)]
pub struct SpanIndex {
    spans: Vec<Span>,
}

impl SpanIndex {
    pub fn new(spans: Vec<Span>) -> Self {
        debug_assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
        Self { spans }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans intersecting `range`, clipped to it.
    pub fn overlapping(&self, range: Range<usize>) -> impl Iterator<Item = Span> + '_ {
        let first = self.spans.partition_point(|span| span.end <= range.start);
        self.spans[first..]
            .iter()
            .take_while(move |span| span.start < range.end)
            .filter_map(move |span| span.intersect(range.clone()))
    }
}

/// Splits spans into per-line fragments.
///
/// Entry `n` holds the fragments of line `n`, each clipped to the line's
/// range (terminator excluded) and keeping its kind. A block comment that
/// spans three lines turns into three fragments.
pub fn clip_to_lines(text: &str, spans: &[Span]) -> Vec<Vec<Span>> {
    let lines = LineIndex::new(text);
    let index = SpanIndex::new(spans.to_vec());
    lines
        .lines()
        .map(|range| index.overlapping(range).collect())
        .collect()
}
