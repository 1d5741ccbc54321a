//! Classified spans of source text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Semantic category of a span.
///
/// `Plain` is never produced by the tokenizer. It names the implicit kind of
/// every byte not covered by a span and doubles as the base style role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Class,
    Method,
    Variable,
    String,
    Number,
    Comment,
    Tag,
    Attribute,
    Operator,
    Punctuation,
    Plain,
}

impl TokenKind {
    /// Every kind, in style-table order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Plain,
        TokenKind::Keyword,
        TokenKind::Class,
        TokenKind::Method,
        TokenKind::Variable,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Tag,
        TokenKind::Attribute,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ];

    /// Returns the lowercase role name used by themes and span dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Class => "class",
            TokenKind::Method => "method",
            TokenKind::Variable => "variable",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, half-open byte range `[start, end)` of the source buffer.
///
/// Offsets are global (not per line) and always fall on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Kind of lexical construct
    pub kind: TokenKind,
}

impl Span {
    pub const fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Clips the span to `range`, keeping its kind.
    ///
    /// Returns `None` when nothing of the span lies inside `range`.
    pub fn intersect(&self, range: Range<usize>) -> Option<Span> {
        let start = self.start.max(range.start);
        let end = self.end.min(range.end);
        (start < end).then_some(Span::new(start, end, self.kind))
    }

    /// Returns the text this span covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_clips_both_edges() {
        let span = Span::new(2, 10, TokenKind::Comment);
        assert_eq!(span.intersect(0..5), Some(Span::new(2, 5, TokenKind::Comment)));
        assert_eq!(span.intersect(6..20), Some(Span::new(6, 10, TokenKind::Comment)));
        assert_eq!(span.intersect(3..4), Some(Span::new(3, 4, TokenKind::Comment)));
    }

    #[test]
    fn test_intersect_disjoint() {
        let span = Span::new(2, 10, TokenKind::String);
        assert_eq!(span.intersect(10..12), None);
        assert_eq!(span.intersect(0..2), None);
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_span_serializes_lowercase_kind() {
        let json = serde_json::to_string(&Span::new(0, 3, TokenKind::Keyword)).unwrap();
        assert_eq!(json, r#"{"start":0,"end":3,"kind":"keyword"}"#);
    }
}
