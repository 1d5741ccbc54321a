//! Highlighted documents and their display lines.
//!
//! ## Learning: Borrowed Views
//!
//! A [`SourceDocument`] owns its text and spans. Each [`DisplayLine`] borrows
//! the line's text from it instead of copying, so iterating a million-line
//! file allocates only the per-line fragment lists.

use lexlight_syntax::{Detector, Language, LineIndex, Span, SpanIndex, TokenKind, detect, tokenize};
use std::ops::Range;

use crate::HighlightCache;

/// A text buffer with its language and classified spans.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    text: String,
    language: Language,
    lines: LineIndex,
    spans: SpanIndex,
    highlighted: bool,
}

impl SourceDocument {
    /// Highlights `text`, detecting the language unless `language` is given.
    pub fn new(text: impl Into<String>, language: Option<Language>) -> Self {
        Self::builder(text).language(language).build()
    }

    /// Starts a document with detection, size and cache options.
    pub fn builder<'a>(text: impl Into<String>) -> DocumentBuilder<'a> {
        DocumentBuilder {
            text: text.into(),
            language: None,
            detector: None,
            max_bytes: None,
            cache: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn spans(&self) -> &[Span] {
        self.spans.spans()
    }

    /// False when the text exceeded the size limit and is shown unstyled.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Returns line `index` (0-based).
    pub fn line(&self, index: usize) -> Option<DisplayLine<'_>> {
        let range = self.lines.line_range(index)?;
        Some(self.display_line(index, range))
    }

    /// Iterates display lines in order.
    pub fn lines(&self) -> impl Iterator<Item = DisplayLine<'_>> + '_ {
        self.lines
            .lines()
            .enumerate()
            .map(|(index, range)| self.display_line(index, range))
    }

    fn display_line(&self, index: usize, range: Range<usize>) -> DisplayLine<'_> {
        DisplayLine {
            number: index + 1,
            text: &self.text[range.clone()],
            fragments: self.spans.overlapping(range.clone()).collect(),
            range,
        }
    }
}

/// Options for building a [`SourceDocument`].
pub struct DocumentBuilder<'a> {
    text: String,
    language: Option<Language>,
    detector: Option<&'a Detector>,
    max_bytes: Option<usize>,
    cache: Option<&'a mut HighlightCache>,
}

impl<'a> DocumentBuilder<'a> {
    /// Forces a language; `None` keeps detection.
    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// Detects with `detector` instead of the builtin one.
    pub fn detector(mut self, detector: &'a Detector) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Leaves texts longer than `max_bytes` unstyled.
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Reuses spans from `cache` and stores new ones in it.
    pub fn cache(mut self, cache: &'a mut HighlightCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> SourceDocument {
        let text = self.text;
        let language = match (self.language, self.detector) {
            (Some(language), _) => language,
            (None, Some(detector)) => detector.detect(&text),
            (None, None) => detect(&text),
        };

        let too_large = self.max_bytes.is_some_and(|max| text.len() > max);
        let spans = if too_large {
            tracing::warn!(
                bytes = text.len(),
                max_bytes = self.max_bytes,
                "text too large, highlighting skipped"
            );
            Vec::new()
        } else {
            match self.cache {
                Some(cache) => cache.spans(&text, language),
                None => tokenize(&text, language),
            }
        };

        SourceDocument {
            lines: LineIndex::new(&text),
            spans: SpanIndex::new(spans),
            highlighted: !too_large,
            language,
            text,
        }
    }
}

/// One display line and the span fragments clipped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte range in the document, line terminator excluded
    pub range: Range<usize>,
    /// The line's text
    pub text: &'a str,
    /// Spans clipped to `range`, with global offsets
    pub fragments: Vec<Span>,
}

impl<'a> DisplayLine<'a> {
    /// Splits the line into consecutive `(kind, text)` pieces covering it
    /// fully, with `Plain` for gaps between fragments.
    pub fn segments(&self) -> Vec<(TokenKind, &'a str)> {
        let mut segments = Vec::with_capacity(self.fragments.len() * 2 + 1);
        let mut cursor = 0;
        for fragment in &self.fragments {
            let start = fragment.start - self.range.start;
            let end = fragment.end - self.range.start;
            if cursor < start {
                segments.push((TokenKind::Plain, &self.text[cursor..start]));
            }
            segments.push((fragment.kind, &self.text[start..end]));
            cursor = end;
        }
        if cursor < self.text.len() {
            segments.push((TokenKind::Plain, &self.text[cursor..]));
        }
        segments
    }
}
