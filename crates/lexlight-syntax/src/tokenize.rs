//! Single-pass lexical classifier.
//!
//! The scanner walks the buffer once, left to right, as a small state
//! machine. `Normal` recognises the opener of every construct; each other
//! state consumes its construct up to the closing delimiter or the end of the
//! scanned range and hands control back. Unterminated comments and strings
//! therefore run to the end of the text instead of being dropped.
//!
//! Offsets are global byte offsets and every span boundary lands on a `char`
//! boundary: all delimiters are ASCII and non-ASCII text is stepped over one
//! whole `char` at a time.

use std::ops::Range;

use crate::profile::{Escape, LexicalProfile, Mode, profile};
use crate::{Language, Span, TokenKind};

/// Classifies `text` with the profile of `language`.
///
/// The result is sorted by `start`, non-overlapping and within bounds.
/// Uncovered offsets are plain text.
pub fn tokenize(text: &str, language: Language) -> Vec<Span> {
    tokenize_with(text, profile(language))
}

/// Classifies `text` with the profile named by `tag`.
///
/// Unknown tags use the generic profile (strings, numbers, comments).
pub fn tokenize_tag(text: &str, tag: &str) -> Vec<Span> {
    tokenize(text, Language::from_tag(tag))
}

/// Classifies `text` with an explicit profile.
pub fn tokenize_with(text: &str, profile: &LexicalProfile) -> Vec<Span> {
    let spans = Scanner::new(text, profile, 0..text.len()).run();
    debug_assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
    tracing::debug!(
        language = %profile.language,
        bytes = text.len(),
        spans = spans.len(),
        "tokenized"
    );
    spans
}

/// String delimiter flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
    /// Backtick template / raw string.
    Backtick,
    /// `"""` or `'''`, carrying the quote byte.
    Triple(u8),
    /// `r#"..."#` with the number of hashes.
    Raw { hashes: usize },
    /// `<![CDATA[ ... ]]>`.
    Cdata,
}

impl Quote {
    fn open_len(self) -> usize {
        match self {
            Quote::Single | Quote::Double | Quote::Backtick | Quote::Raw { .. } => 1,
            Quote::Triple(_) => 3,
            Quote::Cdata => "<![CDATA[".len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    LineComment,
    BlockComment,
    /// A string starting at the scanner position; `prefix` bytes (`f`, `r#`)
    /// precede the opening quote.
    String { quote: Quote, prefix: usize },
    /// Inside `<name ...` before the closing `>`.
    Tag { embedded: Option<Language> },
    /// An attribute name and its optional `= value`.
    Attribute { embedded: Option<Language> },
}

/// What the next identifier is expected to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Class,
    Function,
}

struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    profile: &'a LexicalProfile,
    pos: usize,
    end: usize,
    spans: Vec<Span>,
    pending: Pending,
    brace_depth: usize,
    paren_depth: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, profile: &'a LexicalProfile, range: Range<usize>) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            profile,
            pos: range.start,
            end: range.end,
            spans: Vec::new(),
            pending: Pending::None,
            brace_depth: 0,
            paren_depth: 0,
        }
    }

    fn run(mut self) -> Vec<Span> {
        let mut state = State::Normal;
        while self.pos < self.end {
            state = match state {
                State::Normal => match self.profile.mode {
                    Mode::Code => self.code(),
                    Mode::Markup => self.markup(),
                    Mode::StyleSheet => self.stylesheet(),
                },
                State::LineComment => self.line_comment(),
                State::BlockComment => self.block_comment(),
                State::String { quote, prefix } => self.string(quote, prefix),
                State::Tag { embedded } => self.tag(embedded),
                State::Attribute { embedded } => self.attribute(embedded),
            };
        }
        self.spans
    }

    // ------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------

    fn byte_at(&self, i: usize) -> Option<u8> {
        (i < self.end).then(|| self.bytes[i])
    }

    fn char_at(&self, i: usize) -> Option<char> {
        if i < self.end {
            self.text[i..].chars().next()
        } else {
            None
        }
    }

    fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    fn next_boundary(&self, i: usize) -> usize {
        i + self.char_at(i).map_or(1, char::len_utf8)
    }

    fn starts_with_at(&self, i: usize, s: &str) -> bool {
        i + s.len() <= self.end && &self.bytes[i..i + s.len()] == s.as_bytes()
    }

    fn prev_char(&self) -> Option<char> {
        self.text[..self.pos].chars().next_back()
    }

    /// Advances past identifier characters starting at `i`.
    fn identifier_end(&self, mut i: usize) -> usize {
        while let Some(c) = self.char_at(i) {
            if !self.profile.is_identifier_char(c) {
                break;
            }
            i += c.len_utf8();
        }
        i
    }

    /// `:` (but not `::`) after optional blanks.
    fn followed_by_colon(&self, mut i: usize) -> bool {
        while matches!(self.byte_at(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        self.byte_at(i) == Some(b':') && self.byte_at(i + 1) != Some(b':')
    }

    fn skip(&mut self) -> State {
        self.pos = self.next_boundary(self.pos);
        State::Normal
    }

    fn push(&mut self, start: usize, end: usize, kind: TokenKind) {
        if start < end {
            debug_assert!(self.spans.last().is_none_or(|last| last.end <= start));
            self.spans.push(Span::new(start, end, kind));
        }
    }

    /// Pushes a token span and clears any pending declaration context.
    fn emit(&mut self, start: usize, end: usize, kind: TokenKind) {
        self.push(start, end, kind);
        self.pending = Pending::None;
    }

    // ------------------------------------------------------------------
    // Normal state: code profiles
    // ------------------------------------------------------------------

    fn code(&mut self) -> State {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return State::Normal;
        };
        let p = self.profile;

        if c.is_whitespace() {
            return self.skip();
        }
        if let Some(state) = self.comment_start(start) {
            return state;
        }
        if p.php_tags {
            if let Some(delim) = ["<?php", "<?=", "<?", "?>"]
                .into_iter()
                .find(|d| self.starts_with_at(start, d))
            {
                self.pos = start + delim.len();
                self.emit(start, self.pos, TokenKind::Tag);
                return State::Normal;
            }
        }
        if p.bracket_attributes && (self.starts_with_at(start, "#[") || self.starts_with_at(start, "#![")) {
            self.bracket_attribute();
            return State::Normal;
        }
        if p.lifetimes && c == '\'' && self.lifetime() {
            return State::Normal;
        }
        if let Some(state) = self.string_start() {
            return state;
        }
        if p.annotations && c == '@' && self.char_at(start + 1).is_some_and(|n| p.is_identifier_start(n)) {
            let mut i = start + 1;
            while let Some(n) = self.char_at(i) {
                if !(p.is_identifier_char(n) || n == '.') {
                    break;
                }
                i += n.len_utf8();
            }
            self.pos = i;
            self.emit(start, i, TokenKind::Attribute);
            return State::Normal;
        }
        if p.variable_sigil == Some(c) {
            self.variable();
            return State::Normal;
        }
        let leading_dot = c == '.'
            && self.prev_char() != Some('.')
            && self.byte_at(start + 1).is_some_and(|b| b.is_ascii_digit());
        if c.is_ascii_digit() || leading_dot {
            self.number();
            return State::Normal;
        }
        if p.is_identifier_start(c) {
            self.identifier();
            return State::Normal;
        }
        if p.is_operator(c) {
            self.operator();
            return State::Normal;
        }
        if p.is_punctuation(c) {
            self.pos = start + c.len_utf8();
            self.emit(start, self.pos, TokenKind::Punctuation);
            return State::Normal;
        }
        self.skip()
    }

    fn comment_opens_at(&self, i: usize) -> bool {
        let p = self.profile;
        p.block_comment.is_some_and(|(open, _)| self.starts_with_at(i, open))
            || p.line_comments.iter().any(|d| self.starts_with_at(i, d))
    }

    fn comment_start(&self, i: usize) -> Option<State> {
        let p = self.profile;
        if p.block_comment.is_some_and(|(open, _)| self.starts_with_at(i, open)) {
            return Some(State::BlockComment);
        }
        p.line_comments
            .iter()
            .any(|d| self.starts_with_at(i, d))
            .then_some(State::LineComment)
    }

    fn quote_at(&self, i: usize) -> Option<Quote> {
        let p = self.profile;
        let b = self.byte_at(i)?;
        if p.triple_quote_strings
            && (b == b'"' || b == b'\'')
            && self.byte_at(i + 1) == Some(b)
            && self.byte_at(i + 2) == Some(b)
        {
            return Some(Quote::Triple(b));
        }
        match b {
            b'"' if p.double_quote_strings => Some(Quote::Double),
            b'\'' if p.single_quote_strings => Some(Quote::Single),
            b'`' if p.template_strings => Some(Quote::Backtick),
            _ => None,
        }
    }

    fn string_start(&self) -> Option<State> {
        let p = self.profile;
        let start = self.pos;

        if p.raw_strings {
            for prefix in ["r", "br"] {
                if !self.starts_with_at(start, prefix) {
                    continue;
                }
                let mut i = start + prefix.len();
                while self.byte_at(i) == Some(b'#') {
                    i += 1;
                }
                if self.byte_at(i) == Some(b'"') {
                    let hashes = i - start - prefix.len();
                    return Some(State::String {
                        quote: Quote::Raw { hashes },
                        prefix: prefix.len() + hashes,
                    });
                }
            }
        }

        for prefix in p.string_prefixes {
            if self.starts_with_at(start, prefix) {
                if let Some(quote) = self.quote_at(start + prefix.len()) {
                    return Some(State::String {
                        quote,
                        prefix: prefix.len(),
                    });
                }
            }
        }

        let quote = self.quote_at(start)?;
        // An apostrophe inside a word (`don't`) does not open a string.
        if quote == Quote::Single
            && self.prev_char().is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            return None;
        }
        Some(State::String { quote, prefix: 0 })
    }

    /// Matches the closing delimiter of `quote` at `i`, returning its length.
    fn closes_at(&self, quote: Quote, i: usize) -> Option<usize> {
        let b = self.byte_at(i)?;
        let matched = match quote {
            Quote::Single => b == b'\'',
            Quote::Double => b == b'"',
            Quote::Backtick => b == b'`',
            Quote::Triple(q) => b == q && self.byte_at(i + 1) == Some(q) && self.byte_at(i + 2) == Some(q),
            Quote::Raw { hashes } => b == b'"' && (1..=hashes).all(|k| self.byte_at(i + k) == Some(b'#')),
            Quote::Cdata => self.starts_with_at(i, "]]>"),
        };
        matched.then(|| match quote {
            Quote::Triple(_) | Quote::Cdata => 3,
            Quote::Raw { hashes } => 1 + hashes,
            _ => 1,
        })
    }

    fn lifetime(&mut self) -> bool {
        let start = self.pos;
        if !self.char_at(start + 1).is_some_and(|c| self.profile.is_identifier_start(c)) {
            return false;
        }
        let end = self.identifier_end(start + 1);
        // `'a'` is a char literal.
        if self.byte_at(end) == Some(b'\'') {
            return false;
        }
        self.pos = end;
        self.emit(start, end, TokenKind::Keyword);
        true
    }

    fn bracket_attribute(&mut self) {
        let start = self.pos;
        let mut i = start;
        let mut depth = 0usize;
        while let Some(b) = self.byte_at(i) {
            i = self.next_boundary(i);
            match b {
                b'[' => depth += 1,
                b']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        self.pos = i;
        self.emit(start, i, TokenKind::Attribute);
    }

    fn variable(&mut self) {
        let start = self.pos;
        let mut i = start + 1;
        match self.byte_at(i) {
            Some(b'{') => {
                while let Some(b) = self.byte_at(i) {
                    if b == b'\n' {
                        break;
                    }
                    i = self.next_boundary(i);
                    if b == b'}' {
                        break;
                    }
                }
            }
            Some(b'#' | b'?' | b'@' | b'*' | b'!' | b'$' | b'-' | b'0'..=b'9') => i += 1,
            _ => {
                while let Some(c) = self.char_at(i) {
                    if !(c.is_alphanumeric() || c == '_') {
                        break;
                    }
                    i += c.len_utf8();
                }
            }
        }
        self.pos = i;
        let kind = if i == start + 1 {
            TokenKind::Operator
        } else {
            TokenKind::Variable
        };
        self.emit(start, i, kind);
    }

    /// Advances past digits accepted by `accept` and `_` separators.
    fn digits(&self, mut i: usize, accept: impl Fn(u8) -> bool) -> usize {
        while self.byte_at(i).is_some_and(|b| accept(b) || b == b'_') {
            i += 1;
        }
        i
    }

    fn number(&mut self) {
        let start = self.pos;
        let decimal = |b: u8| b.is_ascii_digit();

        let mut i = match (self.byte_at(start), self.byte_at(start + 1)) {
            (Some(b'0'), Some(b'x' | b'X')) => self.digits(start + 2, |b| b.is_ascii_hexdigit()),
            (Some(b'0'), Some(b'b' | b'B')) => self.digits(start + 2, |b| b == b'0' || b == b'1'),
            (Some(b'0'), Some(b'o' | b'O')) => self.digits(start + 2, |b| (b'0'..=b'7').contains(&b)),
            _ => {
                let mut i = self.digits(start, decimal);
                if self.byte_at(i) == Some(b'.') && self.byte_at(i + 1).is_some_and(decimal) {
                    i = self.digits(i + 1, decimal);
                }
                if matches!(self.byte_at(i), Some(b'e' | b'E')) {
                    let mut j = i + 1;
                    if matches!(self.byte_at(j), Some(b'+' | b'-')) {
                        j += 1;
                    }
                    if self.byte_at(j).is_some_and(decimal) {
                        i = self.digits(j, decimal);
                    }
                }
                i
            }
        };

        // Type and unit suffixes: 10u8, 1.5f, 10px, 5n
        while self.byte_at(i).is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            i += 1;
        }
        if self.profile.mode == Mode::StyleSheet && self.byte_at(i) == Some(b'%') {
            i += 1;
        }

        self.pos = i;
        self.emit(start, i, TokenKind::Number);
    }

    fn identifier(&mut self) {
        let start = self.pos;
        let end = self.identifier_end(self.next_boundary(start));
        self.pos = end;
        let p = self.profile;
        if !p.classify_identifiers {
            return;
        }

        if p.macros && self.byte_at(end) == Some(b'!') && self.byte_at(end + 1) != Some(b'=') {
            self.pos = end + 1;
            self.emit(start, end + 1, TokenKind::Method);
            return;
        }

        let text = self.text;
        let word = &text[start..end];
        let kind = self.classify(word, end);
        self.emit(start, end, kind);
        if kind == TokenKind::Keyword {
            if p.introduces_class(word) {
                self.pending = Pending::Class;
            } else if p.introduces_function(word) {
                self.pending = Pending::Function;
            }
        }
    }

    fn classify(&self, word: &str, end: usize) -> TokenKind {
        let p = self.profile;
        if p.key_values && self.followed_by_colon(end) {
            return TokenKind::Attribute;
        }
        if p.is_keyword(word) {
            return TokenKind::Keyword;
        }
        match self.pending {
            Pending::Class => return TokenKind::Class,
            Pending::Function => return TokenKind::Method,
            Pending::None => {}
        }
        if p.is_type(word) {
            TokenKind::Class
        } else if self.byte_at(end) == Some(b'(') {
            TokenKind::Method
        } else {
            TokenKind::Variable
        }
    }

    /// Longest run of operator characters, stopping before a comment opener.
    fn operator(&mut self) {
        let start = self.pos;
        let mut i = start;
        while let Some(c) = self.char_at(i) {
            if !self.profile.is_operator(c) || (i > start && self.comment_opens_at(i)) {
                break;
            }
            if i > start && self.profile.php_tags && self.starts_with_at(i, "?>") {
                break;
            }
            i += c.len_utf8();
        }
        self.pos = i;
        self.emit(start, i, TokenKind::Operator);
    }

    // ------------------------------------------------------------------
    // Comment and string states
    // ------------------------------------------------------------------

    fn line_comment(&mut self) -> State {
        let start = self.pos;
        let end = self.bytes[start..self.end]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.end, |off| start + off);
        self.pos = end;
        self.push(start, end, TokenKind::Comment);
        State::Normal
    }

    fn block_comment(&mut self) -> State {
        let start = self.pos;
        let Some((open, close)) = self.profile.block_comment else {
            return self.skip();
        };
        let mut i = start + open.len();
        let mut depth = 1usize;
        while i < self.end {
            if self.profile.nested_comments && self.starts_with_at(i, open) {
                depth += 1;
                i += open.len();
            } else if self.starts_with_at(i, close) {
                i += close.len();
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else {
                i = self.next_boundary(i);
            }
        }
        let end = i.min(self.end);
        self.pos = end;
        self.push(start, end, TokenKind::Comment);
        State::Normal
    }

    fn string(&mut self, quote: Quote, prefix: usize) -> State {
        let start = self.pos;
        let escape = match quote {
            Quote::Raw { .. } | Quote::Cdata => None,
            Quote::Backtick if !self.profile.template_escapes => None,
            Quote::Single if !self.profile.single_quote_escapes => None,
            _ => Some(self.profile.escape),
        };

        let mut i = (start + prefix + quote.open_len()).min(self.end);
        let end = loop {
            if i >= self.end {
                break self.end;
            }
            if let Some(len) = self.closes_at(quote, i) {
                let doubled = escape == Some(Escape::DoubledQuote)
                    && matches!(quote, Quote::Single | Quote::Double)
                    && self.closes_at(quote, i + len).is_some();
                if doubled {
                    i += 2 * len;
                    continue;
                }
                break i + len;
            }
            if escape == Some(Escape::Backslash) && self.bytes[i] == b'\\' {
                i += 1;
                if i < self.end {
                    i = self.next_boundary(i);
                }
                continue;
            }
            i = self.next_boundary(i);
        };

        self.pos = end;
        let is_key = self.profile.key_values
            && matches!(quote, Quote::Single | Quote::Double)
            && self.followed_by_colon(end);
        let kind = if is_key {
            TokenKind::Attribute
        } else {
            TokenKind::String
        };
        self.emit(start, end, kind);
        State::Normal
    }

    // ------------------------------------------------------------------
    // Markup states
    // ------------------------------------------------------------------

    fn markup(&mut self) -> State {
        let start = self.pos;
        match self.bytes[start] {
            b'<' => {
                if self.starts_with_at(start, "<!--") {
                    return State::BlockComment;
                }
                if self.starts_with_at(start, "<![CDATA[") {
                    return State::String {
                        quote: Quote::Cdata,
                        prefix: 0,
                    };
                }
                if self.byte_at(start + 1) == Some(b'!')
                    && self.byte_at(start + 2).is_some_and(|b| b.is_ascii_alphabetic())
                {
                    // `<!DOCTYPE html>` and other declarations.
                    let end = self.bytes[start..self.end]
                        .iter()
                        .position(|&b| b == b'>')
                        .map_or(self.end, |off| start + off + 1);
                    self.pos = end;
                    self.emit(start, end, TokenKind::Tag);
                    return State::Normal;
                }
                let closing = self.byte_at(start + 1) == Some(b'/');
                let mut name_start = start + 1;
                if matches!(self.byte_at(name_start), Some(b'/' | b'!' | b'?')) {
                    name_start += 1;
                }
                let named = self.char_at(name_start).is_some_and(|c| self.profile.is_identifier_start(c));
                let name_end = self.identifier_end(name_start);
                if !named {
                    // A bare `<` in text content.
                    return self.skip();
                }
                let name = &self.text[name_start..name_end];
                let embedded = if closing || self.profile.language != Language::Html {
                    None
                } else if name.eq_ignore_ascii_case("script") {
                    Some(Language::JavaScript)
                } else if name.eq_ignore_ascii_case("style") {
                    Some(Language::Css)
                } else {
                    None
                };
                self.pos = name_end;
                self.emit(start, name_end, TokenKind::Tag);
                State::Tag { embedded }
            }
            b'&' => {
                let mut i = start + 1;
                if self.byte_at(i) == Some(b'#') {
                    i += 1;
                }
                while self.byte_at(i).is_some_and(|b| b.is_ascii_alphanumeric()) {
                    i += 1;
                }
                if i > start + 1 && self.byte_at(i) == Some(b';') {
                    self.pos = i + 1;
                    self.emit(start, i + 1, TokenKind::Number);
                    State::Normal
                } else {
                    self.skip()
                }
            }
            _ => {
                // Text content up to the next tag or entity.
                let run = self.bytes[start..self.end]
                    .iter()
                    .position(|&b| b == b'<' || b == b'&')
                    .unwrap_or(self.end - start);
                self.pos = start + run;
                State::Normal
            }
        }
    }

    fn is_attribute_name_char(c: char) -> bool {
        !c.is_whitespace() && !matches!(c, '>' | '/' | '=' | '"' | '\'' | '<' | '?')
    }

    fn tag(&mut self, embedded: Option<Language>) -> State {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return State::Normal;
        };
        if c.is_whitespace() {
            self.pos = self.next_boundary(start);
            return State::Tag { embedded };
        }
        if let Some(closer) = ["/>", "?>", ">"].into_iter().find(|d| self.starts_with_at(start, d)) {
            self.pos = start + closer.len();
            self.emit(start, self.pos, TokenKind::Tag);
            if closer == ">" {
                if let Some(language) = embedded {
                    self.embedded(language);
                }
            }
            return State::Normal;
        }
        if c == '"' || c == '\'' {
            let end = self.attribute_value_quoted(start);
            self.pos = end;
            self.emit(start, end, TokenKind::String);
            return State::Tag { embedded };
        }
        if c == '<' {
            // Unclosed tag; let the normal state reopen.
            return State::Normal;
        }
        if Self::is_attribute_name_char(c) {
            return State::Attribute { embedded };
        }
        self.pos = self.next_boundary(start);
        State::Tag { embedded }
    }

    fn attribute(&mut self, embedded: Option<Language>) -> State {
        let start = self.pos;
        let mut i = start;
        while let Some(c) = self.char_at(i) {
            if !Self::is_attribute_name_char(c) {
                break;
            }
            i += c.len_utf8();
        }
        self.emit(start, i, TokenKind::Attribute);
        self.pos = i;

        let mut j = i;
        while self.byte_at(j).is_some_and(|b| b.is_ascii_whitespace()) {
            j += 1;
        }
        if self.byte_at(j) != Some(b'=') {
            return State::Tag { embedded };
        }
        self.emit(j, j + 1, TokenKind::Operator);
        let mut k = j + 1;
        while self.byte_at(k).is_some_and(|b| b.is_ascii_whitespace()) {
            k += 1;
        }
        match self.byte_at(k) {
            Some(b'"' | b'\'') => {
                let end = self.attribute_value_quoted(k);
                self.emit(k, end, TokenKind::String);
                self.pos = end;
            }
            Some(b) if b != b'>' => {
                let mut end = k;
                while let Some(c) = self.char_at(end) {
                    if c.is_whitespace() || c == '>' {
                        break;
                    }
                    end += c.len_utf8();
                }
                self.emit(k, end, TokenKind::String);
                self.pos = end;
            }
            _ => self.pos = k,
        }
        State::Tag { embedded }
    }

    /// End of a quoted attribute value opening at `start` (no escapes).
    fn attribute_value_quoted(&self, start: usize) -> usize {
        let quote = self.bytes[start];
        self.bytes[start + 1..self.end]
            .iter()
            .position(|&b| b == quote)
            .map_or(self.end, |off| start + 1 + off + 1)
    }

    /// Offset of the next ASCII case-insensitive match of `needle` at or
    /// after `from`, within the scanned range.
    fn find_ignore_case(&self, from: usize, needle: &str) -> Option<usize> {
        let needle = needle.as_bytes();
        let first = needle.first()?;
        let last = self.end.checked_sub(needle.len())?;
        (from..=last).find(|&i| {
            self.bytes[i] == *first && self.bytes[i..i + needle.len()].eq_ignore_ascii_case(needle)
        })
    }

    /// Tokenizes a `<script>` or `<style>` body with its own profile.
    fn embedded(&mut self, language: Language) {
        let closer = if language == Language::Css {
            "</style"
        } else {
            "</script"
        };
        let body_end = self.find_ignore_case(self.pos, closer).unwrap_or(self.end);
        let spans = Scanner::new(self.text, profile(language), self.pos..body_end).run();
        tracing::trace!(%language, spans = spans.len(), "embedded block");
        self.spans.extend(spans);
        self.pos = body_end;
    }

    // ------------------------------------------------------------------
    // Stylesheet state
    // ------------------------------------------------------------------

    fn stylesheet(&mut self) -> State {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return State::Normal;
        };
        let p = self.profile;
        let next = self.char_at(start + 1);
        let next_starts_name = next.is_some_and(|n| p.is_identifier_start(n) || n == '-');
        let in_selector = self.brace_depth == 0 && self.paren_depth == 0;

        if c.is_whitespace() {
            return self.skip();
        }
        if let Some(state) = self.comment_start(start) {
            return state;
        }
        if let Some(state) = self.string_start() {
            return state;
        }

        match c {
            '{' => self.brace_depth += 1,
            '}' => self.brace_depth = self.brace_depth.saturating_sub(1),
            '(' => self.paren_depth += 1,
            ')' => self.paren_depth = self.paren_depth.saturating_sub(1),
            '@' | '!' if next_starts_name => {
                let end = self.identifier_end(start + 1);
                self.pos = end;
                self.emit(start, end, TokenKind::Keyword);
                return State::Normal;
            }
            '.' if in_selector && next_starts_name => {
                let end = self.identifier_end(start + 1);
                self.pos = end;
                self.emit(start, end, TokenKind::Class);
                return State::Normal;
            }
            '#' if in_selector && next_starts_name => {
                let end = self.identifier_end(start + 1);
                self.pos = end;
                self.emit(start, end, TokenKind::Class);
                return State::Normal;
            }
            '#' if next.is_some_and(|n| n.is_ascii_hexdigit()) => {
                let mut end = start + 1;
                while self.byte_at(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
                    end += 1;
                }
                self.pos = end;
                self.emit(start, end, TokenKind::Number);
                return State::Normal;
            }
            ':' if in_selector && (next == Some(':') || next_starts_name) => {
                let colons = if next == Some(':') { 2 } else { 1 };
                let end = self.identifier_end(start + colons);
                self.pos = end;
                self.emit(start, end, TokenKind::Method);
                return State::Normal;
            }
            _ => {}
        }

        if c.is_ascii_digit() || (c == '.' && next.is_some_and(|n| n.is_ascii_digit())) {
            self.number();
            return State::Normal;
        }
        if p.is_identifier_start(c) || (c == '-' && next_starts_name) {
            self.css_identifier();
            return State::Normal;
        }
        if p.is_operator(c) {
            self.operator();
            return State::Normal;
        }
        if p.is_punctuation(c) {
            self.pos = start + 1;
            self.emit(start, start + 1, TokenKind::Punctuation);
            return State::Normal;
        }
        self.skip()
    }

    fn css_identifier(&mut self) {
        let start = self.pos;
        let end = self.identifier_end(self.next_boundary(start));
        let word = &self.text[start..end];
        let in_block = self.brace_depth > 0 || self.paren_depth > 0;
        let kind = if self.byte_at(end) == Some(b'(') {
            TokenKind::Method
        } else if in_block && self.followed_by_colon(end) {
            TokenKind::Attribute
        } else if self.profile.is_keyword(word) {
            TokenKind::Keyword
        } else if !in_block {
            TokenKind::Tag
        } else {
            TokenKind::Variable
        };
        self.pos = end;
        self.emit(start, end, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn classify(text: &str, language: Language) -> Vec<(&str, TokenKind)> {
        tokenize(text, language)
            .into_iter()
            .map(|span| (span.text(text), span.kind))
            .collect()
    }

    #[test]
    fn test_empty_text() {
        for language in Language::ALL {
            assert!(tokenize("", language).is_empty());
        }
    }

    #[test]
    fn test_escaped_quote_stays_in_one_string() {
        let text = r#"a "quoted \" quote" b"#;
        assert_eq!(
            classify(text, Language::Plaintext),
            vec![(r#""quoted \" quote""#, String)]
        );

        let text = r#""a \"quoted \\\" quote\" b""#;
        assert_eq!(classify(text, Language::Plaintext), vec![(text, String)]);
        assert_eq!(classify(text, Language::JavaScript), vec![(text, String)]);
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_eof() {
        let text = "/* unterminated comment";
        for language in [Language::Plaintext, Language::Rust, Language::JavaScript, Language::Css] {
            assert_eq!(
                tokenize(text, language),
                vec![Span::new(0, text.len(), Comment)],
                "{language}"
            );
        }
    }

    #[test]
    fn test_unterminated_string_runs_to_eof() {
        let text = "x = \"abc\ndef";
        assert_eq!(
            classify(text, Language::JavaScript),
            vec![("x", Variable), ("=", Operator), ("\"abc\ndef", String)]
        );
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        let text = "classifier = 1";
        for language in [Language::Java, Language::Python, Language::JavaScript, Language::Plaintext] {
            assert!(
                tokenize(text, language).iter().all(|s| s.kind != Keyword),
                "{language}"
            );
        }
        assert_eq!(
            classify(text, Language::Java),
            vec![("classifier", Variable), ("=", Operator), ("1", Number)]
        );
    }

    #[test]
    fn test_rust_function() {
        let text = "fn main() { let x: u32 = 42; }";
        assert_eq!(
            classify(text, Language::Rust),
            vec![
                ("fn", Keyword),
                ("main", Method),
                ("(", Punctuation),
                (")", Punctuation),
                ("{", Punctuation),
                ("let", Keyword),
                ("x", Variable),
                (":", Punctuation),
                ("u32", Class),
                ("=", Operator),
                ("42", Number),
                (";", Punctuation),
                ("}", Punctuation),
            ]
        );
    }

    #[test]
    fn test_class_declaration_and_calls() {
        let text = "class Foo extends Bar {}\nfoo(bar);";
        assert_eq!(
            classify(text, Language::JavaScript),
            vec![
                ("class", Keyword),
                ("Foo", Class),
                ("extends", Keyword),
                ("Bar", Class),
                ("{", Punctuation),
                ("}", Punctuation),
                ("foo", Method),
                ("(", Punctuation),
                ("bar", Variable),
                (")", Punctuation),
                (";", Punctuation),
            ]
        );
    }

    #[test]
    fn test_longest_operator_match() {
        assert_eq!(
            classify("a >= b", Language::C),
            vec![("a", Variable), (">=", Operator), ("b", Variable)]
        );
        assert_eq!(
            classify("a =// note", Language::C),
            vec![("a", Variable), ("=", Operator), ("// note", Comment)]
        );
    }

    #[test]
    fn test_python_strings_and_comments() {
        let text = "x = \"\"\"a\nb\"\"\"  # done\ny = f\"{x}\"";
        assert_eq!(
            classify(text, Language::Python),
            vec![
                ("x", Variable),
                ("=", Operator),
                ("\"\"\"a\nb\"\"\"", String),
                ("# done", Comment),
                ("y", Variable),
                ("=", Operator),
                ("f\"{x}\"", String),
            ]
        );
    }

    #[test]
    fn test_python_decorator_and_def() {
        assert_eq!(
            classify("@property\ndef name(self):", Language::Python),
            vec![
                ("@property", Attribute),
                ("def", Keyword),
                ("name", Method),
                ("(", Punctuation),
                ("self", Keyword),
                (")", Punctuation),
                (":", Punctuation),
            ]
        );
    }

    #[test]
    fn test_rust_specifics() {
        assert_eq!(
            classify(r##"let s = r#"a "b" c"#;"##, Language::Rust)[3],
            (r##"r#"a "b" c"#"##, String)
        );
        assert_eq!(
            classify("&'a str", Language::Rust),
            vec![("&", Operator), ("'a", Keyword), ("str", Class)]
        );
        assert_eq!(
            classify("let c = 'x';", Language::Rust)[3],
            ("'x'", String)
        );
        assert_eq!(
            classify("/* a /* b */ c */ d", Language::Rust),
            vec![("/* a /* b */ c */", Comment), ("d", Variable)]
        );
        assert_eq!(
            classify("println!(\"hi\")", Language::Rust),
            vec![
                ("println!", Method),
                ("(", Punctuation),
                ("\"hi\"", String),
                (")", Punctuation),
            ]
        );
        assert_eq!(
            classify("#[derive(Debug)]\nstruct A;", Language::Rust),
            vec![
                ("#[derive(Debug)]", Attribute),
                ("struct", Keyword),
                ("A", Class),
                (";", Punctuation),
            ]
        );
        assert_eq!(
            classify("x != y", Language::Rust),
            vec![("x", Variable), ("!=", Operator), ("y", Variable)]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            classify("0xFF 1.5e-3 10u8 .5 1_000 0b1010", Language::Rust),
            vec![
                ("0xFF", Number),
                ("1.5e-3", Number),
                ("10u8", Number),
                (".5", Number),
                ("1_000", Number),
                ("0b1010", Number),
            ]
        );
        assert_eq!(
            classify("0..10", Language::Rust),
            vec![("0", Number), (".", Punctuation), (".", Punctuation), ("10", Number)]
        );
    }

    #[test]
    fn test_html_tags_and_attributes() {
        assert_eq!(
            classify("<a href=\"x\" disabled>hi</a><br/>", Language::Html),
            vec![
                ("<a", Tag),
                ("href", Attribute),
                ("=", Operator),
                ("\"x\"", String),
                ("disabled", Attribute),
                (">", Tag),
                ("</a", Tag),
                (">", Tag),
                ("<br", Tag),
                ("/>", Tag),
            ]
        );
    }

    #[test]
    fn test_html_comment_entity_and_unquoted_value() {
        assert_eq!(
            classify("<!-- c --> &amp; <td width=50>", Language::Html),
            vec![
                ("<!-- c -->", Comment),
                ("&amp;", Number),
                ("<td", Tag),
                ("width", Attribute),
                ("=", Operator),
                ("50", String),
                (">", Tag),
            ]
        );
    }

    #[test]
    fn test_html_embedded_script() {
        assert_eq!(
            classify("<script>let x = 1;</script>", Language::Html),
            vec![
                ("<script", Tag),
                (">", Tag),
                ("let", Keyword),
                ("x", Variable),
                ("=", Operator),
                ("1", Number),
                (";", Punctuation),
                ("</script", Tag),
                (">", Tag),
            ]
        );
    }

    #[test]
    fn test_html_doctype_is_one_tag() {
        assert_eq!(
            classify("<!DOCTYPE html>\n<html>", Language::Html),
            vec![("<!DOCTYPE html>", Tag), ("<html", Tag), (">", Tag)]
        );
        assert_eq!(classify("<!doctype html", Language::Html), vec![("<!doctype html", Tag)]);
    }

    #[test]
    fn test_embedded_closer_is_case_insensitive() {
        let tokens = classify("<SCRIPT>a</Script><p>", Language::Html);
        assert_eq!(tokens[2].0, "a");
        assert_eq!(tokens[3], ("</Script", Tag));
        assert_eq!(tokens[5], ("<p", Tag));
    }

    #[test]
    fn test_many_embedded_blocks() {
        let text = "<script>x</script>".repeat(20_000);
        let tokens = classify(&text, Language::Html);
        assert_eq!(tokens.len(), 5 * 20_000);
        assert!(tokens.chunks(5).all(|block| block[2].0 == "x" && block[3] == ("</script", Tag)));
    }

    #[test]
    fn test_xml_declaration_and_cdata() {
        assert_eq!(
            classify("<?xml version=\"1.0\"?><a><![CDATA[<x>]]></a>", Language::Xml),
            vec![
                ("<?xml", Tag),
                ("version", Attribute),
                ("=", Operator),
                ("\"1.0\"", String),
                ("?>", Tag),
                ("<a", Tag),
                (">", Tag),
                ("<![CDATA[<x>]]>", String),
                ("</a", Tag),
                (">", Tag),
            ]
        );
    }

    #[test]
    fn test_json_keys() {
        assert_eq!(
            classify(r#"{"a": true, "b": [1, -2]}"#, Language::Json),
            vec![
                ("{", Punctuation),
                ("\"a\"", Attribute),
                (":", Punctuation),
                ("true", Keyword),
                (",", Punctuation),
                ("\"b\"", Attribute),
                (":", Punctuation),
                ("[", Punctuation),
                ("1", Number),
                (",", Punctuation),
                ("-", Operator),
                ("2", Number),
                ("]", Punctuation),
                ("}", Punctuation),
            ]
        );
    }

    #[test]
    fn test_sql_doubled_quote_and_case() {
        assert_eq!(
            classify("SELECT 'it''s' FROM t", Language::Sql),
            vec![
                ("SELECT", Keyword),
                ("'it''s'", String),
                ("FROM", Keyword),
                ("t", Class),
            ]
        );
    }

    #[test]
    fn test_shell_variables() {
        assert_eq!(
            classify("echo $1 ${PATH} # done", Language::Shell),
            vec![
                ("echo", Variable),
                ("$1", Variable),
                ("${PATH}", Variable),
                ("# done", Comment),
            ]
        );
    }

    #[test]
    fn test_shell_single_quotes_are_literal() {
        let tokens = classify("echo 'a\\' b\nls", Language::Shell);
        assert_eq!(tokens[1], ("'a\\'", String));
        assert_eq!(tokens.last().map(|t| t.0), Some("ls"));

        let python = classify("x = 'a\\' b'", Language::Python);
        assert_eq!(python[2], ("'a\\' b'", String));
    }

    #[test]
    fn test_php_tags_and_variables() {
        assert_eq!(
            classify("<?php $x = 1; ?>", Language::Php),
            vec![
                ("<?php", Tag),
                ("$x", Variable),
                ("=", Operator),
                ("1", Number),
                (";", Punctuation),
                ("?>", Tag),
            ]
        );
    }

    #[test]
    fn test_css_rules() {
        assert_eq!(
            classify(".btn:hover { color: #fff; margin: 0 auto; }", Language::Css),
            vec![
                (".btn", Class),
                (":hover", Method),
                ("{", Punctuation),
                ("color", Attribute),
                (":", Punctuation),
                ("#fff", Number),
                (";", Punctuation),
                ("margin", Attribute),
                (":", Punctuation),
                ("0", Number),
                ("auto", Keyword),
                (";", Punctuation),
                ("}", Punctuation),
            ]
        );
        assert_eq!(
            classify("@media (max-width: 600px) { div { width: 50%; } }", Language::Css)[..6],
            [
                ("@media", Keyword),
                ("(", Punctuation),
                ("max-width", Attribute),
                (":", Punctuation),
                ("600px", Number),
                (")", Punctuation),
            ]
        );
    }

    #[test]
    fn test_yaml_keys() {
        assert_eq!(
            classify("name: app # c\nenabled: true", Language::Yaml),
            vec![
                ("name", Attribute),
                (":", Punctuation),
                ("app", Variable),
                ("# c", Comment),
                ("enabled", Attribute),
                (":", Punctuation),
                ("true", Keyword),
            ]
        );
    }

    #[test]
    fn test_annotations() {
        assert_eq!(
            classify("@override\nWidget build()", Language::Dart)[..2],
            [("@override", Attribute), ("Widget", Class)]
        );
    }

    #[test]
    fn test_apostrophes_do_not_open_strings() {
        assert_eq!(
            classify("don't say 'x' now", Language::Plaintext),
            vec![("'x'", String)]
        );
    }

    #[test]
    fn test_multibyte_text_keeps_char_boundaries() {
        let text = "s = \"héllo\" // ünïcode ✓\nλ = 1";
        let spans = tokenize(text, Language::JavaScript);
        for span in &spans {
            assert!(text.is_char_boundary(span.start));
            assert!(text.is_char_boundary(span.end));
        }
        assert!(spans.iter().any(|s| s.text(text) == "\"héllo\"" && s.kind == String));
        assert!(spans.iter().any(|s| s.text(text) == "// ünïcode ✓" && s.kind == Comment));
        assert!(spans.iter().any(|s| s.text(text) == "λ" && s.kind == Variable));
    }

    #[test]
    fn test_unknown_tag_uses_generic_profile() {
        assert_eq!(
            tokenize_tag("/* a */ x = 1 # note", "cobol"),
            tokenize("/* a */ x = 1 # note", Language::Plaintext)
        );
        let text = "/* a */ x = 1";
        let kinds: Vec<_> = tokenize_tag(text, "cobol").iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![Comment, Number]);
    }

    #[test]
    fn test_deterministic() {
        let text = "fn main() { let v = vec![1, 2]; /* x */ }";
        assert_eq!(tokenize(text, Language::Rust), tokenize(text, Language::Rust));
    }
}
