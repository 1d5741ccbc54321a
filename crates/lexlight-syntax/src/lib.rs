//! # Lexlight Syntax
//!
//! Language detection and lexical classification for syntax highlighting.
//!
//! Two pure functions do the work:
//! - [`detect`] guesses a [`Language`] from raw text with weighted signatures
//! - [`tokenize`] splits text into sorted, non-overlapping [`Span`]s
//!
//! Anything a span does not cover is plain text. The [`index`] module turns
//! the global span list into per-line fragments for display.
//!
//! ## Learning: Lexing Without Grammars
//!
//! A full parser per language is heavy. For colouring text, a single
//! left-to-right scan driven by a table of lexical facts is enough:
//! - which words are keywords or builtin types
//! - how comments and strings open, close and escape
//! - which characters are operators or punctuation
//!
//! Each language is one [`LexicalProfile`] value; the scanner never branches
//! on the language itself.
//!
//! ```
//! use lexlight_syntax::{detect, tokenize, Language, TokenKind};
//!
//! let text = "fn main() {}";
//! let language = detect(text);
//! assert_eq!(language, Language::Rust);
//!
//! let spans = tokenize(text, language);
//! assert_eq!(spans[0].kind, TokenKind::Keyword);
//! ```

pub mod detect;
pub mod index;
pub mod language;
pub mod profile;
pub mod span;
pub mod tokenize;

pub use detect::{DEFAULT_SAMPLE_BYTES, Detector, Pattern, SIGNATURES, Score, Signature, detect};
pub use index::{LineIndex, SpanIndex, clip_to_lines};
pub use language::Language;
pub use profile::{LexicalProfile, profile};
pub use span::{Span, TokenKind};
pub use tokenize::{tokenize, tokenize_tag, tokenize_with};

/// Errors from strict language-name parsing.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
