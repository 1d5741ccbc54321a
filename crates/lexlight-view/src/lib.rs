//! # Lexlight View
//!
//! The presentation side of highlighting: everything between a span list and
//! pixels (or terminal cells) that does not depend on a particular output.
//!
//! ## Architecture Overview
//!
//! ```text
//!   text ──► SourceDocument ──► DisplayLine ──► fragments ──► StyleTable
//!               │    ▲                                          │
//!               │    └──── HighlightCache (fingerprint → spans) │
//!               └───────────── Config ──────────────────────────┘
//! ```
//!
//! ## Learning: Module Organization
//!
//! Each concern lives in its own file and the crate root re-exports the
//! types callers actually name, so `lexlight_view::StyleTable` works without
//! knowing the module layout.

pub mod cache;
pub mod config;
pub mod document;
pub mod theme;

pub use cache::{Fingerprint, HighlightCache};
pub use config::Config;
pub use document::{DisplayLine, DocumentBuilder, SourceDocument};
pub use theme::{Color, Style, StyleTable};

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors that can occur while configuring or styling output
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown style role: {0}")]
    UnknownRole(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
