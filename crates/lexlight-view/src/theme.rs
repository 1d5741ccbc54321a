//! Style tables mapping token kinds to visual styles.
//!
//! ## Learning: Builder Pattern
//!
//! Tables are built from a base style and refined one role at a time:
//! ```rust
//! use lexlight_syntax::TokenKind;
//! use lexlight_view::{Color, Style, StyleTable};
//!
//! let table = StyleTable::dark()
//!     .with(TokenKind::Comment, Style::new(Color::rgb(0.4, 0.4, 0.4)).italic());
//! assert!(table.get(TokenKind::Comment).italic);
//! ```

use lexlight_syntax::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::StyleOverride;
use crate::{ViewError, ViewResult};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> ViewResult<Self> {
        let invalid = || ViewError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        let (r, g, b, a) = match digits.len() {
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                (short(0)?, short(1)?, short(2)?, 255)
            }
            6 | 8 => {
                let a = if digits.len() == 8 { channel(&digits[6..8])? } else { 255 };
                (channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?, a)
            }
            _ => return Err(invalid()),
        };
        Ok(Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        ))
    }

    /// Converts to 8-bit channels for terminal output.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let scale = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Visual style of one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A complete mapping from every [`TokenKind`] to a [`Style`].
///
/// `TokenKind::Plain` is the base role used for uncovered text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    name: String,
    is_dark: bool,
    background: Color,
    gutter: Color,
    styles: [Style; TokenKind::ALL.len()],
}

impl StyleTable {
    /// Names accepted by [`StyleTable::by_name`].
    pub const THEMES: [&'static str; 2] = ["dark", "light"];

    /// Creates a table where every role uses `base`.
    pub fn new(name: impl Into<String>, is_dark: bool, base: Style) -> Self {
        Self {
            name: name.into(),
            is_dark,
            background: if is_dark {
                Color::rgb(0.10, 0.10, 0.12)
            } else {
                Color::rgb(0.98, 0.98, 0.98)
            },
            gutter: base.color,
            styles: [base; TokenKind::ALL.len()],
        }
    }

    /// The default dark theme.
    pub fn dark() -> Self {
        Self::new("dark", true, Style::new(Color::rgb(0.90, 0.90, 0.90)))
            .with_gutter(Color::rgb(0.45, 0.45, 0.50))
            .with(TokenKind::Keyword, Style::new(Color::rgb(0.86, 0.55, 0.76)).bold())
            .with(TokenKind::Class, Style::new(Color::rgb(0.90, 0.80, 0.55)))
            .with(TokenKind::Method, Style::new(Color::rgb(0.55, 0.75, 0.90)))
            .with(TokenKind::Variable, Style::new(Color::rgb(0.85, 0.85, 0.85)))
            .with(TokenKind::String, Style::new(Color::rgb(0.72, 0.84, 0.55)))
            .with(TokenKind::Number, Style::new(Color::rgb(0.82, 0.68, 0.55)))
            .with(TokenKind::Comment, Style::new(Color::rgb(0.50, 0.55, 0.55)).italic())
            .with(TokenKind::Tag, Style::new(Color::rgb(0.80, 0.50, 0.50)))
            .with(TokenKind::Attribute, Style::new(Color::rgb(0.90, 0.80, 0.55)))
            .with(TokenKind::Operator, Style::new(Color::rgb(0.80, 0.80, 0.90)))
            .with(TokenKind::Punctuation, Style::new(Color::rgb(0.70, 0.70, 0.70)))
    }

    /// The default light theme.
    pub fn light() -> Self {
        Self::new("light", false, Style::new(Color::rgb(0.10, 0.10, 0.10)))
            .with_gutter(Color::rgb(0.55, 0.55, 0.55))
            .with(TokenKind::Keyword, Style::new(Color::rgb(0.6, 0.3, 0.6)).bold())
            .with(TokenKind::Class, Style::new(Color::rgb(0.2, 0.6, 0.6)))
            .with(TokenKind::Method, Style::new(Color::rgb(0.2, 0.4, 0.7)))
            .with(TokenKind::Variable, Style::new(Color::rgb(0.1, 0.1, 0.1)))
            .with(TokenKind::String, Style::new(Color::rgb(0.3, 0.6, 0.3)))
            .with(TokenKind::Number, Style::new(Color::rgb(0.7, 0.4, 0.2)))
            .with(TokenKind::Comment, Style::new(Color::rgb(0.5, 0.5, 0.5)).italic())
            .with(TokenKind::Tag, Style::new(Color::rgb(0.6, 0.2, 0.2)))
            .with(TokenKind::Attribute, Style::new(Color::rgb(0.6, 0.5, 0.2)))
            .with(TokenKind::Operator, Style::new(Color::rgb(0.1, 0.1, 0.1)))
            .with(TokenKind::Punctuation, Style::new(Color::rgb(0.4, 0.4, 0.4)))
    }

    /// Looks up a builtin theme.
    pub fn by_name(name: &str) -> ViewResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(ViewError::UnknownTheme(name.to_string())),
        }
    }

    pub fn with(mut self, kind: TokenKind, style: Style) -> Self {
        self.set(kind, style);
        self
    }

    pub fn with_gutter(mut self, gutter: Color) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles[kind as usize] = style;
    }

    pub fn get(&self, kind: TokenKind) -> Style {
        self.styles[kind as usize]
    }

    /// Style of text no span covers.
    pub fn base(&self) -> Style {
        self.get(TokenKind::Plain)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Color of line numbers.
    pub fn gutter(&self) -> Color {
        self.gutter
    }

    /// Applies per-role overrides keyed by role name (`"base"` or a kind).
    ///
    /// Fails on the first unknown role or malformed color; earlier overrides
    /// stay applied.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, StyleOverride>) -> ViewResult<()> {
        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (role, patch) in entries {
            let kind = role_kind(role)?;
            let mut style = self.get(kind);
            if let Some(color) = &patch.color {
                style.color = Color::from_hex(color)?;
            }
            if let Some(bold) = patch.bold {
                style.bold = bold;
            }
            if let Some(italic) = patch.italic {
                style.italic = italic;
            }
            tracing::debug!(role = %kind, "style override applied");
            self.set(kind, style);
        }
        Ok(())
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::dark()
    }
}

/// Resolves a style role name.
pub fn role_kind(role: &str) -> ViewResult<TokenKind> {
    let role = role.trim().to_ascii_lowercase();
    if role == "base" {
        return Ok(TokenKind::Plain);
    }
    TokenKind::ALL
        .into_iter()
        .find(|kind| kind.name() == role)
        .ok_or(ViewError::UnknownRole(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_is_styled() {
        for table in [StyleTable::dark(), StyleTable::light()] {
            for kind in TokenKind::ALL {
                let style = table.get(kind);
                assert!(style.color.a > 0.0, "{} has no color in {}", kind, table.name());
            }
            assert_ne!(table.get(TokenKind::Keyword), table.base());
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(StyleTable::by_name("Light").unwrap().name(), "light");
        assert!(!StyleTable::by_name("light").unwrap().is_dark());
        assert!(matches!(
            StyleTable::by_name("solarized"),
            Err(ViewError::UnknownTheme(name)) if name == "solarized"
        ));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Color::from_hex("#ffffff").unwrap().to_rgb8(), (255, 255, 255));
        assert_eq!(Color::from_hex("#f80").unwrap().to_rgb8(), (255, 136, 0));
        assert_eq!(Color::from_hex("#10203040").unwrap().to_hex(), "#102030");
        assert!(Color::from_hex("ffffff").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_overrides() {
        let mut table = StyleTable::dark();
        let overrides = HashMap::from([
            (
                "comment".to_string(),
                StyleOverride {
                    color: Some("#00ff00".to_string()),
                    bold: Some(true),
                    italic: Some(false),
                },
            ),
            (
                "base".to_string(),
                StyleOverride {
                    color: Some("#000000".to_string()),
                    ..StyleOverride::default()
                },
            ),
        ]);
        table.apply_overrides(&overrides).unwrap();

        let comment = table.get(TokenKind::Comment);
        assert_eq!(comment.color.to_rgb8(), (0, 255, 0));
        assert!(comment.bold);
        assert!(!comment.italic);
        assert_eq!(table.base().color.to_rgb8(), (0, 0, 0));
    }

    #[test]
    fn test_unknown_role() {
        let mut table = StyleTable::dark();
        let overrides = HashMap::from([("regex".to_string(), StyleOverride::default())]);
        assert!(matches!(
            table.apply_overrides(&overrides),
            Err(ViewError::UnknownRole(role)) if role == "regex"
        ));
    }
}
