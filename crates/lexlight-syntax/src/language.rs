//! Language tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::SyntaxError;

/// A supported lexical profile.
///
/// `Plaintext` is the fallback for inconclusive detection and unknown tags.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Plaintext,
    Json,
    JavaScript,
    TypeScript,
    Python,
    Rust,
    Dart,
    Html,
    Xml,
    Css,
    Java,
    Kotlin,
    C,
    Cpp,
    CSharp,
    Go,
    Php,
    Ruby,
    Shell,
    Sql,
    Yaml,
    Swift,
}

impl Language {
    pub const ALL: [Language; 22] = [
        Language::Plaintext,
        Language::Json,
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Rust,
        Language::Dart,
        Language::Html,
        Language::Xml,
        Language::Css,
        Language::Java,
        Language::Kotlin,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Php,
        Language::Ruby,
        Language::Shell,
        Language::Sql,
        Language::Yaml,
        Language::Swift,
    ];

    /// Tie-break order for detection: earlier entries win equal scores.
    ///
    /// A language that embeds another's syntax comes first when its own
    /// evidence is decisive (PHP before HTML). Supersets come after their
    /// base (JavaScript before TypeScript, C before C++), so a snippet with
    /// no typed or C++-only evidence keeps the simpler tag.
    pub const DETECTION_PRIORITY: [Language; 22] = [
        Language::Json,
        Language::Php,
        Language::Xml,
        Language::Html,
        Language::Rust,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Dart,
        Language::Kotlin,
        Language::Swift,
        Language::Java,
        Language::CSharp,
        Language::Go,
        Language::C,
        Language::Cpp,
        Language::Ruby,
        Language::Shell,
        Language::Sql,
        Language::Css,
        Language::Yaml,
        Language::Plaintext,
    ];

    /// Returns the canonical lowercase tag.
    pub fn name(self) -> &'static str {
        match self {
            Language::Plaintext => "plaintext",
            Language::Json => "json",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Dart => "dart",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Css => "css",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Shell => "shell",
            Language::Sql => "sql",
            Language::Yaml => "yaml",
            Language::Swift => "swift",
        }
    }

    /// Resolves a tag, falling back to `Plaintext` for anything unknown.
    pub fn from_tag(tag: &str) -> Language {
        tag.parse().unwrap_or_else(|_| {
            tracing::debug!(tag, "unknown language tag, using plaintext profile");
            Language::Plaintext
        })
    }

    /// Guesses the language from a file name's extension.
    pub fn from_extension(path: impl AsRef<Path>) -> Option<Language> {
        let path = path.as_ref();
        let file_name = path.file_name()?.to_str()?;
        if matches!(file_name, "Dockerfile" | "Makefile" | ".bashrc" | ".zshrc" | ".profile") {
            return Some(Language::Shell);
        }
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let language = match ext.as_str() {
            "rs" => Language::Rust,
            "py" | "pyw" | "pyi" => Language::Python,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "ts" | "mts" | "cts" | "tsx" => Language::TypeScript,
            "json" | "jsonc" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "html" | "htm" | "xhtml" => Language::Html,
            "xml" | "xsl" | "xslt" | "svg" | "plist" => Language::Xml,
            "css" | "scss" | "less" => Language::Css,
            "sh" | "bash" | "zsh" | "fish" | "env" => Language::Shell,
            "go" => Language::Go,
            "java" => Language::Java,
            "kt" | "kts" | "gradle" => Language::Kotlin,
            "swift" => Language::Swift,
            "c" | "h" => Language::C,
            "cpp" | "cxx" | "cc" | "c++" | "hpp" | "hxx" | "hh" => Language::Cpp,
            "cs" => Language::CSharp,
            "rb" | "rake" | "gemspec" => Language::Ruby,
            "php" | "phtml" => Language::Php,
            "sql" => Language::Sql,
            "dart" => Language::Dart,
            "txt" | "text" | "log" => Language::Plaintext,
            _ => return None,
        };
        Some(language)
    }

    /// Whether the profile is tag-based (HTML/XML).
    pub fn is_markup(self) -> bool {
        matches!(self, Language::Html | Language::Xml)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let language = match lower.as_str() {
            "plaintext" | "plain" | "text" | "txt" => Language::Plaintext,
            "json" | "jsonc" => Language::Json,
            "javascript" | "js" | "jsx" | "node" => Language::JavaScript,
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "python" | "py" | "python3" => Language::Python,
            "rust" | "rs" => Language::Rust,
            "dart" | "flutter" => Language::Dart,
            "html" | "htm" => Language::Html,
            "xml" | "svg" => Language::Xml,
            "css" | "scss" | "less" => Language::Css,
            "java" => Language::Java,
            "kotlin" | "kt" => Language::Kotlin,
            "c" | "h" => Language::C,
            "cpp" | "c++" | "cxx" | "cc" => Language::Cpp,
            "csharp" | "c#" | "cs" => Language::CSharp,
            "go" | "golang" => Language::Go,
            "php" => Language::Php,
            "ruby" | "rb" => Language::Ruby,
            "shell" | "bash" | "sh" | "zsh" => Language::Shell,
            "sql" => Language::Sql,
            "yaml" | "yml" => Language::Yaml,
            "swift" => Language::Swift,
            _ => return Err(SyntaxError::UnknownLanguage(s.to_string())),
        };
        Ok(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plaintext() {
        assert_eq!(Language::default(), Language::Plaintext);
    }

    #[test]
    fn test_names_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("JS".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!(" yml ".parse::<Language>().unwrap(), Language::Yaml);
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            "cobol".parse::<Language>(),
            Err(SyntaxError::UnknownLanguage(name)) if name == "cobol"
        ));
        assert_eq!(Language::from_tag("cobol"), Language::Plaintext);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("src/main.rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("index.HTML"), Some(Language::Html));
        assert_eq!(Language::from_extension("Makefile"), Some(Language::Shell));
        assert_eq!(Language::from_extension("notes.unknown"), None);
        assert_eq!(Language::from_extension("README"), None);
    }

    #[test]
    fn test_priority_lists_every_language_once() {
        let mut priority = Language::DETECTION_PRIORITY.to_vec();
        priority.sort();
        let mut all = Language::ALL.to_vec();
        all.sort();
        assert_eq!(priority, all);
    }
}
