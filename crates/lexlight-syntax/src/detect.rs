//! Heuristic language detection.
//!
//! Detection is table driven: every [`Signature`] names a language, a
//! [`Pattern`] and a weight. Each signature that matches the text adds its
//! weight to its language's score once, the highest non-zero score wins and
//! equal scores fall back to [`Language::DETECTION_PRIORITY`]. New languages
//! or stronger hints are added as data, never as new control flow.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::Language;

/// Upper bound on how much of the text is inspected.
pub const DEFAULT_SAMPLE_BYTES: usize = 64 * 1024;

/// What a signature looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "snake_case")]
pub enum Pattern {
    /// A whole identifier word (`classify` does not match `class`).
    Word(Cow<'static, str>),
    /// A substring anywhere in the text.
    Contains(Cow<'static, str>),
    /// A line that starts with the string after its indentation.
    LineStart(Cow<'static, str>),
    /// The text itself starts with the string after leading whitespace.
    Prefix(Cow<'static, str>),
    /// The whole text is an object or array JSON document.
    JsonDocument,
}

/// One weighted detection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub language: Language,
    pub pattern: Pattern,
    pub weight: u32,
}

impl Signature {
    pub fn new(language: Language, pattern: Pattern, weight: u32) -> Self {
        Self {
            language,
            pattern,
            weight,
        }
    }

    const fn word(language: Language, word: &'static str, weight: u32) -> Self {
        Self {
            language,
            pattern: Pattern::Word(Cow::Borrowed(word)),
            weight,
        }
    }

    const fn contains(language: Language, needle: &'static str, weight: u32) -> Self {
        Self {
            language,
            pattern: Pattern::Contains(Cow::Borrowed(needle)),
            weight,
        }
    }

    const fn line_start(language: Language, prefix: &'static str, weight: u32) -> Self {
        Self {
            language,
            pattern: Pattern::LineStart(Cow::Borrowed(prefix)),
            weight,
        }
    }

    const fn prefix(language: Language, prefix: &'static str, weight: u32) -> Self {
        Self {
            language,
            pattern: Pattern::Prefix(Cow::Borrowed(prefix)),
            weight,
        }
    }
}

/// A language and the total weight of its matching signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub language: Language,
    pub score: u32,
}

/// Pre-split views of the sampled text shared by all signatures.
///
/// `document` is the unsampled input; whole-document checks read it since a
/// truncated window never parses.
struct Sample<'a> {
    document: &'a str,
    text: &'a str,
    words: HashSet<&'a str>,
    lines: Vec<&'a str>,
}

impl<'a> Sample<'a> {
    fn new(document: &'a str, text: &'a str) -> Self {
        let words = text
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .collect();
        let lines = text.lines().map(str::trim_start).collect();
        Self {
            document,
            text,
            words,
            lines,
        }
    }

    fn matches(&self, pattern: &Pattern) -> bool {
        match pattern {
            Pattern::Word(word) => self.words.contains(word.as_ref()),
            Pattern::Contains(needle) => self.text.contains(needle.as_ref()),
            Pattern::LineStart(prefix) => self.lines.iter().any(|l| l.starts_with(prefix.as_ref())),
            Pattern::Prefix(prefix) => self.text.trim_start().starts_with(prefix.as_ref()),
            Pattern::JsonDocument => is_json_document(self.document),
        }
    }
}

fn is_json_document(text: &str) -> bool {
    let trimmed = text.trim();
    let shaped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    shaped && serde_json::from_str::<serde::de::IgnoredAny>(trimmed).is_ok()
}

/// Cuts `text` to at most `max` bytes on a char boundary.
fn sample_window(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// A configurable language detector.
#[derive(Debug, Clone)]
pub struct Detector {
    signatures: Vec<Signature>,
    sample_bytes: usize,
    min_score: u32,
}

impl Detector {
    /// Creates a detector with the builtin signature table.
    pub fn new() -> Self {
        Self::with_signatures(SIGNATURES.to_vec())
    }

    /// Creates a detector using only `signatures`.
    pub fn with_signatures(signatures: Vec<Signature>) -> Self {
        Self {
            signatures,
            sample_bytes: DEFAULT_SAMPLE_BYTES,
            min_score: 1,
        }
    }

    /// Limits how many leading bytes are inspected.
    pub fn with_sample_bytes(mut self, sample_bytes: usize) -> Self {
        self.sample_bytes = sample_bytes.max(1);
        self
    }

    /// Requires a winning score of at least `min_score` (never below 1).
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score.max(1);
        self
    }

    /// Adds signatures on top of the current table.
    pub fn extend(&mut self, signatures: impl IntoIterator<Item = Signature>) {
        self.signatures.extend(signatures);
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Scores every language with at least one matching signature.
    ///
    /// Sorted by descending score, ties in detection priority order.
    pub fn scores(&self, text: &str) -> Vec<Score> {
        let window = sample_window(text, self.sample_bytes);
        if window.trim().is_empty() {
            return Vec::new();
        }

        let sample = Sample::new(text, window);
        let mut totals: HashMap<Language, u32> = HashMap::new();
        for signature in &self.signatures {
            if signature.weight > 0 && sample.matches(&signature.pattern) {
                tracing::trace!(
                    language = %signature.language,
                    pattern = ?signature.pattern,
                    weight = signature.weight,
                    "signature matched"
                );
                let total = totals.entry(signature.language).or_default();
                *total = total.saturating_add(signature.weight);
            }
        }

        let mut scores: Vec<Score> = Language::DETECTION_PRIORITY
            .iter()
            .filter_map(|&language| {
                totals.get(&language).map(|&score| Score { language, score })
            })
            .collect();
        // Stable sort keeps priority order among equal scores.
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Returns the best-scoring language, or `Plaintext`.
    pub fn detect(&self, text: &str) -> Language {
        let language = match self.scores(text).first() {
            Some(best) if best.score >= self.min_score => best.language,
            _ => Language::Plaintext,
        };
        tracing::debug!(%language, bytes = text.len(), "detected language");
        language
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::new);

/// Infers the language of `text` with the builtin signatures.
///
/// Never fails: empty, whitespace-only or unrecognised text yields
/// [`Language::Plaintext`].
pub fn detect(text: &str) -> Language {
    DEFAULT_DETECTOR.detect(text)
}

use Language as L;

/// The builtin signature table.
pub static SIGNATURES: &[Signature] = &[
    Signature {
        language: L::Json,
        pattern: Pattern::JsonDocument,
        weight: 12,
    },
    // PHP
    Signature::prefix(L::Php, "<?php", 12),
    Signature::contains(L::Php, "<?php", 6),
    Signature::contains(L::Php, "$this->", 4),
    Signature::line_start(L::Php, "namespace App", 4),
    Signature::contains(L::Php, "function __construct", 4),
    // XML
    Signature::prefix(L::Xml, "<?xml", 12),
    Signature::contains(L::Xml, "xmlns", 3),
    Signature::contains(L::Xml, "<![CDATA[", 4),
    Signature::contains(L::Xml, "</", 1),
    Signature::contains(L::Xml, "/>", 1),
    // HTML
    Signature::contains(L::Html, "<!DOCTYPE html", 10),
    Signature::contains(L::Html, "<!doctype html", 10),
    Signature::contains(L::Html, "<html", 6),
    Signature::contains(L::Html, "<head>", 3),
    Signature::contains(L::Html, "<body", 3),
    Signature::contains(L::Html, "<div", 3),
    Signature::contains(L::Html, "<span", 2),
    Signature::contains(L::Html, "<p>", 2),
    Signature::contains(L::Html, "<a href", 3),
    Signature::contains(L::Html, "<script", 3),
    Signature::contains(L::Html, "</", 1),
    Signature::contains(L::Html, "/>", 1),
    // Rust
    Signature::word(L::Rust, "fn", 2),
    Signature::contains(L::Rust, "fn main()", 4),
    Signature::contains(L::Rust, "pub fn ", 4),
    Signature::contains(L::Rust, "let mut ", 4),
    Signature::contains(L::Rust, "&mut ", 3),
    Signature::contains(L::Rust, "println!", 4),
    Signature::contains(L::Rust, "#[derive(", 6),
    Signature::line_start(L::Rust, "use std::", 6),
    Signature::line_start(L::Rust, "impl ", 3),
    Signature::line_start(L::Rust, "mod ", 2),
    Signature::word(L::Rust, "usize", 2),
    Signature::word(L::Rust, "crate", 2),
    Signature::contains(L::Rust, "Vec<", 2),
    Signature::contains(L::Rust, "Option<", 1),
    Signature::contains(L::Rust, "-> ", 1),
    Signature::contains(L::Rust, "::", 1),
    Signature::contains(L::Rust, ".unwrap()", 3),
    // Python
    Signature::prefix(L::Python, "#!/usr/bin/env python", 12),
    Signature::prefix(L::Python, "#!/usr/bin/python", 12),
    Signature::line_start(L::Python, "def ", 4),
    Signature::line_start(L::Python, "elif ", 4),
    Signature::line_start(L::Python, "from ", 2),
    Signature::line_start(L::Python, "import ", 1),
    Signature::contains(L::Python, "):\n", 3),
    Signature::contains(L::Python, "self.", 2),
    Signature::contains(L::Python, "__init__", 4),
    Signature::contains(L::Python, "__name__", 4),
    Signature::contains(L::Python, "print(", 1),
    Signature::contains(L::Python, "\"\"\"", 1),
    Signature::word(L::Python, "None", 2),
    Signature::word(L::Python, "True", 1),
    Signature::word(L::Python, "False", 1),
    Signature::word(L::Python, "lambda", 1),
    // JavaScript
    Signature::word(L::JavaScript, "function", 2),
    Signature::word(L::JavaScript, "const", 1),
    Signature::word(L::JavaScript, "let", 1),
    Signature::word(L::JavaScript, "var", 1),
    Signature::word(L::JavaScript, "undefined", 2),
    Signature::contains(L::JavaScript, "=> ", 2),
    Signature::contains(L::JavaScript, "===", 3),
    Signature::contains(L::JavaScript, "console.log", 4),
    Signature::contains(L::JavaScript, "require(", 3),
    Signature::contains(L::JavaScript, "module.exports", 4),
    Signature::contains(L::JavaScript, "document.", 3),
    Signature::contains(L::JavaScript, "export default", 3),
    Signature::line_start(L::JavaScript, "import ", 1),
    // TypeScript
    Signature::word(L::TypeScript, "function", 2),
    Signature::word(L::TypeScript, "const", 1),
    Signature::word(L::TypeScript, "let", 1),
    Signature::contains(L::TypeScript, "=> ", 2),
    Signature::contains(L::TypeScript, "===", 3),
    Signature::contains(L::TypeScript, "console.log", 4),
    Signature::contains(L::TypeScript, "export default", 3),
    Signature::line_start(L::TypeScript, "import ", 1),
    Signature::contains(L::TypeScript, ": string", 4),
    Signature::contains(L::TypeScript, ": number", 4),
    Signature::contains(L::TypeScript, ": boolean", 3),
    Signature::line_start(L::TypeScript, "export interface ", 5),
    Signature::line_start(L::TypeScript, "interface ", 3),
    Signature::line_start(L::TypeScript, "type ", 2),
    Signature::word(L::TypeScript, "readonly", 2),
    Signature::contains(L::TypeScript, " as const", 3),
    // Dart
    Signature::contains(L::Dart, "import 'package:", 10),
    Signature::contains(L::Dart, "import 'dart:", 10),
    Signature::contains(L::Dart, "Widget build(", 8),
    Signature::contains(L::Dart, "StatelessWidget", 6),
    Signature::contains(L::Dart, "StatefulWidget", 6),
    Signature::contains(L::Dart, "setState(", 4),
    Signature::contains(L::Dart, "@override", 3),
    Signature::contains(L::Dart, "void main()", 2),
    Signature::contains(L::Dart, "Future<", 2),
    Signature::word(L::Dart, "late", 2),
    Signature::word(L::Dart, "required", 2),
    Signature::word(L::Dart, "final", 1),
    // Kotlin
    Signature::word(L::Kotlin, "fun", 4),
    Signature::word(L::Kotlin, "val", 3),
    Signature::word(L::Kotlin, "companion", 4),
    Signature::contains(L::Kotlin, "data class", 5),
    Signature::contains(L::Kotlin, "override fun", 4),
    Signature::contains(L::Kotlin, ": Int", 2),
    Signature::contains(L::Kotlin, "println(", 2),
    Signature::line_start(L::Kotlin, "package ", 1),
    // Swift
    Signature::word(L::Swift, "func", 3),
    Signature::word(L::Swift, "guard", 3),
    Signature::word(L::Swift, "protocol", 2),
    Signature::word(L::Swift, "let", 1),
    Signature::word(L::Swift, "nil", 1),
    Signature::contains(L::Swift, "import UIKit", 10),
    Signature::contains(L::Swift, "import SwiftUI", 10),
    Signature::contains(L::Swift, "import Foundation", 6),
    Signature::contains(L::Swift, "some View", 6),
    Signature::contains(L::Swift, "-> ", 1),
    // Java
    Signature::contains(L::Java, "public static void main", 8),
    Signature::contains(L::Java, "System.out.print", 8),
    Signature::line_start(L::Java, "import java.", 8),
    Signature::contains(L::Java, "public class ", 4),
    Signature::contains(L::Java, "@Override", 3),
    Signature::contains(L::Java, "private final ", 2),
    Signature::contains(L::Java, "String[]", 2),
    Signature::word(L::Java, "throws", 3),
    Signature::word(L::Java, "extends", 1),
    Signature::word(L::Java, "implements", 1),
    Signature::line_start(L::Java, "package ", 1),
    // C#
    Signature::line_start(L::CSharp, "using System", 8),
    Signature::contains(L::CSharp, "Console.Write", 8),
    Signature::contains(L::CSharp, "{ get; set; }", 6),
    Signature::contains(L::CSharp, "async Task", 4),
    Signature::contains(L::CSharp, "public class ", 2),
    Signature::contains(L::CSharp, "string[] args", 3),
    Signature::word(L::CSharp, "namespace", 2),
    Signature::word(L::CSharp, "foreach", 2),
    Signature::word(L::CSharp, "var", 1),
    // Go
    Signature::line_start(L::Go, "package ", 2),
    Signature::line_start(L::Go, "import (", 4),
    Signature::word(L::Go, "func", 3),
    Signature::word(L::Go, "chan", 3),
    Signature::word(L::Go, "defer", 3),
    Signature::word(L::Go, "nil", 1),
    Signature::contains(L::Go, ":= ", 4),
    Signature::contains(L::Go, "fmt.", 5),
    Signature::contains(L::Go, "err != nil", 6),
    Signature::contains(L::Go, "go func", 4),
    // C
    Signature::line_start(L::C, "#include", 3),
    Signature::line_start(L::C, "#define", 3),
    Signature::contains(L::C, "#include <stdio.h>", 6),
    Signature::contains(L::C, "#include <stdlib.h>", 6),
    Signature::contains(L::C, "printf(", 3),
    Signature::contains(L::C, "malloc(", 3),
    Signature::contains(L::C, "int main(", 3),
    Signature::contains(L::C, "->", 1),
    Signature::word(L::C, "typedef", 3),
    Signature::word(L::C, "struct", 1),
    Signature::word(L::C, "NULL", 2),
    // C++
    Signature::line_start(L::Cpp, "#include", 3),
    Signature::line_start(L::Cpp, "#define", 2),
    Signature::contains(L::Cpp, "#include <iostream>", 8),
    Signature::contains(L::Cpp, "std::", 5),
    Signature::contains(L::Cpp, "cout", 3),
    Signature::contains(L::Cpp, "int main(", 3),
    Signature::contains(L::Cpp, "->", 1),
    Signature::contains(L::Cpp, "::", 1),
    Signature::word(L::Cpp, "template", 3),
    Signature::word(L::Cpp, "nullptr", 4),
    Signature::word(L::Cpp, "virtual", 3),
    Signature::word(L::Cpp, "namespace", 2),
    Signature::word(L::Cpp, "class", 1),
    // Ruby
    Signature::prefix(L::Ruby, "#!/usr/bin/env ruby", 12),
    Signature::line_start(L::Ruby, "require '", 3),
    Signature::line_start(L::Ruby, "def ", 2),
    Signature::line_start(L::Ruby, "module ", 3),
    Signature::contains(L::Ruby, "do |", 5),
    Signature::contains(L::Ruby, "attr_accessor", 5),
    Signature::contains(L::Ruby, ".each", 2),
    Signature::word(L::Ruby, "end", 2),
    Signature::word(L::Ruby, "elsif", 5),
    Signature::word(L::Ruby, "puts", 4),
    Signature::word(L::Ruby, "unless", 3),
    Signature::word(L::Ruby, "nil", 1),
    // Shell
    Signature::prefix(L::Shell, "#!/bin/bash", 12),
    Signature::prefix(L::Shell, "#!/bin/sh", 12),
    Signature::prefix(L::Shell, "#!/usr/bin/env bash", 12),
    Signature::prefix(L::Shell, "#!/usr/bin/env sh", 12),
    Signature::prefix(L::Shell, "#!/bin/zsh", 12),
    Signature::line_start(L::Shell, "if [", 5),
    Signature::line_start(L::Shell, "export ", 2),
    Signature::line_start(L::Shell, "sudo ", 3),
    Signature::line_start(L::Shell, "apt-get ", 3),
    Signature::line_start(L::Shell, "cd ", 2),
    Signature::line_start(L::Shell, "$ ", 2),
    Signature::line_start(L::Shell, "echo ", 2),
    Signature::contains(L::Shell, "$(", 2),
    Signature::contains(L::Shell, "${", 1),
    Signature::word(L::Shell, "fi", 4),
    Signature::word(L::Shell, "esac", 5),
    Signature::word(L::Shell, "done", 2),
    Signature::word(L::Shell, "then", 1),
    // SQL
    Signature::word(L::Sql, "SELECT", 3),
    Signature::word(L::Sql, "FROM", 2),
    Signature::word(L::Sql, "WHERE", 2),
    Signature::word(L::Sql, "JOIN", 2),
    Signature::word(L::Sql, "VARCHAR", 4),
    Signature::contains(L::Sql, "INSERT INTO", 5),
    Signature::contains(L::Sql, "CREATE TABLE", 6),
    Signature::contains(L::Sql, "PRIMARY KEY", 4),
    Signature::contains(L::Sql, "GROUP BY", 3),
    Signature::contains(L::Sql, "ORDER BY", 3),
    Signature::contains(L::Sql, "insert into", 5),
    Signature::contains(L::Sql, "create table", 5),
    Signature::line_start(L::Sql, "select ", 3),
    Signature::contains(L::Sql, " from ", 1),
    // CSS
    Signature::line_start(L::Css, "@media", 5),
    Signature::line_start(L::Css, "@import", 3),
    Signature::line_start(L::Css, "body {", 4),
    Signature::contains(L::Css, "px;", 4),
    Signature::contains(L::Css, "rem;", 3),
    Signature::contains(L::Css, "em;", 2),
    Signature::contains(L::Css, "color:", 2),
    Signature::contains(L::Css, "margin:", 3),
    Signature::contains(L::Css, "padding:", 3),
    Signature::contains(L::Css, "font-size:", 4),
    Signature::contains(L::Css, "display:", 3),
    Signature::contains(L::Css, "!important", 3),
    // YAML
    Signature::prefix(L::Yaml, "---", 4),
    Signature::line_start(L::Yaml, "apiVersion:", 6),
    Signature::line_start(L::Yaml, "kind:", 3),
    Signature::line_start(L::Yaml, "services:", 5),
    Signature::line_start(L::Yaml, "jobs:", 5),
    Signature::line_start(L::Yaml, "steps:", 4),
    Signature::line_start(L::Yaml, "dependencies:", 3),
    Signature::line_start(L::Yaml, "name:", 2),
    Signature::line_start(L::Yaml, "version:", 2),
    Signature::line_start(L::Yaml, "- ", 1),
    Signature::contains(L::Yaml, ":\n  ", 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_plaintext() {
        assert_eq!(detect(""), Language::Plaintext);
        assert_eq!(detect("   \n\t  \n"), Language::Plaintext);
    }

    #[test]
    fn test_prose_is_plaintext() {
        assert_eq!(detect("Meeting notes: bring the slides."), Language::Plaintext);
    }

    #[test]
    fn test_json_document() {
        assert_eq!(detect(r#"{"name": "lexlight", "tags": [1, 2, 3]}"#), Language::Json);
        assert_eq!(detect("[1, 2, 3]"), Language::Json);
    }

    #[test]
    fn test_invalid_json_shape_is_not_json() {
        let scores = Detector::new().scores("{ not: json }");
        assert!(scores.iter().all(|s| s.language != Language::Json));
    }

    #[test]
    fn test_rust() {
        let source = "use std::io;\n\nfn main() {\n    let mut x = 5;\n    println!(\"{}\", x);\n}\n";
        assert_eq!(detect(source), Language::Rust);
    }

    #[test]
    fn test_python() {
        let source = "#!/usr/bin/env python\nimport os\n\ndef main():\n    print('hi')\n";
        assert_eq!(detect(source), Language::Python);

        let source = "class Greeter:\n    def __init__(self, name):\n        self.name = name\n";
        assert_eq!(detect(source), Language::Python);
    }

    #[test]
    fn test_javascript_and_typescript() {
        let js = "const add = (a, b) => a + b;\nconsole.log(add(1, 2));\n";
        assert_eq!(detect(js), Language::JavaScript);

        let ts = "export interface User {\n  name: string;\n  age: number;\n}\n";
        assert_eq!(detect(ts), Language::TypeScript);
    }

    #[test]
    fn test_html_and_php() {
        let html = "<!DOCTYPE html>\n<html>\n<body><div class=\"a\">Hi</div></body>\n</html>\n";
        assert_eq!(detect(html), Language::Html);

        let php = "<?php\necho 'hello';\n$x = 1;\n";
        assert_eq!(detect(php), Language::Php);
    }

    #[test]
    fn test_dart() {
        let source = "import 'package:flutter/material.dart';\n\nclass App extends StatelessWidget {\n  @override\n  Widget build(BuildContext context) {\n    return Text('hi');\n  }\n}\n";
        assert_eq!(detect(source), Language::Dart);
    }

    #[test]
    fn test_go_and_shell() {
        let go = "package main\n\nimport \"fmt\"\n\nfunc main() {\n    x := 1\n    fmt.Println(x)\n}\n";
        assert_eq!(detect(go), Language::Go);

        let sh = "#!/bin/bash\nif [ -f \"$FILE\" ]; then\n  echo found\nfi\n";
        assert_eq!(detect(sh), Language::Shell);
    }

    #[test]
    fn test_sql() {
        assert_eq!(detect("SELECT id, name FROM users WHERE id = 1;"), Language::Sql);
    }

    #[test]
    fn test_tie_break_follows_priority() {
        let detector = Detector::with_signatures(vec![
            Signature::word(Language::Ruby, "end", 2),
            Signature::word(Language::Rust, "end", 2),
        ]);
        // Rust precedes Ruby in the priority list.
        assert_eq!(detector.detect("end"), Language::Rust);
        let scores = detector.scores("end");
        assert_eq!(scores[0].language, Language::Rust);
        assert_eq!(scores[1].language, Language::Ruby);
    }

    #[test]
    fn test_word_requires_identifier_boundary() {
        let detector = Detector::with_signatures(vec![Signature::word(Language::Python, "class", 5)]);
        assert_eq!(detector.detect("classifier = 1"), Language::Plaintext);
        assert_eq!(detector.detect("class A: pass"), Language::Python);
    }

    #[test]
    fn test_min_score() {
        let detector = Detector::with_signatures(vec![Signature::word(Language::Go, "func", 1)])
            .with_min_score(2);
        assert_eq!(detector.detect("func"), Language::Plaintext);
    }

    #[test]
    fn test_extend_with_custom_signature() {
        let mut detector = Detector::new();
        detector.extend([Signature::new(
            Language::Kotlin,
            Pattern::Contains("fun interface".into()),
            50,
        )]);
        assert_eq!(detector.detect("fun interface Callback"), Language::Kotlin);
    }

    #[test]
    fn test_json_larger_than_sample_window() {
        let rows = vec![r#"{"id": 1, "name": "x"}"#; 5000].join(",\n");
        let text = format!("[\n{rows}\n]\n");
        assert!(text.len() > DEFAULT_SAMPLE_BYTES);
        assert_eq!(detect(&text), Language::Json);

        let small = Detector::new().with_sample_bytes(16);
        assert_eq!(small.detect(r#"{"name": "lexlight", "tags": ["a", "b"]}"#), Language::Json);
    }

    #[test]
    fn test_scores_saturate_instead_of_overflowing() {
        let detector = Detector::with_signatures(vec![
            Signature::word(Language::Rust, "fn", u32::MAX),
            Signature::word(Language::Rust, "let", u32::MAX),
            Signature::word(Language::Go, "func", 1),
        ]);
        let scores = detector.scores("fn let func");
        assert_eq!(scores[0].language, Language::Rust);
        assert_eq!(scores[0].score, u32::MAX);
        assert_eq!(detector.detect("fn let func"), Language::Rust);
    }

    #[test]
    fn test_sample_window_respects_char_boundary() {
        let text = "é".repeat(10);
        let window = sample_window(&text, 5);
        assert_eq!(window.len(), 4);
        assert!(Detector::new().with_sample_bytes(5).scores(&text).is_empty());
    }

    #[test]
    fn test_detection_is_stable() {
        let source = "fn main() { let mut v = Vec::new(); v.push(1); }";
        let first = detect(source);
        for _ in 0..5 {
            assert_eq!(detect(source), first);
        }
    }

    #[test]
    fn test_signature_deserializes_from_toml() {
        let signature: Signature = toml::from_str(
            r#"
            language = "rust"
            weight = 3
            pattern = { kind = "word", pattern = "impl" }
            "#,
        )
        .unwrap();
        assert_eq!(signature.language, Language::Rust);
        assert_eq!(signature.pattern, Pattern::Word("impl".into()));
    }
}
