//! Property tests for the tokenizer and detector contracts.
//!
//! Every property runs over arbitrary text, a source-like alphabet that hits
//! delimiters far more often than uniform unicode does, and every language.

use lexlight_syntax::{Language, Span, clip_to_lines, detect, tokenize, tokenize_tag};
use proptest::prelude::*;

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

/// Text built from fragments that open and close lexical constructs.
fn source_like() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "\"", "'", "`", "\\", "/*", "*/", "//", "#", "<!--", "-->", "<", ">",
        "</", "/>", "=", "&amp;", "<?php", "?>", "r#\"", "\"#", "\"\"\"", "{",
        "}", "(", ")", ":", ";", "$", "${", "@", "!", "\n", "\r\n", " ", "\t",
        "fn", "class", "def", "let", "x", "0x1F", "1.5e3", "é", "✓", "λ",
        "<script>", "</script>", "<style>", "</style>", ".a", "--", "'a",
    ]);
    prop::collection::vec(fragment, 0..64).prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), source_like()]
}

fn assert_well_formed(text: &str, spans: &[Span]) -> Result<(), TestCaseError> {
    let mut previous_end = 0;
    for span in spans {
        prop_assert!(span.start < span.end, "empty span {:?}", span);
        prop_assert!(span.end <= text.len(), "span {:?} past end {}", span, text.len());
        prop_assert!(span.start >= previous_end, "overlap or unsorted at {:?}", span);
        prop_assert!(text.is_char_boundary(span.start));
        prop_assert!(text.is_char_boundary(span.end));
        previous_end = span.end;
    }
    Ok(())
}

proptest! {
    #[test]
    fn spans_are_sorted_disjoint_and_in_bounds(text in any_text(), language in language()) {
        let spans = tokenize(&text, language);
        assert_well_formed(&text, &spans)?;
    }

    #[test]
    fn tokenize_is_deterministic(text in any_text(), language in language()) {
        prop_assert_eq!(tokenize(&text, language), tokenize(&text, language));
    }

    #[test]
    fn unknown_tags_behave_like_plaintext(text in source_like(), tag in "[a-z]{7,12}") {
        prop_assume!(tag.parse::<Language>().is_err());
        prop_assert_eq!(tokenize_tag(&text, &tag), tokenize(&text, Language::Plaintext));
    }

    #[test]
    fn detect_is_stable(text in any_text()) {
        let first = detect(&text);
        prop_assert_eq!(first, detect(&text));
    }

    #[test]
    fn whitespace_detects_as_plaintext(text in "[ \t\r\n]{0,32}") {
        prop_assert_eq!(detect(&text), Language::Plaintext);
    }

    #[test]
    fn line_fragments_cover_exactly_the_spans(text in source_like(), language in language()) {
        let spans = tokenize(&text, language);
        let lines = clip_to_lines(&text, &spans);
        prop_assert_eq!(lines.len(), text.split('\n').count());

        let covered: usize = spans.iter().map(Span::len).sum();
        let fragments: usize = lines.iter().flatten().map(Span::len).sum();
        let line_breaks: usize = spans
            .iter()
            .map(|span| span.text(&text).bytes().filter(|b| matches!(b, b'\r' | b'\n')).count())
            .sum();
        // Fragments drop exactly the line terminators inside spans.
        prop_assert!(fragments <= covered);
        prop_assert!(covered - fragments <= line_breaks);

        for fragment in lines.iter().flatten() {
            prop_assert!(!fragment.text(&text).contains('\n'));
        }
    }
}

#[test]
fn empty_text_is_empty_for_every_language() {
    for language in Language::ALL {
        assert!(tokenize("", language).is_empty());
    }
    assert_eq!(detect(""), Language::Plaintext);
}
