//! Output renderers for highlighted documents.
//!
//! Every renderer writes to any `io::Write`, so tests render into a `Vec<u8>`
//! and the binary renders into a locked, buffered stdout.

use crossterm::queue;
use crossterm::style::{Attribute, Color as TermColor, Print, SetAttribute, SetForegroundColor};
use lexlight_syntax::{Language, Span};
use lexlight_view::{Color, SourceDocument, Style, StyleTable};
use serde::Serialize;
use std::io::{self, Write};

/// Layout options shared by the text renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub tab_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            tab_size: 4,
        }
    }
}

/// Width of the line-number column.
fn gutter_width(doc: &SourceDocument) -> usize {
    doc.line_count().to_string().len()
}

/// Replaces tabs with spaces up to the next tab stop, tracking `column`.
fn expand_tabs(text: &str, column: &mut usize, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\t' && tab_size > 0 {
            let width = tab_size - *column % tab_size;
            out.extend(std::iter::repeat_n(' ', width));
            *column += width;
        } else {
            out.push(c);
            *column += 1;
        }
    }
    out
}

/// Writes the text with optional line numbers and no styling.
pub fn render_plain(doc: &SourceDocument, options: RenderOptions, out: &mut impl Write) -> io::Result<()> {
    let width = gutter_width(doc);
    for line in doc.lines() {
        if options.line_numbers {
            write!(out, "{:>width$} │ ", line.number)?;
        }
        let mut column = 0;
        writeln!(out, "{}", expand_tabs(line.text, &mut column, options.tab_size))?;
    }
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb { r, g, b }
}

fn set_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), SetForegroundColor(term_color(style.color)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

/// Writes the text with 24-bit ANSI colors from `table`.
pub fn render_ansi(
    doc: &SourceDocument,
    table: &StyleTable,
    options: RenderOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let width = gutter_width(doc);
    for line in doc.lines() {
        if options.line_numbers {
            set_style(out, Style::new(table.gutter()))?;
            queue!(out, Print(format!("{:>width$} │ ", line.number)))?;
        }
        let mut column = 0;
        for (kind, text) in line.segments() {
            set_style(out, table.get(kind))?;
            queue!(out, Print(expand_tabs(text, &mut column, options.tab_size)))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), Print("\n"))?;
    }
    out.flush()
}

/// Machine-readable dump of one highlighted document.
#[derive(Debug, Serialize)]
pub struct SpanReport<'a> {
    pub source: Option<&'a str>,
    pub language: Language,
    pub bytes: usize,
    pub lines: usize,
    pub highlighted: bool,
    pub spans: &'a [Span],
}

impl<'a> SpanReport<'a> {
    pub fn new(doc: &'a SourceDocument, source: Option<&'a str>) -> Self {
        Self {
            source,
            language: doc.language(),
            bytes: doc.text().len(),
            lines: doc.line_count(),
            highlighted: doc.is_highlighted(),
            spans: doc.spans(),
        }
    }
}

/// Writes the span report as pretty JSON followed by a newline.
pub fn render_json(report: &SpanReport<'_>, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
