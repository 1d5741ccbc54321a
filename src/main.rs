//! # Lexlight - Syntax Highlighting in the Terminal
//!
//! Detects the language of a file (or stdin) and prints it with line numbers
//! and colors, as plain text, or as a JSON span dump.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight a file
//! cargo run -- src/main.rs
//!
//! # Force a language and dump spans
//! cat snippet.txt | cargo run -- --language python --format json
//!
//! # Show what detection thinks
//! cargo run -- --detect notes.txt
//! ```

mod render;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use lexlight_syntax::Language;
use lexlight_view::{Config, HighlightCache, SourceDocument};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render::{RenderOptions, SpanReport};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// 24-bit ANSI colors
    Ansi,
    /// Text only
    Plain,
    /// Span dump
    Json,
}

/// Lexlight - language detection and syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "lexlight")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to highlight; `-` or none reads stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Language to use instead of detection
    #[arg(short, long, value_name = "LANG")]
    language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// Color theme (dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Hide line numbers
    #[arg(long)]
    no_line_numbers: bool,

    /// Copy the input text to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Print the detected language and scores instead of the text
    #[arg(long)]
    detect: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One input buffer and where it came from.
struct Input {
    name: Option<String>,
    path: Option<PathBuf>,
    text: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::info!("Starting lexlight v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    if args.dump_config {
        print!("{}", toml::to_string_pretty(&config).context("Failed to serialize config")?);
        return Ok(());
    }

    let forced = forced_language(&args, &config)?;
    let detector = config.detector();
    let table = config.style_table().context("Invalid theme or style override")?;
    let options = RenderOptions {
        line_numbers: config.viewer.line_numbers && !args.no_line_numbers,
        tab_size: config.viewer.tab_size,
    };
    let mut cache = HighlightCache::new(config.highlight.cache_capacity);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let inputs = read_inputs(&args.files)?;
    let multiple = inputs.len() > 1;
    for input in &inputs {
        let language = forced.or_else(|| input.path.as_deref().and_then(Language::from_extension));

        if args.detect {
            write_detection(&mut out, input, &detector, language)?;
            continue;
        }

        let doc = SourceDocument::builder(input.text.as_str())
            .language(language)
            .detector(&detector)
            .max_bytes(config.highlight.max_bytes)
            .cache(&mut cache)
            .build();
        tracing::debug!(
            source = input.name.as_deref().unwrap_or("<stdin>"),
            language = %doc.language(),
            spans = doc.spans().len(),
            "highlighted"
        );

        match args.format {
            Format::Json => render::render_json(&SpanReport::new(&doc, input.name.as_deref()), &mut out)?,
            format => {
                if multiple {
                    writeln!(out, "==> {} <==", input.name.as_deref().unwrap_or("<stdin>"))?;
                }
                if format == Format::Ansi {
                    render::render_ansi(&doc, &table, options, &mut out)?;
                } else {
                    render::render_plain(&doc, options, &mut out)?;
                }
            }
        }
    }
    out.flush()?;

    if args.copy {
        let text: String = inputs.iter().map(|input| input.text.as_str()).collect();
        copy_to_clipboard(&text)?;
    }

    let (hits, misses) = cache.stats();
    tracing::debug!(hits, misses, "highlight cache");
    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG refines the -v level when set.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(theme) = &args.theme {
        config.viewer.theme = theme.clone();
    }
    if let Some(language) = &args.language {
        config.highlight.language = Some(language.clone());
    }
    Ok(config)
}

/// The `--language` flag is strict; a configured language is lenient.
fn forced_language(args: &Args, config: &Config) -> anyhow::Result<Option<Language>> {
    match &args.language {
        Some(name) => {
            let language = name
                .parse::<Language>()
                .with_context(|| format!("Invalid --language value {name:?}"))?;
            Ok(Some(language))
        }
        None => Ok(config.language_override()),
    }
}

fn read_inputs(files: &[PathBuf]) -> anyhow::Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                read_stdin()
            } else {
                read_file(path)
            }
        })
        .collect()
}

fn read_stdin() -> anyhow::Result<Input> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(Input {
        name: None,
        path: None,
        text: decode(bytes),
    })
}

fn read_file(path: &Path) -> anyhow::Result<Input> {
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Input {
        name: Some(path.display().to_string()),
        path: Some(path.to_path_buf()),
        text: decode(bytes),
    })
}

/// Decodes UTF-8, replacing invalid sequences rather than refusing the input.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Input is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

fn write_detection(
    out: &mut impl Write,
    input: &Input,
    detector: &lexlight_syntax::Detector,
    forced: Option<Language>,
) -> anyhow::Result<()> {
    let source = input.name.as_deref().unwrap_or("<stdin>");
    let detected = detector.detect(&input.text);
    match forced {
        Some(language) => writeln!(out, "{source}: {language} (forced, detected {detected})")?,
        None => writeln!(out, "{source}: {detected}")?,
    }
    for score in detector.scores(&input.text).iter().take(5) {
        writeln!(out, "  {:<12} {}", score.language.name(), score.score)?;
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to access the clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to the clipboard")?;
    tracing::info!(bytes = text.len(), "Copied to clipboard");
    eprintln!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
