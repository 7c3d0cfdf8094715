//! `graphemes`: split text into extended grapheme clusters
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin graphemes -- "é🇺🇸"
//! echo "hello" | cargo run --bin graphemes -- --count
//! cargo run --bin graphemes -- --codepoints --reverse "😜🇺🇸👍"
//! ```

use grapheme_breaker::{Segmenter, SegmenterOptions, TableSource};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "graphemes - split text into extended grapheme clusters

USAGE:
    graphemes [OPTIONS] [TEXT]...

Words of TEXT are joined with single spaces. Without TEXT, standard input
is read and one trailing line ending is dropped.

OPTIONS:
    -h, --help              Print this help message and exit
    -c, --count             Print only the number of clusters
    -b, --boundaries        Print boundary offsets (UTF-16 code units)
    -r, --reverse           List clusters from last to first
    -u, --codepoints        Print clusters as U+XXXX code points
    --table <PATH>          Load a serialized class table instead of the
                            bundled one

EXAMPLES:
    graphemes \"नमस्ते\"              # One cluster per line
    graphemes --count \"😜🇺🇸👍\"     # 3
    graphemes -b \"a\\r\\nb\"
";

/// What to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Clusters,
    Count,
    Boundaries,
}

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub mode: OutputMode,
    pub reverse: bool,
    pub codepoints: bool,
    pub table: Option<PathBuf>,
    pub text: Option<String>,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut words: Vec<String> = Vec::new();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "-c" | "--count" => config.mode = OutputMode::Count,
                "-b" | "--boundaries" => config.mode = OutputMode::Boundaries,
                "-r" | "--reverse" => config.reverse = true,
                "-u" | "--codepoints" => config.codepoints = true,
                "--table" => match args.next() {
                    Some(path) => config.table = Some(PathBuf::from(path)),
                    None => return ParseResult::Error("--table requires a value".to_string()),
                },
                "--" => {
                    words.extend(args.by_ref().map(|a| a.to_string_lossy().into_owned()));
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return ParseResult::Error(format!("Unknown option: {other}"));
                }
                other => words.push(other.to_string()),
            }
        }

        if !words.is_empty() {
            config.text = Some(words.join(" "));
        }
        ParseResult::Config(config)
    }

    fn segmenter_options(&self) -> SegmenterOptions {
        SegmenterOptions {
            table: self
                .table
                .clone()
                .map_or(TableSource::Bundled, TableSource::Path),
            ..SegmenterOptions::default()
        }
    }
}

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    };

    let segmenter = match Segmenter::with_options(config.segmenter_options()) {
        Ok(segmenter) => segmenter,
        Err(err) => {
            eprintln!("Error: failed to load class table: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&config, &segmenter) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn read_input(config: &Config) -> io::Result<String> {
    if let Some(text) = &config.text {
        return Ok(text.clone());
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn run(config: &Config, segmenter: &Segmenter) -> io::Result<()> {
    let input = read_input(config)?;
    let text: Vec<u16> = input.encode_utf16().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.mode {
        OutputMode::Count => writeln!(out, "{}", segmenter.count_breaks(&text))?,
        OutputMode::Boundaries => {
            let mut boundaries = segmenter.boundaries(&text);
            if config.reverse {
                boundaries.reverse();
            }
            let line: Vec<String> = boundaries.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        OutputMode::Clusters => {
            let clusters: Box<dyn Iterator<Item = &[u16]> + '_> = if config.reverse {
                Box::new(segmenter.graphemes(&text).rev())
            } else {
                Box::new(segmenter.graphemes(&text))
            };
            for cluster in clusters {
                writeln!(out, "{}", render_cluster(cluster, config.codepoints))?;
            }
        }
    }

    out.flush()
}

fn render_cluster(cluster: &[u16], codepoints: bool) -> String {
    if !codepoints {
        return String::from_utf16_lossy(cluster);
    }
    char::decode_utf16(cluster.iter().copied())
        .map(|c| match c {
            Ok(ch) => format!("U+{:04X}", u32::from(ch)),
            Err(err) => format!("U+{:04X}", err.unpaired_surrogate()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
