use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use yamlet::{pretty, LoadError, ParseError, ReaderInput, StrInput};

/// Parse a YAML file, or show how it is tokenized.
#[derive(Parser, Debug)]
#[command(name = "yamlet", version)]
struct Cli {
    /// Path to the YAML file
    file: PathBuf,

    /// Print the parsed document (the default)
    #[arg(long)]
    parse: bool,

    /// Print the colourised token stream
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    debug!(?cli, "starting");

    if cli.pretty {
        let rendered = File::open(&cli.file)
            .and_then(|f| pretty::render_input(ReaderInput::new(BufReader::new(f))));
        match rendered {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: {}: {e}", cli.file.display());
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.parse || !cli.pretty {
        match yamlet::load_from_file(&cli.file) {
            Ok(doc) => println!("{doc}"),
            Err(LoadError::Parse(e)) => {
                report(&cli.file, &e);
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("error: {}: {e}", cli.file.display());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Error, Debug, Diagnostic)]
#[error("{message}")]
#[diagnostic()]
struct ParseDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

/// Print a parse error, pointing at the offending token when the file can be read again.
fn report(path: &Path, error: &ParseError) {
    let Ok(contents) = fs::read_to_string(path) else {
        eprintln!("error: {}: {error}", path.display());
        return;
    };
    let span = match error.current() {
        Some(token) => {
            let offset = byte_offset(&contents, token.line(), token.col());
            (offset, token.text().len()).into()
        }
        None => (contents.len(), 0).into(),
    };
    let diagnostic = ParseDiagnostic {
        message: error.to_string(),
        src: NamedSource::new(path.display().to_string(), contents),
        span,
        label: error.kind().to_string(),
    };
    eprintln!("{:?}", miette::Error::new(diagnostic));
}

/// Convert a 1-based line and character column into a byte offset within `contents`.
fn byte_offset(contents: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (i, text) in StrInput::new(contents).enumerate() {
        if i + 1 == line {
            return offset
                + text
                    .char_indices()
                    .nth(col - 1)
                    .map_or(text.len(), |(idx, _)| idx);
        }
        offset += text.len();
    }
    offset
}
