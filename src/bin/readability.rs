//! Command-line article extractor.
//!
//! ```text
//! readability [-l <n>] [--json] <path | ->
//! ```
//!
//! Reads an HTML file (or stdin for `-`) and prints the extracted article.
//! Diagnostics go to stderr; set `RUST_LOG=rs_readability=debug` to see the
//! pipeline's decisions.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::rc::Rc;

use clap::Parser;
use rs_readability::{Document, Options, TracingSink};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Extract the main article from an HTML document", long_about = None)]
struct Cli {
    /// HTML file to read, or `-` for stdin
    path: PathBuf,

    /// Minimum paragraph length that earns a score
    #[arg(short = 'l', long, default_value_t = 0)]
    min_text_length: usize,

    /// Print `{"title", "content"}` as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    title: &'a str,
    content: &'a str,
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(path)
    }
}

fn run(args: &Cli) -> Result<String, String> {
    let bytes = read_input(&args.path).map_err(|e| format!("{}: {e}", args.path.display()))?;

    let mut doc = Document::from_bytes(&bytes)
        .map_err(|e| e.to_string())?
        .with_sink(Rc::new(TracingSink));
    doc.options = Options {
        min_text_length: args.min_text_length,
        ..Options::default()
    };

    let content = doc.content().map_err(|e| e.to_string())?.to_string();
    tracing::info!(chars = content.chars().count(), "extracted article");

    if args.json {
        let output = Output {
            title: doc.title(),
            content: &content,
        };
        serde_json::to_string(&output).map_err(|e| e.to_string())
    } else {
        Ok(content)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["readability", "page.html"]).expect("parses");
        assert_eq!(cli.path, PathBuf::from("page.html"));
        assert_eq!(cli.min_text_length, 0);
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["readability", "-l", "25", "--json", "-"]).expect("parses");
        assert_eq!(cli.path, PathBuf::from("-"));
        assert_eq!(cli.min_text_length, 25);
        assert!(cli.json);

        let cli = Cli::try_parse_from(["readability", "--min-text-length", "40", "-"]).expect("parses");
        assert_eq!(cli.min_text_length, 40);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["readability"]).is_err());
        assert!(Cli::try_parse_from(["readability", "-l", "many", "x.html"]).is_err());
        assert!(Cli::try_parse_from(["readability", "a.html", "b.html"]).is_err());
    }
}
