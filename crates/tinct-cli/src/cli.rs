//! CLI argument definitions for tinct.

use camino::Utf8PathBuf;
use clap::{ArgGroup, Args, Parser, Subcommand};
use tinct_core::TokenOrdering;
use tinct_lsp::PositionEncoding;

use crate::config::LoggingConfig;
use crate::output::OutputFormat;

/// Command-line interface for the tinct semantic highlighter.
#[derive(Parser, Debug)]
#[command(
    name = "tinct",
    version,
    about = "Semantic highlighting for Scala syntax trees",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Structured subcommands for the tinct CLI.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Classifies a source file and prints its tokens.
    Highlight(HighlightArgs),
    /// Prints the token legend as JSON.
    Legend,
}

/// Arguments for `tinct highlight`.
#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("tree_source")
        .required(true)
        .args(["tree", "parser"])
))]
pub(crate) struct HighlightArgs {
    /// Scala source file to highlight.
    #[arg(value_name = "SOURCE")]
    pub(crate) source: Utf8PathBuf,
    /// JSON syntax tree of the source, produced ahead of time.
    #[arg(long, value_name = "FILE")]
    pub(crate) tree: Option<Utf8PathBuf>,
    /// Program that reads the source on stdin and prints its JSON tree.
    #[arg(long, value_name = "PROGRAM")]
    pub(crate) parser: Option<String>,
    /// Argument passed to the parser program. Repeat for several.
    #[arg(
        long = "parser-arg",
        value_name = "ARG",
        requires = "parser",
        allow_hyphen_values = true
    )]
    pub(crate) parser_args: Vec<String>,
    /// Order of the printed tokens: `traversal` or `position`.
    #[arg(long, value_name = "ORDER", default_value_t = TokenOrdering::Traversal)]
    pub(crate) order: TokenOrdering,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    /// Column unit for `--format lsp`: `utf-8` or `utf-16`.
    #[arg(long, value_name = "ENCODING", default_value_t = PositionEncoding::Utf16)]
    pub(crate) encoding: PositionEncoding,
}
