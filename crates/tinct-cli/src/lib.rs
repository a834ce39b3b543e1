//! Command-line interface runtime for tinct.
//!
//! The runtime parses arguments, installs telemetry, obtains a syntax tree
//! for the requested source file (from a pre-serialised JSON file or an
//! external parser program), classifies it, and writes the tokens to the
//! supplied stdout. Every failure is reported on the supplied stderr and
//! turned into a non-zero exit code, so the same entry point serves the
//! binary and in-process tests.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser;
use clap::error::ErrorKind;
use tinct_core::{HighlightOptions, JsonTreeParser, TreeParser, highlight};
use tracing::{debug, warn};

mod cli;
mod command_parser;
mod config;
mod errors;
mod output;
pub mod telemetry;

pub use command_parser::CommandParser;
pub use config::{DEFAULT_LOG_FILTER, LogFormat, LogFormatParseError, LoggingConfig};

use cli::{Cli, CliCommand, HighlightArgs};
use errors::AppError;
use output::Highlighted;

/// Log target for the CLI runtime.
const CLI_TARGET: &str = "tinct_cli";

/// Runs the CLI using the provided arguments and IO handles.
///
/// The first argument is the program name, as with [`std::env::args_os`].
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            return match write!(stdout, "{}", error.render()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(error) => return report(stderr, &AppError::CliUsage(error)),
    };

    match execute(&cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(stderr, &error),
    }
}

fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> Result<(), AppError> {
    let telemetry = telemetry::initialise(&cli.logging)?;
    debug!(
        target: CLI_TARGET,
        installed = telemetry.installed(),
        "telemetry ready"
    );
    match &cli.command {
        CliCommand::Highlight(args) => run_highlight(args, stdout),
        CliCommand::Legend => {
            serde_json::to_writer_pretty(&mut *stdout, &tinct_lsp::legend())?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

fn run_highlight<W: Write>(args: &HighlightArgs, stdout: &mut W) -> Result<(), AppError> {
    let text = read_input(&args.source)?;
    let parser = tree_parser(args)?;
    let options = HighlightOptions::new(args.order);

    let tokens = highlight(&text, parser.as_ref(), &options)
        .map_err(|source| AppError::highlight(&args.source, source))?;
    debug!(
        target: CLI_TARGET,
        path = %args.source,
        tokens = tokens.len(),
        format = ?args.format,
        "highlighted document"
    );

    Highlighted {
        path: &args.source,
        text: &text,
        tokens: &tokens,
    }
    .write(args.format, args.encoding, stdout)
}

fn tree_parser(args: &HighlightArgs) -> Result<Box<dyn TreeParser>, AppError> {
    match (&args.tree, &args.parser) {
        (Some(tree), _) => Ok(Box::new(JsonTreeParser::new(read_input(tree)?))),
        (None, Some(program)) => Ok(Box::new(
            CommandParser::new(program.as_str()).args(args.parser_args.iter().cloned()),
        )),
        (None, None) => Err(AppError::MissingTreeSource),
    }
}

fn read_input(path: &Utf8Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|error| AppError::read_input(path, error))
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    let written = match error {
        AppError::CliUsage(usage) => write!(stderr, "{}", usage.render()),
        other => writeln!(stderr, "tinct: {other}"),
    };
    if let Err(write_error) = written {
        warn!(target: CLI_TARGET, %write_error, "failed to report error");
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests;
