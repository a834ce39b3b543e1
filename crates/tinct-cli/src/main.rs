//! CLI entrypoint for the tinct semantic highlighter.
//!
//! The binary delegates to [`tinct_cli::run`], which parses arguments,
//! installs telemetry, and writes highlighted tokens to stdout.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    tinct_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
