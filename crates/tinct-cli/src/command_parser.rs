//! Tree parser backed by an external program.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tinct_core::{Node, ParseError, TreeParser, parse_tree_json};
use tracing::debug;

/// Log target for external parser runs.
const PARSER_TARGET: &str = "tinct_cli::command_parser";

/// Runs a program that turns Scala source into a JSON syntax tree.
///
/// The source is written to the program's stdin and the tree is read from
/// its stdout. A non-zero exit fails the parse with the program's stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParser {
    program: String,
    args: Vec<String>,
}

impl CommandParser {
    /// Creates a parser that runs `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument for the program.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments for the program.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TreeParser for CommandParser {
    fn parse(&self, text: &str) -> Result<Node, ParseError> {
        debug!(
            target: PARSER_TARGET,
            program = %self.program,
            args = ?self.args,
            text_len = text.len(),
            "spawning parser process"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| ParseError::spawn(self.program.clone(), error))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ParseError::Io(io::Error::other("parser stdin was not captured")))?;

        // Parsers may write output before draining stdin.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(text.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output.map_err(ParseError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ParseError::parser_failed(
                output.status.code(),
                stderr.trim(),
            ));
        }

        match written {
            Ok(Ok(())) => {}
            // Exited successfully without reading all of stdin.
            Ok(Err(error)) if error.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(error)) => return Err(ParseError::Io(error)),
            Err(_) => return Err(ParseError::Io(io::Error::other("stdin writer panicked"))),
        }

        debug!(
            target: PARSER_TARGET,
            program = %self.program,
            tree_len = output.stdout.len(),
            "parser process finished"
        );
        let json = String::from_utf8(output.stdout)
            .map_err(|error| ParseError::with_source("parser output is not UTF-8", error))?;
        parse_tree_json(&json)
    }
}
