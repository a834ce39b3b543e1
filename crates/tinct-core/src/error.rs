//! Error types for obtaining syntax trees.
//!
//! Classification itself never fails: unknown productions are skipped. The
//! only failure a caller observes is the external parser being unable to
//! supply a tree, which aborts the whole call with no partial result.

use std::error::Error;
use std::io;

use thiserror::Error;

/// Errors raised while producing a syntax tree for a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The tree payload was not a valid serialised syntax tree.
    #[error("invalid syntax tree: {0}")]
    InvalidTree(#[from] serde_json::Error),

    /// The external parser program could not be started.
    #[error("failed to start parser '{program}': {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Exchanging the document or tree with the parser failed.
    #[error("parser I/O failed: {0}")]
    Io(#[source] io::Error),

    /// The parser ran but rejected the document.
    #[error("parser exited with {}: {stderr}", exit_label(*.status))]
    ParserFailed {
        /// Exit code, absent when the process was killed by a signal.
        status: Option<i32>,
        /// Trimmed standard error of the parser.
        stderr: String,
    },

    /// The external parser reported that it could not parse the document.
    #[error("parser failed: {message}")]
    Failed {
        /// Description of the failure.
        message: String,
        /// Underlying cause, when one is available.
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },
}

impl ParseError {
    /// Creates a spawn failure for `program`.
    #[must_use]
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Creates a non-zero exit failure.
    #[must_use]
    pub fn parser_failed(status: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ParserFailed {
            status,
            stderr: stderr.into(),
        }
    }

    /// Creates a parser failure without an underlying cause.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a parser failure wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::Failed {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

fn exit_label(status: Option<i32>) -> String {
    status.map_or_else(|| "a signal".to_owned(), |code| format!("status {code}"))
}
