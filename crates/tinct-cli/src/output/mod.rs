//! Rendering of highlighted tokens.
//!
//! JSON output is the token stream as serialised by the core. Human output
//! lists one token per line with 1-based positions and the highlighted
//! text. LSP output carries the legend, the negotiated column unit, and the
//! relative integer encoding a client would receive.

mod human;
mod lsp;

use std::io::Write;

use camino::Utf8Path;
use clap::ValueEnum;
use tinct_core::SemanticToken;
use tinct_lsp::PositionEncoding;

use crate::errors::AppError;

pub(crate) use human::render_human;
pub(crate) use lsp::LspDocument;

/// Output format for `tinct highlight`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The span stream as a JSON array.
    #[default]
    Json,
    /// One token per line for terminals.
    Human,
    /// LSP semantic tokens with their legend.
    Lsp,
}

/// A highlighted document ready for rendering.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Highlighted<'a> {
    pub(crate) path: &'a Utf8Path,
    pub(crate) text: &'a str,
    pub(crate) tokens: &'a [SemanticToken],
}

impl Highlighted<'_> {
    /// Writes the document to `out` in `format`.
    pub(crate) fn write<W: Write>(
        &self,
        format: OutputFormat,
        encoding: PositionEncoding,
        out: &mut W,
    ) -> Result<(), AppError> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self.tokens)?;
                writeln!(out)?;
            }
            OutputFormat::Human => {
                out.write_all(render_human(self.path, self.text, self.tokens).as_bytes())?;
            }
            OutputFormat::Lsp => {
                let document = LspDocument::new(self.text, encoding, self.tokens);
                serde_json::to_writer_pretty(&mut *out, &document)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
