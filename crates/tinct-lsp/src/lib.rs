//! Language Server Protocol adapter for tinct span streams.
//!
//! The core produces spans with UTF-8 byte columns in traversal order. This
//! crate turns them into what a client expects: a [`legend`] that matches
//! the core's vocabularies, a negotiated [`PositionEncoding`], and the
//! relative five-integer encoding produced by [`SemanticTokensEncoder`].
//!
//! The transport itself (framing, lifecycle, document sync) belongs to the
//! host embedding this crate.

mod encoder;
mod encoding;
mod legend;

pub use encoder::SemanticTokensEncoder;
pub use encoding::{EncodingParseError, PositionEncoding};
pub use legend::{legend, server_capabilities};

#[cfg(test)]
mod tests;
