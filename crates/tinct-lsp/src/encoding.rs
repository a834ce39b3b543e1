//! Column units negotiated with the client.

use std::fmt;
use std::str::FromStr;

use lsp_types::PositionEncodingKind;
use thiserror::Error;

/// Unit in which token columns and lengths are reported.
///
/// The core counts UTF-8 bytes. Clients that do not offer UTF-8 receive
/// UTF-16 code units, the protocol's mandatory default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PositionEncoding {
    /// UTF-8 bytes, identical to the core's offsets.
    Utf8,
    /// UTF-16 code units.
    #[default]
    Utf16,
}

impl PositionEncoding {
    /// Picks UTF-8 when the client offers it, otherwise UTF-16.
    #[must_use]
    pub fn negotiate(offered: &[PositionEncodingKind]) -> Self {
        if offered.contains(&PositionEncodingKind::UTF8) {
            Self::Utf8
        } else {
            Self::Utf16
        }
    }

    /// Returns the protocol value to advertise in server capabilities.
    #[must_use]
    pub fn kind(self) -> PositionEncodingKind {
        match self {
            Self::Utf8 => PositionEncodingKind::UTF8,
            Self::Utf16 => PositionEncodingKind::UTF16,
        }
    }

    /// Returns the protocol identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }
}

impl fmt::Display for PositionEncoding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Errors raised when parsing encoding identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported position encoding '{0}'")]
pub struct EncodingParseError(String);

impl EncodingParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for PositionEncoding {
    type Err = EncodingParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            other => Err(EncodingParseError(other.to_owned())),
        }
    }
}
