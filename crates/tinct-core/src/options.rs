//! Options controlling a highlight call.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Order of the returned span stream.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TokenOrdering {
    /// The order the classifier visited the tree in.
    #[default]
    Traversal,
    /// Sorted by line, then column. Ties keep traversal order.
    Position,
}

/// Errors encountered while parsing a [`TokenOrdering`] from text.
pub type TokenOrderingParseError = strum::ParseError;

/// Options for [`crate::highlight`].
///
/// # Example
///
/// ```
/// use tinct_core::{HighlightOptions, TokenOrdering};
///
/// let options = HighlightOptions::default();
/// assert_eq!(options.ordering(), TokenOrdering::Traversal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightOptions {
    ordering: TokenOrdering,
}

impl HighlightOptions {
    /// Creates options with an explicit ordering.
    #[must_use]
    pub const fn new(ordering: TokenOrdering) -> Self {
        Self { ordering }
    }

    /// Returns the requested ordering.
    #[must_use]
    pub const fn ordering(&self) -> TokenOrdering {
        self.ordering
    }
}
