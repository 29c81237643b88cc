//! Core types for InspireFlow

use serde::{Deserialize, Serialize};

/// A single quote as served by the ZenQuotes API.
///
/// The wire shape is a JSON object with single-letter keys
/// (`{"q": "...", "a": "..."}`); the serde renames map them onto
/// readable field names. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text
    #[serde(rename = "q")]
    pub text: String,
    /// The quote's author
    #[serde(rename = "a")]
    pub author: String,
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.author)
    }
}
