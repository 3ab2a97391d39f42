//! Document loading under a best-effort multi-encoding policy
//!
//! Export files never declare their encoding, so the loader walks an
//! ordered candidate list and keeps the first strict decode that
//! succeeds. Windows-1252 is last because it accepts every byte
//! sequence, which also makes it the terminal fallback covering the
//! Latin-1 exports seen in the wild.

use crate::error::{ParseError, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::debug;

/// The full decoded text of one export file
#[derive(Debug, Clone)]
pub struct RawDocument {
    text: String,
    encoding: &'static str,
}

impl RawDocument {
    /// The decoded document text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name of the encoding that produced the text
    #[must_use]
    pub const fn encoding(&self) -> &'static str {
        self.encoding
    }
}

/// Decode raw export bytes into text
///
/// Returns [`ParseError::Decode`] if no candidate encoding accepts the
/// input without error.
pub fn decode_document(raw: &[u8]) -> Result<RawDocument> {
    let candidates: [&'static Encoding; 2] = [UTF_8, WINDOWS_1252];

    for encoding in candidates {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(raw) {
            debug!(encoding = encoding.name(), bytes = raw.len(), "decoded export document");
            return Ok(RawDocument {
                text: text.into_owned(),
                encoding: encoding.name(),
            });
        }
    }

    let tried: Vec<&str> = candidates.iter().map(|e| e.name()).collect();
    Err(ParseError::Decode(format!(
        "no candidate encoding succeeded (tried {})",
        tried.join(", ")
    )))
}
