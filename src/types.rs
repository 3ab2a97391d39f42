//! Canonical record type and derived views

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully validated email record recovered from one export row
///
/// Every field is always present after validation; missing or invalid
/// source values are replaced with defaults, never left empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRecord {
    /// Record identifier from the row boundary; unique-ish but not
    /// enforced unique at this layer
    pub email_id: String,

    /// Sender address, lower-cased; `unknown@domain.com` when the
    /// source value was blank or lacked an `@`
    pub sender_email: String,

    /// Sender display name, `Unknown Sender` when missing
    pub sender_name: String,

    /// Subject line, newline-flattened and capped at 200 characters
    pub subject: String,

    /// Body text with unescaped quoting and normalized whitespace
    pub body: String,

    /// ISO-8601-like timestamp, not reformatted by the parser
    pub timestamp: String,

    /// Attachment flag parsed from the export's TRUE/YES/1/T column
    pub has_attachment: bool,

    /// Conversation thread identifier, `thread_{email_id}` when missing
    pub thread_id: String,
}

impl EmailRecord {
    /// Domain part of the sender address
    #[must_use]
    pub fn sender_domain(&self) -> &str {
        self.sender_email
            .split_once('@')
            .map_or("Unknown", |(_, domain)| domain)
    }

    /// Upper-cased initials of the sender name, `??` when unavailable
    #[must_use]
    pub fn sender_initials(&self) -> String {
        let initial = |word: &str| word.chars().next();
        let words: Vec<&str> = self.sender_name.split_whitespace().collect();

        match words.as_slice() {
            [] => "??".to_string(),
            [only] => {
                initial(only).map_or_else(|| "??".to_string(), |c| c.to_uppercase().to_string())
            }
            [first, .., last] => match (initial(first), initial(last)) {
                (Some(f), Some(l)) => format!("{}{}", f.to_uppercase(), l.to_uppercase()),
                _ => "??".to_string(),
            },
        }
    }

    /// Single-line body preview, truncated to `max_len` characters
    #[must_use]
    pub fn preview(&self, max_len: usize) -> String {
        if self.body.trim().is_empty() {
            return "No content".to_string();
        }
        let flat = self.body.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() > max_len {
            let cut: String = flat.chars().take(max_len).collect();
            format!("{cut}...")
        } else {
            flat
        }
    }

    /// Humanized timestamp, `Unknown Date` when the stored value does
    /// not parse
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        parse_timestamp(&self.timestamp).map_or_else(
            || "Unknown Date".to_string(),
            |dt| dt.format("%B %d, %Y at %I:%M %p").to_string(),
        )
    }

    /// Age of the record in whole days, clamped at zero
    #[must_use]
    pub fn age_in_days(&self) -> i64 {
        parse_timestamp(&self.timestamp)
            .map_or(0, |dt| (Utc::now().naive_utc() - dt).num_days().max(0))
    }
}

impl fmt::Display for EmailRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} <{}>",
            self.email_id, self.subject, self.sender_email
        )
    }
}

/// Parse the export's loosely ISO-8601 timestamps; the trailing `Z` is
/// tolerated and fractional seconds are optional
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let raw = raw.strip_suffix('Z').unwrap_or(raw);

    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
