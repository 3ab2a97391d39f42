//! Record validation and per-field sanitization
//!
//! Every extracted row either becomes a fully-populated record or is
//! rejected outright. No field is ever left empty: absent, blank, or
//! header-echo values are replaced with documented defaults so that
//! downstream consumers never see a null.

use crate::error::{ParseError, Result};
use crate::fields::RawFields;
use crate::types::EmailRecord;
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Maximum retained subject length, in characters
const SUBJECT_CAP: usize = 200;

/// Blank values and header echoes count as missing
fn is_placeholder(value: &str, tokens: &[&str]) -> bool {
    value.is_empty() || tokens.contains(&value.to_lowercase().as_str())
}

/// Validate the eight raw fields into a canonical [`EmailRecord`]
///
/// `body` is the output of [`crate::normalize_body`] for the row's raw
/// body column. Returns [`ParseError::RejectedRow`] when the record
/// identifier is empty or a header echo; every other defect is
/// repaired with a default and logged as a warning.
pub fn sanitize_record(fields: &RawFields<'_>, body: &str) -> Result<EmailRecord> {
    let email_id = fields.email_id.trim();
    if is_placeholder(email_id, &["email_id", "nan"]) {
        return Err(ParseError::RejectedRow {
            email_id: email_id.to_string(),
        });
    }
    let email_id = email_id.to_string();

    let sender_email = fields.sender_email.trim().to_lowercase();
    let sender_email =
        if sender_email.is_empty() || !sender_email.contains('@') || sender_email == "sender_email"
        {
            warn!(%email_id, "invalid sender_email, substituting default");
            "unknown@domain.com".to_string()
        } else {
            sender_email
        };

    let sender_name = fields.sender_name.trim();
    let sender_name = if is_placeholder(sender_name, &["sender_name", "nan", "none"]) {
        "Unknown Sender".to_string()
    } else {
        sender_name.to_string()
    };

    let subject = fields.subject.trim();
    let subject = if is_placeholder(subject, &["subject", "nan"]) {
        "No Subject".to_string()
    } else {
        // Escaped and embedded newlines both flatten to spaces
        let flat = subject.replace("\\n", " ").replace("\"\"", "\"");
        let flat = NEWLINE_RUNS.replace_all(&flat, " ");
        flat.trim().chars().take(SUBJECT_CAP).collect()
    };

    let trimmed_body = body.trim();
    let body = if is_placeholder(trimmed_body, &["body", "nan"]) {
        "No content".to_string()
    } else {
        let unescaped = trimmed_body.replace("\\n", "\n").replace("\"\"", "\"");
        unescaped
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let timestamp = fields.timestamp.trim();
    let timestamp = if is_placeholder(timestamp, &["timestamp", "nan"]) {
        warn!(%email_id, "missing timestamp, substituting current time");
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        timestamp.to_string()
    };

    let has_attachment = matches!(
        fields.has_attachment.trim().to_uppercase().as_str(),
        "TRUE" | "YES" | "1" | "T"
    );

    let thread_id = fields.thread_id.trim();
    let thread_id = if is_placeholder(thread_id, &["thread_id", "nan"]) {
        format!("thread_{email_id}")
    } else {
        thread_id.to_string()
    };

    Ok(EmailRecord {
        email_id,
        sender_email,
        sender_name,
        subject,
        body,
        timestamp,
        has_attachment,
        thread_id,
    })
}
