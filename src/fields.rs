//! Fixed-arity field extraction and body normalization
//!
//! A row segment holds eight logical columns, but only the body may
//! contain unescaped commas. The three trailing columns (timestamp,
//! attachment flag, thread id) and the three leading ones (sender
//! email, sender name, subject) are comma-free, so the segment is
//! anchored from the right and then from the left, a bounded number of
//! splits each, leaving the body as the sole unsplit middle remainder.

use crate::error::{ParseError, Result};
use crate::segment::RawRowSegment;

/// The eight raw, unnormalized column values of one row
#[derive(Debug, Clone, Copy)]
pub struct RawFields<'a> {
    pub email_id: &'a str,
    pub sender_email: &'a str,
    pub sender_name: &'a str,
    pub subject: &'a str,
    pub body_raw: &'a str,
    pub timestamp: &'a str,
    pub has_attachment: &'a str,
    pub thread_id: &'a str,
}

/// Partition a row segment into its eight raw columns
///
/// Splits from the right first (at most 3 commas) to pin the trailing
/// scalar columns, then from the left (at most 3 commas) on the
/// remaining middle chunk to pin the leading ones. Whatever is left in
/// the middle is the raw body. Fewer than four parts on either side
/// means the row is malformed.
pub fn extract_fields<'a>(segment: &RawRowSegment<'a>) -> Result<RawFields<'a>> {
    let trimmed = segment.text.trim();
    // The boundary pattern leaves this row's closing quote behind
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);

    let right: Vec<&str> = trimmed.rsplitn(4, ',').collect();
    if right.len() < 4 {
        return Err(ParseError::MalformedRow {
            email_id: segment.email_id.to_string(),
            details: format!("right split yielded {} of 4 columns", right.len()),
        });
    }
    // rsplitn yields right-to-left
    let (thread_id, has_attachment, timestamp, middle) = (right[0], right[1], right[2], right[3]);

    let left: Vec<&str> = middle.splitn(4, ',').collect();
    if left.len() < 4 {
        return Err(ParseError::MalformedRow {
            email_id: segment.email_id.to_string(),
            details: format!("left split yielded {} of 4 columns", left.len()),
        });
    }

    Ok(RawFields {
        email_id: segment.email_id,
        sender_email: left[0],
        sender_name: left[1],
        subject: left[2],
        body_raw: left[3],
        timestamp,
        has_attachment,
        thread_id,
    })
}

/// Un-escape and unwrap a raw body column
///
/// The source format's only escaping convention is quote doubling.
/// After un-doubling, one layer of outer quoting is stripped when the
/// text both starts and ends with a quote; the pair requirement keeps
/// the transform idempotent on already-normalized text.
#[must_use]
pub fn normalize_body(raw: &str) -> String {
    let unescaped = raw.replace("\"\"", "\"");
    if unescaped.len() >= 2 && unescaped.starts_with('"') && unescaped.ends_with('"') {
        unescaped[1..unescaped.len() - 1].to_string()
    } else {
        unescaped
    }
}
