//! Export recovery orchestration

use crate::clean::sanitize_record;
use crate::decode::decode_document;
use crate::error::{ParseError, Result};
use crate::fields::{extract_fields, normalize_body};
use crate::segment::{RawRowSegment, segment_rows};
use crate::types::EmailRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of recovering one export file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseReport {
    /// Recovered records, in document order
    pub records: Vec<EmailRecord>,

    /// Rows skipped because a bounded split came up short
    pub malformed: usize,

    /// Rows dropped for a missing or header-echo identifier
    pub rejected: usize,
}

impl ParseReport {
    /// Number of records successfully parsed
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.records.len()
    }
}

/// Recover a single record from one row segment
///
/// Pure per-row transform (extract, normalize, validate) with no
/// shared state, so rows can be fanned out across workers once
/// boundaries are known, as long as the caller restores document
/// order.
pub fn parse_row(segment: &RawRowSegment<'_>) -> Result<EmailRecord> {
    let fields = extract_fields(segment)?;
    let body = normalize_body(fields.body_raw);
    sanitize_record(&fields, &body)
}

/// Recover all records from a raw export file
///
/// Decode failure is the only fatal error. Malformed rows are warned
/// about and counted; rows with a rejected identifier are counted
/// silently. Either way processing continues with the next row.
pub fn parse_export(raw: &[u8]) -> Result<ParseReport> {
    let document = decode_document(raw)?;
    let mut report = ParseReport::default();

    for segment in segment_rows(document.text()) {
        match parse_row(&segment) {
            Ok(record) => report.records.push(record),
            Err(ParseError::MalformedRow { email_id, details }) => {
                warn!(%email_id, row = segment.index, "skipping malformed row: {details}");
                report.malformed += 1;
            }
            Err(ParseError::RejectedRow { .. }) => {
                report.rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(
        parsed = report.parsed(),
        malformed = report.malformed,
        rejected = report.rejected,
        encoding = document.encoding(),
        "recovered records from export"
    );
    Ok(report)
}
