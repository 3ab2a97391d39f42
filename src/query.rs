//! Filtering helpers over recovered records

use crate::types::EmailRecord;

/// Case-insensitive substring search across subject, body, and sender
/// name. An empty query matches everything.
#[must_use]
pub fn search<'a>(records: &'a [EmailRecord], query: &str) -> Vec<&'a EmailRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record.subject.to_lowercase().contains(&query)
                || record.body.to_lowercase().contains(&query)
                || record.sender_name.to_lowercase().contains(&query)
        })
        .collect()
}

/// Records whose sender name contains `name`, case-insensitively
#[must_use]
pub fn from_sender<'a>(records: &'a [EmailRecord], name: &str) -> Vec<&'a EmailRecord> {
    let name = name.to_lowercase();
    records
        .iter()
        .filter(|record| record.sender_name.to_lowercase().contains(&name))
        .collect()
}

/// Records carrying an attachment
#[must_use]
pub fn with_attachments(records: &[EmailRecord]) -> Vec<&EmailRecord> {
    records.iter().filter(|record| record.has_attachment).collect()
}
