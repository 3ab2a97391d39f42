use email_recover::{
    ParseError, ParseReport, RawRowSegment, decode_document, parse_export, parse_row, segment_rows,
};

const HEADER: &str = "email_id,sender_email,sender_name,subject,body,timestamp,has_attachment,thread_id";

fn sample_export() -> String {
    format!(
        "{HEADER}\n\
         \"1,john.smith@example.com,John Smith,Meeting notes,\"\"Agenda:\n- budget, then hiring\n\nThanks\"\",2025-01-02T09:30:00Z,TRUE,thread_001\"\n\
         \"2,jane@company.org,Jane Doe,Re: invoice,Please see attached, it is overdue,2025-01-03T11:00:00Z,FALSE,thread_002\"\n\
         \"3,,Bob,Quick note,Short body,2025-01-04T08:00:00Z,FALSE,thread_003\"\n"
    )
}

#[test]
fn test_boundary_completeness() {
    let doc = sample_export();
    let segments: Vec<_> = segment_rows(&doc).collect();

    assert_eq!(segments.len(), 3);
    let ids: Vec<&str> = segments.iter().map(|s| s.email_id).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    let indices: Vec<usize> = segments.iter().map(|s| s.index).collect();
    assert_eq!(indices, [0, 1, 2]);
    // Boundaries are strictly ordered by offset
    assert!(segments.windows(2).all(|w| w[0].offset < w[1].offset));
}

#[test]
fn test_header_never_emitted() {
    let doc = sample_export();
    let report = parse_export(doc.as_bytes()).unwrap();

    assert!(report.records.iter().all(|r| r.email_id != "email_id"));
}

#[test]
fn test_parse_export_multiline_body() {
    let doc = sample_export();
    let report = parse_export(doc.as_bytes()).unwrap();

    assert_eq!(report.parsed(), 3);
    assert_eq!(report.malformed, 0);

    let first = &report.records[0];
    assert_eq!(first.email_id, "1");
    assert_eq!(first.sender_email, "john.smith@example.com");
    assert_eq!(first.subject, "Meeting notes");
    assert_eq!(first.body, "Agenda:\n- budget, then hiring\nThanks");
    assert!(first.has_attachment);
    assert_eq!(first.thread_id, "thread_001");
}

#[test]
fn test_unescaped_comma_stays_in_body() {
    let doc = sample_export();
    let report = parse_export(doc.as_bytes()).unwrap();

    let second = &report.records[1];
    assert_eq!(second.subject, "Re: invoice");
    assert_eq!(second.body, "Please see attached, it is overdue");
    assert!(!second.has_attachment);
}

#[test]
fn test_right_then_left_split() {
    let doc = format!(
        "{HEADER}\n\"1,a@b.com,Name,Subj,line1\nline2,2025-01-01T00:00:00Z,TRUE,thread_9\"\n"
    );
    let report = parse_export(doc.as_bytes()).unwrap();

    assert_eq!(report.parsed(), 1);
    let record = &report.records[0];
    assert_eq!(record.email_id, "1");
    assert_eq!(record.sender_email, "a@b.com");
    assert_eq!(record.sender_name, "Name");
    assert_eq!(record.subject, "Subj");
    assert_eq!(record.body, "line1\nline2");
    assert_eq!(record.timestamp, "2025-01-01T00:00:00Z");
    assert!(record.has_attachment);
    assert_eq!(record.thread_id, "thread_9");
}

#[test]
fn test_malformed_row_skipped_not_fatal() {
    let doc = format!(
        "{HEADER}\n\
         \"1,a@b.com,Ann,Hi,Body one,2025-01-01T00:00:00Z,FALSE,thread_1\"\n\
         \"5,only one field\"\n\
         \"2,b@c.com,Bea,Yo,Body two,2025-01-02T00:00:00Z,FALSE,thread_2\"\n"
    );
    let report = parse_export(doc.as_bytes()).unwrap();

    assert_eq!(report.parsed(), 2);
    assert_eq!(report.malformed, 1);
    let ids: Vec<&str> = report.records.iter().map(|r| r.email_id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn test_default_sender_email() {
    let doc = sample_export();
    let report = parse_export(doc.as_bytes()).unwrap();

    assert_eq!(report.records[2].sender_email, "unknown@domain.com");
}

#[test]
fn test_default_timestamp_is_utc_iso() {
    let doc = format!("{HEADER}\n\"4,x@y.com,Bob,Hi,Body,,FALSE,thread_4\"\n");
    let report = parse_export(doc.as_bytes()).unwrap();

    let record = &report.records[0];
    assert!(!record.timestamp.is_empty());
    assert!(record.timestamp.ends_with('Z'));
    assert!(record.timestamp.contains('T'));
}

#[test]
fn test_header_echo_row_rejected() {
    let segment = RawRowSegment {
        email_id: "email_id",
        text: "a@b.com,Name,Subj,Body,2025-01-01T00:00:00Z,TRUE,thread_1\"",
        index: 0,
        offset: 0,
    };
    let err = parse_row(&segment).unwrap_err();
    assert!(matches!(err, ParseError::RejectedRow { .. }));
}

#[test]
fn test_parse_row_is_pure_per_segment() {
    let segment = RawRowSegment {
        email_id: "7",
        text: "a@b.com,Name,Subj,Body,2025-01-01T00:00:00Z,FALSE,thread_7\"",
        index: 0,
        offset: 0,
    };
    let first = parse_row(&segment).unwrap();
    let second = parse_row(&segment).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_yields_no_records() {
    let report = parse_export(b"").unwrap();
    assert_eq!(report.parsed(), 0);

    // A header alone has no boundaries either
    let report = parse_export(HEADER.as_bytes()).unwrap();
    assert_eq!(report.parsed(), 0);
}

#[test]
fn test_decode_fallback_encoding() {
    let mut raw = Vec::new();
    raw.extend_from_slice(HEADER.as_bytes());
    raw.extend_from_slice(
        b"\n\"1,rene@example.com,Ren\xe9,Caf\xe9 plans,See you there,2025-01-01T00:00:00Z,FALSE,thread_1\"\n",
    );
    let report = parse_export(&raw).unwrap();

    assert_eq!(report.records[0].sender_name, "Ren\u{e9}");
    assert_eq!(report.records[0].subject, "Caf\u{e9} plans");
}

#[test]
fn test_decode_document_reports_encoding() {
    let utf8 = decode_document("h\u{e9}llo".as_bytes()).unwrap();
    assert_eq!(utf8.encoding(), "UTF-8");

    let cp1252 = decode_document(b"h\xe9llo").unwrap();
    assert_eq!(cp1252.encoding(), "windows-1252");
    assert_eq!(cp1252.text(), "h\u{e9}llo");
}

#[test]
fn test_report_round_trips_through_json() {
    let doc = sample_export();
    let report = parse_export(doc.as_bytes()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: ParseReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.records, report.records);
    assert_eq!(back.malformed, report.malformed);
}
