// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Degraded-CSV Email Export Recovery
//!
//! Recovers well-formed email records from export files that claim to
//! be CSV but break its quoting rules: bodies with raw embedded
//! newlines, commas, and quotes that were never escaped by the
//! producing tool. A generic CSV reader shreds such files; this crate
//! instead finds row starts via the one reliable structural signal
//! (newline, quote, digits, comma) and recovers the eight columns with
//! a right-then-left bounded split around the free-text body.
//!
//! # Features
//!
//! - Multi-encoding document loading (UTF-8, then Windows-1252)
//! - Row boundary segmentation tolerant of multi-line bodies
//! - Fixed-arity field extraction anchored from both ends
//! - Quote un-doubling and body whitespace normalization
//! - Per-field defaulting so every output record is fully populated
//!
//! # Example
//!
//! ```rust
//! use email_recover::parse_export;
//!
//! let raw = "email_id,sender_email,sender_name,subject,body,timestamp,has_attachment,thread_id\n\
//!            \"1,ann@example.com,Ann Lee,Status,Line one\nLine two,2025-01-01T00:00:00Z,TRUE,thread_1\"\n";
//!
//! let report = parse_export(raw.as_bytes()).unwrap();
//! assert_eq!(report.parsed(), 1);
//! assert_eq!(report.records[0].sender_email, "ann@example.com");
//! assert_eq!(report.records[0].body, "Line one\nLine two");
//! ```

mod clean;
mod decode;
mod error;
mod fields;
mod parser;
mod query;
mod segment;
mod types;

pub use clean::sanitize_record;
pub use decode::{RawDocument, decode_document};
pub use error::{ParseError, Result};
pub use fields::{RawFields, extract_fields, normalize_body};
pub use parser::{ParseReport, parse_export, parse_row};
pub use query::*;
pub use segment::{RawRowSegment, Segments, segment_rows};
pub use types::EmailRecord;
