//! Row boundary detection
//!
//! The export's only context-independent signal that a new record has
//! begun is the sequence newline, double-quote, digits, comma: the
//! record identifier is always the first column, always numeric and
//! always quoted. Everything between two such boundaries is one raw
//! row segment, however many embedded newlines and commas it holds.
//!
//! Known limitation: a body that legitimately contains the literal
//! subsequence `\n"<digits>,` is indistinguishable from a real
//! boundary and will be mis-split. That ambiguity is inherent in the
//! format and is not papered over here.

use regex::{CaptureMatches, Regex};
use std::iter::Peekable;
use std::sync::LazyLock;

static BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\n"(\d+),"#).unwrap());

/// The unparsed text of one logical row, with the identifier captured
/// at the boundary so diagnostics can name the row even when later
/// extraction fails
#[derive(Debug, Clone, Copy)]
pub struct RawRowSegment<'a> {
    /// Record identifier captured from the boundary pattern
    pub email_id: &'a str,

    /// Segment text, from the end of this row's boundary to the start
    /// of the next (exclusive)
    pub text: &'a str,

    /// Zero-based position of this row in document order
    pub index: usize,

    /// Byte offset of the row's boundary marker in the document
    pub offset: usize,
}

/// Lazy iterator over row segments, in document order
pub struct Segments<'a> {
    text: &'a str,
    matches: Peekable<CaptureMatches<'static, 'a>>,
    index: usize,
}

/// Split decoded text into row segments
///
/// Text preceding the first boundary is the header and is never
/// yielded. Segmentation is a single left-to-right pass; each call to
/// `next` looks ahead only as far as the following boundary.
#[must_use]
pub fn segment_rows(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: BOUNDARY_REGEX.captures_iter(text).peekable(),
        index: 0,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = RawRowSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let boundary = caps.get(0)?;
        let id = caps.get(1)?;

        let end = self
            .matches
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());

        let segment = RawRowSegment {
            email_id: id.as_str(),
            text: &self.text[boundary.end()..end],
            index: self.index,
            offset: boundary.start(),
        };
        self.index += 1;
        Some(segment)
    }
}
