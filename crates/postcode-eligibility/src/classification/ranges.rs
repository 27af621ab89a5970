//! Expansion of human-authored postcode lists such as `"2069 to 2076, 2083"`.
//!
//! Expansion is best-effort: malformed segments are dropped and never surface
//! to callers.

use super::postcode::Postcode;
use std::collections::BTreeSet;
use tracing::debug;

const RANGE_SEPARATORS: [&str; 4] = ["to", "-", "\u{2013}", "\u{2014}"];

/// Expands a comma-separated list of single postcodes and ranges.
pub fn expand_list(raw: &str) -> BTreeSet<Postcode> {
    let mut postcodes = BTreeSet::new();
    for segment in raw.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match parse_segment(segment) {
            Ok(Segment::Single(postcode)) => {
                postcodes.insert(postcode);
            }
            Ok(Segment::Range(start, end)) => postcodes.extend(expand_range(start, end)),
            Err(reason) => debug!(segment, ?reason, "dropping malformed postcode segment"),
        }
    }
    postcodes
}

/// Every postcode in `[start, end]`; empty when reversed or out of range.
pub fn expand_range(start: u16, end: u16) -> BTreeSet<Postcode> {
    match (Postcode::new(start), Postcode::new(end)) {
        (Ok(start), Ok(end)) => Postcode::range(start, end).collect(),
        _ => BTreeSet::new(),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Single(Postcode),
    Range(u16, u16),
}

#[derive(Debug, PartialEq, Eq)]
enum SegmentError {
    NotNumeric,
    Reversed,
    OutOfRange,
}

fn parse_segment(segment: &str) -> Result<Segment, SegmentError> {
    for separator in RANGE_SEPARATORS {
        if let Some((start, end)) = segment.split_once(separator) {
            let start = parse_bound(start)?;
            let end = parse_bound(end)?;
            if start > end {
                return Err(SegmentError::Reversed);
            }
            return Ok(Segment::Range(start, end));
        }
    }

    segment
        .parse::<Postcode>()
        .map(Segment::Single)
        .map_err(|_| SegmentError::NotNumeric)
}

fn parse_bound(raw: &str) -> Result<u16, SegmentError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 4 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SegmentError::NotNumeric);
    }
    let value = raw.parse::<u16>().map_err(|_| SegmentError::NotNumeric)?;
    Postcode::new(value)
        .map(Postcode::value)
        .map_err(|_| SegmentError::OutOfRange)
}
