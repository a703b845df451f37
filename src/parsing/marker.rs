//! Timestamp markers: recognition, calendar resolution and sender splitting.
//!
//! A marker is the `D/M/Y, H:MM am - ` prefix that starts every entry of an
//! export. It both delimits entries and encodes the send time.
//!
//! Supported shapes:
//! - `1/1/24, 9:00 am - Bob: Hello`
//! - `01/01/2024, 09:00 pm - Bob: Hello`
//! - `1/1/24, 9:00\u{202F}am - Bob: Hello` (narrow no-break space, newer exports)
//! - `1/1/24, 9:00am - Bob: Hello`

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::{ChatlensError, Result};

/// Marker pattern, anchored to line starts.
///
/// Markers are recognized only at the start of the text or right after a
/// line break, so marker-like text in the middle of a body line stays part
/// of that body. Digits are ASCII only; separators are horizontal whitespace.
pub const MARKER_PATTERN: &str = r"(?m)^(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{2,4}),[^\S\r\n](?P<hour>1[0-2]|0?[1-9]):(?P<minute>[0-5][0-9])[^\S\r\n]?(?P<meridiem>[ap]m)[^\S\r\n]-[^\S\r\n]";

static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKER_PATTERN).expect("marker pattern is valid"));

/// Two-digit years `YY` resolve to `PIVOT_CENTURY + YY`.
pub const PIVOT_CENTURY: i32 = 2000;

/// One recognized marker and its captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Byte offset of the first marker character in the export
    pub start: usize,
    /// Byte offset just past the trailing ` - `
    pub end: usize,
    /// The full marker text, separator included
    pub text: &'a str,
    day: &'a str,
    month: &'a str,
    year: &'a str,
    hour: &'a str,
    minute: &'a str,
    meridiem: &'a str,
}

impl Marker<'_> {
    /// Returns the marker text without the trailing ` - ` separator.
    pub fn label(&self) -> &str {
        self.text
            .trim_end()
            .trim_end_matches('-')
            .trim_end()
    }

    /// Resolves the marker into a wall-clock timestamp.
    ///
    /// Dates are day-first. Two-digit years follow the
    /// [`PIVOT_CENTURY`] rule; hours use 12-hour semantics.
    pub fn resolve(&self) -> Result<NaiveDateTime> {
        let fail = |reason: String| ChatlensError::timestamp_parse(self.label(), reason);

        let day = parse_number(self.day).ok_or_else(|| fail(format!("bad day '{}'", self.day)))?;
        let month =
            parse_number(self.month).ok_or_else(|| fail(format!("bad month '{}'", self.month)))?;
        let year = resolve_year(self.year).map_err(fail)?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| fail(format!("{day}/{month}/{year} is not a calendar date")))?;

        let hour12 =
            parse_number(self.hour).ok_or_else(|| fail(format!("bad hour '{}'", self.hour)))?;
        let minute = parse_number(self.minute)
            .ok_or_else(|| fail(format!("bad minute '{}'", self.minute)))?;
        let hour = to_24_hour(hour12, self.meridiem == "pm");

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| fail(format!("{hour}:{minute:02} is not a valid time")))?;

        Ok(date.and_time(time))
    }
}

fn parse_number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Finds every marker in `raw`, in source order.
pub fn find_markers(raw: &str) -> Vec<Marker<'_>> {
    MARKER_REGEX
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str(),
                day: caps.name("day")?.as_str(),
                month: caps.name("month")?.as_str(),
                year: caps.name("year")?.as_str(),
                hour: caps.name("hour")?.as_str(),
                minute: caps.name("minute")?.as_str(),
                meridiem: caps.name("meridiem")?.as_str(),
            })
        })
        .collect()
}

/// Resolves a 2- or 4-digit year.
///
/// `"24"` → 2024, `"99"` → 2099, `"00"` → 2000, `"1999"` → 1999.
/// Three-digit years are ambiguous and rejected.
pub fn resolve_year(digits: &str) -> std::result::Result<i32, String> {
    let value: i32 = digits
        .parse()
        .map_err(|_| format!("bad year '{digits}'"))?;

    match digits.len() {
        2 => Ok(PIVOT_CENTURY + value),
        4 => Ok(value),
        _ => Err(format!("ambiguous {}-digit year '{digits}'", digits.len())),
    }
}

/// Converts a 1-12 clock hour to 0-23.
///
/// `12 am` is midnight (0) and `12 pm` is noon (12).
pub fn to_24_hour(hour12: u32, pm: bool) -> u32 {
    match (hour12 % 12, pm) {
        (h, false) => h,
        (h, true) => h + 12,
    }
}

/// Splits the text between two markers into one payload per marker.
///
/// Returns the preamble (text before the first marker) and the payloads.
pub fn segment<'a>(raw: &'a str, markers: &[Marker<'a>]) -> (&'a str, Vec<&'a str>) {
    let Some(first) = markers.first() else {
        return (raw, Vec::new());
    };

    let payloads = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let stop = markers.get(i + 1).map_or(raw.len(), |next| next.start);
            &raw[marker.end..stop]
        })
        .collect();

    (&raw[..first.start], payloads)
}

/// Removes the line break that precedes the next marker.
pub fn trim_payload(payload: &str) -> &str {
    payload.trim_end_matches(['\r', '\n'])
}

/// Splits a leading `"Name: "` prefix off a payload.
///
/// The name is the text before the first `':'`, which must be directly
/// followed by a space. The name must be non-blank and fit on one line.
/// Returns `None` for notifications.
pub fn split_sender(payload: &str) -> Option<(&str, &str)> {
    let colon = payload.find(':')?;
    let name = &payload[..colon];
    let body = payload[colon + 1..].strip_prefix(' ')?;

    if name.trim().is_empty() || name.contains(['\n', '\r']) {
        return None;
    }

    Some((name, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_markers_basic() {
        let raw = "1/1/24, 9:00 am - Bob: Hello\n12/31/2023, 11:59 pm - Alice: Bye";
        // 12/31 has month 31: still lexically a marker, rejected later
        let markers = find_markers(raw);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].start, 0);
        assert_eq!(markers[0].label(), "1/1/24, 9:00 am");
        assert_eq!(markers[1].label(), "12/31/2023, 11:59 pm");
    }

    #[test]
    fn test_marker_variants() {
        for raw in [
            "1/1/24, 9:00 am - x",
            "01/01/24, 09:00 am - x",
            "1/1/2024, 9:00 pm - x",
            "1/1/24, 9:00am - x",
            "1/1/24, 9:00\u{202F}am - x",
        ] {
            assert_eq!(find_markers(raw).len(), 1, "should match: {raw:?}");
        }
    }

    #[test]
    fn test_marker_rejects_other_shapes() {
        for raw in [
            "[1/1/24, 9:00:00 AM] Bob: x",
            "1/1/24, 13:00 - Bob: x",
            "1/1/24, 9:00 AM - Bob: x",
            "1.1.24, 9:00 am - Bob: x",
            "1/1/24, 9:00 am -\nBob: x",
        ] {
            assert!(find_markers(raw).is_empty(), "should not match: {raw:?}");
        }
    }

    #[test]
    fn test_marker_mid_line_is_not_a_marker() {
        let raw = "1/1/24, 9:00 am - Bob: see 2/1/24, 9:00 am - for details";
        assert_eq!(find_markers(raw).len(), 1);
    }

    #[test]
    fn test_resolve_year_pivot() {
        assert_eq!(resolve_year("00"), Ok(2000));
        assert_eq!(resolve_year("24"), Ok(2024));
        assert_eq!(resolve_year("69"), Ok(2069));
        assert_eq!(resolve_year("70"), Ok(2070));
        assert_eq!(resolve_year("99"), Ok(2099));
        assert_eq!(resolve_year("1999"), Ok(1999));
        assert!(resolve_year("024").is_err());
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour(12, false), 0);
        assert_eq!(to_24_hour(1, false), 1);
        assert_eq!(to_24_hour(11, false), 11);
        assert_eq!(to_24_hour(12, true), 12);
        assert_eq!(to_24_hour(1, true), 13);
        assert_eq!(to_24_hour(11, true), 23);
    }

    #[test]
    fn test_resolve_day_first() {
        let markers = find_markers("3/4/24, 12:05 am - x");
        let ts = markers[0].resolve().unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    }

    #[test]
    fn test_resolve_invalid_calendar_date() {
        for raw in ["32/1/24, 9:00 am - x", "1/13/24, 9:00 am - x", "30/2/24, 9:00 am - x"] {
            let markers = find_markers(raw);
            let err = markers[0].resolve().unwrap_err();
            assert!(
                matches!(err, ChatlensError::TimestampParse { .. }),
                "expected TimestampParse for {raw:?}"
            );
        }
    }

    #[test]
    fn test_resolve_three_digit_year() {
        let markers = find_markers("1/1/024, 9:00 am - x");
        assert_eq!(markers.len(), 1);
        assert!(markers[0].resolve().is_err());
    }

    #[test]
    fn test_segment_payloads() {
        let raw = "noise\n1/1/24, 9:00 am - A: one\nline two\n1/1/24, 9:01 am - B: three";
        let markers = find_markers(raw);
        let (preamble, payloads) = segment(raw, &markers);

        assert_eq!(preamble, "noise\n");
        assert_eq!(payloads, vec!["A: one\nline two\n", "B: three"]);
    }

    #[test]
    fn test_split_sender() {
        assert_eq!(split_sender("Bob: Hello"), Some(("Bob", "Hello")));
        assert_eq!(split_sender("Bob: time is 10:30"), Some(("Bob", "time is 10:30")));
        assert_eq!(split_sender("+1 555 0100: hi"), Some(("+1 555 0100", "hi")));
        assert_eq!(split_sender("Bob: "), Some(("Bob", "")));
        assert_eq!(split_sender("Bob joined using this group's invite link"), None);
        assert_eq!(split_sender("Bob:no space"), None);
        assert_eq!(split_sender(": orphan"), None);
        assert_eq!(split_sender("Bob left\nAlice: hi"), None);
    }

    #[test]
    fn test_trim_payload() {
        assert_eq!(trim_payload("Hello\nworld\n"), "Hello\nworld");
        assert_eq!(trim_payload("Hello\r\n"), "Hello");
        assert_eq!(trim_payload("Hello  "), "Hello  ");
    }
}
