//! Color-stop records to gradient stops.

use gradfill_engine::host::DataSet;
use gradfill_svg::{Length, Stop};

use crate::error::StopError;

/// Column holding the stop position, a percentage.
pub const OFFSET_FIELD: &str = "offset";
/// Column holding the stop color, passed through verbatim.
pub const COLOR_FIELD: &str = "color";

/// Parses the leading integer of `text`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit, so `"45%"` and `"45.9"` both give `45`. Returns `None` when no
/// digit follows. Values past the `i64` range saturate.
pub fn parse_percent(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    // An all-digit prefix can only fail by overflowing.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Builds one gradient stop per record, in the data set's sort order.
///
/// Fails on the first record that lacks a column or whose offset has no
/// leading integer.
pub fn collect_stops(data: &DataSet) -> Result<Vec<Stop>, StopError> {
    data.iter()
        .map(|(id, record)| {
            let missing = |field| StopError::MissingField { record: id.to_string(), field };

            let raw = record.formatted_value(OFFSET_FIELD).ok_or_else(|| missing(OFFSET_FIELD))?;
            let offset = parse_percent(raw).ok_or_else(|| StopError::InvalidOffset {
                record: id.to_string(),
                value: raw.to_string(),
            })?;
            let color = record.formatted_value(COLOR_FIELD).ok_or_else(|| missing(COLOR_FIELD))?;

            Ok(Stop::new(Length::Percent(offset as f64), color))
        })
        .collect()
}
