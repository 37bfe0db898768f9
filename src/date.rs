//! Date and time token parsing module
//!
//! Itinerary timestamps are written as `YYYY-MM-DDThh:mm±hh:mm`: minute
//! precision with a mandatory UTC offset. They are rendered in one of three
//! fixed, locale-free formats.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

/// Strict shape of an itinerary timestamp
static ISO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2})([+-])([0-9]{2}):([0-9]{2})$").unwrap()
});

/// Unicode MINUS SIGN, sometimes pasted into offsets by word processors
const UNICODE_MINUS: char = '\u{2212}';

/// Output format of a timestamp token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `25-Dec-2024`
    Date,
    /// `03:04PM (-07:00)`
    Time12,
    /// `15:04 (-07:00)`
    Time24,
}

impl TimestampFormat {
    fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::Date => "%d-%b-%Y",
            TimestampFormat::Time12 => "%I:%M%p (%:z)",
            TimestampFormat::Time24 => "%H:%M (%:z)",
        }
    }
}

/// Parse an itinerary timestamp
///
/// Returns `None` for anything that does not match the grammar exactly or
/// names an impossible date, time or offset.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.replace(UNICODE_MINUS, "-");
    let caps = ISO_RE.captures(&value)?;
    let num = |idx: usize| caps[idx].parse::<u32>().ok();

    let date = NaiveDate::from_ymd_opt(num(1)? as i32, num(2)?, num(3)?)?;
    let time = NaiveTime::from_hms_opt(num(4)?, num(5)?, 0)?;

    let (offset_hours, offset_minutes) = (num(7)?, num(8)?);
    if offset_minutes > 59 {
        return None;
    }
    let seconds = (offset_hours * 3600 + offset_minutes * 60) as i32;
    let offset = match &caps[6] {
        "-" => FixedOffset::west_opt(seconds)?,
        _ => FixedOffset::east_opt(seconds)?,
    };

    offset.from_local_datetime(&date.and_time(time)).single()
}

/// Format a parsed timestamp in the given output format
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>, format: TimestampFormat) -> String {
    timestamp.format(format.pattern()).to_string()
}

/// Parse and reformat a raw token value in one step
pub fn reformat(value: &str, format: TimestampFormat) -> Option<String> {
    parse_timestamp(value).map(|ts| format_timestamp(&ts, format))
}
