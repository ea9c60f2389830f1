use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Mac", "April", "Mei", "Jun",
    "Julai", "Ogos", "September", "Oktober", "November", "Disember",
];

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses the date shapes found in feed data.
///
/// Date-times without an offset are read in `offset`; bare dates are UTC midnight.
pub fn parse_date(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return offset.from_local_datetime(&naive).single();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Long Malay date and time, e.g. `15 Mac 2024 pada 06:30 PTG`.
///
/// Unparseable input yields [`INVALID_DATE`] rather than an error.
pub fn format_date(raw: &str, offset: FixedOffset) -> String {
    let Some(dt) = parse_date(raw, offset) else {
        return INVALID_DATE.to_string();
    };
    let dt = dt.with_timezone(&offset);
    let (is_pm, hour) = dt.hour12();

    format!(
        "{} {} {} pada {:02}:{:02} {}",
        dt.day(),
        MONTHS[dt.month0() as usize],
        dt.year(),
        hour,
        dt.minute(),
        if is_pm { "PTG" } else { "PG" }
    )
}
