//! Date parsing for front-matter values

use chrono::{Local, NaiveDate, NaiveDateTime};

/// How a post date was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// Parsed from the front-matter string
    Parsed(NaiveDateTime),
    /// The string did not parse; the current run timestamp was
    /// substituted as a placeholder
    Fallback(NaiveDateTime),
}

impl ParsedDate {
    /// The date value, regardless of how it was obtained
    pub fn value(&self) -> NaiveDateTime {
        match *self {
            ParsedDate::Parsed(dt) | ParsedDate::Fallback(dt) => dt,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedDate::Fallback(_))
    }
}

/// Parse a front-matter date string.
///
/// Strings containing a `T` are treated as timestamps: anything from the
/// first `+` on (a UTC offset) and the literal `-03:00` suffix are cut
/// off before parsing. Anything else must be a plain `YYYY-MM-DD` date,
/// taken at midnight. A string that parses neither way yields the current
/// timestamp as a placeholder, classified separately so the caller can
/// tell the two apart.
pub fn parse_post_date(raw: &str) -> ParsedDate {
    match try_parse(raw) {
        Some(dt) => ParsedDate::Parsed(dt),
        None => ParsedDate::Fallback(Local::now().naive_local()),
    }
}

fn try_parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if raw.contains('T') {
        let stripped = raw.split('+').next().unwrap_or(raw);
        let stripped = match stripped.find("-03:00") {
            Some(pos) => &stripped[..pos],
            None => stripped,
        };

        let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(stripped, fmt) {
                return Some(dt);
            }
        }
        return None;
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
}
