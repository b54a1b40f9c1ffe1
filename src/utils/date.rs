//! W3C datetime parsing for `<lastmod>`, news and video dates.
//!
//! The sitemap protocol accepts the W3C profile of ISO 8601 at several
//! granularities:
//!
//! ```text
//! YYYY
//! YYYY-MM
//! YYYY-MM-DD
//! YYYY-MM-DDThh:mmTZD
//! YYYY-MM-DDThh:mm:ssTZD
//! YYYY-MM-DDThh:mm:ss.sTZD
//! ```
//!
//! where `TZD` is `Z` or `+hh:mm` / `-hh:mm`. A time component always requires
//! a zone designator.
//!
//! Parsing is hand-rolled over bytes (no chrono) since only validation and
//! ordering are needed; the original string is what gets rendered.

/// Parsed W3C datetime.
///
/// Missing components are `None`; `offset_minutes` is only set together with
/// `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct W3cDateTime {
    pub year: u16,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub time: Option<TimeOfDay>,
    pub offset_minutes: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fractional seconds, scaled to nanoseconds.
    pub nanos: u32,
}

impl W3cDateTime {
    /// Parse any of the W3C granularities. Returns `None` on malformed input
    /// or out-of-range components (month 13, Feb 30, hour 24, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() < 4 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        let mut dt = Self {
            year,
            month: None,
            day: None,
            time: None,
            offset_minutes: 0,
        };
        let rest = &bytes[4..];
        if rest.is_empty() {
            return Some(dt);
        }

        // -MM
        if rest.len() < 3 || rest[0] != b'-' {
            return None;
        }
        let month = parse_u8(&rest[1..3])?;
        if !(1..=12).contains(&month) {
            return None;
        }
        dt.month = Some(month);
        let rest = &rest[3..];
        if rest.is_empty() {
            return Some(dt);
        }

        // -DD
        if rest.len() < 3 || rest[0] != b'-' {
            return None;
        }
        let day = parse_u8(&rest[1..3])?;
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        dt.day = Some(day);
        let rest = &rest[3..];
        if rest.is_empty() {
            return Some(dt);
        }

        // Thh:mm
        if rest.len() < 6 || rest[0] != b'T' || rest[3] != b':' {
            return None;
        }
        let hour = parse_u8(&rest[1..3])?;
        let minute = parse_u8(&rest[4..6])?;
        let mut rest = &rest[6..];

        // optional :ss(.s+)
        let mut second = 0;
        let mut nanos = 0;
        if rest.first() == Some(&b':') {
            if rest.len() < 3 {
                return None;
            }
            second = parse_u8(&rest[1..3])?;
            rest = &rest[3..];
            if rest.first() == Some(&b'.') {
                let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
                if digits == 0 {
                    return None;
                }
                nanos = parse_fraction(&rest[1..=digits]);
                rest = &rest[1 + digits..];
            }
        }

        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }

        dt.offset_minutes = parse_zone(rest)?;
        dt.time = Some(TimeOfDay {
            hour,
            minute,
            second,
            nanos,
        });
        Some(dt)
    }

    /// Instant in seconds relative to 1970-01-01 UTC, with missing components
    /// taken as their earliest value. Used to compare datetimes across zones.
    ///
    /// `==` is structural: `12:00Z` and `14:00+02:00` differ but share an
    /// instant.
    pub fn instant(&self) -> (i64, u32) {
        let days = days_from_civil(
            i64::from(self.year),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        );
        let (secs, nanos) = match self.time {
            Some(t) => (
                i64::from(t.hour) * 3600 + i64::from(t.minute) * 60 + i64::from(t.second),
                t.nanos,
            ),
            None => (0, 0),
        };
        (
            days * 86_400 + secs - i64::from(self.offset_minutes) * 60,
            nanos,
        )
    }
}

/// Check a string against the W3C datetime profile.
pub fn is_w3c_datetime(s: &str) -> bool {
    W3cDateTime::parse(s).is_some()
}

/// Pick the latest of several W3C datetime strings, ignoring malformed ones.
pub fn latest<'a>(dates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    dates
        .into_iter()
        .filter_map(|s| W3cDateTime::parse(s).map(|dt| (dt, s)))
        .max_by_key(|(dt, _)| dt.instant())
        .map(|(_, s)| s)
}

#[inline]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (m, d) = (i64::from(month), i64::from(day));
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// `Z`, `+hh:mm` or `-hh:mm`, and nothing after it.
fn parse_zone(bytes: &[u8]) -> Option<i16> {
    match bytes {
        [b'Z'] => Some(0),
        [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
            let hours = parse_u8(&[*h1, *h2])?;
            let minutes = parse_u8(&[*m1, *m2])?;
            if hours > 23 || minutes > 59 {
                return None;
            }
            let total = i16::from(hours) * 60 + i16::from(minutes);
            Some(if *sign == b'-' { -total } else { total })
        }
        _ => None,
    }
}

/// Fraction digits to nanoseconds; digits beyond the ninth are dropped.
fn parse_fraction(digits: &[u8]) -> u32 {
    let mut nanos = 0u32;
    for i in 0..9 {
        let d = digits.get(i).map_or(0, |b| u32::from(b - b'0'));
        nanos = nanos * 10 + d;
    }
    nanos
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
