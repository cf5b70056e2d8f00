//! `Date` — an immutable proleptic Gregorian calendar day.
//!
//! Dates are stored as a serial number of days since 1970-01-01 (serial 0),
//! so ordering and differences are plain integer operations. Conversion to
//! and from (year, month, day) uses the civil-calendar algorithms from
//! Howard Hinnant's `chrono`-compatible date library, which are exact for
//! every proleptic Gregorian year including negative ones.
//!
//! Every arithmetic operation returns a new `Date`; nothing mutates in place.

use std::str::FromStr;

use crate::weekday::Weekday;
use tc_core::ensure;
use tc_core::errors::{Error, Result};

/// A calendar day with no time-of-day component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: i32 = -100_000;

    /// Largest supported year.
    pub const MAX_YEAR: i32 = 100_000;

    /// Earliest supported date, January 1 of [`MIN_YEAR`](Self::MIN_YEAR).
    pub const MIN: Date = Date(serial_from_ymd(Self::MIN_YEAR, 1, 1));

    /// Latest supported date, December 31 of [`MAX_YEAR`](Self::MAX_YEAR).
    pub const MAX: Date = Date(serial_from_ymd(Self::MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month));
        Date(serial_from_ymd(year, month, day))
    }

    /// Create a date from its serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "serial {serial} outside [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(Date(serial))
    }

    /// Serial clamped into the supported range.
    fn clamped(serial: i32) -> Self {
        Date(serial.clamp(Self::MIN.0, Self::MAX.0))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Days since 1970-01-01 (negative before it).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return (year, month, day) in one conversion.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 as i64 + 3).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Return the date `n` days later (earlier when `n` is negative).
    ///
    /// Saturates at [`Date::MIN`] and [`Date::MAX`].
    pub fn plus_days(self, n: i32) -> Self {
        Self::clamped(self.0.saturating_add(n))
    }

    /// Return the date `n` days earlier. Saturates like [`plus_days`](Self::plus_days).
    pub fn minus_days(self, n: i32) -> Self {
        Self::clamped(self.0.saturating_sub(n))
    }

    /// Like [`plus_days`](Self::plus_days), failing instead of saturating.
    pub fn checked_plus_days(self, n: i32) -> Result<Self> {
        let serial = i64::from(self.0) + i64::from(n);
        ensure!(
            (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&serial),
            "{self} + {n} days is outside the supported range"
        );
        Ok(Date(serial as i32))
    }

    /// Shift by `n` calendar months, clamping to the end of the target month.
    ///
    /// Jan 31 + 1 month is Feb 28 (or Feb 29 in leap years), never Mar 3.
    pub fn plus_months(self, n: i32) -> Self {
        self.plus_months_clamped(n).0
    }

    /// Like [`plus_months`](Self::plus_months), also reporting whether the
    /// day of month had to be clamped. Saturates at the supported years.
    pub fn plus_months_clamped(self, n: i32) -> (Self, bool) {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = (y as i64 * 12 + (m as i64 - 1) + n as i64)
            .clamp(Self::MIN_YEAR as i64 * 12, Self::MAX_YEAR as i64 * 12 + 11);
        let new_y = total.div_euclid(12) as i32;
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let last = days_in_month(new_y, new_m);
        let clamped = d > last;
        (Date::from_ymd_unchecked(new_y, new_m, d.min(last)), clamped)
    }

    /// Shift by `n` years (12 months each), clamping Feb 29 to Feb 28.
    pub fn plus_years(self, n: i32) -> Self {
        self.plus_months(n.saturating_mul(12))
    }

    /// Number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Absolute number of calendar days between the two dates.
    pub fn abs_days_between(self, other: Date) -> u32 {
        self.days_between(other).unsigned_abs()
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date::from_ymd_unchecked(y, m, days_in_month(y, m))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Iterate over the dates strictly between `self` and `end`.
    pub fn days_until(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0.saturating_add(1)..end.0).map(Date)
    }

    /// Iterate over the dates from `self` to `end`, both inclusive.
    pub fn days_through(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.plus_days(rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.minus_days(rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` (optionally followed by a `T…` time part, which is
    /// ignored) or the Italian `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidDate(s.to_string());
        if text.is_empty() {
            return Err(Error::MissingDate);
        }

        let (y, m, d) = if text.contains('/') {
            let mut parts = text.split('/');
            let (Some(d), Some(m), Some(y), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                return Err(invalid());
            };
            (y, m, d)
        } else {
            let date_part = text.split('T').next().unwrap_or(text);
            let mut parts = date_part.splitn(3, '-');
            let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
                return Err(invalid());
            };
            (y, m, d)
        };

        let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !(digits(y) && digits(m) && digits(d)) {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u8 = m.parse().map_err(|_| invalid())?;
        let day: u8 = d.parse().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day).map_err(|_| invalid())
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Optional integrations ─────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;
    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d} is outside chrono's range")))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date.
const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i64;
    let y = year as i64 - (m <= 2) as i64;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i32
}

/// Civil date for a serial number.
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = (yoe + era * 400 + i64::from(m <= 2)) as i32;
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
