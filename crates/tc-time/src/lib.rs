//! # tc-time
//!
//! Dates, the Italian court calendar, national holidays and the August
//! ferial suspension.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and day classification.
pub mod calendar;

/// Concrete court calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Human-readable date formatting.
pub mod format;

/// National holidays and the memoising `HolidayOracle`.
pub mod holidays;

/// `Month` — month of the year.
pub mod month;

/// August ferial suspension.
pub mod suspension;

/// `TermUnit` — days, months, years.
pub mod term_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DayKind};
pub use calendars::italy::ItalianCourts;
pub use date::Date;
pub use holidays::{Holiday, HolidayOracle, HolidayYear};
pub use month::Month;
pub use suspension::suspension_days;
pub use term_unit::TermUnit;
pub use weekday::Weekday;
