//! `Calendar` trait: which days stop a procedural term from expiring.
//!
//! Sundays and holidays are *non-working* ("festivi"). Saturday is tracked
//! separately because art. 155 c. 5 c.p.c. gives it its own postponement
//! rule, distinct from the holiday one.

use crate::date::Date;
use crate::weekday::Weekday;

/// Classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Sunday or a holiday.
    Holiday,
    /// A Saturday that is not a holiday.
    Saturday,
    /// Any other day.
    Workday,
}

/// A court calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday of this calendar.
    ///
    /// Sundays are not holidays here; see [`is_non_working`](Self::is_non_working).
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Sunday or a holiday.
    fn is_non_working(&self, date: Date) -> bool {
        date.weekday() == Weekday::Sunday || self.is_holiday(date)
    }

    /// Return `true` if `date` falls on a Saturday.
    fn is_saturday(&self, date: Date) -> bool {
        date.weekday() == Weekday::Saturday
    }

    /// Classify `date`. Holidays falling on a Saturday are [`DayKind::Holiday`].
    fn classify(&self, date: Date) -> DayKind {
        if self.is_non_working(date) {
            DayKind::Holiday
        } else if self.is_saturday(date) {
            DayKind::Saturday
        } else {
            DayKind::Workday
        }
    }

    /// The first day strictly after `date` that is not non-working.
    ///
    /// The result may be a Saturday. Stops at [`Date::MAX`].
    fn next_working_day(&self, date: Date) -> Date {
        let mut d = date + 1;
        while self.is_non_working(d) && d < Date::MAX {
            d = d + 1;
        }
        d
    }
}
