//! August ferial suspension ("sospensione feriale").
//!
//! Procedural terms stop running from August 1 to August 31 of every year.
//! A term whose span overlaps that window is extended by the number of
//! suspended days it covered. Only days that are not already non-working
//! (Sundays and holidays such as Ferragosto) count.

use crate::calendar::Calendar;
use crate::date::Date;

/// Month of the suspension window.
pub const SUSPENSION_MONTH: u8 = 8;

/// First and last day of the suspension window of `year`, both inclusive.
pub fn suspension_window(year: i32) -> (Date, Date) {
    let first = Date::from_ymd_unchecked(year, SUSPENSION_MONTH, 1);
    (first, first.end_of_month())
}

/// Whether `date` falls inside the suspension window of its year.
pub fn is_in_suspension(date: Date) -> bool {
    date.month() == SUSPENSION_MONTH
}

/// Count the suspended days in `[a, b]` (inclusive, order independent).
///
/// Every year touched by the range is checked, so multi-year spans pick up
/// every August they cross.
pub fn suspension_days<C: Calendar + ?Sized>(calendar: &C, a: Date, b: Date) -> u32 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let mut total = 0;
    for year in start.year()..=end.year() {
        let (first, last) = suspension_window(year);
        if start > last || end < first {
            continue;
        }
        let from = start.max(first);
        let to = end.min(last);
        total += from
            .days_through(to)
            .filter(|&d| !calendar.is_non_working(d))
            .count() as u32;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::italy::ItalianCourts;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn full_august_2024() {
        let cal = ItalianCourts::default();
        // 31 days - 4 Sundays (4, 11, 18, 25) - Ferragosto (Thursday) = 26
        let n = suspension_days(&cal, date(2024, 7, 1), date(2024, 9, 30));
        assert_eq!(n, 26);
    }

    #[test]
    fn partial_window() {
        let cal = ItalianCourts::default();
        // Aug 1..=19 2024: 19 days - Sundays 4, 11, 18 - Aug 15 = 15
        assert_eq!(suspension_days(&cal, date(2024, 7, 20), date(2024, 8, 19)), 15);
    }

    #[test]
    fn order_independent() {
        let cal = ItalianCourts::default();
        let a = date(2024, 8, 10);
        let b = date(2025, 8, 10);
        assert_eq!(suspension_days(&cal, a, b), suspension_days(&cal, b, a));
    }

    #[test]
    fn outside_august_is_zero() {
        let cal = ItalianCourts::default();
        assert_eq!(suspension_days(&cal, date(2024, 9, 1), date(2025, 7, 31)), 0);
    }

    #[test]
    fn every_crossed_year_counts() {
        let cal = ItalianCourts::default();
        let one = suspension_days(&cal, date(2024, 1, 1), date(2024, 12, 31));
        let two = suspension_days(&cal, date(2025, 1, 1), date(2025, 12, 31));
        let three = suspension_days(&cal, date(2026, 1, 1), date(2026, 12, 31));
        assert_eq!(suspension_days(&cal, date(2024, 1, 1), date(2026, 12, 31)), one + two + three);
    }

    #[test]
    fn window_bounds() {
        assert_eq!(suspension_window(2024), (date(2024, 8, 1), date(2024, 8, 31)));
        assert!(is_in_suspension(date(2024, 8, 31)));
        assert!(!is_in_suspension(date(2024, 9, 1)));
    }
}
