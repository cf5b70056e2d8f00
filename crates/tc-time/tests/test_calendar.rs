//! Integration tests for the holiday table, day classification and the
//! August suspension.

use proptest::prelude::*;
use tc_time::calendar::Calendar;
use tc_time::holidays::{easter_sunday, HolidayOracle};
use tc_time::suspension::suspension_days;
use tc_time::{Date, DayKind, ItalianCourts, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Holidays ────────────────────────────────────────────────────────────────

#[test]
fn easter_table() {
    let oracle = HolidayOracle::new();
    let known = [(2023, 4, 9), (2024, 3, 31), (2025, 4, 20), (2027, 3, 28)];
    for (y, m, d) in known {
        let year = oracle.holidays_for_year(y);
        let movable: Vec<Date> = year
            .holidays()
            .iter()
            .filter(|h| h.movable)
            .map(|h| h.date)
            .collect();
        assert_eq!(movable, vec![date(y, m, d), date(y, m, d) + 1], "year {y}");
        assert!(year.contains(date(y, m, d)));
        assert!(year.contains(date(y, m, d) + 1));
    }
}

#[test]
fn fixed_holidays_every_year() {
    let oracle = HolidayOracle::new();
    for y in [1950, 2000, 2024, 2099] {
        let dates = oracle.holidays_for_year(y);
        for (m, d) in [(1, 1), (1, 6), (4, 25), (5, 1), (6, 2), (8, 15), (11, 1), (12, 8), (12, 25), (12, 26)] {
            assert!(dates.contains(date(y, m, d)), "{y}-{m:02}-{d:02} missing");
        }
        assert_eq!(dates.dates().len(), 12);
    }
}

#[test]
fn holiday_list_2024() {
    let names: Vec<&str> = HolidayOracle::shared()
        .holidays(2024)
        .iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names.first(), Some(&"Capodanno"));
    assert_eq!(names.last(), Some(&"Santo Stefano"));
    assert_eq!(names[2], "Pasqua");
    assert_eq!(names[3], "Lunedì dell'Angelo");
}

#[test]
fn concurrent_lookups_agree() {
    let oracle = HolidayOracle::new();
    let results: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| oracle.is_holiday(date(2030, 4, 22))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    // Easter 2030 is April 21
    assert!(results.iter().all(|&r| r));
    assert_eq!(oracle.cached_years(), 1);
}

// ─── Classification ──────────────────────────────────────────────────────────

#[test]
fn classify_week_of_ferragosto_2024() {
    let cal = ItalianCourts::default();
    let expected = [
        (date(2024, 8, 12), DayKind::Workday),
        (date(2024, 8, 15), DayKind::Holiday),
        (date(2024, 8, 17), DayKind::Saturday),
        (date(2024, 8, 18), DayKind::Holiday),
    ];
    for (d, kind) in expected {
        assert_eq!(cal.classify(d), kind, "{d}");
    }
}

// ─── Suspension ──────────────────────────────────────────────────────────────

#[test]
fn suspension_across_year_boundary() {
    let cal = ItalianCourts::default();
    // Aug 2024 has 26 countable days, Aug 2025 has 31 - 5 Sundays - Ferragosto (Fri) = 25
    assert_eq!(suspension_days(&cal, date(2024, 6, 1), date(2025, 10, 1)), 26 + 25);
}

fn any_date() -> impl Strategy<Value = Date> {
    // 2000-01-01 ..= 2039-12-31
    (10_957i32..25_567).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn classification_is_pure(d in any_date()) {
        let cal = ItalianCourts::default();
        prop_assert_eq!(cal.is_non_working(d), cal.is_non_working(d));
        prop_assert_eq!(cal.is_saturday(d), cal.is_saturday(d));
        prop_assert_eq!(cal.is_saturday(d), d.weekday() == Weekday::Saturday);
        if d.weekday() == Weekday::Sunday {
            prop_assert!(cal.is_non_working(d));
        }
    }

    #[test]
    fn suspension_is_additive(a in any_date(), gap1 in 0i32..800, gap2 in 0i32..800) {
        let cal = ItalianCourts::default();
        let b = a + gap1;
        let c = b + gap2;
        // b belongs to both halves; remove its double count.
        let shared = u32::from(b.month() == 8 && !cal.is_non_working(b));
        prop_assert_eq!(
            suspension_days(&cal, a, c),
            suspension_days(&cal, a, b) + suspension_days(&cal, b, c) - shared
        );
    }

    #[test]
    fn easter_in_range(y in 1583i32..4000) {
        let e = easter_sunday(y);
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25));
    }
}
