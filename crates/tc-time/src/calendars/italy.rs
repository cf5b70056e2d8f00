//! Italian civil-court calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::HolidayOracle;

/// Italian civil-court calendar.
///
/// Sundays and the following national holidays are non-working:
/// * Capodanno (Jan 1)
/// * Epifania (Jan 6)
/// * Pasqua and Lunedì dell'Angelo (Easter Sunday and Monday)
/// * Festa della Liberazione (Apr 25)
/// * Festa del Lavoro (May 1)
/// * Festa della Repubblica (Jun 2)
/// * Ferragosto (Aug 15)
/// * Ognissanti (Nov 1)
/// * Immacolata Concezione (Dec 8)
/// * Natale (Dec 25)
/// * Santo Stefano (Dec 26)
///
/// Saturdays are working days subject to the postponement rule of
/// art. 155 c. 5 c.p.c.
#[derive(Debug, Clone, Copy)]
pub struct ItalianCourts<'a> {
    oracle: &'a HolidayOracle,
}

impl<'a> ItalianCourts<'a> {
    /// Calendar backed by a caller-owned holiday oracle.
    pub fn with_oracle(oracle: &'a HolidayOracle) -> Self {
        Self { oracle }
    }

    /// The oracle this calendar reads holidays from.
    pub fn oracle(&self) -> &'a HolidayOracle {
        self.oracle
    }
}

impl Default for ItalianCourts<'static> {
    /// Calendar backed by the process-wide oracle.
    fn default() -> Self {
        Self::with_oracle(HolidayOracle::shared())
    }
}

impl Calendar for ItalianCourts<'_> {
    fn name(&self) -> &str {
        "Italy (civil courts)"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.oracle.is_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayKind;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epiphany() {
        let cal = ItalianCourts::default();
        // Jan 6, 2023 is a Friday
        assert!(cal.is_non_working(date(2023, 1, 6)));
    }

    #[test]
    fn easter_monday_2023() {
        let cal = ItalianCourts::default();
        assert!(cal.is_non_working(date(2023, 4, 10)));
        assert!(!cal.is_non_working(date(2023, 4, 11)));
    }

    #[test]
    fn liberation_day() {
        let cal = ItalianCourts::default();
        // Apr 25, 2023 is a Tuesday
        assert!(cal.is_holiday(date(2023, 4, 25)));
    }

    #[test]
    fn saturday_holiday_is_a_holiday() {
        let cal = ItalianCourts::default();
        // Dec 26, 2026 is a Saturday and Santo Stefano
        assert_eq!(cal.classify(date(2026, 12, 26)), DayKind::Holiday);
        assert!(cal.is_saturday(date(2026, 12, 26)));
    }

    #[test]
    fn normal_business_day() {
        let cal = ItalianCourts::default();
        // 2023-06-15 is a Thursday
        assert_eq!(cal.classify(date(2023, 6, 15)), DayKind::Workday);
    }

    #[test]
    fn next_working_day_skips_holiday_run() {
        let cal = ItalianCourts::default();
        // Thu 2025-12-25, Fri 12-26, Sat 12-27 (working), Sun 12-28
        assert_eq!(cal.next_working_day(date(2025, 12, 24)), date(2025, 12, 27));
        // Sat 2024-03-30 → Easter Sunday → Easter Monday → Tue 2024-04-02
        assert_eq!(cal.next_working_day(date(2024, 3, 30)), date(2024, 4, 2));
    }

    #[test]
    fn private_oracle() {
        let oracle = HolidayOracle::new();
        let cal = ItalianCourts::with_oracle(&oracle);
        assert!(cal.is_holiday(date(2024, 8, 15)));
        assert_eq!(cal.oracle().cached_years(), 1);
    }
}
