//! Italian national holidays.
//!
//! The holiday table is ten fixed (month, day) pairs plus Easter Sunday and
//! Easter Monday, which are derived per year with the anonymous Gregorian
//! (Meeus/Jones/Butcher) algorithm. Nothing is pinned to a particular year.
//!
//! [`HolidayOracle`] memoises the per-year table. The memo is read-through:
//! a missing year is computed outside any lock and inserted afterwards, so two
//! threads racing on the same year both compute the same value and whichever
//! insert lands first wins.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::date::Date;

/// A named non-working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    /// Italian name of the holiday.
    pub name: &'static str,
    /// The date it falls on in the requested year.
    pub date: Date,
    /// `true` for the Easter-derived holidays.
    pub movable: bool,
}

/// Fixed national holidays as (month, day, name).
pub const FIXED_HOLIDAYS: [(u8, u8, &str); 10] = [
    (1, 1, "Capodanno"),
    (1, 6, "Epifania"),
    (4, 25, "Festa della Liberazione"),
    (5, 1, "Festa del Lavoro"),
    (6, 2, "Festa della Repubblica"),
    (8, 15, "Ferragosto"),
    (11, 1, "Ognissanti"),
    (12, 8, "Immacolata Concezione"),
    (12, 25, "Natale"),
    (12, 26, "Santo Stefano"),
];

/// Easter Sunday of `year` in the proleptic Gregorian calendar.
///
/// Integer-only arithmetic; floor division keeps it exact for years ≤ 0.
pub fn easter_sunday(year: i32) -> Date {
    let y = year as i64;
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u8;
    let day = (n % 31 + 1) as u8;
    Date::from_ymd_unchecked(year, month, day)
}

/// Easter Monday (Lunedì dell'Angelo) of `year`.
pub fn easter_monday(year: i32) -> Date {
    easter_sunday(year) + 1
}

/// The holiday table of a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayYear {
    year: i32,
    holidays: Vec<Holiday>,
    dates: HashSet<Date>,
}

impl HolidayYear {
    /// Build the table for `year`.
    pub fn compute(year: i32) -> Self {
        let easter = easter_sunday(year);
        let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
            .iter()
            .map(|&(m, d, name)| Holiday {
                name,
                date: Date::from_ymd_unchecked(year, m, d),
                movable: false,
            })
            .collect();
        holidays.push(Holiday {
            name: "Pasqua",
            date: easter,
            movable: true,
        });
        holidays.push(Holiday {
            name: "Lunedì dell'Angelo",
            date: easter + 1,
            movable: true,
        });
        holidays.sort_by_key(|h| h.date);
        let dates = holidays.iter().map(|h| h.date).collect();
        Self {
            year,
            holidays,
            dates,
        }
    }

    /// The year this table describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Holidays sorted by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// The set of holiday dates.
    pub fn dates(&self) -> &HashSet<Date> {
        &self.dates
    }

    /// Whether `date` is one of this year's holidays.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// The holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }
}

/// Memoising source of per-year holiday tables.
#[derive(Debug, Default)]
pub struct HolidayOracle {
    cache: RwLock<HashMap<i32, Arc<HolidayYear>>>,
}

impl HolidayOracle {
    /// Create an oracle with an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide oracle shared by default calendars.
    pub fn shared() -> &'static HolidayOracle {
        static INSTANCE: OnceLock<HolidayOracle> = OnceLock::new();
        INSTANCE.get_or_init(HolidayOracle::new)
    }

    /// The holiday table for `year`.
    pub fn holidays_for_year(&self, year: i32) -> Arc<HolidayYear> {
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(hit);
        }
        tracing::trace!(year, "computing holiday table");
        let computed = Arc::new(HolidayYear::compute(year));
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(year).or_insert(computed))
    }

    /// Named holidays of `year`, sorted by date.
    pub fn holidays(&self, year: i32) -> Vec<Holiday> {
        self.holidays_for_year(year).holidays().to_vec()
    }

    /// Whether `date` is a national holiday (Sundays are not included).
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays_for_year(date.year()).contains(date)
    }

    /// Number of years currently memoised.
    pub fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
