//! Human-readable date formatting.

use tc_core::Language;

use crate::date::Date;
use crate::month::Month;

/// Long form with weekday: `"lunedì 15 gennaio 2024"` /
/// `"Monday 15 January 2024"`.
pub fn long(date: Date, language: Language) -> String {
    let (y, m, d) = date.ymd();
    let month = Month::from_number(m).map_or("", |m| m.name(language));
    format!("{} {d} {month} {y}", date.weekday().name(language))
}

/// Short numeric form `DD/MM/YYYY`.
pub fn short(date: Date) -> String {
    let (y, m, d) = date.ymd();
    format!("{d:02}/{m:02}/{y:04}")
}

/// A span between two dates, earlier date first:
/// `"dal 01/08/2024 al 31/08/2024"`.
pub fn period(a: Date, b: Date, language: Language) -> String {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    match language {
        Language::Italian => format!("dal {} al {}", short(start), short(end)),
        Language::English => format!("from {} to {}", short(start), short(end)),
    }
}
