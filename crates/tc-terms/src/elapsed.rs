//! Day breakdown of the interval between two dates.
//!
//! No term semantics: the interval is only analysed. The total counts
//! calendar days from one date to the other; the breakdown classifies the
//! days strictly between them.

use tc_core::Language;
use tc_time::calendar::Calendar;
use tc_time::suspension::is_in_suspension;
use tc_time::Date;

use crate::note::{render_all, Note};

/// Day breakdown between two dates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElapsedPeriod {
    /// The earlier date.
    pub start: Date,
    /// The later date.
    pub end: Date,
    /// `end - start` in calendar days.
    pub total_calendar_days: u32,
    /// Days strictly between that are not Sundays or holidays.
    pub working_days: u32,
    /// Sundays and holidays strictly between.
    pub holiday_days: u32,
    /// Days strictly between that fall in August. Zero unless requested.
    pub suspension_days: u32,
    /// Summary notes.
    pub notes: Vec<Note>,
}

impl ElapsedPeriod {
    /// Notes rendered in `language`.
    pub fn note_texts(&self, language: Language) -> Vec<String> {
        render_all(&self.notes, language)
    }
}

/// Analyse the interval between `a` and `b`, in either order.
///
/// With `include_suspension`, August days between the dates are counted in
/// [`ElapsedPeriod::suspension_days`]; they stay counted in the working or
/// holiday totals as well.
pub fn elapsed_period<C: Calendar + ?Sized>(
    calendar: &C,
    a: Date,
    b: Date,
    include_suspension: bool,
) -> ElapsedPeriod {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let total_calendar_days = start.abs_days_between(end);

    let mut working_days = 0;
    let mut holiday_days = 0;
    let mut suspension_days = 0;
    for day in start.days_until(end) {
        if calendar.is_non_working(day) {
            holiday_days += 1;
        } else {
            working_days += 1;
        }
        if include_suspension && is_in_suspension(day) {
            suspension_days += 1;
        }
    }

    let mut notes = Vec::new();
    match total_calendar_days {
        0 => notes.push(Note::SameDay),
        1 => notes.push(Note::ConsecutiveDays),
        _ => {
            notes.push(Note::DayBreakdown {
                working: working_days,
                holidays: holiday_days,
            });
            if suspension_days > 0 {
                notes.push(Note::SuspendedDays {
                    days: suspension_days,
                });
            }
        }
    }
    tracing::debug!(
        %start,
        %end,
        total_calendar_days,
        working_days,
        holiday_days,
        suspension_days,
        "elapsed period"
    );

    ElapsedPeriod {
        start,
        end,
        total_calendar_days,
        working_days,
        holiday_days,
        suspension_days,
        notes,
    }
}
