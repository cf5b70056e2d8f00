//! Procedural term calculator (art. 155 c.p.c.).
//!
//! A term is computed as a fixed pipeline, each step recording a [`Note`]
//! when it changes the date:
//!
//! 1. shift the start date by the requested amount (forward or backward);
//! 2. extend by the suspended August days the span covered, once;
//! 3. days only: move a Saturday deadline (art. 155 c. 5);
//! 4. postpone a deadline on a Sunday or holiday to the next working day,
//!    unless it is a free term;
//! 5. warn when the final date still is a holiday or a Saturday.
//!
//! Step 2 is a single correction: a date pushed into a later August by the
//! extension is not extended again.
//!
//! Month and year terms run steps 1, 2, 4 and 5 only. They have no Saturday
//! step and are never free terms.

use tc_core::{Language, Result, Settings};
use tc_time::calendar::Calendar;
use tc_time::suspension::suspension_days;
use tc_time::{Date, ItalianCourts, TermUnit};
use tracing::debug;

use crate::elapsed::{elapsed_period, ElapsedPeriod};
use crate::note::{render_all, Note};
use crate::validation;

/// A deadline at most this many calendar days from its start is urgent.
pub const URGENT_WITHIN_DAYS: u32 = 7;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermRequest {
    /// Triggering date.
    pub start: Date,
    /// Unit of `amount`.
    pub unit: TermUnit,
    /// Length of the term, positive.
    pub amount: u32,
    /// Extend the term over the August suspension.
    pub apply_suspension: bool,
    /// Free term ("termine libero"): no suspension and no holiday
    /// postponement. Only meaningful for day terms.
    pub free_term: bool,
    /// Count backward from `start`.
    pub backward: bool,
}

impl TermRequest {
    /// A forward, ordinary term with the suspension applied.
    pub fn new(start: Date, unit: TermUnit, amount: u32) -> Self {
        Self {
            start,
            unit,
            amount,
            apply_suspension: true,
            free_term: false,
            backward: false,
        }
    }

    /// Set whether the August suspension applies.
    pub fn with_suspension(mut self, flag: bool) -> Self {
        self.apply_suspension = flag;
        self
    }

    /// Set whether this is a free term.
    pub fn free_term(mut self, flag: bool) -> Self {
        self.free_term = flag;
        self
    }

    /// Set whether the term counts backward.
    pub fn backward(mut self, flag: bool) -> Self {
        self.backward = flag;
        self
    }
}

/// Outcome of a term calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermResult {
    /// Triggering date.
    pub start: Date,
    /// Unit of `amount`.
    pub unit: TermUnit,
    /// Requested length.
    pub amount: u32,
    /// Date after the shift, the suspension and (days only) the Saturday
    /// rule, before any holiday postponement.
    pub raw_date: Date,
    /// The deadline.
    pub final_date: Date,
    /// Suspended days added in step 2.
    pub suspension_days: u32,
    /// Adjustments and warnings, in the order they were applied.
    pub notes: Vec<Note>,
}

impl TermResult {
    /// Notes rendered in `language`.
    pub fn note_texts(&self, language: Language) -> Vec<String> {
        render_all(&self.notes, language)
    }

    /// Whether any warning note is present.
    pub fn has_warnings(&self) -> bool {
        self.notes.iter().any(Note::is_warning)
    }

    /// Calendar days between the start and the deadline.
    pub fn total_days(&self) -> u32 {
        self.start.abs_days_between(self.final_date)
    }

    /// Whether the deadline is at most [`URGENT_WITHIN_DAYS`] from the start.
    pub fn is_urgent(&self) -> bool {
        self.total_days() <= URGENT_WITHIN_DAYS
    }
}

/// Term calculator over a court calendar.
#[derive(Debug, Clone)]
pub struct TermCalculator<C: Calendar = ItalianCourts<'static>> {
    calendar: C,
    settings: Settings,
}

impl Default for TermCalculator {
    fn default() -> Self {
        Self::new(ItalianCourts::default())
    }
}

impl<C: Calendar> TermCalculator<C> {
    /// Calculator over `calendar` with default settings.
    pub fn new(calendar: C) -> Self {
        Self::with_settings(calendar, Settings::default())
    }

    /// Calculator over `calendar` with explicit settings.
    pub fn with_settings(calendar: C, settings: Settings) -> Self {
        Self { calendar, settings }
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch on `request.unit`. The request is assumed valid.
    pub fn calculate(&self, request: &TermRequest) -> TermResult {
        match request.unit {
            TermUnit::Days => self.days(
                request.start,
                request.amount,
                request.apply_suspension,
                request.free_term,
                request.backward,
            ),
            TermUnit::Months => self.months(
                request.start,
                request.amount,
                request.apply_suspension,
                request.backward,
            ),
            TermUnit::Years => self.years(
                request.start,
                request.amount,
                request.apply_suspension,
                request.backward,
            ),
        }
    }

    /// Validate `request` against the configured limits, then calculate.
    pub fn try_calculate(&self, request: &TermRequest) -> Result<TermResult> {
        validation::validate_request(request, &self.settings.limits)?;
        Ok(self.calculate(request))
    }

    /// Notes of `result` rendered in the configured language.
    pub fn note_texts(&self, result: &TermResult) -> Vec<String> {
        result.note_texts(self.settings.language)
    }

    /// Day breakdown between `a` and `b` over this calculator's calendar.
    ///
    /// Render its notes with [`note_texts_for`](Self::note_texts_for) to use
    /// the configured language.
    pub fn elapsed(&self, a: Date, b: Date, include_suspension: bool) -> ElapsedPeriod {
        elapsed_period(&self.calendar, a, b, include_suspension)
    }

    /// Notes of an elapsed period rendered in the configured language.
    pub fn note_texts_for(&self, period: &ElapsedPeriod) -> Vec<String> {
        period.note_texts(self.settings.language)
    }

    /// Term of `days` calendar days (ex numeratio dierum).
    pub fn days(
        &self,
        start: Date,
        days: u32,
        apply_suspension: bool,
        free_term: bool,
        backward: bool,
    ) -> TermResult {
        let mut notes = Vec::new();
        let mut date = shift(start, days, backward);

        let suspended = if apply_suspension && !free_term {
            self.extend_for_suspension(start, &mut date, backward, &mut notes)
        } else {
            0
        };

        let moved = self.apply_saturday_rule(date, backward);
        if moved != date {
            debug!(%date, %moved, backward, "saturday rule");
            notes.push(Note::SaturdayRule);
            date = moved;
        }

        let raw_date = date;
        let mut final_date = date;
        if !free_term && self.calendar.is_non_working(final_date) {
            final_date = self.postpone_for_holiday(final_date, &mut notes);
            // A holiday run ending on Friday lands on Saturday.
            if !backward && self.calendar.is_saturday(final_date) {
                final_date = self.apply_saturday_rule(final_date, false);
                debug!(%final_date, "saturday rule after holiday postponement");
                notes.push(Note::SaturdayRule);
            }
        }
        self.push_warnings(final_date, &mut notes);

        TermResult {
            start,
            unit: TermUnit::Days,
            amount: days,
            raw_date,
            final_date,
            suspension_days: suspended,
            notes,
        }
    }

    /// Term of `months` calendar months.
    pub fn months(
        &self,
        start: Date,
        months: u32,
        apply_suspension: bool,
        backward: bool,
    ) -> TermResult {
        let mut result = self.month_term(start, months, apply_suspension, backward);
        result.unit = TermUnit::Months;
        result
    }

    /// Term of `years` calendar years, computed as `12 * years` months.
    pub fn years(&self, start: Date, years: u32, apply_suspension: bool, backward: bool) -> TermResult {
        let mut result =
            self.month_term(start, years.saturating_mul(12), apply_suspension, backward);
        result.unit = TermUnit::Years;
        result.amount = years;
        result
    }

    /// Saturday rule of art. 155 c. 5 c.p.c.
    ///
    /// A Saturday moves back to Friday for backward terms, forward to the next
    /// working day otherwise. Any other day is returned unchanged.
    pub fn apply_saturday_rule(&self, date: Date, backward: bool) -> Date {
        if !self.calendar.is_saturday(date) {
            return date;
        }
        if backward {
            date - 1
        } else {
            self.calendar.next_working_day(date)
        }
    }

    fn month_term(
        &self,
        start: Date,
        months: u32,
        apply_suspension: bool,
        backward: bool,
    ) -> TermResult {
        let mut notes = Vec::new();
        let n = signed(months, backward);
        let (mut date, clamped) = start.plus_months_clamped(n);
        if clamped {
            debug!(%start, %date, "month end clamped");
            notes.push(Note::MonthClamped);
        }

        let suspended = if apply_suspension {
            self.extend_for_suspension(start, &mut date, backward, &mut notes)
        } else {
            0
        };

        let raw_date = date;
        let mut final_date = date;
        if self.calendar.is_non_working(final_date) {
            final_date = self.postpone_for_holiday(final_date, &mut notes);
        }
        self.push_warnings(final_date, &mut notes);

        TermResult {
            start,
            unit: TermUnit::Months,
            amount: months,
            raw_date,
            final_date,
            suspension_days: suspended,
            notes,
        }
    }

    fn extend_for_suspension(
        &self,
        start: Date,
        date: &mut Date,
        backward: bool,
        notes: &mut Vec<Note>,
    ) -> u32 {
        let suspended = suspension_days(&self.calendar, start, *date);
        if suspended > 0 {
            let extended = shift(*date, suspended, backward);
            debug!(from = %date, to = %extended, suspended, "ferial suspension");
            *date = extended;
            notes.push(Note::SuspensionApplied { days: suspended });
        }
        suspended
    }

    fn postpone_for_holiday(&self, date: Date, notes: &mut Vec<Note>) -> Date {
        let next = self.calendar.next_working_day(date);
        debug!(%date, %next, "holiday postponement");
        notes.push(Note::HolidayPostponement);
        next
    }

    fn push_warnings(&self, final_date: Date, notes: &mut Vec<Note>) {
        if self.calendar.is_non_working(final_date) {
            notes.push(Note::FinalOnHoliday);
        }
        if self.calendar.is_saturday(final_date) {
            notes.push(Note::FinalOnSaturday);
        }
    }
}

/// `n` as a signed day/month offset in the requested direction.
fn signed(n: u32, backward: bool) -> i32 {
    let n = i32::try_from(n).unwrap_or(i32::MAX);
    if backward {
        -n
    } else {
        n
    }
}

fn shift(date: Date, days: u32, backward: bool) -> Date {
    date + signed(days, backward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_time::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calc() -> TermCalculator {
        TermCalculator::default()
    }

    #[test]
    fn plain_forward_days() {
        // 2024-03-04 (Mon) + 10 = 2024-03-14 (Thu)
        let r = calc().days(date(2024, 3, 4), 10, true, false, false);
        assert_eq!(r.raw_date, date(2024, 3, 14));
        assert_eq!(r.final_date, date(2024, 3, 14));
        assert!(r.notes.is_empty());
        assert_eq!(r.suspension_days, 0);
    }

    #[test]
    fn saturday_forward_goes_to_monday() {
        // 2024-03-04 + 5 = Sat 2024-03-09 → Mon 2024-03-11
        let r = calc().days(date(2024, 3, 4), 5, false, false, false);
        assert_eq!(r.final_date, date(2024, 3, 11));
        assert_eq!(r.raw_date, date(2024, 3, 11));
        assert_eq!(r.notes, vec![Note::SaturdayRule]);
    }

    #[test]
    fn saturday_forward_skips_easter_monday() {
        // Sat 2024-03-30 → Easter Sunday, Easter Monday → Tue 2024-04-02
        let r = calc().days(date(2024, 3, 20), 10, false, false, false);
        assert_eq!(r.final_date, date(2024, 4, 2));
        assert_eq!(r.notes, vec![Note::SaturdayRule]);
    }

    #[test]
    fn saturday_backward_goes_to_friday() {
        // 2024-03-19 - 10 = Sat 2024-03-09 → Fri 2024-03-08
        let r = calc().days(date(2024, 3, 19), 10, false, false, true);
        assert_eq!(r.final_date, date(2024, 3, 8));
        assert_eq!(r.final_date.weekday(), Weekday::Friday);
        assert_eq!(r.notes, vec![Note::SaturdayRule]);
    }

    #[test]
    fn sunday_is_postponed() {
        // 2024-03-04 + 6 = Sun 2024-03-10 → Mon 2024-03-11
        let r = calc().days(date(2024, 3, 4), 6, false, false, false);
        assert_eq!(r.raw_date, date(2024, 3, 10));
        assert_eq!(r.final_date, date(2024, 3, 11));
        assert_eq!(r.notes, vec![Note::HolidayPostponement]);
    }

    #[test]
    fn holiday_postponement_is_forward_for_backward_terms() {
        // 2024-12-30 - 5 = Wed 2024-12-25 → Fri 2024-12-27
        let r = calc().days(date(2024, 12, 30), 5, false, false, true);
        assert_eq!(r.raw_date, date(2024, 12, 25));
        assert_eq!(r.final_date, date(2024, 12, 27));
        assert_eq!(r.notes, vec![Note::HolidayPostponement]);
    }

    #[test]
    fn friday_holiday_rolls_past_saturday() {
        // 2024-10-22 + 10 = Fri 2024-11-01 (Ognissanti) → Sat → Mon 2024-11-04
        let r = calc().days(date(2024, 10, 22), 10, false, false, false);
        assert_eq!(r.final_date, date(2024, 11, 4));
        assert_eq!(r.notes, vec![Note::HolidayPostponement, Note::SaturdayRule]);
        assert!(!r.has_warnings());
    }

    #[test]
    fn backward_saturday_onto_holiday_friday_returns_to_saturday() {
        // 2023-01-17 - 10 = Sat 2023-01-07 → Fri 2023-01-06 (Epifania)
        // → postponed forward to Sat 2023-01-07, kept with a warning
        let r = calc().days(date(2023, 1, 17), 10, false, false, true);
        assert_eq!(r.raw_date, date(2023, 1, 6));
        assert_eq!(r.final_date, date(2023, 1, 7));
        assert_eq!(
            r.notes,
            vec![Note::SaturdayRule, Note::HolidayPostponement, Note::FinalOnSaturday]
        );
    }

    #[test]
    fn terms_near_range_end_saturate() {
        let start = Date::MAX - 10;
        assert_eq!(start.year(), Date::MAX_YEAR);
        let r = calc().days(start, 30, true, false, false);
        assert_eq!(r.final_date, Date::MAX);
        let r = calc().months(start, 120, true, false);
        assert!(r.final_date <= Date::MAX);
        let r = calc().days(Date::MIN + 10, 30, true, false, true);
        assert!(r.final_date >= Date::MIN);
    }

    #[test]
    fn urgency_threshold() {
        // Mon 2024-03-04 + 5 → Mon 2024-03-11: 7 days
        let r = calc().days(date(2024, 3, 4), 5, false, false, false);
        assert_eq!(r.total_days(), 7);
        assert!(r.is_urgent());
        let r = calc().days(date(2024, 3, 4), 10, false, false, false);
        assert!(!r.is_urgent());
        // backward terms measure the distance too
        let r = calc().days(date(2024, 3, 14), 3, false, false, true);
        assert!(r.is_urgent());
    }

    #[test]
    fn elapsed_uses_calendar_and_language() {
        let c = TermCalculator::with_settings(
            ItalianCourts::default(),
            Settings::with_language(Language::English),
        );
        let p = c.elapsed(date(2024, 12, 31), date(2024, 12, 20), false);
        assert_eq!(p.start, date(2024, 12, 20));
        // 21..=30: Sundays 22 and 29, Christmas, Santo Stefano
        assert_eq!(p.holiday_days, 4);
        assert_eq!(p.working_days, 6);
        assert_eq!(c.note_texts_for(&p), vec!["Days in between: 6 working, 4 holidays"]);
    }

    #[test]
    fn free_term_keeps_holiday_with_warning() {
        // 2024-12-15 + 10 = Wed 2024-12-25
        let r = calc().days(date(2024, 12, 15), 10, true, true, false);
        assert_eq!(r.final_date, date(2024, 12, 25));
        assert_eq!(r.notes, vec![Note::FinalOnHoliday]);
        assert!(r.has_warnings());
    }

    #[test]
    fn free_term_ignores_suspension() {
        let r = calc().days(date(2024, 7, 25), 10, true, true, false);
        assert_eq!(r.suspension_days, 0);
        assert_eq!(r.raw_date, date(2024, 8, 4));
    }

    #[test]
    fn free_term_still_applies_saturday_rule() {
        // 2024-03-04 + 5 = Sat 2024-03-09
        let r = calc().days(date(2024, 3, 4), 5, false, true, false);
        assert_eq!(r.final_date, date(2024, 3, 11));
        assert_eq!(r.notes, vec![Note::SaturdayRule]);
    }

    #[test]
    fn month_clamping_note() {
        let r = calc().months(date(2023, 1, 31), 1, false, false);
        assert_eq!(r.raw_date, date(2023, 2, 28));
        assert!(r.notes.contains(&Note::MonthClamped));

        let leap = calc().months(date(2024, 1, 31), 1, false, false);
        assert_eq!(leap.raw_date, date(2024, 2, 29));
        assert!(leap.notes.contains(&Note::MonthClamped));
    }

    #[test]
    fn month_terms_have_no_saturday_step() {
        // 2024-01-09 + 2 months = Sat 2024-03-09: kept, with a warning
        let r = calc().months(date(2024, 1, 9), 2, false, false);
        assert_eq!(r.final_date, date(2024, 3, 9));
        assert_eq!(r.notes, vec![Note::FinalOnSaturday]);
    }

    #[test]
    fn month_term_postponed_off_holiday() {
        // 2024-10-01 + 1 month = Fri 2024-11-01 (Ognissanti) → Sat 2024-11-02
        let r = calc().months(date(2024, 10, 1), 1, false, false);
        assert_eq!(r.raw_date, date(2024, 11, 1));
        assert_eq!(r.final_date, date(2024, 11, 2));
        assert_eq!(r.notes, vec![Note::HolidayPostponement, Note::FinalOnSaturday]);
    }

    #[test]
    fn month_term_with_suspension() {
        // 2024-07-10 + 1 month = Sat 2024-08-10; Aug 1..=10 minus Sunday the 4th = 9
        let r = calc().months(date(2024, 7, 10), 1, true, false);
        assert_eq!(r.suspension_days, 9);
        assert_eq!(r.raw_date, date(2024, 8, 19));
        assert_eq!(r.final_date, date(2024, 8, 19));
        assert_eq!(r.notes, vec![Note::SuspensionApplied { days: 9 }]);
    }

    #[test]
    fn years_delegate_to_months() {
        let r = calc().years(date(2024, 2, 29), 1, false, false);
        assert_eq!(r.unit, TermUnit::Years);
        assert_eq!(r.amount, 1);
        assert_eq!(r.raw_date, date(2025, 2, 28));
        assert_eq!(r.final_date, date(2025, 2, 28));
        assert_eq!(r.notes, vec![Note::MonthClamped]);
    }

    #[test]
    fn backward_months() {
        let r = calc().months(date(2024, 3, 31), 1, false, true);
        assert_eq!(r.raw_date, date(2024, 2, 29));
        assert!(r.notes.contains(&Note::MonthClamped));
    }

    #[test]
    fn calculate_dispatches_on_unit() {
        let req = TermRequest::new(date(2024, 3, 4), TermUnit::Days, 10).with_suspension(false);
        assert_eq!(calc().calculate(&req), calc().days(date(2024, 3, 4), 10, false, false, false));

        let req = TermRequest::new(date(2024, 3, 4), TermUnit::Years, 2).backward(true);
        assert_eq!(calc().calculate(&req), calc().years(date(2024, 3, 4), 2, true, true));
    }

    #[test]
    fn try_calculate_rejects_out_of_bounds() {
        let req = TermRequest::new(date(2024, 3, 4), TermUnit::Months, 121);
        assert!(calc().try_calculate(&req).is_err());
        let req = TermRequest::new(date(2024, 3, 4), TermUnit::Days, 0);
        assert!(calc().try_calculate(&req).is_err());
        let req = TermRequest::new(date(2024, 3, 4), TermUnit::Years, 10);
        assert!(calc().try_calculate(&req).is_ok());
    }

    #[test]
    fn note_texts_follow_settings() {
        let c = TermCalculator::with_settings(
            ItalianCourts::default(),
            Settings::with_language(Language::English),
        );
        let r = c.days(date(2024, 3, 4), 5, false, false, false);
        assert_eq!(c.note_texts(&r), vec!["Saturday rule applied (art. 155 c. 5 c.p.c.)"]);
    }
}
