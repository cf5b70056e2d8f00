//! Explanatory notes attached to calculation results.
//!
//! Callers display notes verbatim, in order. Each note is a typed value
//! rendered to text on demand in the requested [`Language`]; `Display`
//! renders Italian.

use tc_core::Language;

/// One adjustment or warning produced by a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Note {
    /// A month shift landed past the end of a shorter month and was clamped.
    MonthClamped,
    /// The term was extended by the suspended August days it covered.
    SuspensionApplied {
        /// Number of suspended days added.
        days: u32,
    },
    /// A Saturday deadline was moved by art. 155 c. 5 c.p.c.
    SaturdayRule,
    /// The deadline fell on a Sunday or holiday and was postponed.
    HolidayPostponement,
    /// Warning: the final date is a Sunday or holiday.
    FinalOnHoliday,
    /// Warning: the final date is a Saturday.
    FinalOnSaturday,
    /// The two dates of an elapsed period coincide.
    SameDay,
    /// The two dates of an elapsed period are consecutive.
    ConsecutiveDays,
    /// Breakdown of the days strictly between two dates.
    DayBreakdown {
        /// Working days (Saturdays included).
        working: u32,
        /// Sundays and holidays.
        holidays: u32,
    },
    /// How many of the days between two dates fall in August.
    SuspendedDays {
        /// Number of August days.
        days: u32,
    },
}

impl Note {
    /// Whether the note is a warning rather than a record of an adjustment.
    pub fn is_warning(&self) -> bool {
        matches!(self, Note::FinalOnHoliday | Note::FinalOnSaturday)
    }

    /// Render the note in `language`.
    pub fn render(&self, language: Language) -> String {
        match language {
            Language::Italian => self.italian(),
            Language::English => self.english(),
        }
    }

    fn italian(&self) -> String {
        match *self {
            Note::MonthClamped => "Data aggiustata per mese con meno giorni".into(),
            Note::SuspensionApplied { days } => {
                format!("Applicata sospensione feriale: {days} giorni")
            }
            Note::SaturdayRule => "Applicata regola comma 5 art. 155 c.p.c. per sabato".into(),
            Note::HolidayPostponement => "Data finale posticipata per festività".into(),
            Note::FinalOnHoliday => "ATTENZIONE: la scadenza cade in un giorno festivo".into(),
            Note::FinalOnSaturday => "ATTENZIONE: la scadenza cade di sabato".into(),
            Note::SameDay => "Le date coincidono: nessun giorno intercorrente".into(),
            Note::ConsecutiveDays => "Date consecutive: un solo giorno di differenza".into(),
            Note::DayBreakdown { working, holidays } => {
                format!("Giorni intercorrenti: {working} lavorativi, {holidays} festivi")
            }
            Note::SuspendedDays { days } => {
                format!("Di cui {days} giorni nel periodo di sospensione feriale (agosto)")
            }
        }
    }

    fn english(&self) -> String {
        match *self {
            Note::MonthClamped => "Date clamped to the end of a shorter month".into(),
            Note::SuspensionApplied { days } => {
                format!("Ferial suspension applied: {days} days")
            }
            Note::SaturdayRule => "Saturday rule applied (art. 155 c. 5 c.p.c.)".into(),
            Note::HolidayPostponement => "Final date postponed for holiday".into(),
            Note::FinalOnHoliday => "WARNING: the deadline falls on a holiday".into(),
            Note::FinalOnSaturday => "WARNING: the deadline falls on a Saturday".into(),
            Note::SameDay => "The dates are equal: no days in between".into(),
            Note::ConsecutiveDays => "Consecutive dates: one day apart".into(),
            Note::DayBreakdown { working, holidays } => {
                format!("Days in between: {working} working, {holidays} holidays")
            }
            Note::SuspendedDays { days } => {
                format!("{days} of them fall in the August ferial suspension")
            }
        }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Language::Italian))
    }
}

/// Render a list of notes in `language`, preserving order.
pub fn render_all(notes: &[Note], language: Language) -> Vec<String> {
    notes.iter().map(|n| n.render(language)).collect()
}
