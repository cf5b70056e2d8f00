//! `TermUnit` — the unit a procedural term is expressed in.

use tc_core::{Language, TermLimits};

/// Unit of a procedural term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TermUnit {
    /// Calendar days (ex numeratio dierum).
    Days,
    /// Calendar months.
    Months,
    /// Calendar years, counted as 12 months each.
    Years,
}

impl TermUnit {
    /// Largest amount `limits` allow for this unit.
    pub fn max_amount(&self, limits: &TermLimits) -> u32 {
        match self {
            TermUnit::Days => limits.max_days,
            TermUnit::Months => limits.max_months,
            TermUnit::Years => limits.max_years,
        }
    }

    /// Plural name in the given language.
    pub fn name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Italian, TermUnit::Days) => "giorni",
            (Language::Italian, TermUnit::Months) => "mesi",
            (Language::Italian, TermUnit::Years) => "anni",
            (Language::English, TermUnit::Days) => "days",
            (Language::English, TermUnit::Months) => "months",
            (Language::English, TermUnit::Years) => "years",
        }
    }
}

impl std::fmt::Display for TermUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Language::English))
    }
}
