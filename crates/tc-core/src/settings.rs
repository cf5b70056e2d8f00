//! Calculator settings.
//!
//! [`Settings`] bundles the two knobs a host application can turn: the
//! [`Language`] used for notes and formatted dates, and the [`TermLimits`]
//! enforced by input validation. Settings are plain values passed into the
//! calculators; there is no process-wide mutable state.

/// Language used for notes and human-readable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Italian (default).
    #[default]
    Italian,
    /// English.
    English,
}

/// Upper bounds on term amounts, checked by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TermLimits {
    /// Maximum term in days.
    pub max_days: u32,
    /// Maximum term in months.
    pub max_months: u32,
    /// Maximum term in years.
    pub max_years: u32,
}

impl TermLimits {
    /// Default maximum term in days.
    pub const DEFAULT_MAX_DAYS: u32 = 3650;
    /// Default maximum term in months.
    pub const DEFAULT_MAX_MONTHS: u32 = 120;
    /// Default maximum term in years.
    pub const DEFAULT_MAX_YEARS: u32 = 10;
}

impl Default for TermLimits {
    fn default() -> Self {
        Self {
            max_days: Self::DEFAULT_MAX_DAYS,
            max_months: Self::DEFAULT_MAX_MONTHS,
            max_years: Self::DEFAULT_MAX_YEARS,
        }
    }
}

/// Settings shared by the calculators, the validator and the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Language for notes and formatted dates.
    pub language: Language,
    /// Bounds enforced by validation.
    pub limits: TermLimits,
}

impl Settings {
    /// Settings with the given language and default limits.
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}
