//! Error types for the termini crates.
//!
//! The calculators themselves are total over validated input and never
//! return errors. Failures happen before them: building a date from
//! out-of-range components, parsing user text, or validating a requested term
//! against the configured limits. All of it is reported through the single
//! `thiserror`-derived [`Error`] enum below.

use thiserror::Error;

/// The error type used throughout the termini crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)), such as
    /// a date serial or shift outside the supported range.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date could not be constructed from its components.
    #[error("date error: {0}")]
    Date(String),

    /// No start date was supplied.
    #[error("a start date is required")]
    MissingDate,

    /// The supplied text is not a recognised date.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// The term amount is not an integer.
    #[error("term amount must be a number, got {0:?}")]
    NonNumericAmount(String),

    /// The term amount is zero or negative.
    #[error("term amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// The term amount exceeds the configured bound for its unit.
    #[error("term too long: {amount} {unit} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// The requested amount.
        amount: i64,
        /// The maximum allowed for the unit.
        max: u32,
        /// Lower-case name of the unit (`"days"`, `"months"`, `"years"`).
        unit: &'static str,
    },

    /// Two dates that must differ are equal.
    #[error("the two dates must differ")]
    EqualDates,
}

/// Shorthand `Result` type used throughout the termini crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::ensure;
/// fn positive(x: i64) -> tc_core::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
