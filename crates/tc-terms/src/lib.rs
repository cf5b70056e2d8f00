//! # tc-terms
//!
//! Italian civil-procedure term calculator.
//!
//! ```
//! use tc_terms::{TermCalculator, TermRequest};
//! use tc_time::{Date, TermUnit};
//!
//! let calc = TermCalculator::default();
//! let start = Date::from_ymd(2024, 7, 20).unwrap();
//! let result = calc.calculate(&TermRequest::new(start, TermUnit::Days, 30));
//! assert_eq!(result.suspension_days, 15);
//! assert_eq!(result.final_date, Date::from_ymd(2024, 9, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Standard procedural terms.
pub mod catalog;

/// Elapsed-period analysis.
pub mod elapsed;

/// Explanatory notes.
pub mod note;

/// The term calculator.
pub mod term;

/// Input validation.
pub mod validation;

pub use catalog::StandardTerm;
pub use elapsed::{elapsed_period, ElapsedPeriod};
pub use note::Note;
pub use term::{TermCalculator, TermRequest, TermResult};
