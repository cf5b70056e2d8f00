//! # termini
//!
//! Deadline calculator for Italian civil-procedure terms (art. 155 c.p.c.):
//! terms in days, months and years, the national holiday calendar, the
//! August ferial suspension and the Saturday rule.
//!
//! This crate is a façade that re-exports the `tc-*` workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use termini::terms::{TermCalculator, TermRequest};
//! use termini::time::{Date, TermUnit};
//!
//! let calc = TermCalculator::default();
//! let start: Date = "2024-03-04".parse().unwrap();
//! let result = calc.calculate(&TermRequest::new(start, TermUnit::Days, 5));
//! // Lands on Saturday 9 March, moved to Monday 11 March.
//! assert_eq!(result.final_date.to_string(), "2024-03-11");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors and settings.
pub use tc_core as core;

/// Dates, holidays, calendars and the August suspension.
pub use tc_time as time;

/// Term and elapsed-period calculators, validation, standard terms.
pub use tc_terms as terms;
