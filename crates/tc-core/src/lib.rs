//! # tc-core
//!
//! Error definitions and settings shared by the termini crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

/// Language and term-limit settings.
pub mod settings;

pub use errors::{Error, Result};
pub use settings::{Language, Settings, TermLimits};
