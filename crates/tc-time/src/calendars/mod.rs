//! Concrete court calendars.

/// Italian civil courts.
pub mod italy;
