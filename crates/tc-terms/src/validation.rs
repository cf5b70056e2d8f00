//! Input validation run before the calculators.
//!
//! The calculators assume valid input. These functions turn raw user text
//! into checked values, rejecting missing or unparseable dates, non-numeric
//! or non-positive amounts, amounts over the configured [`TermLimits`], and
//! equal dates where two distinct dates are required.

use tc_core::errors::{Error, Result};
use tc_core::{Language, TermLimits};
use tc_time::{Date, TermUnit};

use crate::term::TermRequest;

/// Parse a start date (`YYYY-MM-DD` or `DD/MM/YYYY`).
pub fn parse_date(text: &str) -> Result<Date> {
    text.parse()
}

/// Parse a term amount. Only integers are accepted; the sign is kept so the
/// caller can report non-positive values precisely.
pub fn parse_amount(text: &str) -> Result<i64> {
    let t = text.trim();
    t.parse::<i64>()
        .map_err(|_| Error::NonNumericAmount(text.to_string()))
}

/// Check an amount against the bound for `unit`.
pub fn check_amount(amount: i64, unit: TermUnit, limits: &TermLimits) -> Result<u32> {
    if amount <= 0 {
        return Err(Error::NonPositiveAmount(amount));
    }
    let max = unit.max_amount(limits);
    if amount > i64::from(max) {
        return Err(Error::AmountTooLarge {
            amount,
            max,
            unit: unit.name(Language::English),
        });
    }
    // amount ≤ max ≤ u32::MAX
    Ok(amount as u32)
}

/// Validate the raw inputs of a term calculation.
pub fn validate_term_input(
    start: &str,
    amount: &str,
    unit: TermUnit,
    limits: &TermLimits,
) -> Result<(Date, u32)> {
    let date = parse_date(start)?;
    let n = check_amount(parse_amount(amount)?, unit, limits)?;
    Ok((date, n))
}

/// Validate an already-built request.
pub fn validate_request(request: &TermRequest, limits: &TermLimits) -> Result<()> {
    check_amount(i64::from(request.amount), request.unit, limits).map(|_| ())
}

/// Validate the two dates of an elapsed-period query; they must differ.
pub fn validate_elapsed_input(a: &str, b: &str) -> Result<(Date, Date)> {
    let first = parse_date(a)?;
    let second = parse_date(b)?;
    if first == second {
        return Err(Error::EqualDates);
    }
    Ok((first, second))
}
