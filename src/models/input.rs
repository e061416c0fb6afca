//! Parsing of user-supplied values
//!
//! Shared by the CLI and the JSON API so both reject the same inputs with the
//! same `Validation` messages.

use chrono::NaiveDate;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse an optional date where an empty string means "not given"
pub fn parse_optional_date(s: Option<&str>) -> LedgerResult<Option<NaiveDate>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

/// Parse a `YYYY-MM` month into (year, month)
pub fn parse_month(s: &str) -> LedgerResult<(i32, u32)> {
    let invalid = || LedgerError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    check_month(month)?;
    Ok((year, month))
}

/// Reject months outside 1-12
pub fn check_month(month: u32) -> LedgerResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Parse an amount such as "12", "12.50" or "$12.50"
///
/// The amount must lie in `0..=Money::MAX` with at most two decimal places.
pub fn parse_amount(field: &str, s: &str) -> LedgerResult<Money> {
    let amount = Money::parse(s).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid {} '{}'. Use a number like '50' or '12.99'",
            field, s
        ))
    })?;
    in_range(field, amount)
}

/// Convert a decimal number to an amount, under the same rules as [`parse_amount`]
pub fn amount_from_decimal(field: &str, value: f64) -> LedgerResult<Money> {
    let amount = Money::from_decimal_exact(value).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid {}: {}. Use a number with at most two decimal places",
            field, value
        ))
    })?;
    in_range(field, amount)
}

fn in_range(field: &str, amount: Money) -> LedgerResult<Money> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "{} must not be negative",
            field
        )));
    }
    if amount > Money::MAX {
        return Err(LedgerError::Validation(format!(
            "{} must not exceed {}",
            field,
            Money::MAX
        )));
    }
    Ok(amount)
}

/// Trim a required text field and reject it if empty
pub fn required_text(field: &str, value: Option<&str>) -> LedgerResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(LedgerError::Validation(format!("{} is required", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("01/03/2024").unwrap_err().is_validation());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert!(parse_optional_date(Some("2024-03-01")).unwrap().is_some());
        assert!(parse_optional_date(Some("yesterday")).is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", "12.50").unwrap().cents(), 1250);
        assert_eq!(parse_amount("amount", "$3").unwrap().cents(), 300);
        assert_eq!(parse_amount("amount", "0").unwrap(), Money::zero());

        let err = parse_amount("amount", "-5").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: amount must not be negative");
        assert!(parse_amount("amount", "lots").is_err());
    }

    #[test]
    fn test_amount_from_decimal() {
        assert_eq!(amount_from_decimal("monthly_limit", 200.0).unwrap().cents(), 20000);
        assert!(amount_from_decimal("monthly_limit", -1.0).is_err());
        assert!(amount_from_decimal("monthly_limit", f64::NAN).is_err());
    }

    #[test]
    fn test_amount_upper_bound() {
        assert_eq!(parse_amount("amount", "1000000000000").unwrap(), Money::MAX);
        assert_eq!(amount_from_decimal("amount", 1e12).unwrap(), Money::MAX);

        let err = amount_from_decimal("amount", 6e16).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: amount must not exceed $1000000000000.00"
        );
        assert!(parse_amount("amount", "1000000000000.01").is_err());
        assert!(parse_amount("amount", "100000000000000000").unwrap_err().is_validation());
    }

    #[test]
    fn test_text_and_number_amounts_agree() {
        for (text, number) in [("12.99", 12.99), ("0.3", 0.1 + 0.2), ("7", 7.0)] {
            assert_eq!(
                parse_amount("amount", text).unwrap(),
                amount_from_decimal("amount", number).unwrap()
            );
        }

        assert!(parse_amount("amount", "12.999").is_err());
        assert!(amount_from_decimal("amount", 12.999).is_err());
        assert!(parse_amount("amount", "1.-5").is_err());
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("category", Some(" food ")).unwrap(), "food");
        assert!(required_text("category", Some("   ")).is_err());
        assert!(required_text("category", None).is_err());
    }
}
