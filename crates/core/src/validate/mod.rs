//! Field validators.
//!
//! Pure checks over a single value. Each returns the accepted (possibly
//! corrected) value or a [`ValidationError`] naming the field and the
//! violated constraint. Emission is handled by the command writer, which
//! runs these through [`Constraint`] descriptors so that a field is either
//! fully validated and appended or not appended at all.

mod constraints;

pub use constraints::{Constraint, Param, RangePolicy, Value};

use std::borrow::Cow;

use crate::error::{ValidationError, Violation};

/// Affirmative flag token.
pub const YES: &str = "Y";
/// Negative flag token.
pub const NO: &str = "N";

/// Reject `value` unless it lies in `[min, max]`.
pub fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(
            field,
            Violation::OutOfRange { min, max, value },
        ))
    }
}

/// Pull `value` back to the nearest bound of `[min, max]`. Never fails.
pub fn clamp_range(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// Reject `value` unless it lies in `[min, max]`, then round to one decimal
/// place.
///
/// The range check runs on the unrounded value.
pub fn check_decimal(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    // NaN fails both comparisons and is rejected here.
    if !(min <= value && value <= max) {
        return Err(ValidationError::new(
            field,
            Violation::DecimalOutOfRange { min, max, value },
        ));
    }
    // Halves round away from zero.
    Ok((value * 10.0).round() / 10.0)
}

/// Render a decimal with exactly one fractional digit (`3` -> `"3.0"`).
pub fn format_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Require `value` to equal one member of `allowed` by string representation.
pub fn check_one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(not_in_set(field, value, allowed))
}

pub(crate) fn not_in_set(field: &'static str, value: &str, allowed: &[&str]) -> ValidationError {
    ValidationError::new(
        field,
        Violation::NotInSet {
            allowed: allowed.iter().map(|a| (*a).to_string()).collect(),
            value: value.to_string(),
        },
    )
}

/// Require every character of `data` to belong to `allowed`.
///
/// The error reports the allowed set, not the offending character.
pub fn check_charset(
    field: &'static str,
    data: &str,
    allowed: &'static str,
) -> Result<(), ValidationError> {
    if data.chars().all(|c| allowed.contains(c)) {
        return Ok(());
    }
    Err(ValidationError::new(
        field,
        Violation::IllegalCharacters {
            allowed: Cow::Borrowed(allowed),
        },
    ))
}

/// Require `data` to be non-empty and consist of ASCII digits only.
pub fn check_digits(field: &'static str, data: &str) -> Result<(), ValidationError> {
    if !data.is_empty() && data.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, Violation::NotDigits))
    }
}

/// Require `data` to be non-empty and consist of ASCII letters and digits only.
pub fn check_alphanumeric(field: &'static str, data: &str) -> Result<(), ValidationError> {
    if !data.is_empty() && data.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, Violation::NotAlphanumeric))
    }
}

/// Require `value` to be one of the two flag tokens, [`YES`] or [`NO`].
pub fn check_flag(field: &'static str, value: &str) -> Result<(), ValidationError> {
    check_one_of(field, value, &[YES, NO])
}

/// Require `data` to hold between `min` and `max` characters (inclusive).
pub fn check_length(
    field: &'static str,
    data: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = data.chars().count();
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            Violation::Length { min, max, actual },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_bounds() {
        assert_eq!(check_range("x", 0, 0, 10).unwrap(), 0);
        assert_eq!(check_range("x", 10, 0, 10).unwrap(), 10);
    }

    #[test]
    fn range_rejects_outside() {
        let err = check_range("max_lines", 0, 1, 9999).unwrap_err();
        assert_eq!(err.field, "max_lines");
        assert!(matches!(
            err.violation,
            Violation::OutOfRange {
                min: 1,
                max: 9999,
                value: 0
            }
        ));
        assert!(check_range("max_lines", 10_000, 1, 9999).is_err());
    }

    #[test]
    fn clamp_pulls_to_nearest_bound() {
        assert_eq!(clamp_range(1, 3, 4095), 3);
        assert_eq!(clamp_range(5000, 3, 4095), 4095);
        assert_eq!(clamp_range(100, 3, 4095), 100);
    }

    #[test]
    fn decimal_rounds_to_one_place() {
        assert_eq!(format_decimal(check_decimal("ratio", 2.54, 2.0, 3.0).unwrap()), "2.5");
        assert_eq!(format_decimal(check_decimal("ratio", 3.0, 2.0, 3.0).unwrap()), "3.0");
        assert_eq!(format_decimal(check_decimal("ratio", 2.0, 2.0, 3.0).unwrap()), "2.0");
    }

    #[test]
    fn decimal_halves_round_away_from_zero() {
        assert_eq!(format_decimal(check_decimal("ratio", 2.25, 2.0, 3.0).unwrap()), "2.3");
        assert_eq!(format_decimal(check_decimal("ratio", 2.45, 2.0, 3.0).unwrap()), "2.5");
    }

    #[test]
    fn decimal_rejects_out_of_range_and_nan() {
        assert!(check_decimal("ratio", 3.01, 2.0, 3.0).is_err());
        assert!(check_decimal("ratio", 1.99, 2.0, 3.0).is_err());
        assert!(check_decimal("ratio", f64::NAN, 2.0, 3.0).is_err());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let err = check_one_of("color", "R", &["B", "W"]).unwrap_err();
        match err.violation {
            Violation::NotInSet { allowed, value } => {
                assert_eq!(allowed, vec!["B", "W"]);
                assert_eq!(value, "R");
            }
            other => panic!("unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn charset_reports_allowed_set() {
        check_charset("data", "12-34", "0123456789-").unwrap();
        let err = check_charset("data", "12a", "0123456789-").unwrap_err();
        assert!(err.to_string().contains("\"0123456789-\""), "{err}");
        assert!(!err.to_string().contains("'a'"), "{err}");
    }

    #[test]
    fn digits_and_alphanumeric() {
        check_digits("data", "0123").unwrap();
        assert!(check_digits("data", "").is_err());
        assert!(check_digits("data", "12 3").is_err());
        assert!(check_digits("data", "١٢٣").is_err());
        check_alphanumeric("serial", "AB12").unwrap();
        assert!(check_alphanumeric("serial", "AB-12").is_err());
        assert!(check_alphanumeric("serial", "").is_err());
    }

    #[test]
    fn flag_accepts_only_y_and_n() {
        check_flag("print_text", "Y").unwrap();
        check_flag("print_text", "N").unwrap();
        assert!(check_flag("print_text", "y").is_err());
        assert!(check_flag("print_text", "yes").is_err());
    }

    #[test]
    fn length_counts_characters() {
        check_length("id", "ABC", 1, 3).unwrap();
        let err = check_length("id", "ABCD", 1, 3).unwrap_err();
        assert!(matches!(
            err.violation,
            Violation::Length {
                min: 1,
                max: 3,
                actual: 4
            }
        ));
    }
}
