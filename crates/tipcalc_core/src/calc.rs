//! Tip calculation.
//!
//! A tip is `bill * percent / 100`, optionally rounded to the nearest whole
//! unit. An empty field means "no input yet" and yields a zero tip.

use crate::config::InvalidInputPolicy;
use crate::error::{Result, TipError};
use crate::input::{is_digits_only, Field};

/// Compute the tip for a bill amount and tip percentage given as digit strings.
///
/// Returns `0.0` when either field is empty. Text that is not digits-only, or
/// whose value does not fit an `f64`, fails with [TipError::InvalidInput].
pub fn calculate_tip(bill_amount: &str, tip_percentage: &str, round_up: bool) -> Result<f64> {
    calculate_tip_with(bill_amount, tip_percentage, round_up, InvalidInputPolicy::Reject)
}

/// Same as [calculate_tip] with an explicit policy for text that is not digits-only.
pub fn calculate_tip_with(
    bill_amount: &str,
    tip_percentage: &str,
    round_up: bool,
    policy: InvalidInputPolicy,
) -> Result<f64> {
    if bill_amount.is_empty() || tip_percentage.is_empty() {
        return Ok(0.0);
    }
    let bill = parse_field(Field::BillAmount, bill_amount, policy)?;
    let percent = parse_field(Field::TipPercentage, tip_percentage, policy)?;

    let tip = bill * percent / 100.0;
    if !tip.is_finite() {
        return unusable(Field::BillAmount, bill_amount, policy);
    }
    Ok(if round_up { tip.round() } else { tip })
}

/// Digits-only text still overflows `f64` past ~309 digits; that goes through
/// the same policy as non-digit text.
fn parse_field(field: Field, text: &str, policy: InvalidInputPolicy) -> Result<f64> {
    if !is_digits_only(text) {
        return unusable(field, text, policy);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => unusable(field, text, policy),
    }
}

fn unusable(field: Field, text: &str, policy: InvalidInputPolicy) -> Result<f64> {
    match policy {
        InvalidInputPolicy::Reject => Err(TipError::InvalidInput {
            field,
            value: text.to_string(),
        }),
        InvalidInputPolicy::Zero => {
            tracing::debug!(%field, len = text.len(), "unusable input coerced to zero");
            Ok(0.0)
        }
    }
}

/// Display text for a tip amount: whole values keep one decimal (`15.0`),
/// fractional values print their shortest exact form (`3.3`).
pub fn format_tip_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_give_zero() {
        assert_eq!(calculate_tip("", "", true).unwrap(), 0.0);
        assert_eq!(calculate_tip("", "15", true).unwrap(), 0.0);
        assert_eq!(calculate_tip("100", "", false).unwrap(), 0.0);
    }

    #[test]
    fn integral_tip_unrounded() {
        assert_eq!(calculate_tip("100", "15", false).unwrap(), 15.0);
    }

    #[test]
    fn integral_tip_rounded() {
        assert_eq!(calculate_tip("100", "15", true).unwrap(), 15.0);
        assert_eq!(calculate_tip("50", "18", true).unwrap(), 9.0);
    }

    #[test]
    fn fractional_tip_kept_without_round_up() {
        assert_eq!(calculate_tip("33", "10", false).unwrap(), 3.3);
    }

    #[test]
    fn fractional_tip_rounded_to_nearest() {
        assert_eq!(calculate_tip("33", "10", true).unwrap(), 3.0);
        assert_eq!(calculate_tip("37", "10", true).unwrap(), 4.0);
    }

    #[test]
    fn half_rounds_up() {
        // 25 * 10 / 100 = 2.5
        assert_eq!(calculate_tip("25", "10", true).unwrap(), 3.0);
        assert_eq!(calculate_tip("25", "10", false).unwrap(), 2.5);
    }

    #[test]
    fn leading_zeros_parse() {
        assert_eq!(calculate_tip("0100", "015", false).unwrap(), 15.0);
    }

    #[test]
    fn zero_percent_is_zero() {
        assert_eq!(calculate_tip("250", "0", true).unwrap(), 0.0);
    }

    #[test]
    fn same_inputs_same_output() {
        let first = calculate_tip("47", "13", false).unwrap();
        let second = calculate_tip("47", "13", false).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn non_digit_rejected() {
        let err = calculate_tip("12.5", "10", true).unwrap_err();
        assert!(matches!(
            err,
            TipError::InvalidInput { field: Field::BillAmount, ref value } if value == "12.5"
        ));
        let err = calculate_tip("100", "abc", true).unwrap_err();
        assert!(matches!(err, TipError::InvalidInput { field: Field::TipPercentage, .. }));
    }

    #[test]
    fn empty_wins_over_invalid() {
        assert_eq!(calculate_tip("", "abc", true).unwrap(), 0.0);
    }

    #[test]
    fn zero_policy_coerces_invalid_field() {
        let tip = calculate_tip_with("12.5", "10", true, InvalidInputPolicy::Zero).unwrap();
        assert_eq!(tip, 0.0);
        let tip = calculate_tip_with("100", "1O", false, InvalidInputPolicy::Zero).unwrap();
        assert_eq!(tip, 0.0);
    }

    #[test]
    fn overflowing_bill_rejected() {
        let bill = "9".repeat(400);
        let err = calculate_tip(&bill, "10", false).unwrap_err();
        assert!(matches!(err, TipError::InvalidInput { field: Field::BillAmount, .. }));
        assert_eq!(
            calculate_tip_with(&bill, "10", false, InvalidInputPolicy::Zero).unwrap(),
            0.0
        );
    }

    #[test]
    fn overflowing_percent_never_yields_nan() {
        let percent = "9".repeat(400);
        let err = calculate_tip("0", &percent, true).unwrap_err();
        assert!(matches!(err, TipError::InvalidInput { field: Field::TipPercentage, .. }));
        let tip = calculate_tip_with("0", &percent, true, InvalidInputPolicy::Zero).unwrap();
        assert_eq!(tip, 0.0);
    }

    #[test]
    fn overflowing_product_rejected() {
        let big = "9".repeat(200);
        assert!(calculate_tip(&big, &big, false).is_err());
        let tip = calculate_tip_with(&big, &big, false, InvalidInputPolicy::Zero).unwrap();
        assert_eq!(tip, 0.0);
    }

    #[test]
    fn large_but_finite_kept() {
        let tip = calculate_tip("1000000000", "15", true).unwrap();
        assert_eq!(tip, 150_000_000.0);
        assert_eq!(format_tip_amount(tip), "150000000.0");
    }

    #[test]
    fn format_whole_and_fractional() {
        assert_eq!(format_tip_amount(0.0), "0.0");
        assert_eq!(format_tip_amount(15.0), "15.0");
        assert_eq!(format_tip_amount(3.3), "3.3");
        assert_eq!(format_tip_amount(2.5), "2.5");
    }
}
