//! Digit-only input filter and the two text fields it guards.
//!
//! The calculator only accepts whole numbers: an edit that would leave a field
//! with anything other than ASCII digits is rejected and the previous value kept.

use std::fmt;

use serde::{Deserialize, Serialize};
use tipcalc_constant::labels;

/// One of the two text inputs of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BillAmount,
    TipPercentage,
}

impl Field {
    /// Label shown next to the field on screen.
    pub fn label(self) -> &'static str {
        match self {
            Field::BillAmount => labels::BILL_AMOUNT,
            Field::TipPercentage => labels::TIP_PERCENTAGE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::BillAmount => f.write_str("bill amount"),
            Field::TipPercentage => f.write_str("tip percentage"),
        }
    }
}

/// True when `text` is empty or made of ASCII digits only.
pub fn is_digits_only(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_digits_only() {
        assert!(is_digits_only(""));
    }

    #[test]
    fn plain_digits_accepted() {
        assert!(is_digits_only("0"));
        assert!(is_digits_only("0042"));
        assert!(is_digits_only("1234567890"));
    }

    #[test]
    fn decimal_point_and_sign_rejected() {
        assert!(!is_digits_only("12.5"));
        assert!(!is_digits_only("-3"));
        assert!(!is_digits_only("+3"));
        assert!(!is_digits_only(" 3"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits are Unicode digits but do not parse as numbers.
        assert!(!is_digits_only("٣"));
        assert!(!is_digits_only("１２"));
    }

    #[test]
    fn field_display_and_label() {
        assert_eq!(Field::BillAmount.to_string(), "bill amount");
        assert_eq!(Field::TipPercentage.label(), "Tip (%)");
    }
}
