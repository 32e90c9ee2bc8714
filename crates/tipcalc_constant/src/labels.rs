//! User-facing labels for the calculator screen.

pub const TITLE: &str = "Custom Tip Calculator";
pub const BILL_AMOUNT: &str = "Bill Amount";
pub const TIP_PERCENTAGE: &str = "Tip (%)";
pub const ROUND_UP_TIP: &str = "Round up tip?";
/// Prefix of the result line; the formatted amount follows directly.
pub const TIP_AMOUNT: &str = "Tip Amount: ";
