//! `tipcalc calc`: one-shot calculation for scripts.

use anyhow::Result;
use tipcalc_constant::labels;
use tipcalc_core::{TipConfig, TipSnapshot, calculate_tip_with};

use crate::output;
use crate::settings::Settings;

pub fn handle(bill: String, tip: Option<String>, no_round_up: bool) -> Result<()> {
    let settings = Settings::load_effective()?;
    let snapshot = compute(&settings.calculator, bill, tip, no_round_up)?;
    tracing::debug!(tip = snapshot.tip_amount, "calc");

    if output::is_json() {
        output::data("tip", &snapshot);
    } else {
        output::kv(labels::BILL_AMOUNT, &snapshot.bill_amount);
        output::kv(labels::TIP_PERCENTAGE, &snapshot.tip_percentage);
        output::kv(labels::ROUND_UP_TIP, if snapshot.round_up { "yes" } else { "no" });
        output::success(&format!("{}{}", labels::TIP_AMOUNT, snapshot.tip_amount_text()));
    }
    Ok(())
}

/// The tip for the given arguments; a missing `--tip` falls back to the configured percentage.
fn compute(
    config: &TipConfig,
    bill: String,
    tip: Option<String>,
    no_round_up: bool,
) -> Result<TipSnapshot> {
    let tip_percentage = tip
        .or_else(|| config.tip_percentage.clone())
        .unwrap_or_default();
    let round_up = config.round_up && !no_round_up;
    let tip_amount = calculate_tip_with(&bill, &tip_percentage, round_up, config.invalid_input)?;
    Ok(TipSnapshot {
        bill_amount: bill,
        tip_percentage,
        round_up,
        tip_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::InvalidInputPolicy;

    #[test]
    fn uses_configured_tip_when_flag_missing() {
        let config = TipConfig::default().with_tip_percentage("20");
        let s = compute(&config, "50".into(), None, false).unwrap();
        assert_eq!(s.tip_percentage, "20");
        assert_eq!(s.tip_amount, 10.0);
    }

    #[test]
    fn flag_beats_config() {
        let config = TipConfig::default().with_tip_percentage("20");
        let s = compute(&config, "100".into(), Some("15".into()), false).unwrap();
        assert_eq!(s.tip_amount, 15.0);
    }

    #[test]
    fn no_tip_anywhere_is_zero() {
        let s = compute(&TipConfig::default(), "100".into(), None, false).unwrap();
        assert_eq!(s.tip_amount, 0.0);
    }

    #[test]
    fn no_round_up_keeps_fraction() {
        let s = compute(&TipConfig::default(), "33".into(), Some("10".into()), true).unwrap();
        assert!(!s.round_up);
        assert_eq!(s.tip_amount_text(), "3.3");
    }

    #[test]
    fn config_round_up_off_stays_off() {
        let config = TipConfig::default().with_round_up(false);
        let s = compute(&config, "33".into(), Some("10".into()), false).unwrap();
        assert_eq!(s.tip_amount_text(), "3.3");
    }

    #[test]
    fn invalid_input_follows_policy() {
        let reject = compute(&TipConfig::default(), "12.5".into(), Some("10".into()), false);
        assert!(reject.unwrap_err().to_string().contains("invalid bill amount"));

        let zero = TipConfig::default().with_invalid_input(InvalidInputPolicy::Zero);
        let s = compute(&zero, "12.5".into(), Some("10".into()), false).unwrap();
        assert_eq!(s.tip_amount, 0.0);
    }
}
