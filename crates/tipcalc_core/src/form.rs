//! Reactive calculator state.
//!
//! [TipForm] owns the two digit fields and the round-up switch, and recomputes
//! the tip inline on every accepted change. Observers hold a
//! [watch::Receiver] and see a new [TipSnapshot] only when something changed.

use serde::Serialize;
use tokio::sync::watch;

use crate::calc::{calculate_tip_with, format_tip_amount};
use crate::config::TipConfig;
use crate::input::{is_digits_only, Field};

/// Everything the screen renders, as one comparable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipSnapshot {
    pub bill_amount: String,
    pub tip_percentage: String,
    pub round_up: bool,
    pub tip_amount: f64,
}

impl TipSnapshot {
    pub fn tip_amount_text(&self) -> String {
        format_tip_amount(self.tip_amount)
    }
}

/// A change requested by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    BillAmountChanged(String),
    TipPercentageChanged(String),
    RoundUpChanged(bool),
    Reset,
}

#[derive(Debug)]
pub struct TipForm {
    bill_amount: String,
    tip_percentage: String,
    round_up: bool,
    tip_amount: f64,
    config: TipConfig,
    tx: watch::Sender<TipSnapshot>,
}

impl Default for TipForm {
    fn default() -> Self {
        Self::new(TipConfig::default())
    }
}

impl TipForm {
    /// Fresh form: empty bill, configured tip percentage and switch state.
    pub fn new(config: TipConfig) -> Self {
        let tip_percentage = config
            .tip_percentage
            .clone()
            .filter(|p| is_digits_only(p))
            .unwrap_or_default();
        let round_up = config.round_up;
        let initial = TipSnapshot {
            bill_amount: String::new(),
            tip_percentage: tip_percentage.clone(),
            round_up,
            tip_amount: 0.0,
        };
        let (tx, _rx) = watch::channel(initial);
        let mut form = Self {
            bill_amount: String::new(),
            tip_percentage,
            round_up,
            tip_amount: 0.0,
            config,
            tx,
        };
        form.recompute();
        form
    }

    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn tip_percentage(&self) -> &str {
        &self.tip_percentage
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::BillAmount => &self.bill_amount,
            Field::TipPercentage => &self.tip_percentage,
        }
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    pub fn tip_amount_text(&self) -> String {
        format_tip_amount(self.tip_amount)
    }

    pub fn snapshot(&self) -> TipSnapshot {
        TipSnapshot {
            bill_amount: self.bill_amount.clone(),
            tip_percentage: self.tip_percentage.clone(),
            round_up: self.round_up,
            tip_amount: self.tip_amount,
        }
    }

    /// Receiver that is marked changed after every effective update.
    pub fn subscribe(&self) -> watch::Receiver<TipSnapshot> {
        self.tx.subscribe()
    }

    /// Replace a field's text. Returns false (and keeps the old value) when
    /// `text` is not digits-only.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) -> bool {
        let text = text.into();
        if !is_digits_only(&text) {
            tracing::debug!(%field, value = %text, "rejected non-digit edit");
            return false;
        }
        let slot = match field {
            Field::BillAmount => &mut self.bill_amount,
            Field::TipPercentage => &mut self.tip_percentage,
        };
        if *slot != text {
            *slot = text;
            self.recompute();
        }
        true
    }

    pub fn set_bill_amount(&mut self, text: impl Into<String>) -> bool {
        self.set_text(Field::BillAmount, text)
    }

    pub fn set_tip_percentage(&mut self, text: impl Into<String>) -> bool {
        self.set_text(Field::TipPercentage, text)
    }

    pub fn set_round_up(&mut self, round_up: bool) {
        if self.round_up != round_up {
            self.round_up = round_up;
            self.recompute();
        }
    }

    pub fn toggle_round_up(&mut self) {
        self.set_round_up(!self.round_up);
    }

    /// Back to the state [TipForm::new] produced.
    pub fn reset(&mut self) {
        self.bill_amount.clear();
        self.tip_percentage = self
            .config
            .tip_percentage
            .clone()
            .filter(|p| is_digits_only(p))
            .unwrap_or_default();
        self.round_up = self.config.round_up;
        self.recompute();
    }

    /// Apply one event; returns false only for a rejected text edit.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::BillAmountChanged(text) => self.set_bill_amount(text),
            FormEvent::TipPercentageChanged(text) => self.set_tip_percentage(text),
            FormEvent::RoundUpChanged(round_up) => {
                self.set_round_up(round_up);
                true
            }
            FormEvent::Reset => {
                self.reset();
                true
            }
        }
    }

    fn recompute(&mut self) {
        self.tip_amount = match calculate_tip_with(
            &self.bill_amount,
            &self.tip_percentage,
            self.round_up,
            self.config.invalid_input,
        ) {
            Ok(tip) => tip,
            Err(e) => {
                tracing::warn!(error = %e, "tip calculation failed; showing zero");
                0.0
            }
        };
        tracing::debug!(
            bill = %self.bill_amount,
            percent = %self.tip_percentage,
            round_up = self.round_up,
            tip = self.tip_amount,
            "tip recomputed"
        );
        let next = self.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
