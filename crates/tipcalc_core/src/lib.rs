pub mod calc;
pub mod config;
pub mod error;
pub mod form;
pub mod input;

pub use calc::{calculate_tip, calculate_tip_with, format_tip_amount};
pub use config::{InvalidInputPolicy, TipConfig};
pub use error::{Result, TipError};
pub use form::{FormEvent, TipForm, TipSnapshot};
pub use input::{is_digits_only, Field};
