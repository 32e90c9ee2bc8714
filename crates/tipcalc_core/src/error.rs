use thiserror::Error;

use crate::input::Field;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("invalid {field}: {value:?} is not a whole number in range")]
    InvalidInput { field: Field, value: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = TipError::InvalidInput {
            field: Field::BillAmount,
            value: "12.5".to_string(),
        };
        assert_eq!(err.to_string(), "invalid bill amount: \"12.5\" is not a whole number in range");
    }

    #[test]
    fn test_config_error() {
        let err = TipError::Config("unknown theme".to_string());
        assert_eq!(err.to_string(), "config error: unknown theme");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = TipError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("round_up = ").unwrap_err();
        let err = TipError::from(toml_err);
        assert!(matches!(err, TipError::TomlDe(_)));
    }
}
