//! Error types for season generation.
//!
//! Only rejected input is an error. A shortfall of dates, an unbalanced
//! pairing set, or an unreachable holiday source are reported as status
//! flags and warnings on the returned [`Schedule`](crate::models::Schedule).

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A single malformed value (weekday name, date, JSON body).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One or more structural problems in a season request.
    #[error("invalid request: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error rejects the caller's input.
    ///
    /// Both [`Error::InvalidInput`] and [`Error::Validation`] qualify;
    /// nothing partial is produced for either.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::Validation(_))
    }

    /// Validation issues carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::InvalidInput(format!("malformed date: {err}"))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = Error::Validation(vec![
            ValidationError::new(ValidationErrorKind::TooFewTeams, "need two teams"),
            ValidationError::new(ValidationErrorKind::UnknownWeekday, "bad weekday"),
        ]);
        assert_eq!(err.to_string(), "invalid request: need two teams; bad weekday");
        assert!(err.is_invalid_input());
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_config_error_is_not_invalid_input() {
        let err = Error::Config("bad key".into());
        assert!(!err.is_invalid_input());
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_date_parse_error_maps_to_invalid_input() {
        let parse_err = chrono::NaiveDate::parse_from_str("2024-13-45", "%Y-%m-%d").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
