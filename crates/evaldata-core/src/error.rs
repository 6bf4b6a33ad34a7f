//! Error types for global evaluation data lookup.
//!
//! Registration and membership queries are total; only reads can fail.
//! A failed read names the offending key so the host framework can
//! report a diagnosable configuration error.

use std::error::Error;
use std::fmt;

/// Errors from reading a registry of global evaluation data.
///
/// A missing key is a programming or configuration error on the caller's
/// side: code that treats absence as legitimate checks
/// `contains_data_object` before reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No object is bound to the requested key.
    MissingKey {
        /// The key that was requested.
        key: String,
    },
    /// An object is bound to the key but it is not of the requested
    /// concrete type. Only produced by typed accessors.
    TypeMismatch {
        /// The key that was requested.
        key: String,
        /// Name of the concrete type the caller asked for.
        expected: &'static str,
    },
}

impl LookupError {
    /// The key the failed lookup was made with.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } | Self::TypeMismatch { key, .. } => key,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => {
                write!(f, "no global evaluation data registered under key '{key}'")
            }
            Self::TypeMismatch { key, expected } => {
                write!(
                    f,
                    "global evaluation data under key '{key}' is not a {expected}"
                )
            }
        }
    }
}

impl Error for LookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_the_key() {
        let err = LookupError::MissingKey {
            key: "Nonexistent".into(),
        };
        assert!(err.to_string().contains("'Nonexistent'"));
        assert_eq!(err.key(), "Nonexistent");
    }

    #[test]
    fn type_mismatch_message_names_key_and_type() {
        let err = LookupError::TypeMismatch {
            key: "Residual".into(),
            expected: "u32",
        };
        let msg = err.to_string();
        assert!(msg.contains("'Residual'"));
        assert!(msg.ends_with("u32"));
        assert_eq!(err.key(), "Residual");
    }

    #[test]
    fn empty_key_is_reported_verbatim() {
        let err = LookupError::MissingKey { key: String::new() };
        assert_eq!(
            err.to_string(),
            "no global evaluation data registered under key ''"
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn Error> = Box::new(LookupError::MissingKey { key: "x".into() });
        assert!(err.source().is_none());
    }
}
