//! Error types for the creation registries.

use std::fmt;

/// Creation errors
///
/// The registries in this crate are total over their closed enumerations, so
/// the only way to reach an error is to dispatch on an untyped value (a raw
/// integer, a name, a configuration entry) that falls outside the enumeration.
///
/// # Examples
///
/// ```rust
/// use barista::{BeverageFactory, PatternError};
///
/// match BeverageFactory.create_raw(7) {
///     Err(PatternError::InvalidDiscriminant(enumeration, value)) => {
///         assert_eq!(enumeration, "BeverageType");
///         assert_eq!(value, "7");
///     }
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use barista::PatternError;
///
/// let invalid = PatternError::InvalidDiscriminant("BeverageType", "espresso".to_string());
/// let config = PatternError::Config("expected value at line 1 column 1".to_string());
///
/// println!("Error: {}", invalid);
/// println!("Error: {}", config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Value outside the closed enumeration (enumeration name, offending value)
    InvalidDiscriminant(&'static str, String),
    /// Configuration could not be parsed
    Config(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidDiscriminant(enumeration, value) => {
                write!(f, "Invalid discriminant for {}: {}", enumeration, value)
            }
            PatternError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}

/// Result type for creation operations
///
/// A convenience alias for `Result<T, PatternError>`.
///
/// ```rust
/// use barista::{BeverageType, PatternResult};
///
/// fn parse_order(name: &str) -> PatternResult<BeverageType> {
///     name.parse()
/// }
///
/// assert!(parse_order("coffee").is_ok());
/// assert!(parse_order("cocoa").is_err());
/// ```
pub type PatternResult<T> = Result<T, PatternError>;
