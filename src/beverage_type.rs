//! The closed discriminant enumeration dispatched on by the registries.

use std::fmt;
use std::str::FromStr;
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use crate::error::{PatternError, PatternResult};

/// Product kinds known to the registries
///
/// `BeverageType` selects a single product in
/// [`BeverageFactory`](crate::BeverageFactory) and a whole product family in
/// [`family_factory`](crate::family_factory). The set is closed: adding a kind
/// means adding a variant here and a match arm in each registry, and the
/// compiler points at every arm that is missing.
///
/// Raw values follow declaration order (`Coffee = 0`, `Tea = 1`).
///
/// # Examples
///
/// ```rust
/// use barista::BeverageType;
///
/// assert_eq!(BeverageType::from_raw(0).unwrap(), BeverageType::Coffee);
/// assert_eq!("Tea".parse::<BeverageType>().unwrap(), BeverageType::Tea);
/// assert_eq!(BeverageType::Tea.raw(), 1);
/// assert!(BeverageType::from_raw(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum BeverageType {
    /// Coffee, or the coffee family in the abstract factory
    Coffee,
    /// Tea, or the tea family in the abstract factory
    Tea,
}

impl BeverageType {
    /// Every value of the enumeration, in declaration order.
    pub const ALL: [BeverageType; 2] = [BeverageType::Coffee, BeverageType::Tea];

    /// Name used in diagnostics and errors.
    pub(crate) const ENUMERATION: &'static str = "BeverageType";

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            BeverageType::Coffee => "coffee",
            BeverageType::Tea => "tea",
        }
    }

    /// Raw integer value of this discriminant.
    pub fn raw(self) -> i64 {
        match self {
            BeverageType::Coffee => 0,
            BeverageType::Tea => 1,
        }
    }

    /// Converts an untyped raw value into a discriminant.
    ///
    /// Values outside the enumeration fail with
    /// [`PatternError::InvalidDiscriminant`].
    pub fn from_raw(raw: i64) -> PatternResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.raw() == raw)
            .ok_or_else(|| PatternError::InvalidDiscriminant(Self::ENUMERATION, raw.to_string()))
    }
}

impl fmt::Display for BeverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for BeverageType {
    type Error = PatternError;

    fn try_from(raw: u8) -> PatternResult<Self> {
        Self::from_raw(i64::from(raw))
    }
}

impl TryFrom<i64> for BeverageType {
    type Error = PatternError;

    fn try_from(raw: i64) -> PatternResult<Self> {
        Self::from_raw(raw)
    }
}

// Names match case-insensitively; surrounding whitespace is ignored
impl FromStr for BeverageType {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PatternError::InvalidDiscriminant(Self::ENUMERATION, s.to_string()))
    }
}
