//! Order configuration for the example drivers.
//!
//! Orders are plain JSON documents naming beverages by their lowercase
//! names. Unknown names are rejected while parsing, so a parsed
//! [`OrderConfig`] only ever holds valid discriminants.

use serde::{Deserialize, Serialize};
use crate::{BeverageType, PatternError, PatternResult};

/// What a [`Barista`](crate::Barista) should prepare.
///
/// # Examples
///
/// ```
/// use barista::{BeverageType, OrderConfig};
///
/// let order = OrderConfig::from_json(r#"{
///     "drinks": ["coffee", "tea"],
///     "family": "tea",
///     "observer_prefix": "[bar]"
/// }"#).unwrap();
///
/// assert_eq!(order.drinks, vec![BeverageType::Coffee, BeverageType::Tea]);
/// assert_eq!(order.family, Some(BeverageType::Tea));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderConfig {
    /// Drinks to prepare with the simple factory, in order
    #[serde(default)]
    pub drinks: Vec<BeverageType>,
    /// Family to prepare a hot and a cold drink from
    #[serde(default)]
    pub family: Option<BeverageType>,
    /// Prefix for the stdout logging observer; `None` prints bare lines
    #[serde(default)]
    pub observer_prefix: Option<String>,
}

impl OrderConfig {
    /// Parses an order from JSON.
    pub fn from_json(json: &str) -> PatternResult<Self> {
        serde_json::from_str(json).map_err(|e| PatternError::Config(e.to_string()))
    }

    /// Serializes the order to pretty-printed JSON.
    pub fn to_json(&self) -> PatternResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PatternError::Config(e.to_string()))
    }
}
