//! Simple factory: one product per discriminant.

use crate::beverages::{Coffee, Tea};
use crate::error::PatternResult;
use crate::traits::Beverage;
use crate::BeverageType;

/// Registry mapping each [`BeverageType`] to a freshly built [`Beverage`].
///
/// The factory is stateless: every call constructs a new product and hands
/// full ownership of it to the caller. Dispatch on a typed discriminant is
/// total; only the untyped entry points can fail.
///
/// # Examples
///
/// ```
/// use barista::{BeverageFactory, BeverageType, RecordingObserver};
///
/// let observer = RecordingObserver::new();
/// BeverageFactory.create(BeverageType::Coffee).prepare_with(&observer);
/// BeverageFactory.create_raw(1).unwrap().prepare_with(&observer);
///
/// assert_eq!(observer.messages(), vec![
///     "Coffee is being prepared".to_string(),
///     "Tea is being prepared".to_string(),
/// ]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BeverageFactory;

impl BeverageFactory {
    /// Creates a new factory.
    pub fn new() -> Self {
        Self
    }

    /// Builds the product mapped to `kind`.
    pub fn create(&self, kind: BeverageType) -> Box<dyn Beverage> {
        match kind {
            BeverageType::Coffee => Box::new(Coffee),
            BeverageType::Tea => Box::new(Tea),
        }
    }

    /// Builds the product mapped to an untyped raw discriminant.
    ///
    /// Fails with [`PatternError::InvalidDiscriminant`](crate::PatternError::InvalidDiscriminant)
    /// before anything is constructed when `raw` is outside the enumeration.
    pub fn create_raw(&self, raw: i64) -> PatternResult<Box<dyn Beverage>> {
        let kind = BeverageType::from_raw(raw)?;
        Ok(self.create(kind))
    }

    /// Builds the product mapped to a beverage name, matched case-insensitively.
    pub fn create_named(&self, name: &str) -> PatternResult<Box<dyn Beverage>> {
        let kind = name.parse::<BeverageType>()?;
        Ok(self.create(kind))
    }

    /// Kinds this factory can produce.
    pub fn menu(&self) -> &'static [BeverageType] {
        &BeverageType::ALL
    }
}
