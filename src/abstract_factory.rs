//! Abstract factory: matched hot/cold pairs per product family.
//!
//! Each family factory hard-codes both of its products, so a caller holding
//! one factory can only ever receive products of that factory's family.
//! Switching families means switching the factory, which swaps both halves
//! at once.

use std::fmt;
use crate::beverages::{HotCoffee, HotTea, IcedCoffee, IcedTea};
use crate::error::PatternResult;
use crate::traits::{ColdBeverage, HotBeverage};
use crate::BeverageType;

/// Factory for a whole product family.
///
/// # Examples
///
/// ```
/// use barista::{family_factory, BeverageType, RecordingObserver};
///
/// let factory = family_factory(BeverageType::Coffee);
/// let observer = RecordingObserver::new();
///
/// factory.create_hot().prepare_with(&observer);
/// factory.create_cold().prepare_with(&observer);
///
/// assert_eq!(observer.messages(), vec![
///     "Hot coffee is being prepared".to_string(),
///     "Iced coffee is being prepared".to_string(),
/// ]);
/// ```
pub trait BeverageFamilyFactory: Send + Sync {
    /// Family every product of this factory belongs to.
    fn family(&self) -> BeverageType;

    /// Builds the cold member of the family.
    fn create_cold(&self) -> Box<dyn ColdBeverage>;

    /// Builds the hot member of the family.
    fn create_hot(&self) -> Box<dyn HotBeverage>;

    /// Builds one hot and one cold product of the family.
    fn create_pair(&self) -> BeveragePair {
        BeveragePair {
            hot: self.create_hot(),
            cold: self.create_cold(),
        }
    }
}

/// One hot and one cold product from the same family.
pub struct BeveragePair {
    /// Hot member
    pub hot: Box<dyn HotBeverage>,
    /// Cold member
    pub cold: Box<dyn ColdBeverage>,
}

impl fmt::Debug for BeveragePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeveragePair")
            .field("hot", &self.hot.preparation().message)
            .field("cold", &self.cold.preparation().message)
            .finish()
    }
}

/// Coffee family: hot coffee and iced coffee.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoffeeFactory;

impl BeverageFamilyFactory for CoffeeFactory {
    fn family(&self) -> BeverageType {
        BeverageType::Coffee
    }

    fn create_cold(&self) -> Box<dyn ColdBeverage> {
        Box::new(IcedCoffee)
    }

    fn create_hot(&self) -> Box<dyn HotBeverage> {
        Box::new(HotCoffee)
    }
}

/// Tea family: hot tea and iced tea.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeaFactory;

impl BeverageFamilyFactory for TeaFactory {
    fn family(&self) -> BeverageType {
        BeverageType::Tea
    }

    fn create_cold(&self) -> Box<dyn ColdBeverage> {
        Box::new(IcedTea)
    }

    fn create_hot(&self) -> Box<dyn HotBeverage> {
        Box::new(HotTea)
    }
}

static COFFEE_FACTORY: CoffeeFactory = CoffeeFactory;
static TEA_FACTORY: TeaFactory = TeaFactory;

/// Selects the factory for a whole family.
pub fn family_factory(family: BeverageType) -> &'static dyn BeverageFamilyFactory {
    match family {
        BeverageType::Coffee => &COFFEE_FACTORY,
        BeverageType::Tea => &TEA_FACTORY,
    }
}

/// Selects a family factory from an untyped raw discriminant.
pub fn family_factory_raw(raw: i64) -> PatternResult<&'static dyn BeverageFamilyFactory> {
    Ok(family_factory(BeverageType::from_raw(raw)?))
}
