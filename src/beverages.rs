//! Concrete products.
//!
//! Every product is a unit struct: it owns no resources and has no identity
//! beyond the event it emits. [`Coffee`] and [`Tea`] come out of the simple
//! factory; the hot and iced variants come out of the family factories in
//! matched pairs.

use crate::observer::{Preparation, Serving};
use crate::traits::{Beverage, ColdBeverage, HotBeverage, Preparable};
use crate::BeverageType;

/// Coffee from the simple factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coffee;

impl Preparable for Coffee {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Coffee, Serving::Plain, "Coffee is being prepared")
    }
}

impl Beverage for Coffee {}

/// Tea from the simple factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tea;

impl Preparable for Tea {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Tea, Serving::Plain, "Tea is being prepared")
    }
}

impl Beverage for Tea {}

/// Cold member of the coffee family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcedCoffee;

impl Preparable for IcedCoffee {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Coffee, Serving::Iced, "Iced coffee is being prepared")
    }
}

impl ColdBeverage for IcedCoffee {}

/// Cold member of the tea family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcedTea;

impl Preparable for IcedTea {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Tea, Serving::Iced, "Iced tea is being prepared")
    }
}

impl ColdBeverage for IcedTea {}

/// Hot member of the coffee family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotCoffee;

impl Preparable for HotCoffee {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Coffee, Serving::Hot, "Hot coffee is being prepared")
    }
}

impl HotBeverage for HotCoffee {}

/// Hot member of the tea family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotTea;

impl Preparable for HotTea {
    fn preparation(&self) -> Preparation {
        Preparation::new(BeverageType::Tea, Serving::Hot, "Hot tea is being prepared")
    }
}

impl HotBeverage for HotTea {}
