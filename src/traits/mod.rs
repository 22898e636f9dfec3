//! Capability traits for manufactured products.

mod beverage;

pub use beverage::{Beverage, ColdBeverage, HotBeverage, Preparable};
