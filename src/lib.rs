//! # barista
//!
//! Creational patterns by example, told through a coffee bar.
//!
//! ## Features
//!
//! - **Simple factory**: [`BeverageFactory`] turns a [`BeverageType`] into a
//!   fresh product behind the [`Beverage`] capability trait
//! - **Abstract factory**: [`BeverageFamilyFactory`] variants manufacture a
//!   hot and a cold product of the same family, never a mismatched pair
//! - **Cached accessor**: [`SingletonCell`] and [`Singleton`] hold at most one
//!   instance, created on first access, thread-safe on the transition
//! - **Observers**: products report what they prepare through
//!   [`PreparationObserver`] instead of writing to the console directly
//!
//! ## Quick Start
//!
//! ```rust
//! use barista::{BeverageFactory, BeverageType, RecordingObserver};
//!
//! let observer = RecordingObserver::new();
//!
//! let coffee = BeverageFactory.create(BeverageType::Coffee);
//! coffee.prepare_with(&observer);
//!
//! assert_eq!(observer.messages(), vec!["Coffee is being prepared".to_string()]);
//! ```
//!
//! ## Product Families
//!
//! ```rust
//! use barista::{family_factory, BeverageType, Serving};
//!
//! // Swapping the factory swaps both products at once
//! for family in BeverageType::ALL {
//!     let factory = family_factory(family);
//!     let hot = factory.create_hot().preparation();
//!     let cold = factory.create_cold().preparation();
//!
//!     assert_eq!((hot.kind, hot.serving), (family, Serving::Hot));
//!     assert_eq!((cold.kind, cold.serving), (family, Serving::Iced));
//! }
//! ```
//!
//! ## Single Instance
//!
//! ```rust
//! use barista::CoffeeMachineSingleton;
//! use std::sync::Arc;
//!
//! let machines = CoffeeMachineSingleton::new();
//! let first = machines.coffee_machine();
//! let second = machines.coffee_machine();
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! ```
//!
//! ## Untyped Discriminants
//!
//! Dispatch on a [`BeverageType`] cannot fail. Raw integers and names can:
//!
//! ```rust
//! use barista::{BeverageFactory, PatternError};
//!
//! assert!(BeverageFactory.create_raw(1).is_ok());
//! assert!(matches!(
//!     BeverageFactory.create_raw(42),
//!     Err(PatternError::InvalidDiscriminant("BeverageType", _))
//! ));
//! ```

// Module declarations
pub mod abstract_factory;
pub mod barista;
pub mod beverage_type;
pub mod beverages;
pub mod coffee_machine;
pub mod error;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod traits;

#[cfg(feature = "config")]
pub mod config;

// Re-export core types
pub use abstract_factory::{
    family_factory, family_factory_raw, BeverageFamilyFactory, BeveragePair, CoffeeFactory, TeaFactory,
};
pub use barista::Barista;
pub use beverage_type::BeverageType;
pub use beverages::{Coffee, HotCoffee, HotTea, IcedCoffee, IcedTea, Tea};
pub use coffee_machine::{CoffeeMachine, CoffeeMachineSingleton};
pub use error::{PatternError, PatternResult};
pub use factory::BeverageFactory;
pub use observer::{LoggingObserver, Observers, Preparation, PreparationObserver, RecordingObserver, Serving};
pub use singleton::{Singleton, SingletonCell};
pub use traits::{Beverage, ColdBeverage, HotBeverage, Preparable};

#[cfg(feature = "config")]
pub use config::OrderConfig;
