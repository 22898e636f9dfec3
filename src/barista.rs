//! Example driver consuming the factories and the coffee machine.

use std::sync::Arc;
use crate::abstract_factory::{family_factory, BeverageFamilyFactory};
use crate::coffee_machine::CoffeeMachine;
use crate::factory::BeverageFactory;
use crate::observer::{LoggingObserver, Observers, PreparationObserver};
use crate::BeverageType;

/// Prepares drinks through the factories and reports every preparation to its
/// observers.
///
/// The barista never names a concrete product type: it passes discriminants
/// or family factories in and receives capability handles back.
///
/// # Examples
///
/// ```
/// use barista::{Barista, BeverageType, CoffeeFactory, RecordingObserver};
/// use std::sync::Arc;
///
/// let recorder = Arc::new(RecordingObserver::new());
/// let mut barista = Barista::new();
/// barista.add_observer(recorder.clone());
///
/// barista.prepare_drink(BeverageType::Tea);
/// barista.prepare_drinks(&CoffeeFactory);
///
/// assert_eq!(recorder.messages(), vec![
///     "Tea is being prepared".to_string(),
///     "Hot coffee is being prepared".to_string(),
///     "Iced coffee is being prepared".to_string(),
/// ]);
/// ```
#[derive(Debug, Default)]
pub struct Barista {
    factory: BeverageFactory,
    observers: Observers,
}

impl Barista {
    /// Creates a barista with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a barista printing bare lines to stdout.
    pub fn with_console() -> Self {
        let mut barista = Self::new();
        barista.add_observer(Arc::new(LoggingObserver::plain()));
        barista
    }

    /// Adds an observer notified of every preparation.
    pub fn add_observer(&mut self, observer: Arc<dyn PreparationObserver>) {
        self.observers.add(observer);
    }

    /// Prepares one drink of the given kind.
    pub fn prepare_drink(&self, kind: BeverageType) {
        self.factory.create(kind).prepare_with(&self.observers);
    }

    /// Prepares the hot drink, then the cold drink, of a family.
    pub fn prepare_drinks(&self, factory: &dyn BeverageFamilyFactory) {
        let hot = factory.create_hot();
        hot.prepare_with(&self.observers);

        let cold = factory.create_cold();
        cold.prepare_with(&self.observers);
    }

    /// Prepares the hot and cold drinks of the family selected by `family`.
    pub fn prepare_family(&self, family: BeverageType) {
        self.prepare_drinks(family_factory(family));
    }

    /// Brews a coffee on the process-wide coffee machine.
    pub fn brew_coffee(&self) -> Arc<CoffeeMachine> {
        let machine = CoffeeMachine::shared();
        machine.brew_coffee_with(&self.observers);
        machine
    }

    /// Creates a barista set up by an order and prepares everything on it.
    #[cfg(feature = "config")]
    pub fn serve_order(order: &crate::config::OrderConfig) -> Self {
        let mut barista = Self::new();
        let console = match &order.observer_prefix {
            Some(prefix) => LoggingObserver::with_prefix(prefix.clone()),
            None => LoggingObserver::plain(),
        };
        barista.add_observer(Arc::new(console));
        barista.serve(order);
        barista
    }

    /// Prepares every drink on an order, then the order's family pair.
    #[cfg(feature = "config")]
    pub fn serve(&self, order: &crate::config::OrderConfig) {
        for kind in &order.drinks {
            self.prepare_drink(*kind);
        }
        if let Some(family) = order.family {
            self.prepare_family(family);
        }
    }
}
