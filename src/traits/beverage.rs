//! Capability traits implemented by every product.

use crate::observer::{LoggingObserver, Preparation, PreparationObserver};

/// The single capability every product offers: being prepared.
///
/// Implementers only describe their identifying event through
/// [`preparation`](Self::preparation); emitting it is handled by the provided
/// methods. Preparation cannot fail.
///
/// # Examples
///
/// ```
/// use barista::{BeverageType, Preparable, Preparation, RecordingObserver, Serving};
///
/// struct Cocoa;
///
/// impl Preparable for Cocoa {
///     fn preparation(&self) -> Preparation {
///         Preparation::new(BeverageType::Coffee, Serving::Hot, "Cocoa is being prepared")
///     }
/// }
///
/// let observer = RecordingObserver::new();
/// Cocoa.prepare_with(&observer);
/// assert_eq!(observer.messages(), vec!["Cocoa is being prepared".to_string()]);
/// ```
pub trait Preparable: Send + Sync {
    /// The event emitted when this product is prepared.
    fn preparation(&self) -> Preparation;

    /// Prepares the product, printing its identifying line to stdout.
    fn prepare(&self) {
        self.prepare_with(&LoggingObserver::plain());
    }

    /// Prepares the product, reporting to `observer`.
    fn prepare_with(&self, observer: &dyn PreparationObserver) {
        observer.prepared(&self.preparation());
    }
}

/// Product of the simple factory.
pub trait Beverage: Preparable {}

/// Cold member of a product family.
pub trait ColdBeverage: Preparable {}

/// Hot member of a product family.
pub trait HotBeverage: Preparable {}
