//! Preparation events and the observers that receive them.
//!
//! Products never write to the console themselves. Every identifying action
//! (a beverage being prepared, a machine brewing) is described by a
//! [`Preparation`] event and handed to a [`PreparationObserver`]. The
//! [`LoggingObserver`] prints events to stdout, the [`RecordingObserver`] keeps
//! them for later inspection, and [`Observers`] fans a single event out to
//! several observers.

use std::fmt;
use std::sync::{Arc, Mutex};
use crate::BeverageType;

/// How a prepared beverage is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Serving {
    /// No temperature variant (simple factory products)
    Plain,
    /// Hot family member
    Hot,
    /// Cold family member
    Iced,
}

/// The identifying event emitted when a product is prepared.
///
/// # Examples
///
/// ```
/// use barista::{BeverageType, Preparation, Serving};
///
/// let event = Preparation::new(BeverageType::Tea, Serving::Iced, "Iced tea is being prepared");
/// assert_eq!(event.to_string(), "Iced tea is being prepared");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preparation {
    /// Family of the prepared product
    pub kind: BeverageType,
    /// Serving temperature of the prepared product
    pub serving: Serving,
    /// Human-readable line naming the product
    pub message: String,
}

impl Preparation {
    /// Creates a new preparation event.
    pub fn new(kind: BeverageType, serving: Serving, message: impl Into<String>) -> Self {
        Self {
            kind,
            serving,
            message: message.into(),
        }
    }
}

impl fmt::Display for Preparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Observer trait for preparation events.
///
/// Observer calls are made synchronously from `prepare`. Keep implementations
/// lightweight.
///
/// # Examples
///
/// ```
/// use barista::{BeverageFactory, BeverageType, Preparation, PreparationObserver};
///
/// struct CountingObserver(std::sync::atomic::AtomicUsize);
///
/// impl PreparationObserver for CountingObserver {
///     fn prepared(&self, _preparation: &Preparation) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
///     }
/// }
///
/// let observer = CountingObserver(Default::default());
/// BeverageFactory.create(BeverageType::Coffee).prepare_with(&observer);
/// assert_eq!(observer.0.load(std::sync::atomic::Ordering::SeqCst), 1);
/// ```
pub trait PreparationObserver: Send + Sync {
    /// Called once per prepared product.
    fn prepared(&self, preparation: &Preparation);
}

impl<O: PreparationObserver + ?Sized> PreparationObserver for Arc<O> {
    fn prepared(&self, preparation: &Preparation) {
        (**self).prepared(preparation)
    }
}

/// Collection of observers notified in registration order.
#[derive(Clone, Default)]
pub struct Observers {
    observers: Vec<Arc<dyn PreparationObserver>>,
}

impl Observers {
    /// Creates a new empty observer collection.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds an observer to the collection.
    pub fn add(&mut self, observer: Arc<dyn PreparationObserver>) {
        self.observers.push(observer);
    }

    /// Returns true if any observers are registered.
    #[inline]
    pub fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl PreparationObserver for Observers {
    #[inline]
    fn prepared(&self, preparation: &Preparation) {
        for observer in &self.observers {
            observer.prepared(preparation);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("observers", &format!("{} observers", self.observers.len()))
            .finish()
    }
}

/// Built-in observer that logs events to stdout.
///
/// # Examples
///
/// ```
/// use barista::{BeverageFactory, BeverageType, LoggingObserver};
///
/// let observer = LoggingObserver::new();
/// // Prints "[barista] Tea is being prepared"
/// BeverageFactory.create(BeverageType::Tea).prepare_with(&observer);
/// ```
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a new logging observer with default prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[barista]".to_string(),
        }
    }

    /// Creates a new logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Creates a logging observer that prints bare messages.
    pub fn plain() -> Self {
        Self::with_prefix("")
    }

    /// Formats a line the way this observer prints it.
    pub fn format(&self, preparation: &Preparation) -> String {
        if self.prefix.is_empty() {
            preparation.message.clone()
        } else {
            format!("{} {}", self.prefix, preparation.message)
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PreparationObserver for LoggingObserver {
    fn prepared(&self, preparation: &Preparation) {
        println!("{}", self.format(preparation));
    }
}

/// Observer that keeps every event it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Preparation>>,
}

impl RecordingObserver {
    /// Creates an empty recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<Preparation> {
        self.lock().clone()
    }

    /// Messages of the recorded events, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|event| event.message.clone()).collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Preparation>> {
        // A panicking observer cannot leave the Vec half-written
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreparationObserver for RecordingObserver {
    fn prepared(&self, preparation: &Preparation) {
        self.lock().push(preparation.clone());
    }
}
