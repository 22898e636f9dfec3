//! The coffee machine: a type meant to exist only once.
//!
//! A coffee bar has room for a single machine. [`CoffeeMachine`] cannot be
//! constructed outside this crate; callers obtain it through a
//! [`CoffeeMachineSingleton`] handle created during application setup, or
//! through the process-wide [`CoffeeMachine::shared`] accessor.

use std::sync::Arc;
use uuid::Uuid;
use crate::observer::{LoggingObserver, Preparation, PreparationObserver, Serving};
use crate::singleton::SingletonCell;
use crate::BeverageType;

static SHARED_MACHINE: SingletonCell<CoffeeMachine> = SingletonCell::new();

/// The machine every coffee is brewed on.
///
/// The identifier plays no part in the single-instance guarantee; it only
/// makes identity visible in brewing output.
#[derive(Debug)]
pub struct CoffeeMachine {
    id: Uuid,
}

impl CoffeeMachine {
    pub(crate) fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Process-wide machine, created on first call.
    ///
    /// ```
    /// use barista::CoffeeMachine;
    /// use std::sync::Arc;
    ///
    /// let a = CoffeeMachine::shared();
    /// let b = CoffeeMachine::shared();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert_eq!(a.id(), b.id());
    /// ```
    pub fn shared() -> Arc<CoffeeMachine> {
        SHARED_MACHINE.get_or_init(CoffeeMachine::new)
    }

    /// Unique identifier of this machine.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The event emitted for one brew.
    pub fn brewing(&self) -> Preparation {
        Preparation::new(
            BeverageType::Coffee,
            Serving::Hot,
            format!("Brewing coffee... with machine id: {}", self.id),
        )
    }

    /// Brews a coffee, printing the machine id to stdout.
    pub fn brew_coffee(&self) {
        self.brew_coffee_with(&LoggingObserver::plain());
    }

    /// Brews a coffee, reporting to `observer`.
    pub fn brew_coffee_with(&self, observer: &dyn PreparationObserver) {
        observer.prepared(&self.brewing());
    }
}

/// Scoped accessor handle for the coffee machine.
///
/// Create one during setup and pass it to whatever needs the machine. The
/// machine is built on first access and shared by every later access through
/// the same handle.
///
/// # Examples
///
/// ```
/// use barista::{CoffeeMachineSingleton, RecordingObserver};
///
/// let machines = CoffeeMachineSingleton::new();
/// let observer = RecordingObserver::new();
///
/// machines.brew_coffee_with(&observer);
/// machines.brew_coffee_with(&observer);
///
/// let messages = observer.messages();
/// assert_eq!(messages[0], messages[1]);
/// ```
#[derive(Debug, Default)]
pub struct CoffeeMachineSingleton {
    cell: SingletonCell<CoffeeMachine>,
}

impl CoffeeMachineSingleton {
    /// Creates a handle with no machine yet.
    pub fn new() -> Self {
        Self {
            cell: SingletonCell::new(),
        }
    }

    /// The machine, built on first access.
    pub fn coffee_machine(&self) -> Arc<CoffeeMachine> {
        self.cell.get_or_init(CoffeeMachine::new)
    }

    /// Returns true once the machine has been built.
    pub fn is_initialized(&self) -> bool {
        self.cell.is_initialized()
    }

    /// Brews a coffee on the machine, printing to stdout.
    pub fn brew_coffee(&self) {
        self.coffee_machine().brew_coffee();
    }

    /// Brews a coffee on the machine, reporting to `observer`.
    pub fn brew_coffee_with(&self, observer: &dyn PreparationObserver) {
        self.coffee_machine().brew_coffee_with(observer);
    }
}
