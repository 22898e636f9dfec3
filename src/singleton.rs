//! Lazily-initialized single-instance holders.
//!
//! [`SingletonCell`] is the one-time initialization primitive: it starts
//! uninitialized, constructs its value on first access, and returns the
//! identical `Arc` on every access after that. [`Singleton`] binds a
//! constructor to a cell so callers only need `get()`.
//!
//! With the `once-cell` feature the transition is guarded by
//! `once_cell::sync::OnceCell`; without it, by a `Mutex` held across
//! construction. Either way concurrent first-time callers see exactly one
//! construction and all of them receive the same instance.
//!
//! # Construction failure
//!
//! [`SingletonCell::get_or_try_init`] leaves the cell uninitialized when the
//! constructor fails. The error goes back to that caller and the next access
//! runs the constructor again. A panicking constructor behaves the same way.
//!
//! There is no reset: once initialized, the value lives as long as the cell.

use std::fmt;
use std::sync::Arc;
#[cfg(not(feature = "once-cell"))]
use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "once-cell")]
use once_cell::sync::OnceCell;

/// Holds at most one instance of `T`, created on first access.
///
/// `new` is `const`, so a cell can back a process-wide accessor in a
/// `static`. Constructors must not access the same cell again; doing so
/// deadlocks.
///
/// # Examples
///
/// ```
/// use barista::SingletonCell;
/// use std::sync::Arc;
///
/// struct Grinder {
///     burrs: u8,
/// }
///
/// static GRINDER: SingletonCell<Grinder> = SingletonCell::new();
///
/// assert!(!GRINDER.is_initialized());
///
/// let first = GRINDER.get_or_init(|| Grinder { burrs: 2 });
/// let second = GRINDER.get_or_init(|| unreachable!("already initialized"));
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.burrs, 2);
/// ```
pub struct SingletonCell<T> {
    #[cfg(feature = "once-cell")]
    cell: OnceCell<Arc<T>>,
    #[cfg(not(feature = "once-cell"))]
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> SingletonCell<T> {
    /// Creates an uninitialized cell.
    pub const fn new() -> Self {
        Self {
            #[cfg(feature = "once-cell")]
            cell: OnceCell::new(),
            #[cfg(not(feature = "once-cell"))]
            slot: Mutex::new(None),
        }
    }

    /// Returns the held instance, constructing it with `init` on first access.
    ///
    /// `init` runs at most once over the life of the cell, no matter how many
    /// threads race on the first access.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        #[cfg(feature = "once-cell")]
        {
            self.cell.get_or_init(|| Arc::new(init())).clone()
        }

        #[cfg(not(feature = "once-cell"))]
        {
            self.lock().get_or_insert_with(|| Arc::new(init())).clone()
        }
    }

    /// Returns the held instance, constructing it with a fallible `init` on
    /// first access.
    ///
    /// On error the cell stays uninitialized and the next access retries.
    ///
    /// ```
    /// use barista::SingletonCell;
    ///
    /// let cell: SingletonCell<u32> = SingletonCell::new();
    ///
    /// assert_eq!(cell.get_or_try_init(|| Err::<u32, _>("boiler cold")).unwrap_err(), "boiler cold");
    /// assert!(!cell.is_initialized());
    ///
    /// assert_eq!(*cell.get_or_try_init(|| Ok::<_, &str>(93)).unwrap(), 93);
    /// assert!(cell.is_initialized());
    /// ```
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        #[cfg(feature = "once-cell")]
        {
            self.cell.get_or_try_init(|| init().map(Arc::new)).map(Arc::clone)
        }

        #[cfg(not(feature = "once-cell"))]
        {
            let mut slot = self.lock();
            if let Some(value) = slot.as_ref() {
                return Ok(value.clone());
            }
            let value = Arc::new(init()?);
            *slot = Some(value.clone());
            Ok(value)
        }
    }

    /// Returns the held instance without initializing.
    ///
    /// Returns `None` while the cell is uninitialized.
    pub fn get(&self) -> Option<Arc<T>> {
        #[cfg(feature = "once-cell")]
        {
            self.cell.get().cloned()
        }

        #[cfg(not(feature = "once-cell"))]
        {
            self.lock().clone()
        }
    }

    /// Returns true once an instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        #[cfg(feature = "once-cell")]
        {
            self.cell.get().is_some()
        }

        #[cfg(not(feature = "once-cell"))]
        {
            self.lock().is_some()
        }
    }

    // A constructor that panicked never stored a value, so the slot is
    // consistent even when the mutex is poisoned
    #[cfg(not(feature = "once-cell"))]
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "diagnostics")]
impl<T: fmt::Debug> fmt::Debug for SingletonCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonCell")
            .field("initialized", &self.is_initialized())
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(not(feature = "diagnostics"))]
impl<T> fmt::Debug for SingletonCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonCell")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// A [`SingletonCell`] bound to the constructor of its instance.
///
/// # Examples
///
/// ```
/// use barista::Singleton;
/// use std::sync::Arc;
///
/// let accessor = Singleton::new(|| String::from("espresso"));
///
/// let a = accessor.get();
/// let b = accessor.get();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct Singleton<T> {
    cell: SingletonCell<T>,
    ctor: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Singleton<T> {
    /// Creates an uninitialized accessor that will build its instance with `ctor`.
    pub fn new<F>(ctor: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            cell: SingletonCell::new(),
            ctor: Box::new(ctor),
        }
    }

    /// Returns the instance, constructing it on first access.
    pub fn get(&self) -> Arc<T> {
        self.cell.get_or_init(|| (self.ctor)())
    }

    /// Returns the instance if it has been constructed.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.cell.get()
    }

    /// Returns true once the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.cell.is_initialized()
    }
}

impl<T> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
