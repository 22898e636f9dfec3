use barista::{Barista, CoffeeMachine, CoffeeMachineSingleton, RecordingObserver, Singleton, SingletonCell};
use serial_test::serial;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[test]
fn test_two_accesses_report_same_machine() {
    let machines = CoffeeMachineSingleton::new();
    let observer = RecordingObserver::new();

    machines.brew_coffee_with(&observer);
    let first = machines.coffee_machine();
    machines.brew_coffee_with(&observer);
    let second = machines.coffee_machine();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.id(), second.id());

    let messages = observer.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], messages[1]);
    assert!(messages[0].ends_with(&first.id().to_string()));
}

#[test]
fn test_machine_not_built_until_first_access() {
    let machines = CoffeeMachineSingleton::new();
    assert!(!machines.is_initialized());

    machines.brew_coffee();
    assert!(machines.is_initialized());
}

#[test]
#[serial]
fn test_shared_machine_is_process_wide() {
    let a = CoffeeMachine::shared();
    let b = std::thread::spawn(CoffeeMachine::shared).join().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
#[serial]
fn test_barista_brews_on_shared_machine() {
    let recorder = Arc::new(RecordingObserver::new());
    let mut barista = Barista::new();
    barista.add_observer(recorder.clone());

    let first = barista.brew_coffee();
    let second = barista.brew_coffee();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &CoffeeMachine::shared()));
    assert_eq!(recorder.messages()[0], recorder.messages()[1]);
}

#[test]
fn test_static_cell_identity() {
    static NAMES: SingletonCell<Vec<&'static str>> = SingletonCell::new();

    let a = NAMES.get_or_init(|| vec!["espresso", "lungo"]);
    let b = NAMES.get_or_init(Vec::new);

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(b.len(), 2);
}

#[test]
fn test_accessor_constructs_exactly_once() {
    let constructed = Arc::new(AtomicU32::new(0));
    let counter = constructed.clone();
    let accessor = Singleton::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        String::from("grinder")
    });

    let instances: Vec<_> = (0..5).map(|_| accessor.get()).collect();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }
}

#[test]
fn test_retry_after_failed_construction() {
    #[derive(Debug)]
    struct Boiler {
        pressure: u8,
    }

    let cell: SingletonCell<Boiler> = SingletonCell::new();
    let attempts = AtomicU32::new(0);

    let build = || -> Result<Boiler, String> {
        match attempts.fetch_add(1, Ordering::SeqCst) {
            0 => Err("no water".to_string()),
            _ => Ok(Boiler { pressure: 9 }),
        }
    };

    assert_eq!(cell.get_or_try_init(build).unwrap_err(), "no water");
    assert!(cell.get().is_none());

    let boiler = cell.get_or_try_init(build).unwrap();
    assert_eq!(boiler.pressure, 9);
    assert!(Arc::ptr_eq(&boiler, &cell.get().unwrap()));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}
