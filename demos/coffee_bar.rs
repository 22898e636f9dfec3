/// Example: A coffee bar running all three creational patterns
///
/// Run with `cargo run --example coffee_bar`, or with
/// `--features config -- '{"drinks": ["tea"], "family": "coffee"}'` to serve
/// an order given as JSON.

use barista::{Barista, BeverageType, CoffeeFactory, CoffeeMachineSingleton, TeaFactory};
use std::sync::Arc;

fn run_factory(barista: &Barista) {
    println!("== Factory");
    barista.prepare_drink(BeverageType::Coffee);
    barista.prepare_drink(BeverageType::Tea);
}

fn run_abstract_factory(barista: &Barista) {
    println!("== Abstract factory");
    println!("Preparing coffee beverages:");
    barista.prepare_drinks(&CoffeeFactory);

    println!();

    println!("Preparing tea beverages:");
    barista.prepare_drinks(&TeaFactory);
}

fn run_singleton() {
    println!("== Singleton: coffee machine");
    let machines = CoffeeMachineSingleton::new();

    println!("Brewing the first coffee");
    machines.brew_coffee();
    let first = machines.coffee_machine();

    println!("Brewing the second coffee");
    machines.brew_coffee();
    let second = machines.coffee_machine();

    if Arc::ptr_eq(&first, &second) {
        println!("Both coffees were brewed on the same machine");
    }
}

#[cfg(feature = "config")]
fn run_order() -> barista::PatternResult<()> {
    if let Some(json) = std::env::args().nth(1) {
        println!("== Order");
        let order = barista::OrderConfig::from_json(&json)?;
        Barista::serve_order(&order);
    }
    Ok(())
}

fn main() {
    let barista = Barista::with_console();

    run_factory(&barista);
    println!();
    run_abstract_factory(&barista);
    println!();
    run_singleton();

    #[cfg(feature = "config")]
    {
        if let Err(e) = run_order() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
