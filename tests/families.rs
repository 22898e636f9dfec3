use barista::{
    family_factory, family_factory_raw, Barista, BeverageFamilyFactory, BeverageType, CoffeeFactory,
    PatternError, Preparation, RecordingObserver, Serving, TeaFactory,
};
use std::sync::Arc;

fn hot_and_cold(factory: &dyn BeverageFamilyFactory) -> (Preparation, Preparation) {
    (factory.create_hot().preparation(), factory.create_cold().preparation())
}

#[test]
fn test_coffee_family_pairs_hot_and_iced_coffee() {
    let observer = RecordingObserver::new();
    let factory = family_factory(BeverageType::Coffee);

    factory.create_hot().prepare_with(&observer);
    factory.create_cold().prepare_with(&observer);

    assert_eq!(
        observer.messages(),
        vec!["Hot coffee is being prepared".to_string(), "Iced coffee is being prepared".to_string()]
    );
    assert!(observer.messages().iter().all(|m| !m.contains("tea")));
}

#[test]
fn test_tea_family_pairs_hot_and_iced_tea() {
    let (hot, cold) = hot_and_cold(&TeaFactory);
    assert_eq!(hot.message, "Hot tea is being prepared");
    assert_eq!(cold.message, "Iced tea is being prepared");
}

#[test]
fn test_swapping_factory_swaps_both_products() {
    let mut factory: &dyn BeverageFamilyFactory = &CoffeeFactory;
    let (hot, cold) = hot_and_cold(factory);
    assert_eq!((hot.kind, cold.kind), (BeverageType::Coffee, BeverageType::Coffee));

    factory = &TeaFactory;
    let (hot, cold) = hot_and_cold(factory);
    assert_eq!((hot.kind, cold.kind), (BeverageType::Tea, BeverageType::Tea));
}

#[test]
fn test_repeated_and_interleaved_calls_stay_in_family() {
    let coffee = family_factory(BeverageType::Coffee);
    let tea = family_factory(BeverageType::Tea);

    for _ in 0..10 {
        let tea_cold = tea.create_cold().preparation();
        let coffee_hot = coffee.create_hot().preparation();
        let coffee_cold = coffee.create_cold().preparation();
        let tea_hot = tea.create_hot().preparation();

        assert_eq!(coffee_hot.kind, BeverageType::Coffee);
        assert_eq!(coffee_cold.kind, BeverageType::Coffee);
        assert_eq!(tea_hot.kind, BeverageType::Tea);
        assert_eq!(tea_cold.kind, BeverageType::Tea);
    }
}

#[test]
fn test_create_pair() {
    let pair = CoffeeFactory.create_pair();
    assert_eq!(pair.hot.preparation().serving, Serving::Hot);
    assert_eq!(pair.cold.preparation().serving, Serving::Iced);
    assert_eq!(pair.hot.preparation().kind, pair.cold.preparation().kind);
}

#[test]
fn test_family_factory_raw() {
    assert_eq!(family_factory_raw(0).unwrap().family(), BeverageType::Coffee);

    match family_factory_raw(4) {
        Err(PatternError::InvalidDiscriminant(_, value)) => assert_eq!(value, "4"),
        _ => panic!("Expected InvalidDiscriminant"),
    }
}

#[test]
fn test_barista_prepares_hot_then_cold() {
    let recorder = Arc::new(RecordingObserver::new());
    let mut barista = Barista::new();
    barista.add_observer(recorder.clone());

    barista.prepare_drinks(&CoffeeFactory);
    barista.prepare_drinks(&TeaFactory);

    assert_eq!(
        recorder.messages(),
        vec![
            "Hot coffee is being prepared".to_string(),
            "Iced coffee is being prepared".to_string(),
            "Hot tea is being prepared".to_string(),
            "Iced tea is being prepared".to_string(),
        ]
    );
}

#[test]
fn test_custom_family_plugs_into_barista() {
    struct DecafFactory;

    impl BeverageFamilyFactory for DecafFactory {
        fn family(&self) -> BeverageType {
            BeverageType::Coffee
        }

        fn create_cold(&self) -> Box<dyn barista::ColdBeverage> {
            Box::new(barista::IcedCoffee)
        }

        fn create_hot(&self) -> Box<dyn barista::HotBeverage> {
            Box::new(barista::HotCoffee)
        }
    }

    let recorder = Arc::new(RecordingObserver::new());
    let mut barista = Barista::new();
    barista.add_observer(recorder.clone());
    barista.prepare_drinks(&DecafFactory);

    assert_eq!(recorder.len(), 2);
}
