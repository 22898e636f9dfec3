#![cfg(feature = "config")]

use barista::{Barista, BeverageType, OrderConfig, PatternError, RecordingObserver};
use std::sync::Arc;

#[test]
fn test_order_drives_barista() {
    let order = OrderConfig::from_json(r#"{"drinks": ["coffee", "coffee", "tea"], "family": "tea"}"#).unwrap();

    let recorder = Arc::new(RecordingObserver::new());
    let mut barista = Barista::new();
    barista.add_observer(recorder.clone());
    barista.serve(&order);

    assert_eq!(
        recorder.messages(),
        vec![
            "Coffee is being prepared".to_string(),
            "Coffee is being prepared".to_string(),
            "Tea is being prepared".to_string(),
            "Hot tea is being prepared".to_string(),
            "Iced tea is being prepared".to_string(),
        ]
    );
}

#[test]
fn test_serve_order_builds_console_barista() {
    let order = OrderConfig {
        drinks: vec![BeverageType::Coffee],
        family: None,
        observer_prefix: Some("[test]".to_string()),
    };

    // Prints to stdout; the returned barista keeps serving
    let barista = Barista::serve_order(&order);
    barista.prepare_drink(BeverageType::Tea);
}

#[test]
fn test_invalid_order_is_config_error() {
    for json in [r#"{"drinks": ["water"]}"#, r#"{"family": 1}"#, "not json"] {
        match OrderConfig::from_json(json) {
            Err(PatternError::Config(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected Config error for {}, got {:?}", json, other),
        }
    }
}

#[test]
fn test_beverage_type_serde_names() {
    let json = serde_json::to_string(&BeverageType::ALL).unwrap();
    assert_eq!(json, r#"["coffee","tea"]"#);

    let parsed: Vec<BeverageType> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, BeverageType::ALL.to_vec());
}
