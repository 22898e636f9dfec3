#![no_main]

use libfuzzer_sys::fuzz_target;
use barista::{family_factory_raw, BeverageFactory, BeverageType, PatternError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    // First 8 bytes are an untyped discriminant
    let mut raw_bytes = [0u8; 8];
    raw_bytes.copy_from_slice(&data[..8]);
    let raw = i64::from_le_bytes(raw_bytes);

    match BeverageFactory.create_raw(raw) {
        Ok(beverage) => assert_eq!(beverage.preparation().kind.raw(), raw),
        Err(PatternError::InvalidDiscriminant(_, value)) => {
            assert!(BeverageType::from_raw(raw).is_err());
            assert_eq!(value, raw.to_string());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }

    if let Ok(factory) = family_factory_raw(raw) {
        let hot = factory.create_hot().preparation();
        let cold = factory.create_cold().preparation();
        assert_eq!(hot.kind, cold.kind);
    }

    // Remaining bytes are a name
    if let Ok(name) = std::str::from_utf8(&data[8..]) {
        if let Ok(beverage) = BeverageFactory.create_named(name) {
            assert!(beverage.preparation().kind.name().eq_ignore_ascii_case(name.trim()));
        }
    }
});
