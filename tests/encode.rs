#![cfg(feature = "profile")]

mod common;

use cassette::avec::{Builder, decode_slice};
use cassette::profile::{FILE_ID, PROFILE};
use cassette::{EnumValue, ErrorKind, FitFile, Timestamp, Value};
use proptest::prelude::*;

use common::*;

fn activity() -> Vec<u8> {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &field_description(0, 0, "custom", 10))
        .developer_definition(1, 20, &[(253, 4, UINT32), (3, 1, UINT8)], &[(0, 1, 0)])
        .data(1, &[0x1E, 0x00, 0x00, 0x30, 80, 100])
        .compressed(1, 3, &[0xFF, 0xFF, 0xFF, 0xFF, 81, 101])
        .data(1, &[0x40, 0x00, 0x00, 0x30, 82, 102]);

    doc.big_endian_definition(2, 0xFF00, &[(9, 2, UINT16), (1, 3, STRING)])
        .data(2, &[0x12, 0x34, b'a', b'b', 0])
        .build()
}

#[test]
fn decoded_documents_encode_identically() {
    let bytes = activity();
    let file = decode_slice(&bytes, &PROFILE).unwrap();

    assert_eq!(file.len(), 5);
    assert_eq!(file.encode(), bytes);
}

#[test]
fn short_headers_are_kept() {
    let bytes = Document::short()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    let file = decode_slice(&bytes, &PROFILE).unwrap();

    assert_eq!(file.encode(), bytes);
}

#[test]
fn built_records() {
    let mut file = FitFile::new();

    file.push(
        Builder::new(&PROFILE, FILE_ID)
            .value("type", "activity")
            .unwrap()
            .value("serial_number", 1u32)
            .unwrap()
            .value("time_created", Timestamp(1000))
            .unwrap()
            .value("product_name", "Edge")
            .unwrap()
            .build(),
    );

    for (i, heart_rate) in [150u8, 151].into_iter().enumerate() {
        let record = Builder::new(&PROFILE, 20)
            .local_message(1)
            .value("timestamp", Timestamp(1000 + i as u32))
            .unwrap()
            .value("position_lat", Value::Coordinate(45.0))
            .unwrap()
            .value("altitude", 100.0)
            .unwrap()
            .value("heart_rate", heart_rate)
            .unwrap()
            .build();
        file.push(record);
    }

    // Records of the same shape share a definition.
    assert_eq!(file.definitions().len(), 2);

    let bytes = file.encode();
    let decoded = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(decoded.len(), 3);

    let file_id = decoded.record(0).unwrap();
    assert_eq!(
        file_id.get_by_name("type"),
        Some(Value::Enum(EnumValue {
            raw: 4,
            name: Some("activity"),
        }))
    );
    assert_eq!(file_id.get_by_name("serial_number"), Some(Value::UInt(1)));
    assert_eq!(
        file_id.get_by_name("time_created"),
        Some(Value::Timestamp(Timestamp(1000)))
    );
    assert_eq!(
        file_id.get_by_name("product_name"),
        Some(Value::String("Edge".into()))
    );

    let record = decoded.record(2).unwrap();
    assert_eq!(record.timestamp(), Some(Timestamp(1001)));
    assert_eq!(record.get_by_name("position_lat"), Some(Value::Coordinate(45.0)));
    assert_eq!(record.get_by_name("altitude"), Some(Value::Float(100.0)));
    assert_eq!(record.get_by_name("heart_rate"), Some(Value::UInt(151)));

    // Re-encoding the decoded document is stable.
    assert_eq!(decoded.encode(), bytes);
}

#[test]
fn goals_and_weather_use_named_values() {
    let mut file = FitFile::new();

    file.push(
        Builder::new(&PROFILE, 15)
            .value("type", "steps")
            .unwrap()
            .value("target_value", 10_000u32)
            .unwrap()
            .value("source", "user")
            .unwrap()
            .build(),
    );
    file.push(
        Builder::new(&PROFILE, 128)
            .value("condition", "light_rain")
            .unwrap()
            .value("air_quality", "moderate")
            .unwrap()
            .build(),
    );

    let decoded = decode_slice(&file.encode(), &PROFILE).unwrap();

    let goal = decoded.record(0).unwrap();
    assert_eq!(goal.name(), "goals");
    assert_eq!(
        goal.get_by_name("type"),
        Some(Value::Enum(EnumValue {
            raw: 4,
            name: Some("steps"),
        }))
    );
    assert_eq!(goal.get_by_name("target_value"), Some(Value::UInt(10_000)));
    assert_eq!(
        goal.get_by_name("source"),
        Some(Value::Enum(EnumValue {
            raw: 2,
            name: Some("user"),
        }))
    );

    let weather = decoded.record(1).unwrap();
    assert_eq!(weather.name(), "weather_conditions");
    assert_eq!(
        weather.get_by_name("condition"),
        Some(Value::Enum(EnumValue {
            raw: 16,
            name: Some("light_rain"),
        }))
    );
    assert_eq!(
        weather.get_by_name("air_quality"),
        Some(Value::Enum(EnumValue {
            raw: 1,
            name: Some("moderate"),
        }))
    );
}

#[test]
fn unknown_field_names() {
    let err = Builder::new(&PROFILE, 20)
        .value("wattage", 300u16)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownField);
}

proptest! {
    #[test]
    fn single_bit_flips_are_detected(index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let mut bytes = activity();

        // Any byte after the header, including the check value.
        let i = 14 + index.index(bytes.len() - 14);
        bytes[i] ^= 1 << bit;

        let err = decode_slice(&bytes, &PROFILE).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn scaled_values_survive_encoding(altitude in -500.0f64..12000.0) {
        let mut file = FitFile::new();
        file.push(Builder::new(&PROFILE, 20).value("altitude", altitude).unwrap().build());

        let decoded = decode_slice(&file.encode(), &PROFILE).unwrap();
        let value = decoded.record(0).and_then(|r| r.get_by_name("altitude"));
        let value = value.and_then(|v| v.as_f64()).unwrap();

        prop_assert!((value - altitude).abs() <= 0.1 + 1e-9);
    }
}
