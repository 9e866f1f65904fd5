#![cfg(all(feature = "derive", feature = "profile"))]

mod common;

use cassette::avec::{Builder, FromRecord, FromRecords, decode_into};
use cassette::profile::{FILE_ID, PROFILE};
use cassette::{EnumValue, FitFile, Timestamp, Value};

use common::*;

#[derive(Debug, Default, FromRecords)]
struct Activity {
    #[record(0)]
    file_id: Option<FileId>,
    #[record(20)]
    samples: Vec<Sample>,
    #[record(78)]
    hrv: Option<Hrv>,
}

#[derive(Debug, Default, FromRecord)]
struct FileId {
    #[field(0)]
    kind: Option<EnumValue>,
    #[field(3)]
    serial_number: Option<u32>,
    #[field(8)]
    product_name: Option<String>,
}

#[derive(Debug, Default, FromRecord)]
struct Sample {
    #[field(time)]
    time: Option<Timestamp>,
    #[field(2)]
    altitude: Option<f64>,
    #[field(3)]
    heart_rate: Option<u8>,
    // A scaled value cannot be held as an integer.
    #[field(5)]
    distance: Option<u32>,
}

#[derive(Debug, Default, FromRecord)]
struct Hrv {
    #[field(0, |v, t: Vec<f64>| v.get_or_insert_default().extend(t))]
    intervals: Option<Vec<f64>>,
}

fn activity() -> Vec<u8> {
    let mut file = FitFile::new();

    file.push(
        Builder::new(&PROFILE, FILE_ID)
            .value("type", "activity")
            .unwrap()
            .value("serial_number", 1u32)
            .unwrap()
            .value("product_name", "Edge")
            .unwrap()
            .build(),
    );

    for (t, heart_rate) in [(1000u32, 150u8), (1001, 151)] {
        file.push(
            Builder::new(&PROFILE, 20)
                .value("timestamp", Timestamp(t))
                .unwrap()
                .value("altitude", 100.0)
                .unwrap()
                .value("heart_rate", heart_rate)
                .unwrap()
                .value("distance", 12.5)
                .unwrap()
                .build(),
        );
    }

    for intervals in [[0.5, 0.75], [1.0, 1.25]] {
        file.push(Builder::new(&PROFILE, 78).field("time", intervals).unwrap().build());
    }

    file.encode()
}

#[test]
fn derived_receivers() {
    let mut activity_set = Activity::default();
    let file = decode_into(&activity(), &PROFILE, &mut activity_set).unwrap();
    assert_eq!(file.len(), 5);

    let file_id = activity_set.file_id.unwrap();
    assert_eq!(
        file_id.kind,
        Some(EnumValue {
            raw: 4,
            name: Some("activity"),
        })
    );
    assert_eq!(file_id.serial_number, Some(1));
    assert_eq!(file_id.product_name.as_deref(), Some("Edge"));

    assert_eq!(activity_set.samples.len(), 2);
    let sample = &activity_set.samples[1];
    assert_eq!(sample.time, Some(Timestamp(1001)));
    assert_eq!(sample.altitude, Some(100.0));
    assert_eq!(sample.heart_rate, Some(151));
    assert_eq!(sample.distance, None);

    // Only the last record of an `Option` field is kept.
    let hrv = activity_set.hrv.unwrap();
    assert_eq!(hrv.intervals, Some(vec![1.0, 1.25]));
}

#[derive(Debug, Default)]
struct Custom {
    values: Vec<(String, Value)>,
}

impl FromRecord for Custom {
    fn add_developer_value(&mut self, name: &str, value: &Value) {
        self.values.push((name.to_owned(), value.clone()));
    }
}

impl FromRecords for Custom {
    fn add_record(&mut self, id: u16) -> Option<&mut dyn FromRecord> {
        (id == 20).then_some(self as &mut dyn FromRecord)
    }
}

#[test]
fn developer_values() {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &field_description(0, 0, "custom", 10));
    let bytes = doc
        .developer_definition(1, 20, &[(3, 1, UINT8)], &[(0, 1, 0), (1, 1, 0)])
        .data(1, &[80, 100, 7])
        .build();

    let mut custom = Custom::default();
    decode_into(&bytes, &PROFILE, &mut custom).unwrap();

    // Undescribed fields have no name and are not published.
    assert_eq!(custom.values, [("custom".to_owned(), Value::Float(10.0))]);
}
