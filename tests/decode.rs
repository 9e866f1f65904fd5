#![cfg(feature = "profile")]

mod common;

use cassette::avec::{decode_chained, decode_reader, decode_slice};
use cassette::profile::{PROFILE, StaticCatalog};
use cassette::{EnumValue, ErrorKind, Timestamp, Value};

use common::*;

#[test]
fn file_id() {
    let bytes = Document::new()
        .definition(0, 0, &[(0, 1, 0x00), (3, 4, UINT32Z), (4, 4, UINT32)])
        .data(0, &[4, 1, 0, 0, 0, 0xE8, 0x03, 0, 0])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(file.len(), 1);

    let record = file.record(0).unwrap();
    assert_eq!(record.name(), "file_id");
    assert_eq!(record.get_by_name("serial_number"), Some(Value::UInt(1)));
    assert_eq!(record.get_by_number(3), Some(Value::UInt(1)));
    assert_eq!(
        record.get_by_name("time_created"),
        Some(Value::Timestamp(Timestamp(1000)))
    );
    assert_eq!(
        file.file_type(),
        Some(Value::Enum(EnumValue {
            raw: 4,
            name: Some("activity"),
        }))
    );
}

#[test]
fn short_header() {
    let bytes = Document::short()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(file.header().header_size, 12);
    assert_eq!(file.record(0).unwrap().get_by_name("heart_rate"), Some(Value::UInt(80)));
}

#[test]
fn extended_header() {
    let bytes = Document::extended(&[0xAB, 0xCD])
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    assert_eq!(bytes[0], 16);

    let from_slice = decode_slice(&bytes, &PROFILE).unwrap();
    let from_reader = decode_reader(&mut bytes.as_slice(), &PROFILE).unwrap();

    for file in [&from_slice, &from_reader] {
        assert_eq!(file.header().header_size, 16);
        assert_eq!(file.record(0).unwrap().get_by_name("heart_rate"), Some(Value::UInt(80)));
    }

    // Encoding drops the extra header bytes.
    let normalized = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    let encoded = from_slice.encode();
    assert_eq!(encoded[0], 14);
    assert_eq!(encoded, normalized);
    assert_eq!(from_reader.encode(), normalized);
}

#[test]
fn unset_header_check_is_accepted() {
    let bytes = Document::new()
        .header_crc(0)
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();

    assert_eq!(decode_slice(&bytes, &PROFILE).unwrap().len(), 1);
}

#[test]
fn header_check_mismatch() {
    let bytes = Document::new().header_crc(0x1234).build();

    let err = decode_slice(&bytes, &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Integrity);
}

#[test]
fn not_fit_data() {
    let mut bytes = Document::new().build();
    bytes[8] = b'X';

    let err = decode_slice(&bytes, &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn document_check_mismatch() {
    let mut bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;

    let err = decode_slice(&bytes, &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Integrity);
}

#[test]
fn truncated_record() {
    let bytes = Document::new()
        .definition(0, 20, &[(7, 2, UINT16)])
        .data(0, &[1])
        .build();

    let err = decode_slice(&bytes, &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn scaled_and_semantic_fields() {
    let bytes = Document::new()
        .definition(
            0,
            20,
            &[(0, 4, 0x85), (2, 2, UINT16), (3, 1, UINT8), (5, 4, UINT32)],
        )
        .raw(&[0x00])
        .raw(&(1i32 << 30).to_le_bytes())
        .raw(&3000u16.to_le_bytes())
        .raw(&[0xFF])
        .raw(&12345u32.to_le_bytes())
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    let record = file.record(0).unwrap();

    assert_eq!(record.get_by_name("position_lat"), Some(Value::Coordinate(90.0)));
    assert_eq!(record.get_by_name("altitude"), Some(Value::Float(100.0)));
    assert_eq!(record.get_by_name("distance"), Some(Value::Float(123.45)));
    // Invalid values are absent.
    assert_eq!(record.get_by_name("heart_rate"), None);
}

#[test]
fn last_definition_wins() {
    let bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .definition(0, 20, &[(7, 2, UINT16)])
        .data(0, &[200, 0])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(file.len(), 2);
    assert_eq!(file.definitions().len(), 2);

    let first = file.record(0).unwrap();
    assert_eq!(first.get_by_name("heart_rate"), Some(Value::UInt(80)));

    let second = file.record(1).unwrap();
    assert_eq!(second.get_by_name("power"), Some(Value::UInt(200)));
    assert_eq!(second.get_by_name("heart_rate"), None);
}

#[test]
fn unknown_messages_and_fields() {
    let bytes = Document::new()
        .definition(0, 0xFF00, &[(9, 2, UINT16)])
        .data(0, &[0x34, 0x12])
        .definition(1, 20, &[(200, 2, UINT16)])
        .data(1, &[0x78, 0x56])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();

    let unknown = file.record(0).unwrap();
    assert_eq!(unknown.name(), "unknown_65280");
    assert_eq!(unknown.get_by_number(9), Some(Value::UInt(0x1234)));

    let known = file.record(1).unwrap();
    assert_eq!(known.name(), "record");
    let (field, value) = known.fields().next().unwrap();
    assert_eq!(field.name(), None);
    assert_eq!(value, Some(Value::UInt(0x5678)));
}

#[test]
fn empty_catalog() {
    let bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8), (2, 2, UINT16)])
        .data(0, &[80, 0xB8, 0x0B])
        .build();

    let file = decode_slice(&bytes, &StaticCatalog::empty()).unwrap();
    let record = file.record(0).unwrap();

    assert_eq!(record.name(), "unknown_20");
    assert_eq!(record.get_by_number(3), Some(Value::UInt(80)));
    // Unscaled without a schema.
    assert_eq!(record.get_by_number(2), Some(Value::UInt(3000)));
}

#[test]
fn big_endian_records() {
    let bytes = Document::new()
        .big_endian_definition(0, 20, &[(7, 2, UINT16)])
        .data(0, &[0x01, 0x2C])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert!(!file.definitions()[0].is_little_endian);
    assert_eq!(file.record(0).unwrap().get_by_name("power"), Some(Value::UInt(300)));
}

#[test]
fn compressed_timestamps() {
    let bytes = Document::new()
        .definition(0, 20, &[(253, 4, UINT32), (3, 1, UINT8)])
        .data(0, &[0x1E, 0x00, 0x00, 0x30, 80])
        .definition(1, 20, &[(3, 1, UINT8)])
        .compressed(1, 2, &[90])
        .compressed(1, 5, &[91])
        .data(0, &[0x08, 0x00, 0x00, 0x40, 81])
        .compressed(1, 9, &[92])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    let timestamps: Vec<_> = file.records().map(|r| r.timestamp()).collect();

    assert_eq!(
        timestamps,
        [
            Some(Timestamp(0x3000_001E)),
            // The offset wrapped past the reference.
            Some(Timestamp(0x3000_0022)),
            Some(Timestamp(0x3000_0025)),
            Some(Timestamp(0x4000_0008)),
            // A timestamp field resets the reference.
            Some(Timestamp(0x4000_0009)),
        ]
    );
    assert_eq!(file.record(1).unwrap().data().time_offset(), Some(2));
}

#[test]
fn compressed_timestamp_without_reference() {
    let bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .compressed(0, 3, &[80])
        .build();

    let err = decode_slice(&bytes, &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[test]
fn undefined_local_message_is_skipped() {
    let bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .data(5, &[1, 2, 3])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(file.len(), 1);
}

#[test]
fn developer_fields() {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &field_description(0, 0, "custom", 10));
    let bytes = doc
        .developer_definition(1, 20, &[(3, 1, UINT8)], &[(0, 1, 0)])
        .data(1, &[80, 100])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    assert_eq!(file.len(), 2);

    let description = file.record(0).unwrap();
    assert_eq!(description.name(), "field_description");
    assert_eq!(
        description.get_by_name("field_name"),
        Some(Value::String("custom".into()))
    );

    let record = file.record(1).unwrap();
    assert_eq!(record.get_by_name("heart_rate"), Some(Value::UInt(80)));
    assert_eq!(record.get_by_name("custom"), Some(Value::Float(10.0)));
    assert_eq!(record.get_developer(0, 0), Some(Value::Float(10.0)));

    let (field, _) = record.developer_fields().next().unwrap();
    assert_eq!(field.name(), Some("custom"));
}

#[test]
fn multi_byte_developer_fields() {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &typed_field_description(0, 0, UINT16, "custom", 10));
    let bytes = doc
        .developer_definition(1, 20, &[(3, 1, UINT8)], &[(0, 2, 0)])
        .data(1, &[80, 0x64, 0x00])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    let record = file.record(1).unwrap();

    assert_eq!(record.get_by_name("custom"), Some(Value::Float(10.0)));
    assert_eq!(record.get_developer(0, 0), Some(Value::Float(10.0)));
    assert_eq!(file.encode(), bytes);
}

#[test]
fn later_field_descriptions_replace_earlier_ones() {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &field_description(0, 0, "custom", 10))
        .developer_definition(1, 20, &[], &[(0, 1, 0)])
        .data(1, &[100])
        .data(0, &field_description(0, 0, "other", 4));
    let bytes = doc
        .developer_definition(1, 20, &[], &[(0, 1, 0)])
        .data(1, &[100])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    let values: Vec<_> = file
        .records_by_message(20)
        .map(|r| r.get_developer(0, 0))
        .collect();

    // Definitions keep the description current when they were declared.
    assert_eq!(values, [Some(Value::Float(10.0)), Some(Value::Float(25.0))]);
    assert_eq!(
        file.record(3).unwrap().get_by_name("other"),
        Some(Value::Float(25.0))
    );
}

#[test]
fn undescribed_developer_fields_are_raw() {
    let bytes = Document::new()
        .developer_definition(0, 20, &[(3, 1, UINT8)], &[(0, 2, 1)])
        .data(0, &[80, 7, 9])
        .build();

    let file = decode_slice(&bytes, &PROFILE).unwrap();
    let record = file.record(0).unwrap();

    assert_eq!(record.get_developer(1, 0), Some(Value::Bytes(vec![7, 9])));
    assert_eq!(record.get_by_name("heart_rate"), Some(Value::UInt(80)));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    assert_eq!(decode_slice(&bytes, &PROFILE).unwrap().len(), 1);
}

#[test]
fn chained_documents() {
    let mut bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();
    bytes.extend(
        Document::short()
            .definition(0, 20, &[(7, 2, UINT16)])
            .data(0, &[200, 0])
            .data(0, &[201, 0])
            .build(),
    );

    let files = decode_chained(&bytes, &PROFILE).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].len(), 1);
    assert_eq!(files[1].len(), 2);

    // Only the first document of a plain decode.
    assert_eq!(decode_slice(&bytes, &PROFILE).unwrap(), files[0]);
}

#[test]
fn reader_matches_slice() {
    let doc = field_description_definition(Document::new(), 0)
        .data(0, &field_description(0, 1, "custom", 1))
        .developer_definition(1, 20, &[(253, 4, UINT32)], &[(1, 1, 0)])
        .data(1, &[0x10, 0, 0, 0x30, 5])
        .compressed(1, 0x12, &[0x10, 0, 0, 0x30, 6]);
    let bytes = doc.build();

    let from_slice = decode_slice(&bytes, &PROFILE).unwrap();
    let from_reader = decode_reader(&mut bytes.as_slice(), &PROFILE).unwrap();

    assert_eq!(from_reader, from_slice);
}

#[test]
fn reader_truncated() {
    let bytes = Document::new()
        .definition(0, 20, &[(3, 1, UINT8)])
        .data(0, &[80])
        .build();

    let err = decode_reader(&mut &bytes[..bytes.len() - 4], &PROFILE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
