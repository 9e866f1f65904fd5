//! Conversion between field bytes and physical values.

use crate::profile::{FieldSchema, Kind};
use crate::sans::data::{BaseType, Raw};
use crate::value::{EnumValue, Timestamp, Value};

use super::developer::DeveloperFieldDescriptor;

/// Semicircles per degree of arc, `2^31 / 180`.
const SEMICIRCLES_PER_DEGREE: f64 = 2_147_483_648.0 / 180.0;

/// How to interpret the elements of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Semantics {
    pub scale: f64,
    pub offset: f64,
    pub kind: Kind,
}

impl Semantics {
    fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }
}

impl From<&FieldSchema> for Semantics {
    fn from(schema: &FieldSchema) -> Self {
        Self {
            scale: schema.scale,
            offset: schema.offset,
            kind: schema.kind,
        }
    }
}

impl From<&DeveloperFieldDescriptor> for Semantics {
    fn from(descriptor: &DeveloperFieldDescriptor) -> Self {
        Self {
            scale: descriptor.scale,
            offset: descriptor.offset,
            kind: Kind::Number,
        }
    }
}

/// Decode the bytes of a field.
///
/// Without semantics, elements are decoded by base type alone. Returns `None`
/// if the field is absent.
pub fn decode(
    base_type: BaseType,
    semantics: Option<&Semantics>,
    r: &[u8],
    is_le: bool,
) -> Option<Value> {
    if base_type == BaseType::String {
        return decode_string(r);
    }

    let size = base_type.size() as usize;
    if r.is_empty() || r.len() % size != 0 {
        return decode_bytes(r);
    }

    if base_type == BaseType::Byte && r.len() > 1 {
        return decode_bytes(r);
    }

    let mut elements = r.chunks_exact(size).map(|r| {
        let bits = base_type.read_bits(r, is_le);
        (bits != base_type.invalid()).then(|| interpret(base_type, bits, semantics))
    });

    let is_array = r.len() > size || semantics.is_some_and(|s| s.kind == Kind::Array);
    if is_array {
        let elements: Vec<_> = elements.collect();
        elements
            .iter()
            .any(Option::is_some)
            .then_some(Value::Array(elements))
    } else {
        elements.next().flatten()
    }
}

/// Decode a field as raw bytes. Returns `None` if every byte is invalid.
pub fn decode_bytes(r: &[u8]) -> Option<Value> {
    r.iter()
        .any(|b| *b != BaseType::Byte.invalid() as u8)
        .then(|| Value::Bytes(r.to_vec()))
}

fn decode_string(r: &[u8]) -> Option<Value> {
    let end = r.iter().position(|b| *b == 0).unwrap_or(r.len());
    (end > 0).then(|| Value::String(String::from_utf8_lossy(&r[..end]).into_owned()))
}

fn interpret(base_type: BaseType, bits: u64, semantics: Option<&Semantics>) -> Value {
    let raw = base_type.to_raw(bits);

    let Some(semantics) = semantics else {
        return unscaled(raw);
    };

    match semantics.kind {
        Kind::Coordinate => Value::Coordinate(raw.as_f64() / SEMICIRCLES_PER_DEGREE),
        Kind::Timestamp => Value::Timestamp(Timestamp(bits as u32)),
        Kind::Bool => Value::Bool(bits != 0),
        Kind::Enum(table) => Value::Enum(EnumValue {
            raw: bits,
            name: table.name_of(bits),
        }),
        Kind::Number | Kind::Array if semantics.is_identity() => unscaled(raw),
        Kind::Number | Kind::Array => {
            Value::Float(raw.as_f64() / semantics.scale - semantics.offset)
        }
    }
}

fn unscaled(raw: Raw) -> Value {
    match raw {
        Raw::UInt(v) => Value::UInt(v),
        Raw::SInt(v) => Value::SInt(v),
        Raw::Float(v) => Value::Float(v),
    }
}

/// Append the bytes of a field of `size` bytes to `out`.
///
/// Absent elements are written as the invalid pattern. Returns `false` if any
/// supplied element could not be represented, and was written as invalid.
pub fn encode(
    base_type: BaseType,
    semantics: Option<&Semantics>,
    value: Option<&Value>,
    size: usize,
    is_le: bool,
    out: &mut Vec<u8>,
) -> bool {
    match (base_type, value) {
        (BaseType::String, Some(Value::String(s))) => {
            encode_string(s, size, out);
            return true;
        }
        (_, Some(Value::Bytes(b))) if b.len() == size => {
            out.extend_from_slice(b);
            return true;
        }
        _ => {}
    }

    let element_size = base_type.size() as usize;
    if size % element_size != 0 {
        out.extend(std::iter::repeat_n(BaseType::Byte.invalid() as u8, size));
        return value.is_none();
    }

    let elements: Vec<Option<&Value>> = match value {
        Some(Value::Array(a)) => a.iter().map(Option::as_ref).collect(),
        v => vec![v],
    };

    let mut is_representable = true;
    for i in 0..size / element_size {
        let element = elements.get(i).copied().flatten();
        let bits = element.and_then(|v| to_bits(base_type, semantics, v));

        is_representable &= element.is_none() || bits.is_some();
        base_type.write_bits(bits.unwrap_or(base_type.invalid()), is_le, out);
    }

    is_representable && elements.len() <= size / element_size
}

fn encode_string(s: &str, size: usize, out: &mut Vec<u8>) {
    // Leave room for the terminator, without splitting a code point.
    let mut end = s.len().min(size.saturating_sub(1));
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    out.extend_from_slice(&s.as_bytes()[..end]);
    out.extend(std::iter::repeat_n(0, size - end));
}

fn to_bits(base_type: BaseType, semantics: Option<&Semantics>, value: &Value) -> Option<u64> {
    let raw = match *value {
        Value::Coordinate(deg) => Raw::Float((deg * SEMICIRCLES_PER_DEGREE).round()),
        Value::Timestamp(t) => Raw::UInt(t.0 as u64),
        Value::Bool(b) => Raw::UInt(b as u64),
        Value::Enum(e) => Raw::UInt(e.raw),
        Value::UInt(v) => scaled(Raw::UInt(v), semantics),
        Value::SInt(v) => scaled(Raw::SInt(v), semantics),
        Value::Float(v) => scaled(Raw::Float(v), semantics),
        Value::String(ref s) => match semantics {
            Some(Semantics {
                kind: Kind::Enum(table),
                ..
            }) => Raw::UInt(table.value_of(s)?),
            _ => return None,
        },
        Value::Bytes(_) | Value::Array(_) => return None,
    };

    base_type.from_raw(raw)
}

fn scaled(raw: Raw, semantics: Option<&Semantics>) -> Raw {
    match semantics {
        Some(s) if !s.is_identity() => Raw::Float(((raw.as_f64() + s.offset) * s.scale).round()),
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::SLEEP_LEVEL;

    fn scaled_by(scale: f64, offset: f64) -> Semantics {
        Semantics {
            scale,
            offset,
            kind: Kind::Number,
        }
    }

    #[test]
    fn scale_and_offset() {
        let altitude = scaled_by(5.0, 500.0);
        let value = decode(BaseType::UInt16, Some(&altitude), &[0xC4, 0x09], true);
        assert_eq!(value, Some(Value::Float(0.0)));

        let mut out = vec![];
        assert!(encode(
            BaseType::UInt16,
            Some(&altitude),
            Some(&Value::Float(12.4)),
            2,
            true,
            &mut out
        ));
        assert_eq!(u16::from_le_bytes([out[0], out[1]]), 2562);
    }

    #[test]
    fn identity_scale_keeps_integers() {
        let value = decode(BaseType::SInt8, Some(&scaled_by(1.0, 0.0)), &[0xFB], true);
        assert_eq!(value, Some(Value::SInt(-5)));
    }

    #[test]
    fn invalid_elements_are_absent() {
        assert_eq!(decode(BaseType::UInt32Z, None, &[0, 0, 0, 0], true), None);
        assert_eq!(decode(BaseType::SInt16, None, &[0xFF, 0x7F], true), None);
        assert_eq!(
            decode(BaseType::UInt8, None, &[1, 0xFF], true),
            Some(Value::Array(vec![Some(Value::UInt(1)), None]))
        );
        assert_eq!(decode(BaseType::UInt8, None, &[0xFF, 0xFF], true), None);
    }

    #[test]
    fn semantic_kinds() {
        let coordinate = Semantics {
            scale: 1.0,
            offset: 0.0,
            kind: Kind::Coordinate,
        };
        let bytes = (1i32 << 30).to_le_bytes();
        assert_eq!(
            decode(BaseType::SInt32, Some(&coordinate), &bytes, true),
            Some(Value::Coordinate(90.0))
        );

        let level = Semantics {
            scale: 1.0,
            offset: 0.0,
            kind: Kind::Enum(&SLEEP_LEVEL),
        };
        assert_eq!(
            decode(BaseType::Enum, Some(&level), &[3], true),
            Some(Value::Enum(EnumValue {
                raw: 3,
                name: Some("deep"),
            }))
        );
    }

    #[test]
    fn strings_and_bytes() {
        assert_eq!(
            decode(BaseType::String, None, b"abc\0\0", true),
            Some(Value::String("abc".into()))
        );
        assert_eq!(decode(BaseType::String, None, b"\0\0", true), None);

        // A size that is not a multiple of the element size.
        assert_eq!(
            decode(BaseType::UInt16, None, &[1, 2, 3], true),
            Some(Value::Bytes(vec![1, 2, 3]))
        );

        let mut out = vec![];
        encode(
            BaseType::String,
            None,
            Some(&Value::String("hello".into())),
            4,
            true,
            &mut out,
        );
        assert_eq!(out, b"hel\0");
    }

    #[test]
    fn enum_names_encode_to_their_value() {
        let level = Semantics {
            scale: 1.0,
            offset: 0.0,
            kind: Kind::Enum(&SLEEP_LEVEL),
        };

        let mut out = vec![];
        let value = Value::String("rem".into());
        assert!(encode(BaseType::Enum, Some(&level), Some(&value), 1, true, &mut out));
        assert_eq!(out, [4]);
    }

    #[test]
    fn unrepresentable_values_become_invalid() {
        let mut out = vec![];
        let is_representable = encode(
            BaseType::UInt8,
            None,
            Some(&Value::SInt(-1)),
            1,
            true,
            &mut out,
        );
        assert!(!is_representable);
        assert_eq!(out, [0xFF]);
    }

    #[test]
    fn arrays_are_padded_with_invalid() {
        let mut out = vec![];
        let value = Value::Array(vec![Some(Value::UInt(7))]);
        assert!(encode(BaseType::UInt16, None, Some(&value), 4, false, &mut out));
        assert_eq!(out, [0x00, 0x07, 0xFF, 0xFF]);
    }
}
