//! Decoded field values.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between the Unix epoch and the format epoch, 1989-12-31T00:00:00Z.
pub const EPOCH_OFFSET: u32 = 631_065_600;

/// A timestamp in seconds since the format epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u32);

impl Timestamp {
    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn unix_seconds(self) -> i64 {
        self.0 as i64 + EPOCH_OFFSET as i64
    }

    /// Convert a Unix timestamp, if it is representable.
    pub fn from_unix_seconds(seconds: i64) -> Option<Self> {
        seconds
            .checked_sub(EPOCH_OFFSET as i64)
            .and_then(|s| u32::try_from(s).ok())
            .map(Self)
    }

    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.unix_seconds() as u64)
    }
}

/// A raw enumerated value, with its name if the catalog knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub raw: u64,
    pub name: Option<&'static str>,
}

/// A physical field value.
///
/// Absent values (every element set to its base type's invalid pattern) are
/// represented by `None` wherever a value is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    UInt(u64),
    SInt(i64),
    /// A scaled value, or an element of a float base type.
    Float(f64),
    Bool(bool),
    String(String),
    /// Raw bytes, for byte arrays and fields without a known layout.
    Bytes(Vec<u8>),
    Timestamp(Timestamp),
    /// Degrees, converted from semicircles.
    Coordinate(f64),
    Enum(EnumValue),
    /// Elements of an array field; invalid elements are `None`.
    Array(Vec<Option<Value>>),
}

impl Value {
    /// The value as a float, for numeric values.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::UInt(v) => Some(v as f64),
            Self::SInt(v) => Some(v as f64),
            Self::Float(v) | Self::Coordinate(v) => Some(v),
            Self::Timestamp(t) => Some(t.0 as f64),
            Self::Enum(e) => Some(e.raw as f64),
            Self::Bool(b) => Some(b as u8 as f64),
            _ => None,
        }
    }

    /// The value as an unsigned integer, for integral values.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt(v) => Some(v),
            Self::SInt(v) => u64::try_from(v).ok(),
            Self::Timestamp(t) => Some(t.0 as u64),
            Self::Enum(e) => Some(e.raw),
            Self::Bool(b) => Some(b as u64),
            _ => None,
        }
    }

    /// The value as a signed integer, for integral values.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::SInt(v) => Some(v),
            _ => self.as_u64().and_then(|v| i64::try_from(v).ok()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Enum(EnumValue { name, .. }) => *name,
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Option<Value>]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(v) => write!(f, "{v}"),
            Self::SInt(v) => write!(f, "{v}"),
            Self::Float(v) | Self::Coordinate(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Timestamp(t) => write!(f, "@{}", t.0),
            Self::Enum(EnumValue {
                name: Some(name), ..
            }) => f.write_str(name),
            Self::Enum(EnumValue { raw, .. }) => write!(f, "{raw}"),
            Self::Array(a) => {
                f.write_str("[")?;
                for (i, v) in a.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match v {
                        Some(v) => write!(f, "{v}")?,
                        None => f.write_str("-")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! from_primitive {
    ($variant:ident: $($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::$variant(v.into())
            }
        })*
    };
}

from_primitive!(UInt: u8, u16, u32, u64);
from_primitive!(SInt: i8, i16, i32, i64);
from_primitive!(Float: f32, f64);
from_primitive!(Bool: bool);
from_primitive!(String: &str, String);
from_primitive!(Timestamp: Timestamp);
from_primitive!(Enum: EnumValue);

/// Conversion from a decoded value into a plain Rust type.
///
/// Used by derived [`FromRecord`](crate::avec::FromRecord) implementations.
pub trait FromValue: Sized {
    /// Convert, returning `None` if the value has an incompatible type or
    /// lies outside the target's range.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value_int {
    ($($t:ty),*) => {
        $(impl FromValue for $t {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::SInt(v) => Self::try_from(*v).ok(),
                    v => v.as_u64().and_then(|v| Self::try_from(v).ok()),
                }
            }
        })*
    };
}

from_value_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|v| v as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            v => v.as_u64().map(|v| v != 0),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for Timestamp {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Timestamp(t) => Some(*t),
            Value::UInt(v) => u32::try_from(*v).ok().map(Timestamp),
            _ => None,
        }
    }
}

impl FromValue for EnumValue {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Enum(e) => Some(*e),
            Value::UInt(raw) => Some(EnumValue {
                raw: *raw,
                name: None,
            }),
            _ => None,
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// Collects the valid elements of an array, the bytes of a byte field, or a
/// lone value.
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(a) => Some(a.iter().flatten().filter_map(T::from_value).collect()),
            Value::Bytes(b) => Some(
                b.iter()
                    .filter_map(|b| T::from_value(&Value::UInt(*b as u64)))
                    .collect(),
            ),
            v => T::from_value(v).map(|v| vec![v]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_epoch() {
        let t = Timestamp(0);
        assert_eq!(t.unix_seconds(), 631_065_600);
        assert_eq!(Timestamp::from_unix_seconds(631_065_610), Some(Timestamp(10)));
        assert_eq!(Timestamp::from_unix_seconds(0), None);
        assert_eq!(Timestamp::from_unix_seconds(i64::MIN), None);
        assert_eq!(Timestamp::from_unix_seconds(i64::MAX), None);
    }

    #[test]
    fn integer_conversion_checks_range() {
        assert_eq!(u8::from_value(&Value::UInt(255)), Some(255));
        assert_eq!(u8::from_value(&Value::UInt(256)), None);
        assert_eq!(i8::from_value(&Value::SInt(-3)), Some(-3));
        assert_eq!(u32::from_value(&Value::Timestamp(Timestamp(7))), Some(7));
        assert_eq!(u8::from_value(&Value::Float(1.5)), None);
    }

    #[test]
    fn vectors_collect_valid_elements() {
        let value = Value::Array(vec![Some(Value::UInt(1)), None, Some(Value::UInt(3))]);
        assert_eq!(Vec::<u16>::from_value(&value), Some(vec![1, 3]));
        assert_eq!(
            Vec::<u8>::from_value(&Value::Bytes(vec![9, 8])),
            Some(vec![9, 8])
        );
    }

    #[test]
    fn display() {
        let value = Value::Array(vec![Some(Value::Float(1.5)), None]);
        assert_eq!(value.to_string(), "[1.5, -]");
        let value = Value::Enum(EnumValue {
            raw: 4,
            name: Some("rem"),
        });
        assert_eq!(value.to_string(), "rem");
    }
}
