//! Schema catalogs mapping global message numbers to known field schemas.
//!
//! A catalog is a read-only table supplied to the decoder and to the record
//! [`Builder`](crate::avec::builder::Builder). Messages and fields missing
//! from a catalog are still decoded, but remain anonymous.
//!
//! With the `profile` feature (default), the crate ships the global profile
//! as [`PROFILE`].

use std::borrow::Cow;

use crate::sans::data::BaseType;

#[cfg(feature = "profile")]
pub mod messages;
pub mod types;

/// Global message number of `file_id`.
pub const FILE_ID: u16 = 0;
/// Global message number of `field_description`, declaring developer fields.
pub const FIELD_DESCRIPTION: u16 = 206;

/// Field number of the absolute `timestamp` field shared by most messages.
pub const TIMESTAMP_FIELD: u8 = 253;

/// The built-in catalog.
///
/// _Requires Cargo feature `profile`._
#[cfg(feature = "profile")]
pub static PROFILE: StaticCatalog = StaticCatalog::new(messages::MESSAGES);

/// Semantic interpretation of a field's elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// A scaled number.
    Number,
    /// A scaled number, always decoded as an array.
    Array,
    /// An angle in semicircles, decoded to degrees.
    Coordinate,
    /// Seconds since the format epoch.
    Timestamp,
    Bool,
    /// A value from a table of named values.
    Enum(&'static EnumTable),
}

/// Named values of an enumerated field.
#[derive(Debug, PartialEq)]
pub struct EnumTable {
    pub name: &'static str,
    pub values: &'static [(u64, &'static str)],
}

impl EnumTable {
    pub fn name_of(&self, raw: u64) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(v, _)| *v == raw)
            .map(|(_, name)| *name)
    }

    pub fn value_of(&self, name: &str) -> Option<u64> {
        self.values
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(v, _)| *v)
    }
}

/// A catalog description of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub number: u8,
    pub name: &'static str,
    pub base_type: BaseType,
    /// Size in bytes of the field when written by the record builder.
    pub size: u8,
    pub scale: f64,
    pub offset: f64,
    pub kind: Kind,
}

impl FieldSchema {
    pub const fn new(number: u8, name: &'static str, base_type: BaseType) -> Self {
        Self {
            number,
            name,
            base_type,
            size: base_type.size(),
            scale: 1.0,
            offset: 0.0,
            kind: Kind::Number,
        }
    }

    pub const fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the scale and offset, where `physical = raw / scale - offset`.
    pub const fn scaled(mut self, scale: f64, offset: f64) -> Self {
        self.scale = scale;
        self.offset = offset;
        self
    }

    pub const fn sized(mut self, size: u8) -> Self {
        self.size = size;
        self
    }
}

/// A catalog description of a message.
#[derive(Debug, PartialEq)]
pub struct MessageSchema {
    pub number: u16,
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

impl MessageSchema {
    pub fn field(&self, number: u8) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.number == number)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The result of looking up a global message number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogEntry<'a> {
    Known(&'a MessageSchema),
    /// A message missing from the catalog.
    Unknown(u16),
}

impl CatalogEntry<'_> {
    pub fn number(&self) -> u16 {
        match self {
            Self::Known(m) => m.number,
            Self::Unknown(n) => *n,
        }
    }

    /// The message name, synthesized from the number for unknown messages.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Known(m) => Cow::Borrowed(m.name),
            Self::Unknown(n) => Cow::Owned(unknown_name(*n)),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn field(&self, number: u8) -> Option<FieldSchema> {
        match self {
            Self::Known(m) => m.field(number).copied(),
            Self::Unknown(_) => None,
        }
    }

    pub fn field_by_name(&self, name: &str) -> Option<FieldSchema> {
        match self {
            Self::Known(m) => m.field_by_name(name).copied(),
            Self::Unknown(_) => None,
        }
    }
}

pub(crate) fn unknown_name(number: u16) -> String {
    format!("unknown_{number}")
}

/// A table of message schemas.
pub trait Catalog {
    /// Retrieve the schema of a message, if known.
    fn message(&self, number: u16) -> Option<&MessageSchema>;

    /// Look up a message. Never fails: unknown numbers resolve to
    /// [`CatalogEntry::Unknown`].
    fn lookup(&self, number: u16) -> CatalogEntry<'_> {
        match self.message(number) {
            Some(m) => CatalogEntry::Known(m),
            None => CatalogEntry::Unknown(number),
        }
    }
}

/// A catalog over a static slice of messages, sorted by number.
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog {
    messages: &'static [MessageSchema],
}

impl StaticCatalog {
    /// Wrap a slice of messages, which must be sorted by number.
    pub const fn new(messages: &'static [MessageSchema]) -> Self {
        Self { messages }
    }

    /// A catalog without any messages.
    pub const fn empty() -> Self {
        Self { messages: &[] }
    }

    pub fn messages(&self) -> &'static [MessageSchema] {
        self.messages
    }
}

impl Catalog for StaticCatalog {
    fn message(&self, number: u16) -> Option<&MessageSchema> {
        self.messages
            .binary_search_by_key(&number, |m| m.number)
            .ok()
            .map(|i| &self.messages[i])
    }
}

#[cfg(all(test, feature = "profile"))]
mod tests {
    use super::*;

    #[test]
    fn profile_is_sorted() {
        let messages = PROFILE.messages();
        assert!(messages.windows(2).all(|w| w[0].number < w[1].number));
    }

    #[test]
    fn profile_field_numbers_are_unique() {
        for message in PROFILE.messages() {
            for (i, field) in message.fields.iter().enumerate() {
                assert!(
                    message.fields[i + 1..]
                        .iter()
                        .all(|f| f.number != field.number),
                    "{} repeats field {}",
                    message.name,
                    field.number
                );
            }
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        let entry = PROFILE.lookup(FILE_ID);
        assert_eq!(entry.name(), "file_id");
        assert_eq!(entry.field(3).map(|f| f.name), Some("serial_number"));
        assert_eq!(entry.field(200), None);

        let entry = PROFILE.lookup(0xFF00);
        assert!(!entry.is_known());
        assert_eq!(entry.name(), "unknown_65280");
        assert_eq!(entry.field_by_name("serial_number"), None);
    }
}
