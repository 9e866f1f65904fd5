//! Synthesis of records from field names and physical values.

use tracing::warn;

use crate::profile::{Catalog, CatalogEntry, FieldSchema, Kind};
use crate::sans::data::BaseType;
use crate::value::Value;

use super::Error;
use super::definition::{FieldDefinition, RecordDefinition};
use super::field::{self, Semantics};

/// A definition and the bytes of a single data record laid out by it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticRecord {
    pub definition: RecordDefinition,
    pub values: Vec<u8>,
}

/// Builds a single record of a catalog message.
///
/// ```
/// let record = Builder::new(&PROFILE, FILE_ID)
///     .field("type", [Value::from(4u8)])?
///     .field("serial_number", [1u32])?
///     .build();
///
/// let mut file = FitFile::new();
/// file.push(record);
/// ```
#[derive(Debug)]
pub struct Builder<'c> {
    message: CatalogEntry<'c>,
    local_message: u8,
    fields: Vec<(FieldSchema, Vec<Value>)>,
}

impl<'c> Builder<'c> {
    pub fn new<C: Catalog + ?Sized>(catalog: &'c C, global_message: u16) -> Self {
        Self {
            message: catalog.lookup(global_message),
            local_message: 0,
            fields: Vec::new(),
        }
    }

    /// Set the local message number of the definition, `0` by default.
    pub fn local_message(mut self, local_message: u8) -> Self {
        self.local_message = local_message & 0x0F;
        self
    }

    /// Set the values of a field, replacing any set earlier.
    ///
    /// Several values make an array field.
    pub fn field<V: Into<Value>>(
        mut self,
        name: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, Error> {
        let schema = self
            .message
            .field_by_name(name)
            .ok_or_else(|| Error::UnknownField {
                message: self.message.name().into_owned(),
                name: name.to_owned(),
            })?;

        let values = values.into_iter().map(Into::into).collect();

        match self.fields.iter_mut().find(|(s, _)| s.number == schema.number) {
            Some((_, v)) => *v = values,
            None => self.fields.push((schema, values)),
        }

        Ok(self)
    }

    /// Set a single value of a field.
    pub fn value(self, name: &str, value: impl Into<Value>) -> Result<Self, Error> {
        self.field(name, [value.into()])
    }

    pub fn build(self) -> SyntheticRecord {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut values = Vec::new();

        for (schema, elements) in self.fields {
            let size = field_size(&schema, &elements);

            let value = match elements.len() {
                0 => None,
                1 if schema.kind != Kind::Array => elements.into_iter().next(),
                _ => Some(Value::Array(elements.into_iter().map(Some).collect())),
            };

            let is_representable = field::encode(
                schema.base_type,
                Some(&Semantics::from(&schema)),
                value.as_ref(),
                size as usize,
                true,
                &mut values,
            );

            if !is_representable {
                warn!(
                    global_message = self.message.number(),
                    field = schema.name,
                    "Wrote an unrepresentable value as invalid."
                );
            }

            fields.push(FieldDefinition {
                number: schema.number,
                size,
                base_type: schema.base_type,
                schema: Some(schema),
            });
        }

        let definition = RecordDefinition {
            local_message: self.local_message,
            is_little_endian: true,
            global_message: self.message.number(),
            message_name: match self.message {
                CatalogEntry::Known(m) => Some(m.name),
                CatalogEntry::Unknown(_) => None,
            },
            fields,
            developer_fields: Vec::new(),
        };

        SyntheticRecord { definition, values }
    }
}

/// The size of a field holding `values`: one element per value, or for
/// strings, the text and its terminator.
fn field_size(schema: &FieldSchema, values: &[Value]) -> u8 {
    let element_size = schema.base_type.size() as usize;

    let size = match (schema.base_type, values) {
        (BaseType::String, [Value::String(s)]) => (s.len() + 1).max(schema.size as usize),
        (_, [Value::Bytes(b)]) => b.len(),
        (_, []) => schema.size as usize,
        (_, values) => values.len() * element_size,
    };

    // Whole elements only.
    let max = u8::MAX as usize / element_size * element_size;
    size.clamp(element_size, max) as u8
}

#[cfg(all(test, feature = "profile"))]
mod tests {
    use super::*;
    use crate::profile::{FILE_ID, PROFILE};

    #[test]
    fn unknown_field_names_are_rejected() {
        let result = Builder::new(&PROFILE, FILE_ID).value("colour", 3u8);

        match result {
            Err(Error::UnknownField { message, name }) => {
                assert_eq!(message, "file_id");
                assert_eq!(name, "colour");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sizes_follow_values() {
        let record = Builder::new(&PROFILE, 78)
            .field("time", [0.5, 0.75, 1.0])
            .unwrap()
            .build();

        assert_eq!(record.definition.fields[0].size, 6);
        assert_eq!(record.values, [0xF4, 0x01, 0xEE, 0x02, 0xE8, 0x03]);
    }

    #[test]
    fn strings_fill_at_least_the_catalog_size() {
        let record = Builder::new(&PROFILE, FILE_ID)
            .value("product_name", "Edge")
            .unwrap()
            .build();

        assert_eq!(record.definition.fields[0].size, 20);
        assert_eq!(&record.values[..5], b"Edge\0");
    }
}
