//! Record definitions, pairing declared field layouts with catalog schemas.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::profile::{Catalog, CatalogEntry, FieldSchema, unknown_name};
use crate::sans::data::BaseType;
use crate::sans::definition::{DefinitionMessage, DeveloperFieldHeader, FieldHeader};
use crate::sans::header::DefinitionHeader;
use crate::value::Value;

use super::Error;
use super::developer::{DeveloperFieldDescriptor, DeveloperFields};
use super::field::{self, Semantics};
use super::slice::take;

/// A field as declared by a definition record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub number: u8,
    /// Size of the field in bytes.
    pub size: u8,
    pub base_type: BaseType,
    /// The catalog schema of the field, if known.
    pub schema: Option<FieldSchema>,
}

impl FieldDefinition {
    pub fn name(&self) -> Option<&'static str> {
        self.schema.map(|s| s.name)
    }

    /// Decode the bytes of this field.
    pub fn decode(&self, r: &[u8], is_le: bool) -> Option<Value> {
        let semantics = self.schema.as_ref().map(Semantics::from);
        field::decode(self.base_type, semantics.as_ref(), r, is_le)
    }
}

/// A developer field as declared by a definition record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperFieldDefinition {
    pub number: u8,
    pub size: u8,
    pub developer_data_index: u8,
    /// The matching `field_description`, if one preceded the definition.
    pub descriptor: Option<DeveloperFieldDescriptor>,
}

impl DeveloperFieldDefinition {
    pub fn name(&self) -> Option<&str> {
        self.descriptor.as_ref().and_then(|d| d.name.as_deref())
    }

    /// Decode the bytes of this field. Fields without a descriptor decode
    /// as raw bytes.
    pub fn decode(&self, r: &[u8], is_le: bool) -> Option<Value> {
        match &self.descriptor {
            Some(d) => field::decode(d.base_type, Some(&Semantics::from(d)), r, is_le),
            None => field::decode_bytes(r),
        }
    }
}

/// The layout of data records for a local message number.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDefinition {
    pub local_message: u8,
    pub is_little_endian: bool,
    pub global_message: u16,
    /// The catalog name of the message, if known.
    pub message_name: Option<&'static str>,
    pub fields: Vec<FieldDefinition>,
    pub developer_fields: Vec<DeveloperFieldDefinition>,
}

impl RecordDefinition {
    /// Decode the body of a definition record, starting at offset `i` of `r`
    /// and advancing it.
    ///
    /// Developer fields are resolved against the declarations seen so far.
    pub fn parse<C: Catalog + ?Sized>(
        header: DefinitionHeader,
        r: &[u8],
        i: &mut usize,
        catalog: &C,
        developer: &DeveloperFields,
    ) -> Result<Self, Error> {
        let message = DefinitionMessage::parse(take(r, i)?);
        let global_message = message.global_message();
        let entry = catalog.lookup(global_message);

        if !entry.is_known() {
            debug!(global_message, "Found definition of an unknown message.");
        }

        let fields = (0..message.field_count)
            .map(|_| {
                let FieldHeader {
                    number,
                    size,
                    base_type,
                } = FieldHeader::parse(take(r, i)?);

                Ok(FieldDefinition {
                    number,
                    size,
                    base_type: BaseType::from_id(base_type)
                        .ok_or(Error::UnknownBaseType(base_type))?,
                    schema: entry.field(number),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let developer_fields = if header.has_developer_fields {
            let [count] = take(r, i)?;

            (0..count)
                .map(|_| {
                    let DeveloperFieldHeader {
                        number,
                        size,
                        developer_data_index,
                    } = DeveloperFieldHeader::parse(take(r, i)?);

                    let descriptor = developer.resolve(developer_data_index, number).cloned();
                    if descriptor.is_none() {
                        warn!(
                            global_message,
                            developer_data_index,
                            field_number = number,
                            "Found developer field without a description."
                        );
                    }

                    Ok(DeveloperFieldDefinition {
                        number,
                        size,
                        developer_data_index,
                        descriptor,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            local_message: header.local_message,
            is_little_endian: message.is_little_endian(),
            global_message,
            message_name: match entry {
                CatalogEntry::Known(m) => Some(m.name),
                CatalogEntry::Unknown(_) => None,
            },
            fields,
            developer_fields,
        })
    }

    /// Append the encoded definition record, including its record header.
    pub fn generate(&self, out: &mut Vec<u8>) {
        let header = DefinitionHeader {
            local_message: self.local_message,
            has_developer_fields: !self.developer_fields.is_empty(),
        };
        out.push(header.encode());

        let message = DefinitionMessage::new(
            self.is_little_endian,
            self.global_message,
            self.fields.len() as u8,
        );
        out.extend_from_slice(&message.to_bytes());

        for field in &self.fields {
            let header = FieldHeader {
                number: field.number,
                size: field.size,
                base_type: field.base_type.id(),
            };
            out.extend_from_slice(&header.to_bytes());
        }

        if !self.developer_fields.is_empty() {
            out.push(self.developer_fields.len() as u8);

            for field in &self.developer_fields {
                let header = DeveloperFieldHeader {
                    number: field.number,
                    size: field.size,
                    developer_data_index: field.developer_data_index,
                };
                out.extend_from_slice(&header.to_bytes());
            }
        }
    }

    /// The message name, synthesized from the number for unknown messages.
    pub fn name(&self) -> Cow<'static, str> {
        match self.message_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(unknown_name(self.global_message)),
        }
    }

    pub fn field(&self, number: u8) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Size of the fields of a data record, excluding developer fields.
    pub fn fields_size(&self) -> usize {
        self.fields.iter().map(|f| f.size as usize).sum()
    }

    /// Size of a data record body.
    pub fn data_size(&self) -> usize {
        self.fields_size()
            + self
                .developer_fields
                .iter()
                .map(|f| f.size as usize)
                .sum::<usize>()
    }
}

#[cfg(all(test, feature = "profile"))]
mod tests {
    use super::*;
    use crate::profile::PROFILE;

    const BODY: [u8; 11] = [0, 1, 0x00, 0x14, 2, 253, 4, 0x86, 7, 2, 0x84];

    #[test]
    fn parse_big_endian_record_definition() {
        let header = DefinitionHeader {
            local_message: 2,
            has_developer_fields: false,
        };
        let i = &mut 0;
        let definition =
            RecordDefinition::parse(header, &BODY, i, &PROFILE, &DeveloperFields::default())
                .unwrap();

        assert_eq!(*i, BODY.len());
        assert!(!definition.is_little_endian);
        assert_eq!(definition.global_message, 20);
        assert_eq!(definition.name(), "record");
        assert_eq!(definition.data_size(), 6);
        assert_eq!(definition.field(7).and_then(FieldDefinition::name), Some("power"));

        let mut out = vec![];
        definition.generate(&mut out);
        assert_eq!(out[0], 0x42);
        assert_eq!(out[1..], BODY);
    }

    #[test]
    fn unknown_base_type_is_an_error() {
        let header = DefinitionHeader {
            local_message: 0,
            has_developer_fields: false,
        };
        let body = [0, 0, 0x14, 0x00, 1, 3, 1, 0x1F];
        let result =
            RecordDefinition::parse(header, &body, &mut 0, &PROFILE, &DeveloperFields::default());

        assert!(matches!(result, Err(Error::UnknownBaseType(0x1F))));
    }

    #[test]
    fn truncated_definition_is_an_error() {
        let header = DefinitionHeader {
            local_message: 0,
            has_developer_fields: true,
        };
        let body = [0, 0, 0x14, 0x00, 0];
        let result =
            RecordDefinition::parse(header, &body, &mut 0, &PROFILE, &DeveloperFields::default());

        assert!(matches!(result, Err(Error::EndOfSlice)));
    }
}
