//! Resolution of developer fields declared by `field_description` records.

use std::collections::HashMap;

use tracing::debug;

use crate::profile::FIELD_DESCRIPTION;
use crate::sans::data::BaseType;

use super::file::Record;

/// A developer field as declared by a `field_description` record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperFieldDescriptor {
    pub developer_data_index: u8,
    pub field_number: u8,
    pub base_type: BaseType,
    pub name: Option<String>,
    pub scale: f64,
    pub offset: f64,
    pub units: Option<String>,
    /// The global message and field this field stands in for, if any.
    pub native_message: Option<u16>,
    pub native_field: Option<u8>,
}

impl DeveloperFieldDescriptor {
    /// Extract a descriptor from a `field_description` record.
    ///
    /// Fields are read by number, so this works with any catalog. Returns
    /// `None` if the developer data index or field number is missing.
    pub fn from_record(record: &Record<'_>) -> Option<Self> {
        let uint = |n| record.get_by_number(n).and_then(|v| v.as_u64());
        let string = |n| {
            record
                .get_by_number(n)
                .and_then(|v| v.as_str().map(str::to_owned))
        };

        Some(Self {
            developer_data_index: u8::try_from(uint(0)?).ok()?,
            field_number: u8::try_from(uint(1)?).ok()?,
            base_type: uint(2)
                .and_then(|id| u8::try_from(id).ok())
                .and_then(BaseType::from_id)
                .unwrap_or(BaseType::Byte),
            name: string(3),
            // A zero scale would divide by zero.
            scale: uint(6).filter(|s| *s != 0).map_or(1.0, |s| s as f64),
            offset: record
                .get_by_number(7)
                .and_then(|v| v.as_i64())
                .map_or(0.0, |o| o as f64),
            units: string(8),
            native_message: uint(14).and_then(|n| u16::try_from(n).ok()),
            native_field: uint(15).and_then(|n| u8::try_from(n).ok()),
        })
    }
}

/// Developer fields declared so far in a document, keyed by developer data
/// index and field number.
#[derive(Debug, Default, Clone)]
pub struct DeveloperFields(HashMap<(u8, u8), DeveloperFieldDescriptor>);

impl DeveloperFields {
    /// Register the declaration carried by a `field_description` record.
    /// Records of other messages are ignored.
    ///
    /// A later declaration of the same field replaces the earlier one.
    pub fn register(&mut self, record: &Record<'_>) {
        if record.global_message() != FIELD_DESCRIPTION {
            return;
        }

        let Some(descriptor) = DeveloperFieldDescriptor::from_record(record) else {
            debug!("Found field description without a developer data index or field number.");
            return;
        };

        let key = (descriptor.developer_data_index, descriptor.field_number);
        if self.0.insert(key, descriptor).is_some() {
            debug!(
                developer_data_index = key.0,
                field_number = key.1,
                "Replaced developer field description."
            );
        }
    }

    pub fn resolve(
        &self,
        developer_data_index: u8,
        field_number: u8,
    ) -> Option<&DeveloperFieldDescriptor> {
        self.0.get(&(developer_data_index, field_number))
    }
}
