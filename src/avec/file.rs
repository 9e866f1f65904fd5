//! Decoded documents.

use std::borrow::Cow;

use crate::profile::{FILE_ID, TIMESTAMP_FIELD};
use crate::sans::header::DocumentHeader;
use crate::value::{FromValue, Timestamp, Value};

use super::builder::SyntheticRecord;
use super::definition::{DeveloperFieldDefinition, FieldDefinition, RecordDefinition};
use super::{FromRecord, FromRecords};

/// Index of a definition within a [`FitFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefinitionId(pub(crate) usize);

/// The bytes of a data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordData {
    pub(crate) definition: DefinitionId,
    /// Field bytes, laid out as declared by the definition.
    pub(crate) values: Vec<u8>,
    /// Offset carried by a compressed timestamp header.
    pub(crate) time_offset: Option<u8>,
    /// Timestamp resolved from a compressed timestamp header.
    pub(crate) timestamp: Option<u32>,
}

impl RecordData {
    pub fn definition_id(&self) -> DefinitionId {
        self.definition
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn time_offset(&self) -> Option<u8> {
        self.time_offset
    }
}

/// A document: its header and an ordered list of records.
///
/// Records refer to definitions by [`DefinitionId`]; several records may
/// share a definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitFile {
    header: DocumentHeader,
    definitions: Vec<RecordDefinition>,
    records: Vec<RecordData>,
}

impl FitFile {
    /// Create an empty document with the default header.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(header: DocumentHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// The document header. Its data size is only meaningful for decoded
    /// documents; encoding computes a fresh one.
    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut DocumentHeader {
        &mut self.header
    }

    pub fn definitions(&self) -> &[RecordDefinition] {
        &self.definitions
    }

    pub fn definition(&self, id: DefinitionId) -> Option<&RecordDefinition> {
        self.definitions.get(id.0)
    }

    pub(crate) fn add_definition(&mut self, definition: RecordDefinition) -> DefinitionId {
        self.definitions.push(definition);
        DefinitionId(self.definitions.len() - 1)
    }

    pub(crate) fn add_record(&mut self, data: RecordData) -> Record<'_> {
        self.records.push(data);
        let data = &self.records[self.records.len() - 1];

        Record {
            definition: &self.definitions[data.definition.0],
            data,
        }
    }

    /// Append a synthesized record.
    ///
    /// The definition is shared with the most recent one if they are equal,
    /// so consecutive records of the same shape are encoded with a single
    /// definition record.
    pub fn push(&mut self, record: SyntheticRecord) -> DefinitionId {
        let SyntheticRecord { definition, values } = record;

        let id = match self.definitions.last() {
            Some(last) if *last == definition => DefinitionId(self.definitions.len() - 1),
            _ => self.add_definition(definition),
        };

        self.records.push(RecordData {
            definition: id,
            values,
            time_offset: None,
            timestamp: None,
        });

        id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.records.get(index).map(|data| self.view(data))
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = Record<'_>> {
        self.records.iter().map(|data| self.view(data))
    }

    /// Records of a single global message number, in document order.
    pub fn records_by_message(&self, global_message: u16) -> impl Iterator<Item = Record<'_>> {
        self.records()
            .filter(move |r| r.global_message() == global_message)
    }

    /// The `type` of the first `file_id` record.
    pub fn file_type(&self) -> Option<Value> {
        self.records_by_message(FILE_ID)
            .next()
            .and_then(|r| r.get_by_number(0))
    }

    pub(crate) fn raw_records(&self) -> &[RecordData] {
        &self.records
    }

    fn view<'a>(&'a self, data: &'a RecordData) -> Record<'a> {
        Record {
            definition: &self.definitions[data.definition.0],
            data,
        }
    }

    /// Publish every record to a receiver.
    pub fn publish(&self, o: &mut impl FromRecords) {
        for record in self.records() {
            if let Some(o) = o.add_record(record.global_message()) {
                record.publish(o);
            }
        }
    }
}

/// A data record together with its definition.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    definition: &'a RecordDefinition,
    data: &'a RecordData,
}

impl<'a> Record<'a> {
    pub fn definition(&self) -> &'a RecordDefinition {
        self.definition
    }

    pub fn data(&self) -> &'a RecordData {
        self.data
    }

    pub fn global_message(&self) -> u16 {
        self.definition.global_message
    }

    /// The message name, synthesized from the number for unknown messages.
    pub fn name(&self) -> Cow<'static, str> {
        self.definition.name()
    }

    fn field_bytes(&self) -> impl Iterator<Item = (&'a FieldDefinition, &'a [u8])> + use<'a> {
        let values = self.data.values.as_slice();

        self.definition.fields.iter().scan(0, move |i, field| {
            let s = *i;
            *i += field.size as usize;
            Some((field, values.get(s..*i).unwrap_or_default()))
        })
    }

    fn developer_field_bytes(
        &self,
    ) -> impl Iterator<Item = (&'a DeveloperFieldDefinition, &'a [u8])> + use<'a> {
        let values = self.data.values.as_slice();
        let start = self.definition.fields_size();

        self.definition
            .developer_fields
            .iter()
            .scan(start, move |i, field| {
                let s = *i;
                *i += field.size as usize;
                Some((field, values.get(s..*i).unwrap_or_default()))
            })
    }

    /// Decode every field, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a FieldDefinition, Option<Value>)> + use<'a> {
        let is_le = self.definition.is_little_endian;

        self.field_bytes()
            .map(move |(field, r)| (field, field.decode(r, is_le)))
    }

    /// Decode every developer field, in declared order.
    pub fn developer_fields(
        &self,
    ) -> impl Iterator<Item = (&'a DeveloperFieldDefinition, Option<Value>)> + use<'a> {
        let is_le = self.definition.is_little_endian;

        self.developer_field_bytes()
            .map(move |(field, r)| (field, field.decode(r, is_le)))
    }

    pub fn get_by_number(&self, number: u8) -> Option<Value> {
        let is_le = self.definition.is_little_endian;

        self.field_bytes()
            .find(|(field, _)| field.number == number)
            .and_then(|(field, r)| field.decode(r, is_le))
    }

    /// Look up a field by catalog name, then a developer field by its
    /// declared name.
    pub fn get_by_name(&self, name: &str) -> Option<Value> {
        let is_le = self.definition.is_little_endian;

        if let Some((field, r)) = self
            .field_bytes()
            .find(|(field, _)| field.name() == Some(name))
        {
            return field.decode(r, is_le);
        }

        self.developer_field_bytes()
            .find(|(field, _)| field.name() == Some(name))
            .and_then(|(field, r)| field.decode(r, is_le))
    }

    pub fn get_developer(&self, developer_data_index: u8, number: u8) -> Option<Value> {
        let is_le = self.definition.is_little_endian;

        self.developer_field_bytes()
            .find(|(field, _)| {
                field.developer_data_index == developer_data_index && field.number == number
            })
            .and_then(|(field, r)| field.decode(r, is_le))
    }

    /// The value of the `timestamp` field, if present and valid.
    pub(crate) fn timestamp_field(&self) -> Option<Timestamp> {
        self.get_by_number(TIMESTAMP_FIELD)
            .and_then(|v| Timestamp::from_value(&v))
    }

    /// The timestamp of the record: its `timestamp` field, or the timestamp
    /// resolved from a compressed timestamp header.
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp_field()
            .or(self.data.timestamp.map(Timestamp))
    }

    fn publish(&self, o: &mut dyn FromRecord) {
        if let Some(timestamp) = self.timestamp() {
            o.add_timestamp(timestamp);
        }

        for (field, value) in self.fields() {
            if let Some(value) = value {
                o.add_value(field.number, &value);
            }
        }

        for (field, value) in self.developer_fields() {
            if let (Some(name), Some(value)) = (field.name(), value) {
                o.add_developer_value(name, &value);
            }
        }
    }
}
