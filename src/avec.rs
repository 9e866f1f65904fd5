//! Convenience interfaces for common decoding and encoding patterns.
//!
//! The functions in this module decode whole documents into a [`FitFile`],
//! an ordered list of records with their definitions. Records can be
//! inspected by field name or number, published to the [`FromRecords`] and
//! [`FromRecord`] traits, or encoded back to bytes.
//!
//! In many cases (when records are of a known shape), these traits can be
//! derived. See the [`FromRecords`](macro@FromRecords) and
//! [`FromRecord`](macro@FromRecord) macros for details.

use thiserror::Error;

use crate::profile::Catalog;
use crate::sans::header::DocumentHeaderError;
use crate::value::{Timestamp, Value};

pub mod builder;
pub mod definition;
pub mod developer;
pub mod field;
pub mod file;
pub mod reader;
pub mod registry;
pub mod slice;
pub mod writer;

pub use builder::{Builder, SyntheticRecord};
pub use file::{DefinitionId, FitFile, Record, RecordData};
pub use reader::decode as decode_reader;
pub use slice::{decode as decode_slice, decode_chained};

/// Errors occurring while decoding or building documents.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the document.
    #[error("Unexpectedly reached the end of the document.")]
    EndOfSlice,
    /// Calculated and found CRC values do not match.
    #[error("Calculated ({calculated}) and found ({found}) CRC values do not match.")]
    CyclicRedundancyCheck { found: u16, calculated: u16 },
    /// Incorrect file header.
    #[error("Incorrect file header: {0}")]
    Header(#[from] DocumentHeaderError),
    /// A definition record declared an unknown base type.
    #[error("Unknown base type ({0:#04x}).")]
    UnknownBaseType(u8),
    /// A compressed timestamp header preceded every absolute timestamp.
    #[error("Found a compressed timestamp before any reference timestamp.")]
    MissingReferenceTimestamp,
    /// The catalog holds no field of this name for the message.
    #[error("Message {message} has no field named {name:?}.")]
    UnknownField { message: String, name: String },
}

/// Broad categories of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or truncated bytes.
    Format,
    /// A check value does not match.
    Integrity,
    /// Well-formed bytes violating the record protocol.
    Protocol,
    /// A field name the catalog does not know, when building a record.
    UnknownField,
    /// The underlying reader failed.
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::CyclicRedundancyCheck { .. }
            | Self::Header(DocumentHeaderError::CyclicRedundancyCheck { .. }) => {
                ErrorKind::Integrity
            }
            Self::EndOfSlice | Self::Header(_) | Self::UnknownBaseType(_) => ErrorKind::Format,
            Self::MissingReferenceTimestamp => ErrorKind::Protocol,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
        }
    }
}

/// Decode a document from a slice, publishing its records to a receiver.
pub fn decode_into<C: Catalog + ?Sized>(
    r: &[u8],
    catalog: &C,
    o: &mut impl FromRecords,
) -> Result<FitFile, Error> {
    let file = decode_slice(r, catalog)?;
    file.publish(o);

    Ok(file)
}

/// Derive [`FromRecords`] for a struct holding a collection of records.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// To collect a single record, add the `record(N)` attribute to an `Option<T>`
/// struct field, where `N` is the global message number and `T` is a type
/// implementing [`FromRecord`] and [`Default`]. Additional records received
/// for the same message number will overwrite earlier ones. To collect
/// multiple occurrences of a record, apply the attribute to a `Vec<T>`
/// instead.
///
/// ```
/// #[derive(Debug, Default, FromRecords)]
/// struct ActivityRecordSet {
///     #[record(0)]
///     file_id: Option<FileId>,
///     #[record(20)]
///     records: Vec<Record>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use cassette_derive::FromRecords;

/// Produce record receivers for a document.
///
/// See the [`FromRecords`](macro@FromRecords) derive macro for an automatic
/// implementation of this trait.
pub trait FromRecords {
    /// Retrieve a receiver for a record, if one exists.
    fn add_record(&mut self, id: u16) -> Option<&mut dyn FromRecord>;
}

/// Derive [`FromRecord`] for a struct representing a single record.
///
/// _Requires Cargo feature `derive`._
///
/// # Examples
///
/// To receive a field value, add the `field(N)` attribute to an `Option<T>`
/// struct field, where `N` is the field number and `T` implements
/// [`FromValue`](crate::value::FromValue). Values are scaled before they are
/// received, so a scaled field is best held as an `f64`. Values that cannot
/// be converted to `T` are skipped.
///
/// To receive the resolved timestamp of the record (either its `timestamp`
/// field or a compressed timestamp header), supply `time` in place of a field
/// number.
///
/// ```
/// #[derive(Debug, Default, FromRecord)]
/// struct Record {
///     #[field(time)]
///     time: Option<Timestamp>,
///     #[field(0)]
///     position_lat: Option<f64>,
///     #[field(1)]
///     position_long: Option<f64>,
///     #[field(2)]
///     altitude: Option<f64>,
/// }
/// ```
///
/// To accumulate values or convert them into arbitrary types, supply an
/// accumulator closure. Since the value type cannot be inferred, the second
/// argument must be typed.
///
/// ```
/// #[derive(Debug, Default, FromRecord)]
/// struct Hrv {
///     #[field(0, |v, t: Vec<f64>| v.get_or_insert_default().extend(t))]
///     intervals: Option<Vec<f64>>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use cassette_derive::FromRecord;

/// Receive field values for a record.
///
/// Absent values are never published. The default implementation of each
/// method ignores received values.
///
/// See the [`FromRecord`](macro@FromRecord) derive macro for an automatic
/// implementation of this trait.
#[allow(unused_variables)]
pub trait FromRecord {
    /// Add the resolved timestamp of the record.
    fn add_timestamp(&mut self, timestamp: Timestamp) {}
    /// Add the value of a field to the record.
    fn add_value(&mut self, field: u8, value: &Value) {}
    /// Add the value of a resolved developer field to the record.
    fn add_developer_value(&mut self, name: &str, value: &Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_check_failures_are_integrity_errors() {
        let err = Error::from(DocumentHeaderError::CyclicRedundancyCheck {
            found: 1,
            calculated: 2,
        });
        assert_eq!(err.kind(), ErrorKind::Integrity);
        assert_eq!(
            Error::from(DocumentHeaderError::NotFitData).kind(),
            ErrorKind::Format
        );
    }
}
