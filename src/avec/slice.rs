//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use tracing::{debug, trace, warn};

use crate::profile::Catalog;
use crate::sans::{
    check::compute_crc,
    header::{DocumentHeader, decode_record_header},
    time::ReferenceTime,
};

use super::Error;
use super::definition::RecordDefinition;
use super::developer::DeveloperFields;
use super::file::{FitFile, RecordData};
use super::registry::LocalRegistry;

/// Decode a document from a slice.
///
/// Bytes following the document's check value are ignored with a warning.
/// See [`decode_chained`] for slices holding several documents.
///
/// This method is also re-exported as `cassette::avec::decode_slice`.
pub fn decode<C: Catalog + ?Sized>(r: &[u8], catalog: &C) -> Result<FitFile, Error> {
    let (file, size) = decode_document(r, catalog)?;

    if size < r.len() {
        warn!(
            trailing = r.len() - size,
            "Found bytes after the end of the document."
        );
    }

    Ok(file)
}

/// Decode every document of a slice holding concatenated documents.
pub fn decode_chained<C: Catalog + ?Sized>(r: &[u8], catalog: &C) -> Result<Vec<FitFile>, Error> {
    let mut files = Vec::new();
    let mut i = 0;

    while i < r.len() {
        let (file, size) = decode_document(&r[i..], catalog)?;
        files.push(file);
        i += size;
    }

    Ok(files)
}

/// Decode a document from the start of a slice, returning it along with its
/// size in bytes.
fn decode_document<C: Catalog + ?Sized>(r: &[u8], catalog: &C) -> Result<(FitFile, usize), Error> {
    let header = DocumentHeader::parse(r)?;

    let start = header.header_size as usize;
    let end = start + header.data_size as usize; // Offset to the end of the record section.

    // Apply the cyclic redundancy check before continuing.
    let found = u16::from_le_bytes(take(r, &mut end.clone())?);
    let calculated = compute_crc(0, r.get(..end).ok_or(Error::EndOfSlice)?);

    if found != calculated {
        Err(Error::CyclicRedundancyCheck { found, calculated })?;
    }

    let file = decode_records(header, &r[start..end], catalog)?;

    Ok((file, end + 2))
}

/// Decode the record section of a document, whose check value has already
/// been verified.
pub(crate) fn decode_records<C: Catalog + ?Sized>(
    header: DocumentHeader,
    r: &[u8],
    catalog: &C,
) -> Result<FitFile, Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    let mut file = FitFile::with_header(header);
    let mut registry = LocalRegistry::default();
    let mut developer = DeveloperFields::default();
    let mut time = ReferenceTime::default();

    while *i < r.len() {
        let [record_header] = take(r, i)?;

        match decode_record_header(record_header) {
            Left(header) => {
                let definition = RecordDefinition::parse(header, r, i, catalog, &developer)?;
                let global_message = definition.global_message;
                let id = file.add_definition(definition);

                if registry.define(header.local_message, id).is_some() {
                    debug!(
                        local_message = header.local_message,
                        global_message, "Redefined local message."
                    );
                }
            }
            Right(header) => {
                let timestamp = match header.time_offset {
                    Some(offset) => Some(
                        time.apply_offset(offset)
                            .ok_or(Error::MissingReferenceTimestamp)?,
                    ),
                    None => None,
                };

                let Some(id) = registry.resolve(header.local_message) else {
                    // Without a layout, the length of the record is unknown.
                    warn!(
                        local_message = header.local_message,
                        offset = *i - 1,
                        "Found data record without a definition, skipping the remaining records."
                    );
                    break;
                };

                let size = file.definition(id).map_or(0, RecordDefinition::data_size);
                let values = take_slice(r, i, size)?.to_vec();

                let record = file.add_record(RecordData {
                    definition: id,
                    values,
                    time_offset: header.time_offset,
                    timestamp,
                });

                if let Some(timestamp) = record.timestamp_field() {
                    time.set(timestamp.0);
                }

                developer.register(&record);

                trace!(
                    global_message = record.global_message(),
                    local_message = header.local_message,
                    "Decoded record."
                );
            }
        }
    }

    Ok(file)
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
pub(crate) fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    take_slice(r, i, N)?
        .try_into()
        .map_err(|_| Error::EndOfSlice)
}

/// Take a number of bytes from an offset in a slice, advancing the offset.
pub(crate) fn take_slice<'a>(r: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8], Error> {
    let s = *i;
    *i += n;

    r.get(s..*i).ok_or(Error::EndOfSlice)
}
