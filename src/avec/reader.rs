//! Reader-based decoder implementation.

use std::io::{ErrorKind, Read};

use crate::profile::Catalog;
use crate::sans::{
    check::compute_crc,
    header::{DocumentHeader, SHORT_HEADER_SIZE},
};

use super::Error;
use super::file::FitFile;
use super::slice::decode_records;

/// Decode a document from a reader.
///
/// Only the bytes of a single document are read, so documents concatenated
/// in a stream can be decoded by calling this function repeatedly.
///
/// This method is also re-exported as `cassette::avec::decode_reader`.
pub fn decode<C: Catalog + ?Sized>(r: &mut impl Read, catalog: &C) -> Result<FitFile, Error> {
    let c = &mut 0; // Cyclic redundancy check accumulator value.

    let mut bytes = take(r, SHORT_HEADER_SIZE as usize, c)?;
    let header_size = bytes[0];

    if header_size > SHORT_HEADER_SIZE {
        bytes.extend(take(r, (header_size - SHORT_HEADER_SIZE) as usize, c)?);
    }

    let header = DocumentHeader::parse(&bytes)?;
    let records = take(r, header.data_size as usize, c)?;

    let calculated = *c;
    let found = u16::from_le_bytes(take_check(r)?);

    if found != calculated {
        Err(Error::CyclicRedundancyCheck { found, calculated })?;
    }

    decode_records(header, &records, catalog)
}

/// Take an exact number of bytes from a reader, accumulating a CRC value.
fn take(r: &mut impl Read, n: usize, c: &mut u16) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    r.by_ref().take(n as u64).read_to_end(&mut buf)?;

    if buf.len() < n {
        Err(Error::EndOfSlice)?;
    }

    *c = compute_crc(*c, &buf);

    Ok(buf)
}

fn take_check(r: &mut impl Read) -> Result<[u8; 2], Error> {
    let mut buf = [0; 2];
    r.read_exact(&mut buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => Error::EndOfSlice,
        _ => Error::Io(err),
    })?;

    Ok(buf)
}
