//! Document and record headers.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::{FromBytes, IntoBytes};

use super::check::compute_crc;

/// Filetype marker found at offset 8 of every document header.
pub const MAGIC: [u8; 4] = *b".FIT";

/// Size of a document header without a header check value.
pub const SHORT_HEADER_SIZE: u8 = 12;
/// Size of a document header carrying a header check value.
pub const LONG_HEADER_SIZE: u8 = 14;

/// Protocol version written by default.
pub const PROTOCOL_VERSION: u8 = 16;
/// Profile version written by default.
pub const PROFILE_VERSION: u16 = 21117;

/// An error decoding a document header.
#[derive(Debug, Error)]
pub enum DocumentHeaderError {
    /// Incorrect filetype marker.
    #[error("Incorrect file type marker.")]
    NotFitData,
    /// Header shorter than the minimum header length.
    #[error("Header too short ({0}).")]
    TooShort(u8),
    /// Calculated and found header CRC values do not match.
    #[error("Calculated ({calculated}) and found ({found}) header CRC values do not match.")]
    CyclicRedundancyCheck { found: u16, calculated: u16 },
    /// Fewer bytes available than the header declares.
    #[error("Header truncated.")]
    Truncated,
}

#[repr(C, packed)]
#[derive(FromBytes, IntoBytes)]
struct FileHeader {
    header_size: u8,
    protocol_version: u8,
    profile_version: [u8; 2],
    data_size: [u8; 4],
    data_type: [u8; 4],
}

/// The preamble of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Declared header length in bytes.
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Number of record bytes following the header.
    pub data_size: u32,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self::new(true, PROTOCOL_VERSION, PROFILE_VERSION)
    }
}

impl DocumentHeader {
    /// Create a header for an outgoing document, with an empty record section.
    pub fn new(has_crc: bool, protocol_version: u8, profile_version: u16) -> Self {
        Self {
            header_size: if has_crc {
                LONG_HEADER_SIZE
            } else {
                SHORT_HEADER_SIZE
            },
            protocol_version,
            profile_version,
            data_size: 0,
        }
    }

    /// Whether the header carries its own check value.
    pub fn has_crc(&self) -> bool {
        self.header_size >= LONG_HEADER_SIZE
    }

    /// Decode a document header from the start of `r`.
    ///
    /// A non-zero header check value is verified; zero marks it as unset.
    pub fn parse(r: &[u8]) -> Result<Self, DocumentHeaderError> {
        let bytes: [u8; SHORT_HEADER_SIZE as usize] = r
            .get(..SHORT_HEADER_SIZE as usize)
            .and_then(|b| b.try_into().ok())
            .ok_or(DocumentHeaderError::Truncated)?;

        let FileHeader {
            header_size,
            protocol_version,
            profile_version,
            data_size,
            data_type,
        } = zerocopy::transmute!(bytes);

        if header_size < SHORT_HEADER_SIZE {
            Err(DocumentHeaderError::TooShort(header_size))?;
        }

        if data_type != MAGIC {
            Err(DocumentHeaderError::NotFitData)?;
        }

        if r.len() < header_size as usize {
            Err(DocumentHeaderError::Truncated)?;
        }

        let header = Self {
            header_size,
            protocol_version,
            profile_version: u16::from_le_bytes(profile_version),
            data_size: u32::from_le_bytes(data_size),
        };

        if header.has_crc() {
            let found = u16::from_le_bytes([r[12], r[13]]);
            let calculated = compute_crc(0, &bytes);

            if found != 0 && found != calculated {
                Err(DocumentHeaderError::CyclicRedundancyCheck { found, calculated })?;
            }
        }

        Ok(header)
    }

    /// Append the encoded header to `out`.
    ///
    /// Extended headers are normalised to fourteen bytes.
    pub fn generate(&self, out: &mut Vec<u8>) {
        let header_size = if self.has_crc() {
            LONG_HEADER_SIZE
        } else {
            SHORT_HEADER_SIZE
        };

        let header = FileHeader {
            header_size,
            protocol_version: self.protocol_version,
            profile_version: self.profile_version.to_le_bytes(),
            data_size: self.data_size.to_le_bytes(),
            data_type: MAGIC,
        };
        let bytes: [u8; SHORT_HEADER_SIZE as usize] = zerocopy::transmute!(header);

        out.extend_from_slice(&bytes);
        if self.has_crc() {
            out.extend_from_slice(&compute_crc(0, &bytes).to_le_bytes());
        }
    }

    /// Length of the header as generated by [`Self::generate`].
    pub fn generated_size(&self) -> usize {
        if self.has_crc() {
            LONG_HEADER_SIZE as usize
        } else {
            SHORT_HEADER_SIZE as usize
        }
    }
}

bitfield! {
    struct AnyRecordHeader(u8) {
        [7] is_compressed,
    }
}

bitfield! {
    struct CompressedHeader(u8) {
        [0..5] time_offset: u8,
        [5..7] local_message: u8,
        [7] is_compressed,
    }
}

bitfield! {
    struct NormalHeader(u8) {
        [0..4] local_message: u8,
        [5] is_developer,
        [6] is_definition,
    }
}

/// Header of a definition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionHeader {
    /// Local message number, `0..=15`.
    pub local_message: u8,
    pub has_developer_fields: bool,
}

/// Header of a data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    /// Local message number, `0..=15`, or `0..=3` for compressed headers.
    pub local_message: u8,
    /// Offset carried by a compressed timestamp header.
    pub time_offset: Option<u8>,
}

/// Decode a record header.
///
/// The developer data flag is only meaningful on definition records, and is
/// ignored elsewhere.
pub fn decode_record_header(r: u8) -> Either<DefinitionHeader, DataHeader> {
    if AnyRecordHeader(r).is_compressed() {
        let header = CompressedHeader(r);

        Right(DataHeader {
            local_message: header.local_message(),
            time_offset: Some(header.time_offset()),
        })
    } else {
        let header = NormalHeader(r);

        if header.is_definition() {
            Left(DefinitionHeader {
                local_message: header.local_message(),
                has_developer_fields: header.is_developer(),
            })
        } else {
            Right(DataHeader {
                local_message: header.local_message(),
                time_offset: None,
            })
        }
    }
}

impl DefinitionHeader {
    pub fn encode(&self) -> u8 {
        let mut header = NormalHeader(0);
        header.set_local_message(self.local_message & 0x0F);
        header.set_is_developer(self.has_developer_fields);
        header.set_is_definition(true);
        header.0
    }
}

impl DataHeader {
    /// Encode the header, using the compressed layout when a time offset is
    /// present and the local message number fits its two bits.
    pub fn encode(&self) -> u8 {
        match self.time_offset {
            Some(offset) if self.local_message < 4 => {
                let mut header = CompressedHeader(0);
                header.set_is_compressed(true);
                header.set_local_message(self.local_message);
                header.set_time_offset(offset & 0x1F);
                header.0
            }
            _ => {
                let mut header = NormalHeader(0);
                header.set_local_message(self.local_message & 0x0F);
                header.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(header_size: u8) -> Vec<u8> {
        let mut bytes = vec![header_size, 16, 0x7D, 0x52, 4, 0, 0, 0];
        bytes.extend_from_slice(b".FIT");
        bytes
    }

    #[test]
    fn parse_short_header() {
        let header = DocumentHeader::parse(&document(12)).unwrap();
        assert_eq!(header.protocol_version, 16);
        assert_eq!(header.profile_version, 21117);
        assert_eq!(header.data_size, 4);
        assert!(!header.has_crc());
    }

    #[test]
    fn rejects_short_header_size() {
        assert!(matches!(
            DocumentHeader::parse(&document(11)),
            Err(DocumentHeaderError::TooShort(11))
        ));
    }

    #[test]
    fn rejects_wrong_magic() {
        let mut bytes = document(12);
        bytes[9] = b'f';
        assert!(matches!(
            DocumentHeader::parse(&bytes),
            Err(DocumentHeaderError::NotFitData)
        ));
    }

    #[test]
    fn zero_header_crc_skips_verification() {
        let mut bytes = document(14);
        bytes.extend_from_slice(&[0, 0]);
        assert!(DocumentHeader::parse(&bytes).is_ok());
    }

    #[test]
    fn wrong_header_crc_is_rejected() {
        let mut bytes = document(14);
        bytes.extend_from_slice(&[0x34, 0x12]);
        assert!(matches!(
            DocumentHeader::parse(&bytes),
            Err(DocumentHeaderError::CyclicRedundancyCheck { found: 0x1234, .. })
        ));
    }

    #[test]
    fn generated_header_parses() {
        let mut header = DocumentHeader::default();
        header.data_size = 77;

        let mut bytes = vec![];
        header.generate(&mut bytes);

        assert_eq!(bytes.len(), 14);
        assert_eq!(DocumentHeader::parse(&bytes).unwrap(), header);
    }

    #[test]
    fn record_headers() {
        assert_eq!(
            decode_record_header(0x65),
            Left(DefinitionHeader {
                local_message: 5,
                has_developer_fields: true,
            })
        );

        // The developer flag is ignored on data records.
        assert_eq!(
            decode_record_header(0x23),
            Right(DataHeader {
                local_message: 3,
                time_offset: None,
            })
        );

        assert_eq!(
            decode_record_header(0b1_10_00111),
            Right(DataHeader {
                local_message: 2,
                time_offset: Some(7),
            })
        );
    }

    #[test]
    fn record_header_encoding() {
        let definition = DefinitionHeader {
            local_message: 15,
            has_developer_fields: false,
        };
        assert_eq!(definition.encode(), 0x4F);

        let compressed = DataHeader {
            local_message: 1,
            time_offset: Some(31),
        };
        assert_eq!(decode_record_header(compressed.encode()), Right(compressed));

        // Local message numbers beyond two bits fall back to a normal header.
        let normal = DataHeader {
            local_message: 9,
            time_offset: Some(3),
        };
        assert_eq!(normal.encode(), 0x09);
    }
}
