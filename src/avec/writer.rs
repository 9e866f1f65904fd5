//! Encoding of documents.

use crate::sans::{check::compute_crc, header::DataHeader};

use super::file::{DefinitionId, FitFile};

impl FitFile {
    /// Encode the document.
    ///
    /// A definition record is written before each data record whose
    /// definition differs from that of the preceding record. The header's
    /// data size and both check values are computed afresh.
    pub fn encode(&self) -> Vec<u8> {
        let mut records = Vec::new();
        let mut previous: Option<DefinitionId> = None;

        for data in self.raw_records() {
            let Some(definition) = self.definition(data.definition) else {
                continue;
            };

            if previous != Some(data.definition) {
                definition.generate(&mut records);
                previous = Some(data.definition);
            }

            let header = DataHeader {
                local_message: definition.local_message,
                time_offset: data.time_offset,
            };
            records.push(header.encode());
            records.extend_from_slice(&data.values);
        }

        let mut header = *self.header();
        header.data_size = records.len() as u32;

        let mut out = Vec::with_capacity(header.generated_size() + records.len() + 2);
        header.generate(&mut out);
        out.extend_from_slice(&records);

        let crc = compute_crc(0, &out);
        out.extend_from_slice(&crc.to_le_bytes());

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sans::header::DocumentHeader;

    #[test]
    fn empty_document() {
        let bytes = FitFile::with_header(DocumentHeader::new(false, 16, 2093)).encode();

        assert_eq!(bytes.len(), 14);
        assert_eq!(&bytes[8..12], b".FIT");
        assert_eq!(compute_crc(0, &bytes), 0);
    }
}
