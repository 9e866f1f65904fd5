//! Construction of documents byte by byte.

#![allow(dead_code)]

use cassette::sans::check::compute_crc;

pub const UINT8: u8 = 0x02;
pub const UINT16: u8 = 0x84;
pub const UINT32: u8 = 0x86;
pub const UINT32Z: u8 = 0x8C;
pub const STRING: u8 = 0x07;
pub const SINT8: u8 = 0x01;

/// A document under construction.
pub struct Document {
    has_crc: bool,
    header_crc: Option<u16>,
    header_extension: Vec<u8>,
    records: Vec<u8>,
}

impl Document {
    /// A document with a fourteen-byte header.
    pub fn new() -> Self {
        Self {
            has_crc: true,
            header_crc: None,
            header_extension: Vec::new(),
            records: Vec::new(),
        }
    }

    /// A document with a twelve-byte header.
    pub fn short() -> Self {
        Self {
            has_crc: false,
            ..Self::new()
        }
    }

    /// A document whose header carries `extra` bytes after the check value.
    pub fn extended(extra: &[u8]) -> Self {
        Self {
            header_extension: extra.to_vec(),
            ..Self::new()
        }
    }

    /// Write a fixed header check value instead of computing one.
    pub fn header_crc(mut self, crc: u16) -> Self {
        self.header_crc = Some(crc);
        self
    }

    /// A little endian definition record. Fields are (number, size, base type).
    pub fn definition(self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.any_definition(local, global, true, fields, &[])
    }

    pub fn big_endian_definition(self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.any_definition(local, global, false, fields, &[])
    }

    /// A definition record with developer fields, given as (number, size,
    /// developer data index).
    pub fn developer_definition(
        self,
        local: u8,
        global: u16,
        fields: &[(u8, u8, u8)],
        developer: &[(u8, u8, u8)],
    ) -> Self {
        self.any_definition(local, global, true, fields, developer)
    }

    fn any_definition(
        mut self,
        local: u8,
        global: u16,
        is_le: bool,
        fields: &[(u8, u8, u8)],
        developer: &[(u8, u8, u8)],
    ) -> Self {
        let flag = if developer.is_empty() { 0x40 } else { 0x60 };
        self.records.push(flag | local);

        self.records.push(0);
        self.records.push(!is_le as u8);
        if is_le {
            self.records.extend_from_slice(&global.to_le_bytes());
        } else {
            self.records.extend_from_slice(&global.to_be_bytes());
        }

        self.records.push(fields.len() as u8);
        for &(number, size, base_type) in fields {
            self.records.extend_from_slice(&[number, size, base_type]);
        }

        if !developer.is_empty() {
            self.records.push(developer.len() as u8);
            for &(number, size, index) in developer {
                self.records.extend_from_slice(&[number, size, index]);
            }
        }

        self
    }

    /// A data record with a normal header.
    pub fn data(mut self, local: u8, values: &[u8]) -> Self {
        self.records.push(local & 0x0F);
        self.records.extend_from_slice(values);
        self
    }

    /// A data record with a compressed timestamp header.
    pub fn compressed(mut self, local: u8, offset: u8, values: &[u8]) -> Self {
        self.records.push(0x80 | (local & 0x03) << 5 | (offset & 0x1F));
        self.records.extend_from_slice(values);
        self
    }

    /// Arbitrary bytes in the record section.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.records.extend_from_slice(bytes);
        self
    }

    /// The complete document, with both check values.
    pub fn build(&self) -> Vec<u8> {
        let header_size = if self.has_crc {
            14 + self.header_extension.len() as u8
        } else {
            12
        };

        let mut out = vec![header_size, 16];
        out.extend_from_slice(&21117u16.to_le_bytes());
        out.extend_from_slice(&(self.records.len() as u32).to_le_bytes());
        out.extend_from_slice(b".FIT");

        if self.has_crc {
            let crc = self.header_crc.unwrap_or_else(|| compute_crc(0, &out));
            out.extend_from_slice(&crc.to_le_bytes());
            out.extend_from_slice(&self.header_extension);
        }

        out.extend_from_slice(&self.records);

        let crc = compute_crc(0, &out);
        out.extend_from_slice(&crc.to_le_bytes());

        out
    }
}

/// A `field_description` record body declaring an unsigned byte developer
/// field, laid out by [`field_description_definition`].
pub fn field_description(index: u8, number: u8, name: &str, scale: u8) -> Vec<u8> {
    typed_field_description(index, number, UINT8, name, scale)
}

/// A `field_description` record body declaring a developer field of any base
/// type.
pub fn typed_field_description(
    index: u8,
    number: u8,
    base_type: u8,
    name: &str,
    scale: u8,
) -> Vec<u8> {
    let mut name_bytes = [0u8; 8];
    name_bytes[..name.len()].copy_from_slice(name.as_bytes());

    let mut out = vec![index, number, base_type];
    out.extend_from_slice(&name_bytes);
    out.extend_from_slice(&[scale, 0]);
    out
}

pub fn field_description_definition(doc: Document, local: u8) -> Document {
    doc.definition(
        local,
        206,
        &[
            (0, 1, UINT8),
            (1, 1, UINT8),
            (2, 1, UINT8),
            (3, 8, STRING),
            (6, 1, UINT8),
            (7, 1, SINT8),
        ],
    )
}
