//! Wire layout of definition records.
//!
//! A definition record body is a five-byte message header, followed by three
//! bytes per field and, when flagged in the record header, a count byte and
//! three bytes per developer field.

use zerocopy::{FromBytes, IntoBytes};

/// Size of the fixed part of a definition record body.
pub const MESSAGE_SIZE: usize = 5;
/// Size of a single field definition.
pub const FIELD_SIZE: usize = 3;

/// Fixed part of a definition record body.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes)]
pub struct DefinitionMessage {
    _reserved: u8,
    architecture: u8,
    global_message: [u8; 2],
    /// Number of field definitions that follow.
    pub field_count: u8,
}

impl DefinitionMessage {
    pub fn new(is_little_endian: bool, global_message: u16, field_count: u8) -> Self {
        let global_message = if is_little_endian {
            global_message.to_le_bytes()
        } else {
            global_message.to_be_bytes()
        };

        Self {
            _reserved: 0,
            architecture: !is_little_endian as u8,
            global_message,
            field_count,
        }
    }

    /// Decode from the bytes following a definition record header.
    pub fn parse(r: [u8; MESSAGE_SIZE]) -> Self {
        zerocopy::transmute!(r)
    }

    pub fn to_bytes(self) -> [u8; MESSAGE_SIZE] {
        zerocopy::transmute!(self)
    }

    /// Whether multi-byte values in matching data records are little-endian.
    ///
    /// Any architecture other than `0` is treated as big-endian.
    pub fn is_little_endian(&self) -> bool {
        self.architecture == 0
    }

    /// The global message number, in the declared byte order.
    pub fn global_message(&self) -> u16 {
        if self.is_little_endian() {
            u16::from_le_bytes(self.global_message)
        } else {
            u16::from_be_bytes(self.global_message)
        }
    }
}

/// A single field definition.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes)]
pub struct FieldHeader {
    pub number: u8,
    /// Size of the field in bytes.
    pub size: u8,
    /// Base type identifier.
    pub base_type: u8,
}

impl FieldHeader {
    pub fn parse(r: [u8; FIELD_SIZE]) -> Self {
        zerocopy::transmute!(r)
    }

    pub fn to_bytes(self) -> [u8; FIELD_SIZE] {
        zerocopy::transmute!(self)
    }
}

/// A single developer field definition.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes)]
pub struct DeveloperFieldHeader {
    pub number: u8,
    pub size: u8,
    /// Index of the developer that declared the field.
    pub developer_data_index: u8,
}

impl DeveloperFieldHeader {
    pub fn parse(r: [u8; FIELD_SIZE]) -> Self {
        zerocopy::transmute!(r)
    }

    pub fn to_bytes(self) -> [u8; FIELD_SIZE] {
        zerocopy::transmute!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_message_follows_architecture() {
        let message = DefinitionMessage::parse([0, 0, 0x14, 0x00, 3]);
        assert!(message.is_little_endian());
        assert_eq!(message.global_message(), 20);
        assert_eq!({ message.field_count }, 3);

        let message = DefinitionMessage::parse([0, 1, 0x00, 0x14, 3]);
        assert!(!message.is_little_endian());
        assert_eq!(message.global_message(), 20);
    }

    #[test]
    fn message_bytes() {
        assert_eq!(
            DefinitionMessage::new(false, 0x0102, 7).to_bytes(),
            [0, 1, 0x01, 0x02, 7]
        );
        assert_eq!(
            DefinitionMessage::new(true, 0x0102, 7).to_bytes(),
            [0, 0, 0x02, 0x01, 7]
        );
    }

    #[test]
    fn field_headers() {
        let field = FieldHeader::parse([253, 4, 0x86]);
        assert_eq!({ field.number }, 253);
        assert_eq!(field.to_bytes(), [253, 4, 0x86]);

        let field = DeveloperFieldHeader::parse([1, 2, 0]);
        assert_eq!({ field.developer_data_index }, 0);
    }
}
