//! Helpers for computing cyclic redundancy checks.
//!
//! The same check guards both the document header (its first twelve bytes)
//! and the whole document (header and records, up to the trailing check
//! value).

/// Compute the cyclic redundancy check of `length` bytes of `buffer`,
/// beginning at `start`.
///
/// Panics if the range lies outside `buffer`.
pub fn crc16(buffer: &[u8], start: usize, length: usize) -> u16 {
    compute_crc(0, &buffer[start..start + length])
}

/// Accumulate a slice of bytes into a cyclic redundancy check value.
pub fn compute_crc(init: u16, r: &[u8]) -> u16 {
    r.iter().fold(init, |acc, b| crc_byte(acc, *b))
}

/// Accumulate a single byte into a cyclic redundancy check value.
fn crc_byte(mut crc: u16, b: u8) -> u16 {
    const CRC_TABLE: [u16; 16] = [
        0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
        0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
    ];

    let tmp = CRC_TABLE[(crc & 0xF) as usize];
    crc = (crc >> 4) & 0x0FFF;
    crc = crc ^ tmp ^ CRC_TABLE[(b & 0xF) as usize];

    let tmp = CRC_TABLE[(crc & 0xF) as usize];
    crc = (crc >> 4) & 0x0FFF;
    crc = crc ^ tmp ^ CRC_TABLE[((b >> 4) & 0xF) as usize];

    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_zero() {
        assert_eq!(crc16(&[1, 2, 3], 1, 0), 0);
    }

    #[test]
    fn accumulation_matches_whole_range() {
        let bytes = b"0123456789abcdef";
        let split = compute_crc(compute_crc(0, &bytes[..5]), &bytes[5..]);
        assert_eq!(split, crc16(bytes, 0, bytes.len()));
    }

    #[test]
    fn appending_the_check_value_zeroes_the_remainder() {
        // A CRC-16/ARC property: running the check over data followed by its
        // little-endian check value yields zero.
        let mut bytes = b"123456789".to_vec();
        let crc = crc16(&bytes, 0, bytes.len());
        assert_eq!(crc, 0xBB3D);
        bytes.extend_from_slice(&crc.to_le_bytes());
        assert_eq!(compute_crc(0, &bytes), 0);
    }
}
