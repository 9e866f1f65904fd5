//! Resolution of compressed timestamp headers.

/// Mask of the time offset bits carried by a compressed timestamp header.
const OFFSET_MASK: u32 = 0x1F;

/// Tracks the rolling reference timestamp of a document.
///
/// Compressed timestamp headers only carry the low five bits of a timestamp.
/// The remaining bits are taken from the most recent absolute timestamp,
/// rolling over when the offset wraps.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceTime(Option<u32>);

impl ReferenceTime {
    /// The current reference timestamp, if one has been established.
    pub fn get(&self) -> Option<u32> {
        self.0
    }

    /// Replace the reference with an absolute timestamp.
    pub fn set(&mut self, timestamp: u32) {
        self.0 = Some(timestamp);
    }

    /// Apply a compressed time offset, returning the resolved timestamp.
    ///
    /// Returns `None` if no reference timestamp has been established.
    pub fn apply_offset(&mut self, offset: u8) -> Option<u32> {
        let reference = self.0?;
        let offset = offset as u32 & OFFSET_MASK;

        let base = reference & !OFFSET_MASK;
        let timestamp = if offset >= reference & OFFSET_MASK {
            base.wrapping_add(offset)
        } else {
            base.wrapping_add(offset).wrapping_add(OFFSET_MASK + 1)
        };

        self.0 = Some(timestamp);
        Some(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_without_reference() {
        assert_eq!(ReferenceTime::default().apply_offset(3), None);
    }

    #[test]
    fn offset_within_window() {
        let mut time = ReferenceTime::default();
        time.set(0x1000_0004);
        assert_eq!(time.apply_offset(9), Some(0x1000_0009));
        assert_eq!(time.get(), Some(0x1000_0009));
    }

    #[test]
    fn offset_wraps_window() {
        let t = 0x2000_0000 | 30;
        let mut time = ReferenceTime::default();
        time.set(t);
        assert_eq!(time.apply_offset(2), Some((t & !0x1F) + 2 + 0x20));
    }

    #[test]
    fn equal_offset_does_not_wrap() {
        let mut time = ReferenceTime::default();
        time.set(100);
        assert_eq!(time.apply_offset(100 & 0x1F), Some(100));
    }
}
