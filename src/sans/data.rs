//! Base types of field values.
//!
//! Every element of a field is stored as a fixed-width integer or float in
//! the byte order declared by its definition record. Each base type reserves
//! one bit pattern as its 'invalid' marker, used to signal an absent value.

/// A numeric element value prior to scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw {
    UInt(u64),
    SInt(i64),
    Float(f64),
}

macro_rules! base_types {
    ($($(#[$attr:meta])* $t:ident = $number:literal, $id:literal, $size:literal, $invalid:expr;)*) => {
        /// The base type of a field, as declared in a definition record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BaseType {
            $($(#[$attr])* $t,)*
        }

        impl BaseType {
            /// Look up a base type by its identifier.
            ///
            /// Only the low five bits name the type; the endian ability flag
            /// in bit 7 is informational.
            pub fn from_id(id: u8) -> Option<Self> {
                match id & 0x1F {
                    $($number => Some(Self::$t),)*
                    _ => None,
                }
            }

            /// The identifier written to definition records.
            pub const fn id(self) -> u8 {
                match self {
                    $(Self::$t => $id,)*
                }
            }

            /// Size in bytes of a single element.
            pub const fn size(self) -> u8 {
                match self {
                    $(Self::$t => $size,)*
                }
            }

            /// The bit pattern marking an element as invalid.
            pub const fn invalid(self) -> u64 {
                match self {
                    $(Self::$t => $invalid,)*
                }
            }
        }
    };
}

base_types! {
    /// `enum`
    Enum = 0, 0x00, 1, 0xFF;
    /// `sint8`
    SInt8 = 1, 0x01, 1, 0x7F;
    /// `uint8`
    UInt8 = 2, 0x02, 1, 0xFF;
    /// `sint16`
    SInt16 = 3, 0x83, 2, 0x7FFF;
    /// `uint16`
    UInt16 = 4, 0x84, 2, 0xFFFF;
    /// `sint32`
    SInt32 = 5, 0x85, 4, 0x7FFF_FFFF;
    /// `uint32`
    UInt32 = 6, 0x86, 4, 0xFFFF_FFFF;
    /// `string`, null-terminated UTF-8
    String = 7, 0x07, 1, 0x00;
    /// `float32`
    Float32 = 8, 0x88, 4, 0xFFFF_FFFF;
    /// `float64`
    Float64 = 9, 0x89, 8, u64::MAX;
    /// `uint8z`
    UInt8Z = 10, 0x0A, 1, 0x00;
    /// `uint16z`
    UInt16Z = 11, 0x8B, 2, 0x0000;
    /// `uint32z`
    UInt32Z = 12, 0x8C, 4, 0x0000_0000;
    /// `byte`
    Byte = 13, 0x0D, 1, 0xFF;
    /// `sint64`
    SInt64 = 14, 0x8E, 8, 0x7FFF_FFFF_FFFF_FFFF;
    /// `uint64`
    UInt64 = 15, 0x8F, 8, u64::MAX;
    /// `uint64z`
    UInt64Z = 16, 0x90, 8, 0;
}

impl BaseType {
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::SInt8 | Self::SInt16 | Self::SInt32 | Self::SInt64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Read the bits of one element. `r` must hold exactly one element.
    pub fn read_bits(self, r: &[u8], is_le: bool) -> u64 {
        if is_le {
            r.iter().rev().fold(0, |acc, b| acc << 8 | *b as u64)
        } else {
            r.iter().fold(0, |acc, b| acc << 8 | *b as u64)
        }
    }

    /// Append the bits of one element to `out`.
    pub fn write_bits(self, bits: u64, is_le: bool, out: &mut Vec<u8>) {
        let size = self.size() as usize;
        let bytes = bits.to_le_bytes();

        if is_le {
            out.extend_from_slice(&bytes[..size]);
        } else {
            out.extend(bytes[..size].iter().rev());
        }
    }

    /// Interpret the bits of one element.
    pub fn to_raw(self, bits: u64) -> Raw {
        match self {
            Self::Float32 => Raw::Float(f32::from_bits(bits as u32) as f64),
            Self::Float64 => Raw::Float(f64::from_bits(bits)),
            t if t.is_signed() => {
                let shift = 64 - 8 * t.size() as u32;
                Raw::SInt(((bits << shift) as i64) >> shift)
            }
            _ => Raw::UInt(bits),
        }
    }

    /// Represent a value as the bits of one element.
    ///
    /// Returns `None` if the value lies outside the range of this type.
    pub fn from_raw(self, raw: Raw) -> Option<u64> {
        let bits = 8 * self.size() as u32;

        match self {
            Self::Float32 => Some(f32::to_bits(raw.as_f64() as f32) as u64),
            Self::Float64 => Some(raw.as_f64().to_bits()),
            t if t.is_signed() => {
                let min = i64::MIN >> (64 - bits);
                let max = i64::MAX >> (64 - bits);
                let v = raw.as_i64()?;

                (min..=max)
                    .contains(&v)
                    .then_some(v as u64 & (u64::MAX >> (64 - bits)))
            }
            _ => {
                let max = u64::MAX >> (64 - bits);
                raw.as_u64().filter(|v| *v <= max)
            }
        }
    }
}

impl Raw {
    pub fn as_f64(self) -> f64 {
        match self {
            Raw::UInt(v) => v as f64,
            Raw::SInt(v) => v as f64,
            Raw::Float(v) => v,
        }
    }

    fn as_i64(self) -> Option<i64> {
        match self {
            Raw::UInt(v) => i64::try_from(v).ok(),
            Raw::SInt(v) => Some(v),
            Raw::Float(v) => float_to_int(v, i64::MIN as f64, i64::MAX as f64).map(|v| v as i64),
        }
    }

    fn as_u64(self) -> Option<u64> {
        match self {
            Raw::UInt(v) => Some(v),
            Raw::SInt(v) => u64::try_from(v).ok(),
            Raw::Float(v) => float_to_int(v, 0.0, u64::MAX as f64).map(|v| v as u64),
        }
    }
}

/// Round a float to the nearest integer, if it is finite and within range.
fn float_to_int(v: f64, min: f64, max: f64) -> Option<f64> {
    let v = v.round();
    (v.is_finite() && v >= min && v <= max).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_ignore_endian_flag() {
        assert_eq!(BaseType::from_id(0x84), Some(BaseType::UInt16));
        assert_eq!(BaseType::from_id(0x04), Some(BaseType::UInt16));
        assert_eq!(BaseType::from_id(0x11), None);
        assert_eq!(BaseType::UInt16.id(), 0x84);
    }

    #[test]
    fn byte_order() {
        let t = BaseType::UInt32;
        assert_eq!(t.read_bits(&[1, 2, 3, 4], true), 0x0403_0201);
        assert_eq!(t.read_bits(&[1, 2, 3, 4], false), 0x0102_0304);

        let mut out = vec![];
        t.write_bits(0x0102_0304, false, &mut out);
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn signed_elements_are_sign_extended() {
        assert_eq!(BaseType::SInt16.to_raw(0xFFFE), Raw::SInt(-2));
        assert_eq!(BaseType::SInt8.to_raw(0x7E), Raw::SInt(126));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(BaseType::UInt8.from_raw(Raw::UInt(256)), None);
        assert_eq!(BaseType::UInt8.from_raw(Raw::SInt(-1)), None);
        assert_eq!(BaseType::SInt8.from_raw(Raw::SInt(-128)), Some(0x80));
        assert_eq!(BaseType::UInt16.from_raw(Raw::Float(41.6)), Some(42));
    }
}
