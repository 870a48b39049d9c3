//! Element type codes declared by IDX magic numbers

/// Element type code found in the third byte of an IDX magic number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DType {
    U8 = 0x08,
    I8 = 0x09,
    I16 = 0x0B,
    I32 = 0x0C,
    F32 = 0x0D,
    F64 = 0x0E,
}

impl DType {
    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::I16 => 2,
            DType::I32 | DType::F32 => 4,
            DType::F64 => 8,
        }
    }

    /// Try to convert from the magic number's type byte
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x08 => Some(DType::U8),
            0x09 => Some(DType::I8),
            0x0B => Some(DType::I16),
            0x0C => Some(DType::I32),
            0x0D => Some(DType::F32),
            0x0E => Some(DType::F64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(DType::from_u8(0x08), Some(DType::U8));
        assert_eq!(DType::from_u8(0x0E), Some(DType::F64));
        assert_eq!(DType::from_u8(0x0A), None);
        assert_eq!(DType::from_u8(0x00), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(DType::U8.element_size(), 1);
        assert_eq!(DType::I16.element_size(), 2);
        assert_eq!(DType::F32.element_size(), 4);
        assert_eq!(DType::F64.element_size(), 8);
    }
}
