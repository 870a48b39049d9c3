//! Big-endian scalar decoding
//!
//! IDX files store every multi-byte value big-endian. Raw bytes are put into
//! host order first and then composed into an integer with shifts, so no
//! value is ever produced by reinterpreting memory.

use std::sync::OnceLock;

/// Byte order of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    /// Byte order of the running machine, probed once per process
    pub fn host() -> Endian {
        static HOST: OnceLock<Endian> = OnceLock::new();
        *HOST.get_or_init(|| {
            if 1u16.to_ne_bytes()[0] == 1 {
                Endian::Little
            } else {
                Endian::Big
            }
        })
    }

    /// Compose bytes laid out in this order into an unsigned value
    fn compose(self, bytes: &[u8]) -> u64 {
        match self {
            Endian::Big => bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64),
            Endian::Little => bytes
                .iter()
                .rev()
                .fold(0u64, |acc, &b| (acc << 8) | b as u64),
        }
    }
}

/// Fixed-width numeric type that can be decoded from an IDX stream
pub trait Scalar: Copy + 'static {
    /// Width in bytes
    const SIZE: usize;

    /// Rebuild a value from its bit pattern held in the low `SIZE` bytes
    fn from_bits(bits: u64) -> Self;
}

macro_rules! int_scalar {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn from_bits(bits: u64) -> Self {
                    bits as $bits as $t
                }
            }
        )*
    };
}

int_scalar! {
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
}

impl Scalar for f32 {
    const SIZE: usize = 4;

    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl Scalar for f64 {
    const SIZE: usize = 8;

    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

/// Decode one big-endian scalar on a machine of the given byte order
///
/// `raw` must hold exactly `T::SIZE` bytes in file order. On little-endian
/// hosts multi-byte values are reversed into host order before composing.
pub fn decode_as<T: Scalar>(raw: &[u8], host: Endian) -> T {
    debug_assert_eq!(raw.len(), T::SIZE);

    let mut buf = [0u8; 8];
    let bytes = &mut buf[..T::SIZE];
    bytes.copy_from_slice(raw);

    if host == Endian::Little && T::SIZE > 1 {
        bytes.reverse();
    }

    T::from_bits(host.compose(bytes))
}

/// Decode one big-endian scalar on this machine
pub fn decode<T: Scalar>(raw: &[u8]) -> T {
    decode_as(raw, Endian::host())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        };
        assert_eq!(Endian::host(), expected);
        assert_eq!(Endian::host(), Endian::host());
    }

    #[test]
    fn test_u8() {
        assert_eq!(decode::<u8>(&[0x42]), 0x42);
        assert_eq!(decode_as::<u8>(&[0xFF], Endian::Little), 0xFF);
        assert_eq!(decode_as::<u8>(&[0xFF], Endian::Big), 0xFF);
    }

    #[test]
    fn test_u32_both_hosts() {
        let raw = [0x00, 0x00, 0x08, 0x03];
        assert_eq!(decode_as::<u32>(&raw, Endian::Little), 0x0803);
        assert_eq!(decode_as::<u32>(&raw, Endian::Big), 0x0803);
        assert_eq!(decode::<u32>(&raw), 0x0803);
    }

    #[test]
    fn test_u16() {
        let raw = [0x01, 0x02];
        assert_eq!(decode::<u16>(&raw), 0x0102);
    }

    #[test]
    fn test_u64() {
        let raw = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(decode_as::<u64>(&raw, Endian::Little), 0x0102030405060708);
        assert_eq!(decode_as::<u64>(&raw, Endian::Big), 0x0102030405060708);
    }

    #[test]
    fn test_signed() {
        assert_eq!(decode::<i8>(&[0xFE]), -2);
        assert_eq!(decode::<i16>(&(-300i16).to_be_bytes()), -300);
        assert_eq!(decode::<i32>(&(-42i32).to_be_bytes()), -42);
        assert_eq!(decode::<i64>(&i64::MIN.to_be_bytes()), i64::MIN);
    }

    #[test]
    fn test_floats() {
        assert_eq!(decode::<f32>(&1.5f32.to_be_bytes()), 1.5);
        let pi = decode::<f64>(&std::f64::consts::PI.to_be_bytes());
        assert!((pi - std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(
            decode_as::<f32>(&(-0.25f32).to_be_bytes(), Endian::Big),
            -0.25
        );
    }
}
