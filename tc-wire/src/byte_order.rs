use bytes::{Buf, BufMut};

/// Byte order applied to attribute headers and fixed-width integer payloads.
///
/// The kernel reads and writes traffic-control attributes in the host's
/// native order, so [`ByteOrder::Native`] is the default. The order is a
/// caller-level configuration threaded through every encode and decode
/// call, never a per-attribute property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Host-native ordering, matching the kernel convention.
    #[default]
    Native,
    /// Little-endian ordering.
    Little,
    /// Big-endian ordering.
    Big,
}

impl ByteOrder {
    /// Reads a `u16` from `src` in this order.
    pub fn get_u16(self, src: &mut impl Buf) -> u16 {
        match self {
            Self::Native => src.get_u16_ne(),
            Self::Little => src.get_u16_le(),
            Self::Big => src.get_u16(),
        }
    }

    /// Reads a `u32` from `src` in this order.
    pub fn get_u32(self, src: &mut impl Buf) -> u32 {
        match self {
            Self::Native => src.get_u32_ne(),
            Self::Little => src.get_u32_le(),
            Self::Big => src.get_u32(),
        }
    }

    /// Reads a `u64` from `src` in this order.
    pub fn get_u64(self, src: &mut impl Buf) -> u64 {
        match self {
            Self::Native => src.get_u64_ne(),
            Self::Little => src.get_u64_le(),
            Self::Big => src.get_u64(),
        }
    }

    /// Writes a `u16` to `dst` in this order.
    pub fn put_u16(self, dst: &mut impl BufMut, value: u16) {
        match self {
            Self::Native => dst.put_u16_ne(value),
            Self::Little => dst.put_u16_le(value),
            Self::Big => dst.put_u16(value),
        }
    }

    /// Writes a `u32` to `dst` in this order.
    pub fn put_u32(self, dst: &mut impl BufMut, value: u32) {
        match self {
            Self::Native => dst.put_u32_ne(value),
            Self::Little => dst.put_u32_le(value),
            Self::Big => dst.put_u32(value),
        }
    }

    /// Writes a `u64` to `dst` in this order.
    pub fn put_u64(self, dst: &mut impl BufMut, value: u64) {
        match self {
            Self::Native => dst.put_u64_ne(value),
            Self::Little => dst.put_u64_le(value),
            Self::Big => dst.put_u64(value),
        }
    }
}
