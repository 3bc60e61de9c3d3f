use bytes::{BufMut, Bytes};

use crate::ByteOrder;

/// A single attribute queued for encoding.
///
/// Discipline codecs build an ordered list of these and hand it to
/// [`marshal_attributes`](crate::marshal_attributes). Options are
/// transient: constructed, serialized, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcOption {
    /// Attribute type tag within the discipline's namespace. Never 0, the
    /// namespaces reserve it as an unspec sentinel.
    pub kind: u16,
    /// The value together with its wire interpretation.
    pub value: TcValue,
}

impl TcOption {
    /// Creates an option from a type tag and a value.
    pub const fn new(kind: u16, value: TcValue) -> Self {
        Self { kind, value }
    }
}

/// The payload of a [`TcOption`], tagged with its serialization rule.
///
/// Fixed-width integers are written in the configured [`ByteOrder`].
/// [`TcValue::Bytes`] carries payloads already serialized by the caller,
/// such as embedded kernel records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TcValue {
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Text payload, NUL-terminated on the wire.
    String(String),
    /// Opaque byte block emitted as given.
    Bytes(Bytes),
    /// Presence-only attribute with an empty payload.
    Flag,
}

impl TcValue {
    /// The encoded payload width in bytes, excluding the attribute header
    /// and alignment padding.
    pub fn wire_len(&self) -> usize {
        match self {
            Self::U8(_) => 1,
            Self::U16(_) => 2,
            Self::U32(_) => 4,
            Self::U64(_) => 8,
            Self::String(s) => s.len() + 1,
            Self::Bytes(b) => b.len(),
            Self::Flag => 0,
        }
    }

    /// Writes the payload to `dst` per this value's interpretation.
    pub(crate) fn put(&self, order: ByteOrder, dst: &mut impl BufMut) {
        match self {
            Self::U8(v) => dst.put_u8(*v),
            Self::U16(v) => order.put_u16(dst, *v),
            Self::U32(v) => order.put_u32(dst, *v),
            Self::U64(v) => order.put_u64(dst, *v),
            Self::String(s) => {
                dst.put_slice(s.as_bytes());
                dst.put_u8(0);
            }
            Self::Bytes(b) => dst.put_slice(b),
            Self::Flag => {}
        }
    }
}
