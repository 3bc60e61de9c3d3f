//! Netlink attribute stream codec.
//!
//! Netlink uses a TLV (Type-Length-Value) format for attributes. Each
//! attribute carries a 4-byte header followed by its payload, padded so the
//! next attribute starts on a 4-byte boundary:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Length (2 bytes) │  Type (2 bytes)     │  <- NLA header (4 bytes)
//! ├─────────────────────────────────────────┤
//! │  Value (variable length, padded to 4)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The length field counts the header and payload but not the padding.
//!
//! Reference: `<linux/netlink.h>`

use bytes::BufMut;

use crate::{ByteOrder, Error, TcOption};

/// Size of the attribute header: a 2-byte length followed by a 2-byte type.
pub const NLA_HEADER_SIZE: usize = 4;

/// Mask selecting the type bits of an attribute header's type field.
///
/// The two high bits carry the `NLA_F_NESTED` and `NLA_F_NET_BYTEORDER`
/// flags and are not part of the type.
pub const NLA_TYPE_MASK: u16 = 0x3fff;

/// Rounds `len` up to the next 4-byte attribute boundary.
pub const fn nla_align(len: usize) -> usize {
    (len + 3) & !3
}

/// Serializes an ordered sequence of options into an attribute stream using
/// the host-native byte order.
///
/// See [`marshal_attributes_with`].
pub fn marshal_attributes(options: &[TcOption]) -> Result<Vec<u8>, Error> {
    marshal_attributes_with(ByteOrder::default(), options)
}

/// Serializes an ordered sequence of options into an attribute stream.
///
/// Attributes are emitted in the order given, each padded to a 4-byte
/// boundary with zero bytes. The padding is not counted in the emitted
/// length field. An empty option list serializes to an empty buffer.
///
/// ## Errors
/// - [`Error::PayloadTooLong`] if an option's payload cannot be described
///   by the 16-bit length field.
pub fn marshal_attributes_with(
    order: ByteOrder,
    options: &[TcOption],
) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();

    for option in options {
        let payload_len = option.value.wire_len();
        let nla_len = NLA_HEADER_SIZE + payload_len;
        if nla_len > u16::MAX as usize {
            return Err(Error::PayloadTooLong(payload_len));
        }
        let padded_len = nla_align(nla_len);

        buf.reserve(padded_len);
        order.put_u16(&mut buf, nla_len as u16);
        order.put_u16(&mut buf, option.kind);
        option.value.put(order, &mut buf);
        buf.put_bytes(0, padded_len - nla_len);
    }

    Ok(buf)
}

/// Lazily walks an attribute stream, yielding one [`RawAttribute`] per
/// attribute in stream order.
///
/// The iterator is finite and non-restartable. It is fused on failure:
/// after yielding an `Err` for a malformed header it produces nothing
/// further. A final attribute whose trailing padding is absent from the
/// buffer is accepted; only payload bytes are required.
///
/// ```
/// use tc_wire::AttributeDecoder;
///
/// let mut stream = Vec::new();
/// stream.extend_from_slice(&8u16.to_ne_bytes());
/// stream.extend_from_slice(&1u16.to_ne_bytes());
/// stream.extend_from_slice(&300u32.to_ne_bytes());
///
/// let mut decoder = AttributeDecoder::new(&stream);
/// let attr = decoder.next().unwrap().unwrap();
/// assert_eq!(attr.kind(), 1);
/// assert_eq!(attr.get_u32().unwrap(), 300);
/// assert!(decoder.next().is_none());
/// ```
#[derive(Debug)]
pub struct AttributeDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
    order: ByteOrder,
    failed: bool,
}

impl<'a> AttributeDecoder<'a> {
    /// Creates a decoder over `buf` using the host-native byte order.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            order: ByteOrder::Native,
            failed: false,
        }
    }

    /// Sets the byte order used for header fields and typed accessors.
    pub const fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }
}

impl<'a> Iterator for AttributeDecoder<'a> {
    type Item = Result<RawAttribute<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buf.len() {
            return None;
        }

        let remaining = &self.buf[self.pos..];
        if remaining.len() < NLA_HEADER_SIZE {
            self.failed = true;
            return Some(Err(Error::Truncated {
                needed: NLA_HEADER_SIZE,
                remaining: remaining.len(),
            }));
        }

        let mut header = &remaining[..NLA_HEADER_SIZE];
        let nla_len = self.order.get_u16(&mut header) as usize;
        let kind = self.order.get_u16(&mut header) & NLA_TYPE_MASK;

        if nla_len < NLA_HEADER_SIZE {
            self.failed = true;
            return Some(Err(Error::InvalidLength(nla_len)));
        }

        let payload_len = nla_len - NLA_HEADER_SIZE;
        if payload_len > remaining.len() - NLA_HEADER_SIZE {
            self.failed = true;
            return Some(Err(Error::Truncated {
                needed: payload_len,
                remaining: remaining.len() - NLA_HEADER_SIZE,
            }));
        }

        let payload = &remaining[NLA_HEADER_SIZE..nla_len];
        tracing::trace!(kind, len = payload_len, "decoded attribute");

        // The last attribute may end without its alignment padding.
        self.pos += nla_align(nla_len).min(remaining.len());

        Some(Ok(RawAttribute {
            kind,
            payload,
            order: self.order,
        }))
    }
}

/// One decoded attribute: the masked type tag plus its raw payload.
///
/// Typed accessors check that the payload width matches exactly before
/// reading; interpretation beyond that is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct RawAttribute<'a> {
    kind: u16,
    payload: &'a [u8],
    order: ByteOrder,
}

impl<'a> RawAttribute<'a> {
    /// The attribute type with the netlink flag bits masked off.
    pub const fn kind(&self) -> u16 {
        self.kind
    }

    /// The raw payload bytes, padding excluded.
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// The payload as an unsigned 8-bit integer.
    pub fn get_u8(&self) -> Result<u8, Error> {
        self.check_len(1)?;
        Ok(self.payload[0])
    }

    /// The payload as an unsigned 16-bit integer.
    pub fn get_u16(&self) -> Result<u16, Error> {
        self.check_len(2)?;
        let mut src = self.payload;
        Ok(self.order.get_u16(&mut src))
    }

    /// The payload as an unsigned 32-bit integer.
    pub fn get_u32(&self) -> Result<u32, Error> {
        self.check_len(4)?;
        let mut src = self.payload;
        Ok(self.order.get_u32(&mut src))
    }

    /// The payload as an unsigned 64-bit integer.
    pub fn get_u64(&self) -> Result<u64, Error> {
        self.check_len(8)?;
        let mut src = self.payload;
        Ok(self.order.get_u64(&mut src))
    }

    /// The payload as text, with trailing NUL bytes trimmed.
    pub fn get_string(&self) -> Result<String, Error> {
        let end = self
            .payload
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1);
        Ok(String::from_utf8(self.payload[..end].to_vec())?)
    }

    fn check_len(&self, want: usize) -> Result<(), Error> {
        if self.payload.len() != want {
            return Err(Error::ValueSize {
                want,
                got: self.payload.len(),
            });
        }
        Ok(())
    }
}
