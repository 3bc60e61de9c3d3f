//! Fixed-width binary record transcoding.
//!
//! Qdisc attributes often embed flat kernel structs: a fixed run of
//! fixed-width integer fields with no framing, no padding and no type
//! tags. This module converts such records to and from bytes. Alignment
//! and TLV framing stay the attribute layer's job.

use bytes::{Buf, BufMut};

use crate::{ByteOrder, Error};

/// A flat, fixed-width binary record embedded in an attribute payload.
///
/// Implementations read and write their fields in declared order. Any
/// fixed-width record a discipline introduces implements this trait and
/// reuses [`marshal_record`] and [`unmarshal_record`] unchanged.
pub trait FixedRecord: Sized {
    /// Exact wire size of the record in bytes.
    const SIZE: usize;

    /// Reads the record's fields in declared order from `src`.
    fn get(order: ByteOrder, src: &mut impl Buf) -> Self;

    /// Writes the record's fields in declared order to `dst`.
    fn put(&self, order: ByteOrder, dst: &mut impl BufMut);
}

/// Decodes a record from `data`.
///
/// ## Errors
/// - [`Error::RecordSize`] unless `data` is exactly [`FixedRecord::SIZE`]
///   bytes long.
pub fn unmarshal_record<R: FixedRecord>(order: ByteOrder, data: &[u8]) -> Result<R, Error> {
    if data.len() != R::SIZE {
        return Err(Error::RecordSize {
            expected: R::SIZE,
            got: data.len(),
        });
    }

    let mut src = data;
    Ok(R::get(order, &mut src))
}

/// Encodes a record to exactly [`FixedRecord::SIZE`] bytes.
pub fn marshal_record<R: FixedRecord>(order: ByteOrder, record: &R) -> Vec<u8> {
    let mut buf = Vec::with_capacity(R::SIZE);
    record.put(order, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Pair {
        a: u32,
        b: u16,
    }

    impl FixedRecord for Pair {
        const SIZE: usize = 6;

        fn get(order: ByteOrder, src: &mut impl Buf) -> Self {
            Self {
                a: order.get_u32(src),
                b: order.get_u16(src),
            }
        }

        fn put(&self, order: ByteOrder, dst: &mut impl BufMut) {
            order.put_u32(dst, self.a);
            order.put_u16(dst, self.b);
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = Pair { a: 0xdead_beef, b: 0x0102 };
        let buf = marshal_record(ByteOrder::Native, &record);
        assert_eq!(buf.len(), Pair::SIZE);

        let decoded: Pair = unmarshal_record(ByteOrder::Native, &buf).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_rejects_short_input() {
        let err = unmarshal_record::<Pair>(ByteOrder::Native, &[0; 5]).unwrap_err();
        assert!(matches!(err, Error::RecordSize { expected: 6, got: 5 }));
    }

    #[test]
    fn test_record_rejects_long_input() {
        let err = unmarshal_record::<Pair>(ByteOrder::Native, &[0; 7]).unwrap_err();
        assert!(matches!(err, Error::RecordSize { expected: 6, got: 7 }));
    }

    #[test]
    fn test_record_field_order_big_endian() {
        let record = Pair { a: 0x0102_0304, b: 0x0506 };
        let buf = marshal_record(ByteOrder::Big, &record);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }
}
