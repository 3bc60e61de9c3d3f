#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use thiserror::Error;

mod attr;
mod byte_order;
mod option;
mod record;

pub use attr::{
    marshal_attributes, marshal_attributes_with, nla_align, AttributeDecoder, RawAttribute,
    NLA_HEADER_SIZE, NLA_TYPE_MASK,
};
pub use byte_order::ByteOrder;
pub use option::{TcOption, TcValue};
pub use record::{marshal_record, unmarshal_record, FixedRecord};

/// Errors produced while encoding or decoding an attribute stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended inside an attribute header or declared payload.
    #[error("Truncated attribute stream: need {needed} bytes, {remaining} remain")]
    Truncated {
        /// Bytes the current attribute still requires.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// An attribute header declared a length smaller than the header itself.
    #[error("Invalid attribute length: {0}")]
    InvalidLength(usize),
    /// A typed accessor was applied to a payload of the wrong width.
    #[error("Unexpected payload size: want {want} bytes, got {got}")]
    ValueSize {
        /// Width the accessor expects.
        want: usize,
        /// Width of the actual payload.
        got: usize,
    },
    /// A fixed-width record payload did not match the record's size.
    #[error("Record size mismatch: expected {expected} bytes, got {got}")]
    RecordSize {
        /// The record's declared wire size.
        expected: usize,
        /// Width of the actual payload.
        got: usize,
    },
    /// An attribute payload too large for the 16-bit length field.
    #[error("Attribute payload of {0} bytes exceeds the length field")]
    PayloadTooLong(usize),
    /// A string payload was not valid UTF-8.
    #[error("Invalid string payload: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
