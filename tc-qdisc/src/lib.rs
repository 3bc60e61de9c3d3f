#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use thiserror::Error;

use tc_wire::ByteOrder;

mod drr;
mod hfsc;

pub use drr::Drr;
pub use hfsc::{Hfsc, ServiceCurve};

/// Errors produced by the discipline codecs.
#[derive(Debug, Error)]
pub enum Error {
    /// Attribute stream failure below the discipline layer.
    #[error("Wire format error: {0}")]
    Wire(#[from] tc_wire::Error),
    /// Encode was handed an absent options struct.
    #[error("{0} options are missing")]
    NoOptions(&'static str),
    /// The decoder hit a type tag outside the discipline's namespace.
    ///
    /// Unknown attributes are never skipped. A stream the codec cannot
    /// fully account for is reported rather than half-decoded.
    #[error("Unknown {qdisc} attribute type {kind}: {payload:?}")]
    UnknownAttribute {
        /// The discipline that rejected the attribute.
        qdisc: &'static str,
        /// The offending type tag, flag bits already masked.
        kind: u16,
        /// The attribute's raw payload, kept for diagnostics.
        payload: Vec<u8>,
    },
}

/// The typed option set of one queueing discipline.
///
/// Implementations map between their struct fields and the discipline's
/// attribute namespace. Decoding dispatches on each attribute's type tag
/// and fails on tags outside the namespace; encoding emits one attribute
/// per present field, in a fixed discipline-defined order. Adding a new
/// discipline means implementing this trait, the wire layer needs no
/// changes.
pub trait QdiscOptions: Sized {
    /// The discipline's kind string, as carried by `TCA_KIND`.
    const KIND: &'static str;

    /// Decodes an attribute stream in the host-native byte order.
    fn unmarshal(data: &[u8]) -> Result<Self, Error> {
        Self::unmarshal_with(ByteOrder::default(), data)
    }

    /// Decodes an attribute stream.
    ///
    /// A zero-length stream is valid and yields a struct with every
    /// optional field absent.
    fn unmarshal_with(order: ByteOrder, data: &[u8]) -> Result<Self, Error>;

    /// Encodes the options in the host-native byte order.
    fn marshal(&self) -> Result<Vec<u8>, Error> {
        self.marshal_with(ByteOrder::default())
    }

    /// Encodes the options.
    ///
    /// A struct with every optional field absent encodes to an empty
    /// buffer, not an error.
    fn marshal_with(&self, order: ByteOrder) -> Result<Vec<u8>, Error>;
}

/// Serializes an optional options struct in the host-native byte order.
///
/// See [`marshal_qdisc_with`].
pub fn marshal_qdisc<T: QdiscOptions>(options: Option<&T>) -> Result<Vec<u8>, Error> {
    marshal_qdisc_with(ByteOrder::default(), options)
}

/// Serializes an optional options struct.
///
/// A discipline request without its options block is distinct from one
/// with an empty option set, so the absent case is rejected before any
/// serialization.
///
/// ## Errors
/// - [`Error::NoOptions`] if `options` is `None`.
pub fn marshal_qdisc_with<T: QdiscOptions>(
    order: ByteOrder,
    options: Option<&T>,
) -> Result<Vec<u8>, Error> {
    match options {
        Some(options) => options.marshal_with(order),
        None => Err(Error::NoOptions(T::KIND)),
    }
}
