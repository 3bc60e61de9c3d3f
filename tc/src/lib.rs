#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use tc_qdisc::*;
pub use tc_wire::{
    marshal_attributes, marshal_attributes_with, AttributeDecoder, ByteOrder, FixedRecord,
    RawAttribute, TcOption, TcValue,
};

/// The raw attribute wire layer.
pub use tc_wire as wire;
