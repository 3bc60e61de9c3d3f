//! DRR (Deficit Round Robin) qdisc options.

use tc_wire::{marshal_attributes_with, AttributeDecoder, ByteOrder, TcOption, TcValue};

use crate::{Error, QdiscOptions};

// DRR-specific TCA_OPTIONS sub-attributes (from linux/pkt_sched.h)
/// DRR class quantum attribute type.
const TCA_DRR_QUANTUM: u16 = 1;

/// Options of the DRR (Deficit Round Robin) discipline.
///
/// DRR classes have a single parameter: the quantum, the number of bytes a
/// class may send per scheduling round. The quantum must be at least as
/// large as the maximum packet size (MTU) to ensure packets can always be
/// dequeued.
///
/// The wire format has no presence indicator for the quantum: a value of 0
/// emits no attribute, and a stream without the attribute decodes to 0. An
/// unset quantum and a quantum of zero are therefore indistinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drr {
    /// Bytes this class may send per scheduling round. 0 reads as unset.
    pub quantum: u32,
}

impl Drr {
    /// Creates options with the given quantum.
    pub const fn new(quantum: u32) -> Self {
        Self { quantum }
    }
}

impl QdiscOptions for Drr {
    const KIND: &'static str = "drr";

    fn unmarshal_with(order: ByteOrder, data: &[u8]) -> Result<Self, Error> {
        let mut info = Self::default();

        for attr in AttributeDecoder::new(data).with_byte_order(order) {
            let attr = attr?;
            match attr.kind() {
                TCA_DRR_QUANTUM => info.quantum = attr.get_u32()?,
                kind => {
                    return Err(Error::UnknownAttribute {
                        qdisc: Self::KIND,
                        kind,
                        payload: attr.payload().to_vec(),
                    })
                }
            }
        }

        tracing::debug!(?info, "decoded drr options");
        Ok(info)
    }

    fn marshal_with(&self, order: ByteOrder) -> Result<Vec<u8>, Error> {
        let mut options = Vec::new();

        // 0 means unset, so nothing goes on the wire for it.
        if self.quantum != 0 {
            options.push(TcOption::new(TCA_DRR_QUANTUM, TcValue::U32(self.quantum)));
        }

        let buf = marshal_attributes_with(order, &options)?;
        tracing::debug!(len = buf.len(), "encoded drr options");
        Ok(buf)
    }
}
