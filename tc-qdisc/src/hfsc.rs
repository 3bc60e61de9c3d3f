//! HFSC (Hierarchical Fair Service Curve) qdisc options.
//!
//! HFSC schedules classes by service curves: piecewise-linear shapes that
//! bound the service a class receives over time. A class carries up to
//! three of them, one per role (real-time, link-share, upper-limit).

use bytes::{Buf, BufMut, Bytes};

use tc_wire::{
    marshal_attributes_with, marshal_record, unmarshal_record, AttributeDecoder, ByteOrder,
    FixedRecord, TcOption, TcValue,
};

use crate::{Error, QdiscOptions};

// HFSC-specific TCA_OPTIONS sub-attributes (from linux/pkt_sched.h)
/// Real-time service curve attribute type.
const TCA_HFSC_RSC: u16 = 1;
/// Link-share service curve attribute type.
const TCA_HFSC_FSC: u16 = 2;
/// Upper-limit service curve attribute type.
const TCA_HFSC_USC: u16 = 3;

/// Options of the HFSC (Hierarchical Fair Service Curve) discipline.
///
/// Each curve slot is independent: an absent slot emits no attribute when
/// encoding and stays `None` when the stream carries no matching
/// attribute. Curves go on the wire in a fixed order matching the
/// kernel's attribute numbering (rsc, fsc, usc).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hfsc {
    /// Real-time service curve, guaranteeing service independent of the
    /// class hierarchy.
    pub rsc: Option<ServiceCurve>,
    /// Link-share service curve, distributing excess bandwidth.
    pub fsc: Option<ServiceCurve>,
    /// Upper-limit service curve, capping the service rate.
    pub usc: Option<ServiceCurve>,
}

impl Hfsc {
    /// Sets the real-time service curve.
    pub const fn with_rsc(mut self, curve: ServiceCurve) -> Self {
        self.rsc = Some(curve);
        self
    }

    /// Sets the link-share service curve.
    pub const fn with_fsc(mut self, curve: ServiceCurve) -> Self {
        self.fsc = Some(curve);
        self
    }

    /// Sets the upper-limit service curve.
    pub const fn with_usc(mut self, curve: ServiceCurve) -> Self {
        self.usc = Some(curve);
        self
    }
}

impl QdiscOptions for Hfsc {
    const KIND: &'static str = "hfsc";

    fn unmarshal_with(order: ByteOrder, data: &[u8]) -> Result<Self, Error> {
        let mut info = Self::default();

        for attr in AttributeDecoder::new(data).with_byte_order(order) {
            let attr = attr?;
            match attr.kind() {
                TCA_HFSC_RSC => info.rsc = Some(unmarshal_record(order, attr.payload())?),
                TCA_HFSC_FSC => info.fsc = Some(unmarshal_record(order, attr.payload())?),
                TCA_HFSC_USC => info.usc = Some(unmarshal_record(order, attr.payload())?),
                kind => {
                    return Err(Error::UnknownAttribute {
                        qdisc: Self::KIND,
                        kind,
                        payload: attr.payload().to_vec(),
                    })
                }
            }
        }

        tracing::debug!(?info, "decoded hfsc options");
        Ok(info)
    }

    fn marshal_with(&self, order: ByteOrder) -> Result<Vec<u8>, Error> {
        let mut options = Vec::new();

        if let Some(curve) = self.rsc {
            options.push(curve_option(order, TCA_HFSC_RSC, &curve));
        }
        if let Some(curve) = self.fsc {
            options.push(curve_option(order, TCA_HFSC_FSC, &curve));
        }
        if let Some(curve) = self.usc {
            options.push(curve_option(order, TCA_HFSC_USC, &curve));
        }

        let buf = marshal_attributes_with(order, &options)?;
        tracing::debug!(len = buf.len(), "encoded hfsc options");
        Ok(buf)
    }
}

fn curve_option(order: ByteOrder, kind: u16, curve: &ServiceCurve) -> TcOption {
    TcOption::new(kind, TcValue::Bytes(Bytes::from(marshal_record(order, curve))))
}

/// One piecewise-linear service curve.
///
/// # Kernel Definition
///
/// From `<linux/pkt_sched.h>`:
///
/// ```c
/// struct tc_service_curve {
///     __u32 m1;  /* slope of the first segment in bps */
///     __u32 d;   /* x-projection of the first segment in us */
///     __u32 m2;  /* slope of the second segment in bps */
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceCurve {
    /// Slope of the first segment, in bits per second.
    pub m1: u32,
    /// X-projection of the first segment, in microseconds.
    pub d: u32,
    /// Slope of the second segment, in bits per second.
    pub m2: u32,
}

impl ServiceCurve {
    /// Creates a curve from its two slopes and the projection between them.
    pub const fn new(m1: u32, d: u32, m2: u32) -> Self {
        Self { m1, d, m2 }
    }
}

impl FixedRecord for ServiceCurve {
    const SIZE: usize = 12;

    fn get(order: ByteOrder, src: &mut impl Buf) -> Self {
        Self {
            m1: order.get_u32(src),
            d: order.get_u32(src),
            m2: order.get_u32(src),
        }
    }

    fn put(&self, order: ByteOrder, dst: &mut impl BufMut) {
        order.put_u32(dst, self.m1);
        order.put_u32(dst, self.d);
        order.put_u32(dst, self.m2);
    }
}
