use rand::Rng;

use tc_qdisc::{marshal_qdisc, Error, Hfsc, QdiscOptions, ServiceCurve};
use tc_wire::ByteOrder;

fn random_curve(rng: &mut impl Rng) -> ServiceCurve {
    ServiceCurve::new(rng.gen(), rng.gen(), rng.gen())
}

#[test]
fn hfsc_full_cycle() {
    let _ = tracing_subscriber::fmt::try_init();

    let hfsc = Hfsc::default()
        .with_rsc(ServiceCurve::new(1_000_000, 50_000, 500_000))
        .with_fsc(ServiceCurve::new(2_000_000, 0, 2_000_000));

    let wire = marshal_qdisc(Some(&hfsc)).unwrap();
    let decoded = Hfsc::unmarshal(&wire).unwrap();

    assert_eq!(decoded, hfsc);
    assert!(decoded.usc.is_none());
}

#[test]
fn hfsc_missing_options_is_an_error() {
    let _ = tracing_subscriber::fmt::try_init();

    let err = marshal_qdisc::<Hfsc>(None).unwrap_err();
    assert!(matches!(err, Error::NoOptions("hfsc")));
}

#[test]
fn hfsc_random_subsets_round_trip() {
    let _ = tracing_subscriber::fmt::try_init();
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let mut hfsc = Hfsc::default();
        if rng.gen() {
            hfsc = hfsc.with_rsc(random_curve(&mut rng));
        }
        if rng.gen() {
            hfsc = hfsc.with_fsc(random_curve(&mut rng));
        }
        if rng.gen() {
            hfsc = hfsc.with_usc(random_curve(&mut rng));
        }

        let decoded = Hfsc::unmarshal(&hfsc.marshal().unwrap()).unwrap();
        assert_eq!(decoded, hfsc);
    }
}

#[test]
fn hfsc_explicit_orders_round_trip() {
    let _ = tracing_subscriber::fmt::try_init();
    let mut rng = rand::thread_rng();

    for order in [ByteOrder::Native, ByteOrder::Little, ByteOrder::Big] {
        let hfsc = Hfsc::default()
            .with_rsc(random_curve(&mut rng))
            .with_usc(random_curve(&mut rng));

        let wire = hfsc.marshal_with(order).unwrap();
        assert_eq!(Hfsc::unmarshal_with(order, &wire).unwrap(), hfsc);
    }
}

#[test]
fn hfsc_strict_rejection_mid_stream() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut wire = Hfsc::default()
        .with_rsc(ServiceCurve::new(1, 2, 3))
        .marshal()
        .unwrap();

    // Append a tag no discipline defines.
    wire.extend_from_slice(&8u16.to_ne_bytes());
    wire.extend_from_slice(&99u16.to_ne_bytes());
    wire.extend_from_slice(&0u32.to_ne_bytes());

    let err = Hfsc::unmarshal(&wire).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownAttribute { qdisc: "hfsc", kind: 99, .. }
    ));
}

#[test]
fn hfsc_garbage_stream_reports_wire_error() {
    let _ = tracing_subscriber::fmt::try_init();
    let mut rng = rand::thread_rng();

    // Random bytes must never panic: every outcome is Ok or a typed error.
    for _ in 0..1000 {
        let len = rng.gen_range(0..64);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let _ = Hfsc::unmarshal(&data);
    }
}
