use tc::{Drr, Hfsc, QdiscOptions, ServiceCurve};

fn main() {
    tracing_subscriber::fmt::init();

    // A 100 Mbit/s real-time guarantee with a 50 Mbit/s upper limit.
    let hfsc = Hfsc::default()
        .with_rsc(ServiceCurve::new(100_000_000, 53, 25_000_000))
        .with_usc(ServiceCurve::new(0, 0, 50_000_000));

    let wire = hfsc.marshal().unwrap();
    println!("hfsc options: {} bytes on the wire: {:02x?}", wire.len(), wire);

    let decoded = Hfsc::unmarshal(&wire).unwrap();
    println!("decoded: {decoded:?}");
    assert_eq!(decoded, hfsc);

    let drr = Drr::new(1500);
    let wire = drr.marshal().unwrap();
    println!("drr options: {} bytes on the wire: {:02x?}", wire.len(), wire);

    let decoded = Drr::unmarshal(&wire).unwrap();
    println!("decoded: {decoded:?}");
    assert_eq!(decoded, drr);
}
