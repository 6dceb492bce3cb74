#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(decoded) = decode_bmp_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };

    // Encoding reproduces the consumed prefix of the input byte for byte
    let encoded = encode_bmp(&decoded, enough::Unstoppable).expect("encode of decoded image");
    assert!(data.starts_with(&encoded), "re-encoded bytes differ from input");

    let Ok(decoded2) = decode_bmp(&encoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.header(), decoded2.header());
});
