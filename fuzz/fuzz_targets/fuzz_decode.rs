#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the header parser or row reader
    let _ = zenraster::decode_bmp(data, enough::Unstoppable);

    let limits = zenraster::Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let _ = zenraster::decode_bmp_with_limits(data, &limits, enough::Unstoppable);
});
