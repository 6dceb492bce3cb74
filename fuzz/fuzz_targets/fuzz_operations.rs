#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fn point(b: &[u8]) -> Point {
    Point::new(i32::from(b[0] as i8), i32::from(b[1] as i8))
}

fuzz_target!(|data: &[u8]| {
    // 5 control bytes, 4 for dimensions, the rest seeds pixels
    if data.len() < 9 {
        return;
    }
    let (ctl, rest) = data.split_at(5);
    let (dims, seed) = rest.split_at(4);
    let w = usize::from(dims[0] % 32) + 1;
    let h = usize::from(dims[1] % 32) + 1;
    let pixels = (0..w * h)
        .map(|i| {
            let v = seed.get(i % seed.len().max(1)).copied().unwrap_or(0);
            Color::new(v, v.wrapping_mul(3), v ^ 0x5A)
        })
        .collect();
    let Ok(buf) = PixelBuffer::from_pixels(w, h, pixels) else {
        return;
    };
    let Ok(mut image) = Image::new(buf) else {
        return;
    };

    let a = point(&dims[2..4]);
    let b = point(&ctl[3..5]);
    let n = u32::from(ctl[1]);
    let color = Color::new(ctl[2], ctl[1], ctl[3]);
    let region = Region::new(a, b);
    let op = match ctl[0] % 14 {
        0 => Operation::Square {
            left_up: a,
            side: n,
            thickness: u32::from(ctl[2] % 8),
            color,
            fill: Some(color),
        },
        1 => Operation::Rhombus { apex: a, size: n, color },
        2 => Operation::Line { from: a, to: b, thickness: u32::from(ctl[2] % 8), color },
        3 => Operation::ChannelFilter { channel: Channel::Blue, value: ctl[2] },
        4 => Operation::Rotate { region, angle: Angle::Deg90 },
        5 => Operation::Rotate { region, angle: Angle::Deg270 },
        6 => Operation::DiagonalMirror { region },
        7 => Operation::Shift { step: i64::from(ctl[2] as i8), axis: Axis::Xy },
        8 => Operation::Paving { region },
        9 => Operation::Compress { factor: n },
        10 => Operation::Blur { kernel: n % 16 },
        11 => Operation::FlipBlocks { block: n, orientation: Orientation::Horizontal },
        12 => Operation::RecolorNeighbors { target: color, radius: n % 8, color: Color::WHITE },
        _ => Operation::FillOutside { region, color },
    };

    // Operations must never panic, and the result must still encode
    let _ = op.apply(&mut image);
    let encoded = encode_bmp(&image, enough::Unstoppable).expect("encode after operation");
    let decoded = decode_bmp(&encoded, enough::Unstoppable).expect("decode after operation");
    assert_eq!(decoded.pixels(), image.pixels());
});
