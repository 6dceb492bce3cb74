#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(w: u32, h: u32, offset_pad: u32, filler: u8) -> Vec<u8> {
    let stride = (w * 3 + 3) & !3;
    let offset = 54 + offset_pad;
    let file_size = offset + stride * h;
    let mut out = vec![0u8; file_size as usize];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&file_size.to_le_bytes());
    out[10..14].copy_from_slice(&offset.to_le_bytes());
    out[14..18].copy_from_slice(&(40 + offset_pad).to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&(w as i32).to_le_bytes());
    out[22..26].copy_from_slice(&(h as i32).to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&(stride * h).to_le_bytes());
    for y in 0..h {
        let row = (offset + y * stride) as usize;
        for x in 0..w {
            let px = row + (x * 3) as usize;
            out[px..px + 3].copy_from_slice(&[(x * 40) as u8, (y * 40) as u8, 0x80]);
        }
        for p in row + (w * 3) as usize..row + stride as usize {
            out[p] = filler;
        }
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 0, 0)).unwrap();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, 0, 0xCD)).unwrap();
    fs::write(format!("{dir}/bmp_4x4.bmp"), bmp(4, 4, 0, 0)).unwrap();
    // BITMAPV4-sized header: 68 extra bytes before the pixels
    fs::write(format!("{dir}/bmp_v4_5x3.bmp"), bmp(5, 3, 68, 0)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut truncated = bmp(4, 4, 0, 0);
    truncated.truncate(60);
    fs::write(format!("{dir}/bmp_truncated.bmp"), truncated).unwrap();
    let mut paletted = bmp(2, 2, 0, 0);
    paletted[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_8bit.bmp"), paletted).unwrap();

    println!("Generated seed corpus in {dir}/");
}
