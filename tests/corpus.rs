//! Transformation corpus: synthetic patterns driven through every operation.

use zenraster::*;

const RED: Color = Color::new(255, 0, 0);

fn checkerboard(w: usize, h: usize) -> PixelBuffer {
    let pixels = (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            if (x + y) % 2 == 0 {
                Color::new(200, 220, 240)
            } else {
                Color::new(10, 40, 70)
            }
        })
        .collect();
    PixelBuffer::from_pixels(w, h, pixels).unwrap()
}

fn noise_pattern(w: usize, h: usize) -> PixelBuffer {
    let mut state: u32 = 0xDEAD_BEEF;
    let pixels = (0..w * h)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            Color::new(state as u8, (state >> 8) as u8, (state >> 16) as u8)
        })
        .collect();
    PixelBuffer::from_pixels(w, h, pixels).unwrap()
}

fn black(w: usize, h: usize) -> PixelBuffer {
    PixelBuffer::try_new(w, h).unwrap()
}

fn region(l: i32, t: i32, r: i32, b: i32) -> Region {
    Region::new(Point::new(l, t), Point::new(r, b))
}

// ── Rasterizer ───────────────────────────────────────────────────────

#[test]
fn line_direction_does_not_matter() {
    for (a, b) in [
        ((0, 0), (1, 2)),
        ((0, 0), (2, 1)),
        ((0, 0), (4, 3)),
        ((1, 5), (4, 0)),
        ((7, 2), (0, 6)),
        ((3, 3), (3, 3)),
    ] {
        let (a, b) = (Point::new(a.0, a.1), Point::new(b.0, b.1));
        let mut fwd = black(8, 8);
        let mut rev = black(8, 8);
        draw_line(&mut fwd, a, b, RED);
        draw_line(&mut rev, b, a, RED);
        assert_eq!(fwd, rev, "{a:?} <-> {b:?}");
        assert_eq!(fwd.get(a.x, a.y), Some(RED));
        assert_eq!(fwd.get(b.x, b.y), Some(RED));
    }
}

#[test]
fn drawing_outside_never_touches_buffer() {
    let mut buf = noise_pattern(4, 4);
    let before = buf.clone();
    buf.set_pixel(-1, 2, RED);
    buf.set_pixel(4, 0, RED);
    draw_line(&mut buf, Point::new(-5, -5), Point::new(-1, 10), RED);
    draw_square(&mut buf, Point::new(10, 10), 3, 2, RED, Some(RED));
    assert_eq!(buf, before);
}

// ── Shapes ───────────────────────────────────────────────────────────

#[test]
fn square_on_black_4x4() {
    let mut buf = black(4, 4);
    draw_square(&mut buf, Point::new(0, 0), 4, 1, RED, None);
    assert_eq!(buf.get(0, 0), Some(RED));
    // Border plus both diagonals cover the whole 4x4 grid.
    assert!(buf.pixels().iter().all(|&c| c == RED));
}

#[test]
fn square_fill_leaves_interior_fill_color() {
    let fill = Color::new(0, 0, 255);
    let mut buf = black(7, 7);
    draw_square(&mut buf, Point::new(1, 1), 5, 1, RED, Some(fill));
    assert_eq!(buf.get(1, 1), Some(RED));
    assert_eq!(buf.get(5, 3), Some(RED));
    assert_eq!(buf.get(3, 3), Some(RED)); // diagonals cross
    assert_eq!(buf.get(3, 2), Some(fill));
    assert_eq!(buf.get(0, 0), Some(Color::BLACK));
    assert_eq!(buf.get(6, 6), Some(Color::BLACK));
}

#[test]
fn square_thickness_grows_border_both_ways() {
    let mut buf = black(9, 9);
    draw_square(&mut buf, Point::new(2, 2), 5, 3, RED, None);
    // Offsets -1..=1: outer ring at 1, inner ring at 3.
    assert_eq!(buf.get(1, 4), Some(RED));
    assert_eq!(buf.get(3, 4), Some(RED));
    assert_eq!(buf.get(0, 4), Some(Color::BLACK));
}

#[test]
fn small_rhombus_is_a_diamond() {
    let mut buf = black(5, 5);
    draw_rhombus(&mut buf, Point::new(2, 0), 4, RED);
    let mut lit = Vec::new();
    for y in 0..5 {
        for x in 0..5 {
            if buf.get(x, y) == Some(RED) {
                lit.push((x, y));
            }
        }
    }
    assert_eq!(lit, [(2, 0), (1, 1), (2, 1), (3, 1), (2, 2)]);
}

// ── Channel filter and recoloring ────────────────────────────────────

#[test]
fn green_channel_forced_to_max() {
    let src = noise_pattern(9, 5);
    let mut buf = src.clone();
    apply_channel(&mut buf, Channel::Green, 255);
    for (after, before) in buf.pixels().iter().zip(src.pixels()) {
        assert_eq!(after.g, 255);
        assert_eq!(after.r, before.r);
        assert_eq!(after.b, before.b);
    }
}

#[test]
fn channel_names_parse_at_the_boundary() {
    assert_eq!("red".parse::<Channel>().unwrap(), Channel::Red);
    assert_eq!("blue".parse::<Channel>().unwrap(), Channel::Blue);
    assert!(matches!(
        "alpha".parse::<Channel>(),
        Err(RasterError::InvalidParameter(_))
    ));
    assert_eq!("xy".parse::<Axis>().unwrap(), Axis::Xy);
    assert_eq!(
        "horizontal".parse::<Orientation>().unwrap(),
        Orientation::Horizontal
    );
    assert!(Angle::try_from(45u32).is_err());
    assert_eq!(Angle::try_from(270u32).unwrap().degrees(), 270);
}

#[test]
fn recolor_ring_around_target() {
    let mut buf = black(5, 5);
    buf.set_pixel(2, 2, RED);
    recolor_neighbors(&mut buf, RED, 1, Color::WHITE);
    for y in 0..5 {
        for x in 0..5 {
            let expected = match (x, y) {
                (2, 2) => RED,
                (1..=3, 1..=3) => Color::WHITE,
                _ => Color::BLACK,
            };
            assert_eq!(buf.get(x, y), Some(expected), "({x}, {y})");
        }
    }
}

// ── Geometry ─────────────────────────────────────────────────────────

#[test]
fn four_quarter_turns_restore_region() {
    let src = noise_pattern(10, 8);
    for r in [region(0, 0, 4, 4), region(2, 1, 7, 6), region(5, 3, 8, 6)] {
        let mut buf = src.clone();
        for _ in 0..4 {
            rotate_region(&mut buf, r, Angle::Deg90).unwrap();
        }
        assert_eq!(buf, src, "{r:?}");
    }
}

#[test]
fn half_turn_twice_is_identity() {
    let src = noise_pattern(7, 6);
    let mut buf = src.clone();
    let r = region(1, 2, 6, 5);
    rotate_region(&mut buf, r, Angle::Deg180).unwrap();
    rotate_region(&mut buf, r, Angle::Deg180).unwrap();
    assert_eq!(buf, src);
}

#[test]
fn half_turn_of_2x3_region() {
    let src = noise_pattern(5, 5);
    let mut buf = src.clone();
    // 2 wide, 3 tall at (1, 1)
    rotate_region(&mut buf, region(1, 1, 3, 4), Angle::Deg180).unwrap();
    for dy in 0..3 {
        for dx in 0..2 {
            assert_eq!(
                buf.get(1 + dx, 1 + dy),
                src.get(1 + (1 - dx), 1 + (2 - dy)),
                "({dx}, {dy})"
            );
        }
    }
    // Outside the region nothing moved.
    assert_eq!(buf.get(0, 0), src.get(0, 0));
    assert_eq!(buf.get(3, 1), src.get(3, 1));
}

#[test]
fn quarter_turn_of_wide_region_is_recentered() {
    let mut buf = black(6, 6);
    // 4 wide, 2 tall, centered at (3, 3)
    let r = region(1, 2, 5, 4);
    for x in 1..5 {
        buf.set_pixel(x, 2, RED);
        buf.set_pixel(x, 3, RED);
    }
    rotate_region(&mut buf, r, Angle::Deg270).unwrap();
    // Result is 2 wide, 4 tall with origin (3 - 1, 3 - 2).
    for y in 1..5 {
        assert_eq!(buf.get(2, y), Some(RED));
        assert_eq!(buf.get(3, y), Some(RED));
    }
    // Corners of the old band stay as they were.
    assert_eq!(buf.get(1, 2), Some(RED));
    assert_eq!(buf.get(0, 0), Some(Color::BLACK));
}

#[test]
fn diagonal_mirror_transposes_square() {
    let src = noise_pattern(8, 8);
    let mut buf = src.clone();
    // 4x5 region is cut down to 4x4.
    diagonal_mirror(&mut buf, region(2, 1, 6, 6)).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(buf.get(2 + j, 1 + i), src.get(2 + i, 1 + j), "({j}, {i})");
        }
    }
    assert_eq!(buf.get(2, 5), src.get(2, 5));
}

#[test]
fn full_width_shift_is_identity() {
    let src = noise_pattern(7, 4);
    assert_eq!(shift(&src, 7, Axis::X).unwrap(), src);
    assert_eq!(shift(&src, 4, Axis::Y).unwrap(), src);
    assert_eq!(shift(&src, 28, Axis::Xy).unwrap(), src);
    assert_eq!(shift(&src, 0, Axis::Xy).unwrap(), src);
}

#[test]
fn shift_wraps_both_axes() {
    let src = noise_pattern(5, 3);
    let out = shift(&src, 2, Axis::Xy).unwrap();
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(
                out.get((x + 2) % 5, (y + 2) % 3),
                src.get(x, y),
                "({x}, {y})"
            );
        }
    }
}

#[test]
fn paving_tiles_region() {
    let src = noise_pattern(9, 7);
    let mut buf = src.clone();
    paving(&mut buf, region(3, 2, 5, 5)).unwrap();
    for y in 0..7 {
        for x in 0..9 {
            assert_eq!(buf.get(x, y), src.get(3 + x % 2, 2 + y % 3), "({x}, {y})");
        }
    }
}

#[test]
fn paving_region_past_edge_tiles_black() {
    let mut buf = checkerboard(4, 4);
    paving(&mut buf, region(3, 0, 5, 1)).unwrap();
    let corner = checkerboard(4, 4).get(3, 0).unwrap();
    for y in 0..4 {
        assert_eq!(buf.get(0, y), Some(corner));
        assert_eq!(buf.get(1, y), Some(Color::BLACK));
    }
}

// ── Resampling ───────────────────────────────────────────────────────

#[test]
fn blur_of_one_is_identity() {
    let src = noise_pattern(6, 5);
    assert_eq!(blur(&src, 1).unwrap(), src);
    // 0 is even, so it becomes 1.
    assert_eq!(blur(&src, 0).unwrap(), src);
}

#[test]
fn blur_even_kernel_matches_next_odd() {
    let src = noise_pattern(6, 5);
    assert_eq!(blur(&src, 4).unwrap(), blur(&src, 5).unwrap());
}

#[test]
fn blur_of_flat_image_is_flat() {
    let src = PixelBuffer::filled(5, 4, Color::new(13, 77, 201)).unwrap();
    assert_eq!(blur(&src, 7).unwrap(), src);
}

#[test]
fn compress_by_one_is_identity() {
    let src = noise_pattern(5, 3);
    let mut image = Image::new(src.clone()).unwrap();
    let header = *image.header();
    Operation::Compress { factor: 1 }.apply(&mut image).unwrap();
    assert_eq!(image.pixels(), &src);
    assert_eq!(*image.header(), header);
}

#[test]
fn compress_averages_blocks() {
    let mut src = black(5, 4);
    for (x, y, c) in [(0, 0, 10), (1, 0, 20), (0, 1, 30), (1, 1, 41)] {
        src.set_pixel(x, y, Color::new(c, 255, 0));
    }
    let out = compress(&src, 2).unwrap();
    assert_eq!((out.width(), out.height()), (2, 2));
    // (10 + 20 + 30 + 41) / 4 = 25.25, truncated
    assert_eq!(out.get(0, 0), Some(Color::new(25, 255, 0)));
    assert_eq!(out.get(1, 1), Some(Color::BLACK));
}

// ── Block flipping ───────────────────────────────────────────────────

#[test]
fn flip_blocks_twice_is_identity() {
    let src = noise_pattern(11, 7);
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        for block in [1, 2, 3, 4, 7, 20] {
            let mut buf = src.clone();
            flip_blocks(&mut buf, block, orientation).unwrap();
            flip_blocks(&mut buf, block, orientation).unwrap();
            assert_eq!(buf, src, "{orientation:?} {block}");
        }
    }
}

#[test]
fn flip_blocks_vertical_checkerboard() {
    let src = noise_pattern(4, 4);
    let mut buf = src.clone();
    flip_blocks(&mut buf, 2, Orientation::Vertical).unwrap();
    // Block (0, 1): x 2..4, y 0..2, rows swapped.
    assert_eq!(buf.get(2, 0), src.get(2, 1));
    assert_eq!(buf.get(3, 1), src.get(3, 0));
    // Block (1, 0): x 0..2, y 2..4.
    assert_eq!(buf.get(0, 2), src.get(0, 3));
    // Blocks (0, 0) and (1, 1) untouched.
    assert_eq!(buf.get(0, 0), src.get(0, 0));
    assert_eq!(buf.get(3, 3), src.get(3, 3));
}

#[test]
fn block_larger_than_image_is_noop() {
    let src = noise_pattern(3, 3);
    let mut buf = src.clone();
    flip_blocks(&mut buf, 5, Orientation::Horizontal).unwrap();
    assert_eq!(buf, src);
}

// ── Operation dispatch ───────────────────────────────────────────────

#[test]
fn failed_operations_leave_image_untouched() {
    let src = noise_pattern(6, 6);
    let failing = [
        Operation::Compress { factor: 0 },
        Operation::Compress { factor: 7 },
        Operation::Paving {
            region: region(2, 2, 2, 4),
        },
        Operation::FlipBlocks {
            block: 0,
            orientation: Orientation::Vertical,
        },
        Operation::Rotate {
            region: region(4, 4, 1, 1),
            angle: Angle::Deg90,
        },
        Operation::DiagonalMirror {
            region: region(4, 1, 1, 4),
        },
    ];
    for op in failing {
        let mut image = Image::new(src.clone()).unwrap();
        assert!(op.apply(&mut image).is_err(), "{op:?}");
        assert_eq!(image.pixels(), &src, "{op:?}");
        assert_eq!((image.width(), image.height()), (6, 6));
    }
}

#[test]
fn operations_match_direct_calls() {
    let src = checkerboard(8, 6);

    let mut image = Image::new(src.clone()).unwrap();
    Operation::Blur { kernel: 3 }.apply(&mut image).unwrap();
    assert_eq!(image.pixels(), &blur(&src, 3).unwrap());

    let mut image = Image::new(src.clone()).unwrap();
    Operation::FillOutside {
        region: region(2, 1, 5, 4),
        color: RED,
    }
    .apply(&mut image)
    .unwrap();
    let mut expected = src.clone();
    fill_outside(&mut expected, region(2, 1, 5, 4), RED);
    assert_eq!(image.pixels(), &expected);
    assert_eq!(image.pixels().get(0, 0), Some(RED));
    assert_eq!(image.pixels().get(5, 4), src.get(5, 4));

    let mut image = Image::new(src.clone()).unwrap();
    Operation::Square {
        left_up: Point::new(1, 1),
        side: 4,
        thickness: 1,
        color: RED,
        fill: None,
    }
    .apply(&mut image)
    .unwrap();
    let mut expected = src.clone();
    draw_square(&mut expected, Point::new(1, 1), 4, 1, RED, None);
    assert_eq!(image.pixels(), &expected);
}

#[test]
fn operation_limits_checked_before_work() {
    let src = noise_pattern(6, 4);
    let mut image = Image::new(src.clone()).unwrap();
    let tight = Limits {
        max_pixels: Some(23),
        ..Default::default()
    };
    let op = Operation::Blur { kernel: 3 };
    assert!(matches!(
        op.apply_with_limits(&mut image, &tight),
        Err(RasterError::LimitExceeded(_))
    ));
    assert_eq!(image.pixels(), &src);

    let roomy = Limits {
        max_pixels: Some(24),
        max_memory_bytes: Some(72),
        ..Default::default()
    };
    op.apply_with_limits(&mut image, &roomy).unwrap();
    assert_eq!(image.pixels(), &blur(&src, 3).unwrap());
}
