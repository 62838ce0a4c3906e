//! GIF composition against decoded output

mod common;

use common::{color_near, decode_gif, solid_png};
use pillowmap_render::{AnimationCompositor, CompositionError};

const COLORS: [[u8; 3]; 5] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 255],
    [0, 0, 0],
];

#[test]
fn frames_decode_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let frames: Vec<_> = COLORS
        .iter()
        .enumerate()
        .map(|(i, rgb)| solid_png(dir.path(), &format!("frame_{:03}.png", i), (24, 16), *rgb))
        .collect();
    let out = dir.path().join("anim.gif");

    let summary = AnimationCompositor::new(5).compose(&frames, &out).unwrap();
    assert_eq!(summary.frames, COLORS.len());

    let decoded = decode_gif(&out);
    assert_eq!(decoded.len(), COLORS.len());
    for (frame, expected) in decoded.iter().zip(COLORS.iter()) {
        let buffer = frame.buffer();
        assert_eq!(buffer.dimensions(), (24, 16));
        let p = buffer.get_pixel(12, 8).0;
        assert!(
            color_near([p[0], p[1], p[2]], *expected),
            "expected {:?}, got {:?}",
            expected,
            p
        );

        let (numer, denom) = frame.delay().numer_denom_ms();
        assert_eq!(numer / denom, 200);
    }
}

#[test]
fn reversed_list_reverses_animation() {
    let dir = tempfile::tempdir().unwrap();
    let red = solid_png(dir.path(), "a.png", (8, 8), [255, 0, 0]);
    let blue = solid_png(dir.path(), "b.png", (8, 8), [0, 0, 255]);
    let out = dir.path().join("anim.gif");

    AnimationCompositor::default().compose(&[blue, red], &out).unwrap();

    let decoded = decode_gif(&out);
    let first = decoded[0].buffer().get_pixel(4, 4).0;
    assert!(color_near([first[0], first[1], first[2]], [0, 0, 255]));
}

#[test]
fn existing_animation_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let frame = solid_png(dir.path(), "a.png", (8, 8), [0, 255, 0]);
    let out = dir.path().join("anim.gif");
    std::fs::write(&out, b"not a gif").unwrap();

    AnimationCompositor::default().compose(&[frame], &out).unwrap();
    assert_eq!(decode_gif(&out).len(), 1);
}

#[test]
fn corrupt_frame_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let good = solid_png(dir.path(), "a.png", (8, 8), [0, 255, 0]);
    let bad = dir.path().join("b.png");
    std::fs::write(&bad, b"definitely not a png").unwrap();

    let result = AnimationCompositor::default().compose(&[good, bad], &dir.path().join("x.gif"));
    assert!(matches!(result, Err(CompositionError::Decode { .. })));
}
