//! Pattern/size grid and malformed-input rejection tests.

use enough::Unstoppable;
use portablemaps::*;

fn checkerboard_u8(w: usize, h: usize, channels: usize) -> Vec<u8> {
    let mut samples = vec![0u8; w * h * channels];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * channels;
            for c in 0..channels {
                samples[off + c] = if (x + y) % 2 == 0 {
                    180 + (c as u8 * 20)
                } else {
                    15 + (c as u8 * 30)
                };
            }
        }
    }
    samples
}

fn noise_u16(len: usize) -> Vec<u16> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // Keep every high byte out of the ASCII whitespace range and
            // the peak above 255 so the payload stays 2 bytes per sample.
            (state as u16) | 0x4000
        })
        .collect()
}

fn gradient_f32(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32).sin() * 1000.0).collect()
}

#[test]
fn pgm_roundtrips_across_sizes() {
    for (w, h) in [(1, 1), (1, 7), (7, 1), (16, 16), (33, 5)] {
        let samples = checkerboard_u8(w, h, 1);
        let map = PixelMap::gray(w as u32, h as u32, Samples::U8(samples)).unwrap();
        let encoded = EncodeRequest::pnm().encode(&map, Unstoppable).unwrap();
        let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
        assert_eq!(decoded, map, "pgm {w}x{h}");
    }
}

#[test]
fn ppm_roundtrips_across_sizes() {
    for (w, h) in [(1, 1), (2, 3), (17, 9), (64, 2)] {
        let samples = checkerboard_u8(w, h, 3);
        let map = PixelMap::new(w as u32, h as u32, 3, Samples::U8(samples)).unwrap();
        let encoded = EncodeRequest::pnm().encode(&map, Unstoppable).unwrap();
        let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
        assert_eq!(decoded, map, "ppm {w}x{h}");
    }
}

#[test]
fn wide_pgm_roundtrips_noise() {
    for (w, h) in [(1, 1), (5, 5), (31, 3)] {
        let samples = noise_u16(w * h);
        let map = PixelMap::gray(w as u32, h as u32, Samples::U16(samples)).unwrap();
        let encoded = EncodeRequest::pnm().encode(&map, Unstoppable).unwrap();
        let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
        assert_eq!(decoded, map, "pgm16 {w}x{h}");
    }
}

#[test]
fn pfm_roundtrips_across_sizes() {
    for (w, h, c) in [(1, 1, 1), (1, 1, 3), (4, 7, 1), (7, 4, 3), (32, 32, 3)] {
        let samples = gradient_f32(w * h * c);
        let map = PixelMap::new(w as u32, h as u32, c as u32, Samples::F32(samples)).unwrap();
        let encoded = EncodeRequest::pfm().encode(&map, Unstoppable).unwrap();
        let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
        assert_eq!(decoded, map, "pfm {w}x{h}x{c}");
    }
}

#[test]
fn pfm_special_values_survive() {
    let samples = vec![
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::MIN_POSITIVE,
        -0.0,
        f32::MAX,
        1.0,
    ];
    let map = PixelMap::new(3, 2, 1, Samples::F32(samples.clone())).unwrap();
    let encoded = EncodeRequest::pfm().encode(&map, Unstoppable).unwrap();
    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    let out = decoded.as_f32().unwrap();
    assert_eq!(out, &samples[..]);
    assert!(out[3].is_sign_negative());
}

#[test]
fn truncated_prefixes_never_panic() {
    let map = PixelMap::new(4, 4, 3, Samples::U8(checkerboard_u8(4, 4, 3))).unwrap();
    let ppm = EncodeRequest::pnm().encode(&map, Unstoppable).unwrap();

    let fmap = PixelMap::new(4, 4, 3, Samples::F32(gradient_f32(48))).unwrap();
    let pfm = EncodeRequest::pfm().encode(&fmap, Unstoppable).unwrap();

    for file in [&ppm, &pfm] {
        for len in 0..file.len() {
            // Every strict prefix is missing data somewhere; decode must
            // fail cleanly.
            assert!(DecodeRequest::new(&file[..len]).decode(Unstoppable).is_err());
        }
    }
}

#[test]
fn garbage_headers_are_rejected() {
    let cases: &[&[u8]] = &[
        b"P5\n\n",
        b"P5\nabc def\n255\n",
        b"P6\n2 -2\n255\n",
        b"P6\n2 2\n99999\nxxxxxxxxxxxx",
        b"P2\n2 1\n255\nten 20\n",
        b"PF\n2 2\n",
        b"PF\n2 2\nnot-a-number\n",
        b"Pf\nno dims here\n-1.0\n",
    ];
    for case in cases {
        assert!(
            DecodeRequest::new(case).decode(Unstoppable).is_err(),
            "accepted {case:?}"
        );
    }
}
