#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // PGM 3x2
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/pgm_3x2.pgm"), pgm).unwrap();

    // 16-bit PGM 1x2
    let pgm16 = b"P5\n1 2\n300\n\x01\x2c\x00\xff";
    fs::write(format!("{dir}/pgm16_1x2.pgm"), pgm16).unwrap();

    // Plain PPM 1x1 with comments
    let plain = b"P3 # plain\n1 1\n255\n1 2 3\n";
    fs::write(format!("{dir}/plain_ppm_1x1.ppm"), plain).unwrap();

    // PFM gray 1x1, little endian
    let mut pfm = b"Pf\n1 1\n-1.0\n".to_vec();
    pfm.extend_from_slice(&1.0f32.to_le_bytes());
    fs::write(format!("{dir}/pfm_gray_1x1.pfm"), pfm).unwrap();

    // PFM color 1x1, big endian
    let mut pfm_be = b"PF\n1 1\n1.0\n".to_vec();
    for v in [0.5f32, 0.25, 0.125] {
        pfm_be.extend_from_slice(&v.to_be_bytes());
    }
    fs::write(format!("{dir}/pfm_rgb_1x1_be.pfm"), pfm_be).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p4_bitmap.bin"), b"P4\n2 2\n").unwrap();
    fs::write(format!("{dir}/pf_no_scale.bin"), b"PF\n2 2\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
