#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, cmap: Option<(u16, u8)>, w: u16, h: u16, depth: u8, desc: u8) -> Vec<u8> {
    let (len, bits) = cmap.unwrap_or((0, 0));
    let mut out = vec![0, cmap.is_some() as u8, image_type, 0, 0];
    out.extend_from_slice(&len.to_le_bytes());
    out.push(bits);
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.push(depth);
    out.push(desc);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // True color 2x2, 24-bit, bottom-left origin
    let mut tc24 = header(2, None, 2, 2, 24, 0x00);
    tc24.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0, 128, 128, 128]);
    fs::write(format!("{dir}/truecolor24_2x2.tga"), tc24).unwrap();

    // True color 1x1, 32-bit, top-left origin
    let mut tc32 = header(2, None, 1, 1, 32, 0x28);
    tc32.extend_from_slice(&[1, 2, 3, 4]);
    fs::write(format!("{dir}/truecolor32_1x1.tga"), tc32).unwrap();

    // True color 2x1, 16-bit, top-right origin
    let mut tc16 = header(2, None, 2, 1, 16, 0x30);
    tc16.extend_from_slice(&[0x1f, 0x7c, 0xe0, 0x03]);
    fs::write(format!("{dir}/truecolor16_2x1.tga"), tc16).unwrap();

    // Color mapped 2x1 with 2-entry 24-bit map and an ID field
    let mut cm = header(1, Some((2, 24)), 2, 1, 8, 0x20);
    cm[0] = 3;
    cm.extend_from_slice(b"id!");
    cm.extend_from_slice(&[0, 0, 255, 255, 0, 0]);
    cm.extend_from_slice(&[1, 0]);
    fs::write(format!("{dir}/colormapped_2x1.tga"), cm).unwrap();

    // No image data
    fs::write(format!("{dir}/nodata_4x4.tga"), header(0, None, 4, 4, 0, 0)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(2, None, 1, 1, 24, 0)[..10]).unwrap();
    fs::write(format!("{dir}/rle_truecolor.bin"), header(10, None, 1, 1, 24, 0)).unwrap();
    fs::write(format!("{dir}/bad_index.bin"), {
        let mut v = header(1, Some((1, 24)), 1, 1, 8, 0x20);
        v.extend_from_slice(&[0, 0, 0, 7]);
        v
    })
    .unwrap();

    println!("Generated seed corpus in {dir}/");
}
