//! Test corpus: pattern images stored in every supported encoding and
//! origin, decoded back and compared against the top-left BGRA reference.

use enough::Unstoppable;
use zentga::*;

fn checkerboard(w: usize, h: usize) -> Vec<[u8; 4]> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.push([200, 220, 240, 255]);
            } else {
                pixels.push([10, 40, 70, 128]);
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<[u8; 4]> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..w * h)
        .map(|_| {
            let mut px = [0u8; 4];
            for c in px.iter_mut() {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                *c = state as u8;
            }
            px
        })
        .collect()
}

const ORIGINS: [u8; 4] = [0b00, 0b01, 0b10, 0b11];

/// Reorder a top-left reference into storage order for `origin_bits`.
fn to_storage(reference: &[[u8; 4]], w: usize, h: usize, origin_bits: u8) -> Vec<[u8; 4]> {
    let mode = OriginMode::from_bits(origin_bits);
    let mut out = vec![[0u8; 4]; w * h];
    for y in 0..h {
        for x in 0..w {
            let (rx, ry) = map_coordinates(w as u32, h as u32, mode, x as u32, y as u32);
            out[y * w + x] = reference[ry as usize * w + rx as usize];
        }
    }
    out
}

fn header(image_type: u8, cmap: Option<(u16, u8)>, w: usize, h: usize, depth: u8, desc: u8) -> Vec<u8> {
    let mut out = vec![0, cmap.is_some() as u8, image_type];
    let (len, bits) = cmap.unwrap_or((0, 0));
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.push(bits);
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(w as u16).to_le_bytes());
    out.extend_from_slice(&(h as u16).to_le_bytes());
    out.push(depth);
    out.push(desc);
    out
}

fn encode_true_color(reference: &[[u8; 4]], w: usize, h: usize, depth: u8, origin_bits: u8) -> Vec<u8> {
    let alpha_bits = if depth == 32 { 8 } else { 0 };
    let mut out = header(2, None, w, h, depth, (origin_bits << 4) | alpha_bits);
    for px in to_storage(reference, w, h, origin_bits) {
        match depth {
            24 => out.extend_from_slice(&px[..3]),
            32 => out.extend_from_slice(&px),
            _ => unreachable!(),
        }
    }
    out
}

fn assert_matches(decoded: &DecodeOutput, reference: &[[u8; 4]], what: &str) {
    let flat: Vec<u8> = reference.iter().flatten().copied().collect();
    assert_eq!(decoded.pixels(), &flat[..], "{what}");
}

fn opaque(reference: &[[u8; 4]]) -> Vec<[u8; 4]> {
    reference.iter().map(|&[b, g, r, _]| [b, g, r, 255]).collect()
}

// ── True color ───────────────────────────────────────────────────────

#[test]
fn true_color_24_all_origins() {
    let reference = opaque(&checkerboard(7, 5));
    for bits in ORIGINS {
        let data = encode_true_color(&reference, 7, 5, 24, bits);
        let decoded = decode_tga(&data, Unstoppable).unwrap();
        assert_matches(&decoded, &reference, &format!("24-bit origin {bits:#04b}"));
    }
}

#[test]
fn true_color_32_all_origins() {
    let reference = noise_pattern(9, 6);
    for bits in ORIGINS {
        let data = encode_true_color(&reference, 9, 6, 32, bits);
        let decoded = decode_tga(&data, Unstoppable).unwrap();
        assert_matches(&decoded, &reference, &format!("32-bit origin {bits:#04b}"));
    }
}

#[test]
fn true_color_16_all_origins() {
    let (w, h) = (6, 4);
    // Values whose 5-bit channels replicate back exactly.
    let levels = [0u8, 0x84, 0xff, 0x42];
    let reference: Vec<[u8; 4]> = (0..w * h)
        .map(|i| [levels[i % 4], levels[(i / 2) % 4], levels[(i / 3) % 4], 255])
        .collect();
    for bits in ORIGINS {
        let mut data = header(2, None, w, h, 16, bits << 4);
        for [b, g, r, _] in to_storage(&reference, w, h, bits) {
            let v = (u16::from(r >> 3) << 10) | (u16::from(g >> 3) << 5) | u16::from(b >> 3);
            data.extend_from_slice(&v.to_le_bytes());
        }
        let decoded = decode_tga(&data, Unstoppable).unwrap();
        assert_matches(&decoded, &reference, &format!("16-bit origin {bits:#04b}"));
    }
}

#[test]
fn single_column_and_single_row() {
    for (w, h) in [(1, 17), (17, 1), (1, 1)] {
        let reference = noise_pattern(w, h);
        for bits in ORIGINS {
            let data = encode_true_color(&reference, w, h, 32, bits);
            let decoded = decode_tga(&data, Unstoppable).unwrap();
            assert_matches(&decoded, &reference, &format!("{w}x{h} origin {bits:#04b}"));
        }
    }
}

#[test]
fn taller_than_stop_check_interval() {
    let reference = opaque(&noise_pattern(3, 40));
    let data = encode_true_color(&reference, 3, 40, 24, 0b00);
    let decoded = decode_tga(&data, Unstoppable).unwrap();
    assert_matches(&decoded, &reference, "3x40 bottom-left");
}

// ── Color mapped ─────────────────────────────────────────────────────

fn palette_image(w: usize, h: usize) -> (Vec<[u8; 4]>, Vec<u8>) {
    let palette: Vec<[u8; 4]> = (0..16u8)
        .map(|i| [i * 16, 255 - i * 16, i.wrapping_mul(37), 0x80 | i])
        .collect();
    let indices = (0..w * h).map(|i| ((i * 5 + i / w) % 16) as u8).collect();
    (palette, indices)
}

fn encode_color_mapped(
    palette: &[[u8; 4]],
    entry_bits: u8,
    indices: &[u8],
    w: usize,
    h: usize,
    origin_bits: u8,
) -> Vec<u8> {
    let mut out = header(1, Some((palette.len() as u16, entry_bits)), w, h, 8, origin_bits << 4);
    for entry in palette {
        match entry_bits {
            24 => out.extend_from_slice(&entry[..3]),
            32 => out.extend_from_slice(entry),
            _ => unreachable!(),
        }
    }
    // Indices are written in storage order for the requested origin.
    let mode = OriginMode::from_bits(origin_bits);
    for y in 0..h {
        for x in 0..w {
            let (rx, ry) = map_coordinates(w as u32, h as u32, mode, x as u32, y as u32);
            out.push(indices[ry as usize * w + rx as usize]);
        }
    }
    out
}

#[test]
fn color_mapped_all_origins_and_entry_sizes() {
    let (w, h) = (8, 5);
    let (palette, indices) = palette_image(w, h);
    for entry_bits in [24u8, 32] {
        let lut: Vec<[u8; 4]> = if entry_bits == 24 {
            opaque(&palette)
        } else {
            palette.clone()
        };
        let reference: Vec<[u8; 4]> = indices.iter().map(|&i| lut[i as usize]).collect();
        for bits in ORIGINS {
            let data = encode_color_mapped(&palette, entry_bits, &indices, w, h, bits);
            let decoded = decode_tga(&data, Unstoppable).unwrap();
            assert_matches(
                &decoded,
                &reference,
                &format!("{entry_bits}-bit map origin {bits:#04b}"),
            );
        }
    }
}

#[test]
fn color_mapped_matches_equivalent_true_color() {
    let (w, h) = (5, 3);
    let (palette, indices) = palette_image(w, h);
    let reference: Vec<[u8; 4]> = indices.iter().map(|&i| palette[i as usize]).collect();
    let mapped = decode_tga(
        &encode_color_mapped(&palette, 32, &indices, w, h, 0b00),
        Unstoppable,
    )
    .unwrap();
    let direct = decode_tga(&encode_true_color(&reference, w, h, 32, 0b00), Unstoppable).unwrap();
    assert_eq!(mapped.pixels(), direct.pixels());
}

// ── Orientation invariance ───────────────────────────────────────────

#[test]
fn every_origin_decodes_to_same_image() {
    let reference = noise_pattern(11, 7);
    let decoded: Vec<Vec<u8>> = ORIGINS
        .iter()
        .map(|&bits| {
            decode_tga(&encode_true_color(&reference, 11, 7, 32, bits), Unstoppable)
                .unwrap()
                .into_pixels()
        })
        .collect();
    for d in &decoded[1..] {
        assert_eq!(d, &decoded[0]);
    }
}

#[test]
fn rgba_conversion_swaps_channels() {
    let reference = noise_pattern(4, 4);
    let decoded = decode_tga(&encode_true_color(&reference, 4, 4, 32, 0b10), Unstoppable).unwrap();
    let rgba = decoded.to_rgba8();
    for (px, src) in rgba.chunks_exact(4).zip(&reference) {
        assert_eq!(px, &[src[2], src[1], src[0], src[3]]);
    }
}

#[cfg(feature = "rgb")]
#[test]
fn typed_pixel_view() {
    let reference = noise_pattern(3, 2);
    let decoded = decode_tga(&encode_true_color(&reference, 3, 2, 32, 0b10), Unstoppable).unwrap();
    let pixels: &[rgb::alt::BGRA8] = decoded.as_pixels().unwrap();
    assert_eq!(pixels.len(), 6);
    assert_eq!(pixels[0].b, reference[0][0]);
    assert_eq!(pixels[0].a, reference[0][3]);
    assert!(matches!(
        decoded.as_pixels::<rgb::RGBA8>(),
        Err(TgaError::LayoutMismatch { .. })
    ));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let reference = noise_pattern(5, 3);
    let decoded = decode_tga(&encode_true_color(&reference, 5, 3, 32, 0b00), Unstoppable).unwrap();
    let img = decoded.as_imgref::<rgb::alt::BGRA8>().unwrap();
    assert_eq!((img.width(), img.height(), img.stride()), (5, 3, 5));
    assert_eq!(img.buf()[5].r, reference[5][2]);

    let owned = decoded.to_imgvec::<rgb::alt::BGRA8>().unwrap();
    assert_eq!(owned.buf().len(), 15);
    assert!(matches!(
        decoded.to_imgvec::<rgb::RGBA8>(),
        Err(TgaError::LayoutMismatch { .. })
    ));
}

#[cfg(feature = "simd")]
#[test]
fn rgba_conversion_wide_rows() {
    // Wide enough for the vector swizzle, with an odd tail.
    let reference = noise_pattern(67, 3);
    let decoded = decode_tga(&encode_true_color(&reference, 67, 3, 32, 0b10), Unstoppable).unwrap();
    let rgba = decoded.to_rgba8();
    for (px, src) in rgba.chunks_exact(4).zip(&reference) {
        assert_eq!(px, &[src[2], src[1], src[0], src[3]]);
    }
}
