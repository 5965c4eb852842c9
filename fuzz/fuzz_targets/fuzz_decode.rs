#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input.
    let probed = zentga::probe_tga(data);
    let decoded = zentga::decode_tga(data, enough::Unstoppable);

    // A decodable file always has a valid header.
    if let Ok(image) = &decoded {
        let info = probed.expect("decoded file failed to probe");
        assert_eq!((image.width, image.height), (info.width, info.height));
        assert_eq!(image.pixels().len(), image.width as usize * image.height as usize * 4);
    }

    // The stateful decoder agrees with the stateless one.
    let mut decoder = zentga::TgaDecoder::new();
    let stateful = decoder.decode(data, enough::Unstoppable);
    assert_eq!(stateful.is_ok(), decoded.is_ok());
    assert_eq!(decoder.image().is_ok(), decoded.is_ok());
});
