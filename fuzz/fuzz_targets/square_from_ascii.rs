#![no_main]

use gambit::Square;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(Ok(square)) = std::str::from_utf8(data).map(str::parse::<Square>) {
        let roundtripped: Square = square.to_string().parse().expect("roundtrip");
        assert_eq!(square, roundtripped);
    }
});
