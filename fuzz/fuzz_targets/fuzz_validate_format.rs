#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid input is fine, panics are bugs.
        let _ = eu_vat_checkout::vat::validate_format(s);
    }
});
