#![no_main]

use eu_vat_checkout::checkout::TaxDecisionEngine;
use eu_vat_checkout::core::CartLineItem;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // VAT number, declared and observed country, separated by '|'.
    let mut parts = s.splitn(3, '|');
    let vat = parts.next();
    let declared = parts.next().unwrap_or("DE");
    let observed = parts.next();

    let engine = TaxDecisionEngine::trust_format_only();
    let items = [CartLineItem::digital("fuzz")];
    let a = engine.decide(vat, &items, declared, observed);
    let b = engine.decide(vat, &items, declared, observed);
    assert_eq!(a, b);
});
