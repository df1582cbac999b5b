use criterion::{Criterion, black_box, criterion_group, criterion_main};

use eu_vat_checkout::checkout::TaxDecisionEngine;
use eu_vat_checkout::core::*;
use eu_vat_checkout::vat::validate_format;

fn cart(lines: usize) -> Vec<CartLineItem> {
    (0..lines)
        .map(|i| {
            let delivery = if i % 5 == 4 {
                DeliveryType::Downloadable
            } else {
                DeliveryType::Physical
            };
            CartLineItem::new(format!("sku-{i}"), delivery)
        })
        .collect()
}

fn bench_validate_format(c: &mut Criterion) {
    let ids = [
        "DE123456789",
        "ATU12345678",
        "NL123456789B01",
        "SE123456789012",
        "XX123456789",
        "DE12345678",
    ];
    c.bench_function("validate_format_mixed", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(validate_format(black_box(id)));
            }
        })
    });
}

fn bench_decide(c: &mut Criterion) {
    let engine = TaxDecisionEngine::trust_format_only();
    let small = cart(3);
    let large = cart(100);

    c.bench_function("decide_exempt_3_lines", |b| {
        b.iter(|| {
            black_box(engine.decide(
                black_box(Some("DE123456789")),
                black_box(&small),
                "DE",
                Some("DE"),
            ))
        })
    });

    c.bench_function("decide_digital_100_lines", |b| {
        b.iter(|| black_box(engine.decide(None, black_box(&large), "FR", Some("BE"))))
    });
}

criterion_group!(benches, bench_validate_format, bench_decide);
criterion_main!(benches);
