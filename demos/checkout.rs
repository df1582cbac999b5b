//! Walk a few checkouts through the decision engine.
//!
//! Log output is controlled by `RUST_LOG`, e.g.
//! `RUST_LOG=eu_vat_checkout=debug cargo run --example checkout`.

use eu_vat_checkout::checkout::*;
use eu_vat_checkout::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let engine = match TaxDecisionEngine::from_config(&EngineConfig::trust_format_only()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(1);
        }
    };

    let ebook = CartLineItem::digital("ebook");
    let mug = CartLineItem::physical("mug");

    let scenarios: [(&str, Option<&str>, Vec<CartLineItem>, &str, Option<&str>); 5] = [
        ("German business", Some("DE123456789"), vec![mug.clone()], "DE", Some("DE")),
        ("French consumer, e-book", None, vec![ebook.clone()], "FR", None),
        ("Business abroad, e-book", Some("DE123456789"), vec![ebook.clone()], "DE", Some("IT")),
        ("Typo in VAT number", Some("DE12345678"), vec![mug], "DE", Some("DE")),
        ("US consumer, e-book", None, vec![ebook], "US", Some("US")),
    ];

    let net = dec!(100);
    let default_rate = dec!(19);

    for (label, vat, items, declared, observed) in &scenarios {
        if let Err(notice) = validate_submission(*vat) {
            println!("  [{label}] input rejected: {}", notice.message);
        }

        let decision = engine.decide(*vat, items, declared, *observed);
        println!("{label}:");
        println!(
            "    apply_vat={}, rate={}, location={:?}",
            decision.apply_vat,
            decision
                .effective_rate(default_rate)
                .map(|r| format!("{r}%"))
                .unwrap_or_else(|| "exempt".into()),
            decision.location_warning,
        );
        println!("    tax on {net}: {}", decision.tax_amount(net, default_rate));
        for notice in decision.notices() {
            println!("    {:?}: {}", notice.level, notice.message);
        }
        if let Some((key, value)) = decision.order_meta() {
            println!("    order meta {key}={value}");
        }
    }
}
