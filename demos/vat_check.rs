use eu_vat_checkout::core::*;
use eu_vat_checkout::vat::*;

fn main() {
    // VAT number format validation (no network required)
    println!("=== VAT Number Format Validation ===\n");

    let test_ids = [
        "DE123456789",
        "ATU12345678",
        "FR12345678901",
        "NL123456789B01",
        "IE1234567AB",
        "DE12345678",  // too short
        "XX999999999", // unknown country
        "de123456789", // lowercase prefix
    ];

    for id in &test_ids {
        match parse_vat_number(id) {
            Ok(vat) => println!(
                "  {id} => valid (country={}, number={})",
                vat.country(),
                vat.body()
            ),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    // Standard rates used for digital goods
    println!("\n=== Standard VAT Rates ===\n");

    for country in CountryCode::ALL {
        let rate = rate_for(country).map(|r| format!("{r}%")).unwrap_or_else(|| "—".into());
        println!("  {country}: {rate}");
    }
}
