//! End-to-end receipt scenarios.
//!
//! Each test feeds raw purchase lines through the whole pipeline and checks
//! the exact rendered output.

use saletax_core::{
    generate_receipt, Category, Money, ProcessingError, ReceiptGenerator, TaxConfig, TaxEngine,
    TaxRate,
};

// =============================================================================
// Default Tax Rules
// =============================================================================

#[test]
fn test_domestic_basket() {
    let receipt = generate_receipt(&[
        "2 book at 12.49",
        "1 music CD at 14.99",
        "1 chocolate bar at 0.85",
    ])
    .unwrap();

    assert_eq!(
        receipt,
        [
            "2 book: 24.98",
            "1 music CD: 16.49",
            "1 chocolate bar: 0.85",
            "Sales Taxes: 1.50",
            "Total: 42.32",
        ]
    );
}

#[test]
fn test_imported_basket() {
    let receipt = generate_receipt(&[
        "1 imported box of chocolates at 10.00",
        "1 imported bottle of perfume at 47.50",
    ])
    .unwrap();

    assert_eq!(
        receipt,
        [
            "1 imported box of chocolates: 10.50",
            "1 imported bottle of perfume: 54.65",
            "Sales Taxes: 7.65",
            "Total: 65.15",
        ]
    );
}

#[test]
fn test_mixed_basket() {
    let receipt = generate_receipt(&[
        "1 imported bottle of perfume at 27.99",
        "1 bottle of perfume at 18.99",
        "1 packet of headache pills at 9.75",
        "3 imported boxes of chocolates at 11.25",
    ])
    .unwrap();

    assert_eq!(
        receipt,
        [
            "1 imported bottle of perfume: 32.19",
            "1 bottle of perfume: 20.89",
            "1 packet of headache pills: 9.75",
            "3 imported boxes of chocolates: 35.55",
            "Sales Taxes: 7.90",
            "Total: 98.38",
        ]
    );
}

#[test]
fn test_empty_input() {
    let lines: Vec<String> = Vec::new();
    assert_eq!(generate_receipt(&lines), Err(ProcessingError::EmptyInput));
}

// =============================================================================
// Failure Isolation
// =============================================================================

#[test]
fn test_bad_lines_do_not_change_other_totals() {
    let clean = generate_receipt(&["1 music CD at 14.99", "1 book at 12.49"]).unwrap();
    let noisy = generate_receipt(&[
        "1 music CD at 14.99",
        "1 broken line",
        "1 free sample at 0.00",
        "1 book at 12.49",
    ])
    .unwrap();

    assert_eq!(clean, noisy);
}

#[test]
fn test_skipped_lines_are_reported() {
    let receipt = ReceiptGenerator::default()
        .generate(&["1 music CD at 14.99", "1 broken line", "1 free sample at 0.00"])
        .unwrap();

    let skipped: Vec<_> = receipt
        .skipped()
        .iter()
        .map(|s| (s.line_number, s.raw.as_str()))
        .collect();
    assert_eq!(skipped, [(2, "1 broken line"), (3, "1 free sample at 0.00")]);
    assert_eq!(
        receipt.skipped()[1].to_string(),
        "line 3 '1 free sample at 0.00': invalid item: price must be positive"
    );
}

// =============================================================================
// Custom Configuration
// =============================================================================

#[test]
fn test_custom_config_side_by_side() {
    let lines = ["1 book at 10.00", "1 imported music CD at 10.00"];

    let standard = ReceiptGenerator::default().generate(&lines).unwrap();
    let strict = ReceiptGenerator::new(TaxEngine::new(
        TaxConfig::new(TaxRate::from_bps(2000), TaxRate::from_bps(1000), [Category::Food])
            .unwrap(),
    ))
    .generate(&lines)
    .unwrap();

    assert_eq!(standard.sales_taxes(), Money::from_cents(150));
    assert_eq!(standard.total(), Money::from_cents(2150));

    // book no longer exempt: 2.00; CD: 2.00 + 1.00
    assert_eq!(strict.sales_taxes(), Money::from_cents(500));
    assert_eq!(
        strict.render(),
        [
            "1 book: 12.00",
            "1 imported music CD: 13.00",
            "Sales Taxes: 5.00",
            "Total: 25.00",
        ]
    );
}
