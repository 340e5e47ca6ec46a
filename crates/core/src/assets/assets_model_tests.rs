//! Unit tests for the asset model.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pacfolio_market_data::QuoteUpdate;

use super::*;

fn sample_asset() -> Asset {
    Asset {
        id: "gold".to_string(),
        name: "Physical Gold".to_string(),
        identifier: "IE00B4ND3602".to_string(),
        quantity: dec!(26.8364),
        currency: "EUR".to_string(),
        cost_basis: Some(dec!(58.28)),
        target_weight: dec!(10),
        last_price: Some(dec!(70)),
        last_updated: None,
        asset_class: "Commodity".to_string(),
        manual: false,
    }
}

#[test]
fn test_current_value_unknown_price_is_zero() {
    let mut asset = sample_asset();
    asset.last_price = None;
    assert_eq!(asset.current_value(), Decimal::ZERO);
}

#[test]
fn test_current_value() {
    let asset = sample_asset();
    assert_eq!(asset.current_value(), dec!(70) * dec!(26.8364));
}

#[test]
fn test_performance_ratio_requires_price_and_cost() {
    let mut asset = sample_asset();
    assert_eq!(
        asset.performance_ratio(),
        Some((dec!(70) - dec!(58.28)) / dec!(58.28))
    );

    asset.cost_basis = None;
    assert_eq!(asset.performance_ratio(), None);

    asset.cost_basis = Some(Decimal::ZERO);
    // Zero cost basis is excluded, not divided by.
    assert_eq!(asset.performance_ratio(), None);
}

#[test]
fn test_apply_quote_updates_price_and_timestamp() {
    let mut asset = sample_asset();
    let quote = QuoteUpdate {
        price: dec!(71.5),
        currency: "EUR".to_string(),
        timestamp: Utc::now(),
        provider: "JUSTETF".to_string(),
    };
    asset.apply_quote(&quote);
    assert_eq!(asset.last_price, Some(dec!(71.5)));
    assert_eq!(asset.last_updated, Some(quote.timestamp));
}

#[test]
fn test_apply_quote_never_overwrites_manual_assets() {
    let mut asset = sample_asset();
    asset.manual = true;
    asset.last_price = Some(dec!(500));
    let quote = QuoteUpdate::now(dec!(1), "EUR", "JUSTETF");
    asset.apply_quote(&quote);
    assert_eq!(asset.last_price, Some(dec!(500)));
    assert_eq!(asset.last_updated, None);
}

#[test]
fn test_new_asset_validation_rejects_negatives() {
    let input = NewAsset {
        name: "FTSE All-World".to_string(),
        identifier: "IE00BK5BQT80".to_string(),
        quantity: dec!(-1),
        cost_basis: None,
        target_weight: None,
        asset_class: None,
        manual: false,
    };
    assert!(input.validate().is_err());

    let input = NewAsset {
        quantity: dec!(1),
        target_weight: Some(dec!(-5)),
        ..input
    };
    assert!(input.validate().is_err());
}

#[test]
fn test_new_asset_validation_requires_name_and_identifier() {
    let input = NewAsset {
        name: "  ".to_string(),
        identifier: "IE00BK5BQT80".to_string(),
        quantity: dec!(1),
        cost_basis: None,
        target_weight: None,
        asset_class: None,
        manual: false,
    };
    assert!(input.validate().is_err());
}
