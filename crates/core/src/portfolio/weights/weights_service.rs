//! Target-weight normalization and current-weight computation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::Asset;

use super::weights_model::AssetWeight;

/// Factor that rescales raw target weights so they sum to 100.
///
/// When the raw weights sum to zero the factor is 1 and weights stay as
/// entered - there is no target to steer toward, so nothing is rescaled.
pub fn normalization_factor(assets: &[Asset]) -> Decimal {
    let sum: Decimal = assets.iter().map(|a| a.target_weight).sum();
    if sum > Decimal::ZERO {
        dec!(100) / sum
    } else {
        Decimal::ONE
    }
}

/// Normalized target weight of one asset under the given factor.
pub fn normalized_target(asset: &Asset, factor: Decimal) -> Decimal {
    asset.target_weight * factor
}

/// Current weight and raw target per asset, in collection order.
///
/// A non-positive total value yields zero weights for every asset rather
/// than dividing by zero.
pub fn asset_weights(assets: &[Asset], total_value: Decimal) -> Vec<AssetWeight> {
    assets
        .iter()
        .map(|asset| {
            let value = asset.current_value();
            let weight = if total_value > Decimal::ZERO {
                value / total_value * dec!(100)
            } else {
                Decimal::ZERO
            };
            AssetWeight {
                id: asset.id.clone(),
                name: asset.name.clone(),
                value,
                weight,
                target: asset.target_weight,
            }
        })
        .collect()
}
