//! Aggregation over the asset collection.
//!
//! Pure left-to-right reductions: ties between performers are broken by
//! encounter order (the first asset wins under equal performance), so the
//! output is deterministic for a given input order.

use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::constants::DISPLAY_DECIMALS;

use super::summary_model::{ClassAllocation, GainContribution, Performer, PortfolioTotals};

/// Computes total value, total cost, overall return and the best/worst
/// performer over the asset collection.
///
/// Assets with an unknown price contribute nothing to the total value;
/// assets with an unknown cost basis contribute nothing to the total cost.
/// A zero total cost yields a zero return, never a division by zero.
pub fn compute_totals(assets: &[Asset]) -> PortfolioTotals {
    let mut total_value = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for asset in assets {
        if asset.last_price.is_some() && asset.quantity > Decimal::ZERO {
            total_value += asset.current_value();
        }
        if let Some(cost) = asset.cost_value() {
            if asset.quantity > Decimal::ZERO {
                total_cost += cost;
            }
        }
    }

    let total_return = if total_cost > Decimal::ZERO {
        (total_value - total_cost) / total_cost
    } else {
        Decimal::ZERO
    };

    let mut best: Option<Performer> = None;
    let mut worst: Option<Performer> = None;
    for asset in assets {
        let Some(perf) = asset.performance_ratio() else {
            continue;
        };
        let performer = Performer {
            id: asset.id.clone(),
            name: asset.name.clone(),
            perf,
        };
        // Strict comparisons: the first qualifying asset wins ties.
        match &best {
            Some(b) if performer.perf <= b.perf => {}
            _ => best = Some(performer.clone()),
        }
        match &worst {
            Some(w) if performer.perf >= w.perf => {}
            _ => worst = Some(performer),
        }
    }

    PortfolioTotals {
        total_value,
        total_cost,
        total_return,
        best,
        worst,
    }
}

/// Distributes market value across asset-class tags.
///
/// Only assets with a positive current value contribute; classes appear
/// in order of first appearance in the collection.
pub fn class_distribution(assets: &[Asset]) -> Vec<ClassAllocation> {
    let mut slices: Vec<ClassAllocation> = Vec::new();

    for asset in assets {
        let value = asset.current_value();
        if value <= Decimal::ZERO {
            continue;
        }
        match slices.iter_mut().find(|s| s.name == asset.asset_class) {
            Some(slice) => slice.value += value,
            None => slices.push(ClassAllocation {
                name: asset.asset_class.clone(),
                value,
            }),
        }
    }

    for slice in slices.iter_mut() {
        slice.value = slice.value.round_dp(DISPLAY_DECIMALS);
    }
    slices
}

/// Per-asset unrealized gains in currency, in collection order.
pub fn gain_contributions(assets: &[Asset]) -> Vec<GainContribution> {
    assets
        .iter()
        .map(|asset| GainContribution {
            name: asset.name.clone(),
            value: asset.unrealized_gain(),
        })
        .collect()
}
