//! Monthly budget allocation.
//!
//! The allocator spends exactly the monthly budget, buying only (never
//! selling), steering cash toward assets below their normalized target
//! weight. Once every gap is closed it falls back to pure target-weight
//! buying for the remainder of the budget, so a balanced portfolio keeps
//! receiving plain dollar-cost-average contributions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::Asset;
use crate::constants::{ALLOCATION_TOLERANCE, DISPLAY_DECIMALS, MAX_REDISTRIBUTION_PASSES};
use crate::portfolio::summary::compute_totals;
use crate::portfolio::weights::{normalization_factor, normalized_target};

use super::rebalance_model::{RebalanceAction, RebalancePlan};

/// Builds the monthly accumulation plan for the asset collection.
///
/// A non-positive total portfolio value yields an empty plan: with no
/// priced holdings there are no weights to steer and nothing sensible to
/// divide by.
pub fn build_plan(assets: &[Asset], monthly_budget: Decimal) -> RebalancePlan {
    debug_assert!(monthly_budget > Decimal::ZERO, "budget must be positive");

    let total_value = compute_totals(assets).total_value;
    if total_value <= Decimal::ZERO {
        return RebalancePlan::empty(monthly_budget);
    }

    let factor = normalization_factor(assets);

    // Gap to target and baseline (pure target-weight) allocation per asset.
    let mut deltas = Vec::with_capacity(assets.len());
    let mut baseline = Vec::with_capacity(assets.len());
    for asset in assets {
        let target_weight = normalized_target(asset, factor);
        let target_value = target_weight / dec!(100) * total_value;
        deltas.push(target_value - asset.current_value());
        baseline.push(target_weight / dec!(100) * monthly_budget);
    }

    let buy = allocate_monthly_budget(&deltas, &baseline, monthly_budget);

    let actions = assets
        .iter()
        .enumerate()
        .map(|(i, asset)| {
            let current_value = asset.current_value();
            let current_weight = current_value / total_value * dec!(100);
            let delta_value = deltas[i];
            let monthly_buy_amount = buy[i].max(Decimal::ZERO).round_dp(DISPLAY_DECIMALS);

            // A currency gap cannot be turned into a share count without
            // a price; report the quantity as non-computable.
            let priced = asset.last_price.filter(|p| *p > Decimal::ZERO);
            let quantity_delta = priced.map(|price| delta_value / price);
            let monthly_buy_quantity =
                priced.map(|price| (monthly_buy_amount / price).round_dp(DISPLAY_DECIMALS));

            RebalanceAction {
                id: asset.id.clone(),
                name: asset.name.clone(),
                identifier: asset.identifier.clone(),
                current_weight,
                target_weight: normalized_target(asset, factor),
                delta_value,
                quantity_delta,
                last_price: asset.last_price,
                monthly_buy_amount,
                monthly_buy_quantity,
            }
        })
        .collect();

    RebalancePlan {
        actions,
        monthly_budget,
    }
}

/// Splits the monthly budget across assets, unrounded.
///
/// `deltas[i]` is the currency gap of asset `i` to its target (positive =
/// underweight); `baseline[i]` is what pure target-weight buying would
/// assign. Steps:
///
/// 1. No underweight asset: return the baseline untouched.
/// 2. Zero the baseline of every at/over-target asset; the freed cash
///    goes to underweight assets in proportion to their gap.
/// 3. Cap each underweight allocation at its own gap; redistribute the
///    excess among assets with remaining room, proportionally to that
///    room, for at most [`MAX_REDISTRIBUTION_PASSES`] passes or until the
///    leftover drops below [`ALLOCATION_TOLERANCE`]. Each pass saturates
///    at least one more cap, so N-1 passes always suffice.
/// 4. Any remaining shortfall vs the budget (all gaps closed) is spread
///    in proportion to the original baseline - plain target-weight buying
///    for the rest of the month's cash.
pub fn allocate_monthly_budget(
    deltas: &[Decimal],
    baseline: &[Decimal],
    budget: Decimal,
) -> Vec<Decimal> {
    let mut buy: Vec<Decimal> = baseline.to_vec();

    let has_underweight = deltas.iter().any(|d| *d > Decimal::ZERO);
    if !has_underweight {
        // Pure dollar-cost-average fallback: nothing is below target.
        return buy;
    }

    // 1) Free the baseline of at/over-target assets.
    let mut freed = Decimal::ZERO;
    for (amount, delta) in buy.iter_mut().zip(deltas) {
        if *delta <= Decimal::ZERO {
            freed += *amount;
            *amount = Decimal::ZERO;
        }
    }

    // 2) Redistribute the freed pool in proportion to positive gaps.
    let sum_positive: Decimal = deltas.iter().filter(|d| **d > Decimal::ZERO).sum();
    if sum_positive > Decimal::ZERO {
        for (amount, delta) in buy.iter_mut().zip(deltas) {
            if *delta > Decimal::ZERO {
                *amount += freed * *delta / sum_positive;
            }
        }
    }

    // 3) Cap at each asset's gap, collecting the excess.
    let mut leftover = Decimal::ZERO;
    for (amount, delta) in buy.iter_mut().zip(deltas) {
        if *delta > Decimal::ZERO && *amount > *delta {
            leftover += *amount - *delta;
            *amount = *delta;
        }
    }

    let mut passes = 0;
    while leftover > ALLOCATION_TOLERANCE && passes < MAX_REDISTRIBUTION_PASSES {
        passes += 1;

        let room: Vec<Decimal> = buy
            .iter()
            .zip(deltas)
            .map(|(amount, delta)| {
                if *delta > Decimal::ZERO {
                    (*delta - *amount).max(Decimal::ZERO)
                } else {
                    Decimal::ZERO
                }
            })
            .collect();
        let room_total: Decimal = room.iter().sum();
        if room_total <= Decimal::ZERO {
            break;
        }

        for ((amount, delta), room_i) in buy.iter_mut().zip(deltas).zip(&room) {
            if *delta > Decimal::ZERO {
                *amount = (*amount + leftover * *room_i / room_total).min(*delta);
            }
        }

        let spent: Decimal = buy
            .iter()
            .zip(deltas)
            .filter(|(_, d)| **d > Decimal::ZERO)
            .map(|(amount, _)| *amount)
            .sum();
        leftover = (budget - spent).max(Decimal::ZERO);
    }

    // 4) All gaps closed but budget remains: revert to target weights.
    let sum_buy: Decimal = buy.iter().sum();
    if budget - sum_buy > ALLOCATION_TOLERANCE {
        let base_total: Decimal = baseline.iter().sum();
        let base_total = if base_total > Decimal::ZERO {
            base_total
        } else {
            Decimal::ONE
        };
        for (amount, base) in buy.iter_mut().zip(baseline) {
            *amount += (budget - sum_buy) * *base / base_total;
        }
    }

    buy
}
