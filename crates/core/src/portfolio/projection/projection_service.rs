//! Compounding recurrence over the projection horizon.
//!
//! The monthly rate is the annual rate divided by 12 (simple convention,
//! not the geometric twelfth root). Month by month the total compounds by
//! the monthly rate and then receives the contribution; one sample is
//! emitted every 12 months, including month 0.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::projection_model::{GrowthAssumptions, Projection, ProjectionPoint};

/// Months per emitted sample.
const MONTHS_PER_YEAR: u32 = 12;

/// Runs the compounding projection for the given assumptions.
pub fn project(assumptions: &GrowthAssumptions) -> Projection {
    debug_assert!(
        assumptions.starting_value >= Decimal::ZERO,
        "starting value must be non-negative"
    );
    debug_assert!(
        assumptions.monthly_contribution >= Decimal::ZERO,
        "contribution must be non-negative"
    );
    debug_assert!(assumptions.years >= 1, "horizon must be at least one year");

    let monthly_rate = assumptions.annual_return_pct / dec!(100) / dec!(12);
    let growth = Decimal::ONE + monthly_rate;

    let mut invested = assumptions.starting_value;
    let mut total = assumptions.starting_value;

    let mut points = Vec::with_capacity(assumptions.years as usize + 1);
    points.push(ProjectionPoint {
        year: 0,
        invested,
        total,
    });

    for month in 1..=assumptions.years * MONTHS_PER_YEAR {
        total = total * growth + assumptions.monthly_contribution;
        invested += assumptions.monthly_contribution;

        if month % MONTHS_PER_YEAR == 0 {
            points.push(ProjectionPoint {
                year: month / MONTHS_PER_YEAR,
                invested,
                total,
            });
        }
    }

    let gain = total - invested;
    let roi_pct = if invested > Decimal::ZERO {
        (gain / invested * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    Projection {
        points,
        gain,
        roi_pct,
    }
}
