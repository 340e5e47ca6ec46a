//! Unit tests for the growth projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_series_length_is_horizon_plus_one() {
    let projection = project(&GrowthAssumptions {
        starting_value: dec!(1000),
        monthly_contribution: dec!(100),
        annual_return_pct: dec!(5),
        years: 20,
    });
    assert_eq!(projection.points.len(), 21);
    assert_eq!(projection.points[0].year, 0);
    assert_eq!(projection.points[20].year, 20);
}

#[test]
fn test_zero_rate_zero_contribution_stays_at_start() {
    let projection = project(&GrowthAssumptions {
        starting_value: dec!(2500),
        monthly_contribution: Decimal::ZERO,
        annual_return_pct: Decimal::ZERO,
        years: 5,
    });
    for point in &projection.points {
        assert_eq!(point.total, dec!(2500));
        assert_eq!(point.invested, dec!(2500));
    }
    assert_eq!(projection.gain, Decimal::ZERO);
    assert_eq!(projection.roi_pct, Decimal::ZERO);
}

/// 12 monthly deposits of 100 at 1% per month (12% annual, simple
/// division) compound to about 1268.25 after one year.
#[test]
fn test_one_year_at_one_percent_monthly() {
    let projection = project(&GrowthAssumptions {
        starting_value: Decimal::ZERO,
        monthly_contribution: dec!(100),
        annual_return_pct: dec!(12),
        years: 1,
    });
    let last = projection.points.last().unwrap();
    assert_eq!(last.invested, dec!(1200));
    assert_eq!(last.total.round_dp(2), dec!(1268.25));
    assert_eq!(projection.gain.round_dp(2), dec!(68.25));
}

#[test]
fn test_invested_track_never_decreases() {
    let projection = project(&GrowthAssumptions {
        starting_value: dec!(500),
        monthly_contribution: dec!(50),
        annual_return_pct: dec!(-4),
        years: 10,
    });
    for pair in projection.points.windows(2) {
        assert!(pair[1].invested >= pair[0].invested);
    }
    // Negative rate: total can fall below invested capital.
    assert!(projection.gain < Decimal::ZERO);
}

#[test]
fn test_zero_invested_capital_yields_zero_roi() {
    let projection = project(&GrowthAssumptions {
        starting_value: Decimal::ZERO,
        monthly_contribution: Decimal::ZERO,
        annual_return_pct: dec!(7),
        years: 3,
    });
    assert_eq!(projection.roi_pct, Decimal::ZERO);
}
