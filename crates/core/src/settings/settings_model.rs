//! Settings domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANNUAL_RETURN_PCT, DEFAULT_BASE_CURRENCY, DEFAULT_MONTHLY_BUDGET,
    DEFAULT_PROJECTION_YEARS,
};
use crate::errors::ValidationError;

/// Investor-tunable knobs consumed by the accumulation plan and the
/// growth projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Cash to allocate each month (> 0)
    pub monthly_budget: Decimal,
    /// Assumed annual return for projections, in percent (may be 0 or
    /// negative)
    pub annual_return_pct: Decimal,
    /// Constant monthly contribution for projections (>= 0)
    pub monthly_contribution: Decimal,
    /// Projection horizon in whole years (>= 1)
    pub projection_years: u32,
    /// Base currency for display
    pub base_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            annual_return_pct: DEFAULT_ANNUAL_RETURN_PCT,
            monthly_contribution: DEFAULT_MONTHLY_BUDGET,
            projection_years: DEFAULT_PROJECTION_YEARS,
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// Boundary validation for user-edited settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.monthly_budget <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "monthlyBudget",
                requirement: "> 0",
                value: self.monthly_budget.to_string(),
            });
        }
        if self.monthly_contribution < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "monthlyContribution",
                requirement: ">= 0",
                value: self.monthly_contribution.to_string(),
            });
        }
        if self.projection_years < 1 {
            return Err(ValidationError::OutOfRange {
                field: "projectionYears",
                requirement: ">= 1",
                value: self.projection_years.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        let settings = Settings {
            monthly_budget: Decimal::ZERO,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let settings = Settings {
            projection_years: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_return_is_allowed() {
        let settings = Settings {
            annual_return_pct: dec!(-3),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
