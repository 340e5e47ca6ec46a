//! Shared constants for the pacfolio core.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum number of history snapshots retained; oldest entries are
/// dropped first.
pub const MAX_HISTORY_SNAPSHOTS: usize = 500;

/// Currency tolerance for the monthly allocator: leftovers and shortfalls
/// below this amount are not redistributed further.
pub const ALLOCATION_TOLERANCE: Decimal = dec!(0.01);

/// Ceiling on leftover-redistribution passes in the monthly allocator.
/// Convergence needs at most N-1 passes for N assets (each pass saturates
/// at least one more cap), so this is a guard, not a tuning knob.
pub const MAX_REDISTRIBUTION_PASSES: u32 = 8;

/// Decimal places used for currency amounts handed to the UI.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Default monthly cash budget for the accumulation plan, in base currency.
pub const DEFAULT_MONTHLY_BUDGET: Decimal = dec!(500);

/// Default assumed annual return for projections, in percent.
pub const DEFAULT_ANNUAL_RETURN_PCT: Decimal = dec!(5);

/// Default projection horizon, in years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;

/// Default base currency.
pub const DEFAULT_BASE_CURRENCY: &str = "EUR";
