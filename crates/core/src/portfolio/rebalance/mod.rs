//! Monthly accumulation plan: per-asset deltas to target and a no-sell,
//! delta-aware split of the monthly cash budget.

mod rebalance_model;
mod rebalance_service;

pub use rebalance_model::*;
pub use rebalance_service::*;
