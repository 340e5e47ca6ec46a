//! Portfolio aggregation: totals, overall return, best/worst performer,
//! asset-class distribution.

mod summary_model;
mod summary_service;

pub use summary_model::*;
pub use summary_service::*;
