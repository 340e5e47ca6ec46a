//! Target-weight normalization and per-asset portfolio weights.

mod weights_model;
mod weights_service;

pub use weights_model::*;
pub use weights_service::*;
