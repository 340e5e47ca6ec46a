//! Portfolio computations.
//!
//! Every service in here is a pure, synchronous function of an immutable
//! input snapshot; recomputation happens whenever any input changes.

pub mod history;
pub mod projection;
pub mod rebalance;
pub mod summary;
pub mod weights;

pub use history::*;
pub use projection::*;
pub use rebalance::*;
pub use summary::*;
pub use weights::*;
